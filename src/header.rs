use std::fmt;

/// Case insensitive multimap of header fields.
///
/// Field names are stored trimmed and lower-cased. Repeated fields are kept
/// as separate values in arrival order, never merged.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    pub fn new() -> Self {
        Headers::default()
    }

    /// Append `value` under `field`.
    pub fn insert(&mut self, field: &str, value: &str) {
        let field = canonicalize(field);
        let value = value.trim().to_string();

        match self.entries.iter_mut().find(|(n, _)| *n == field) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((field, vec![value])),
        }
    }

    /// First value stored for `field`.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.values(field)
            .and_then(|v| v.first())
            .map(|v| v.as_str())
    }

    /// All values stored for `field`, in arrival order.
    pub fn all(&self, field: &str) -> Vec<&str> {
        self.values(field)
            .map(|v| v.iter().map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values(field).is_some()
    }

    /// Every `(field, value)` pair. Fields in first-seen order, values in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flat_map(|(n, vs)| vs.iter().map(move |v| (n.as_str(), v.as_str())))
    }

    /// Number of distinct fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn values(&self, field: &str) -> Option<&Vec<String>> {
        let field = field.trim();
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(field))
            .map(|(_, v)| v)
    }
}

fn canonicalize(field: &str) -> String {
    field.trim().to_ascii_lowercase()
}

impl fmt::Debug for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
