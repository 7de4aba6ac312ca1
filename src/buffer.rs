use std::fmt;
use std::ops::Deref;

pub(crate) const CRLF: &[u8] = b"\r\n";
pub(crate) const CRLF_CRLF: &[u8] = b"\r\n\r\n";

/// Bytes received but not yet consumed.
///
/// Consumed prefixes are removed from the front, there is no separate read cursor.
/// Whatever is left in here is always unparsed input (or undelivered body).
/// A failed delimiter search remembers where to resume, so feeding a long
/// section in small pieces does not scan the same bytes over and over. Taking or
/// consuming from the front resets it.
#[derive(Default)]
pub(crate) struct InputBuffer {
    buffer: Vec<u8>,
    scanned: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        InputBuffer::default()
    }

    pub fn append(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Position of the first occurrence of `delim`.
    ///
    /// Between front removals, always search for the same `delim`.
    pub fn find(&mut self, delim: &[u8]) -> Option<usize> {
        let from = self.scanned;
        match find(&self.buffer[from..], delim) {
            Some(idx) => Some(from + idx),
            None => {
                // a match can still start in the tail once more bytes arrive
                let tail = delim.len().saturating_sub(1);
                self.scanned = from.max(self.buffer.len().saturating_sub(tail));
                None
            }
        }
    }

    /// Remove and return at most `amount` bytes from the front.
    pub fn take(&mut self, amount: usize) -> Vec<u8> {
        let amount = amount.min(self.buffer.len());
        self.scanned = 0;
        self.buffer.drain(..amount).collect()
    }

    /// Remove `amount` bytes from the front without returning them.
    pub fn consume(&mut self, amount: usize) {
        let amount = amount.min(self.buffer.len());
        let len = self.buffer.len();
        self.buffer.copy_within(amount..len, 0);
        self.buffer.truncate(len - amount);
        self.scanned = 0;
    }

    /// Drop everything past `len`.
    pub fn truncate(&mut self, len: usize) {
        self.buffer.truncate(len);
        self.scanned = self.scanned.min(self.buffer.len());
    }
}

impl Deref for InputBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl fmt::Debug for InputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputBuffer")
            .field("len", &self.buffer.len())
            .finish()
    }
}

pub(crate) fn find(haystack: &[u8], delim: &[u8]) -> Option<usize> {
    if delim.is_empty() || haystack.len() < delim.len() {
        return None;
    }
    haystack.windows(delim.len()).position(|w| w == delim)
}
