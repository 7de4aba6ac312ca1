use std::fmt;

/// Counts body bytes against the declared content-length.
pub(crate) struct LengthChecker {
    handled: u64,
    expected: u64,
}

impl LengthChecker {
    pub fn new(expected: u64) -> Self {
        LengthChecker {
            handled: 0,
            expected,
        }
    }

    /// Count `amount` more bytes. Returns how many of them fit within the expected length.
    pub fn append(&mut self, amount: usize) -> usize {
        let left = self.expected - self.handled;
        let accepted = (amount as u64).min(left);
        self.handled += accepted;
        // accepted <= amount, so this fits in usize
        accepted as usize
    }

    pub fn handled(&self) -> u64 {
        self.handled
    }

    pub fn complete(&self) -> bool {
        self.handled == self.expected
    }
}

impl fmt::Debug for LengthChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LengthChecker")
            .field("handled", &self.handled)
            .field("expected", &self.expected)
            .finish()
    }
}
