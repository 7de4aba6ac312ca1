/// Byte ceilings applied while waiting for a section terminator.
///
/// ```
/// use h1feed::{Limits, Request};
///
/// let request = Request::with_limits(Limits {
///     start_line: 512,
///     ..Limits::default()
/// });
///
/// assert_eq!(request.limits().start_line, 512);
/// assert_eq!(request.limits().header_section, 16 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Max bytes buffered before the start line terminator must be seen (default: `2048`).
    pub start_line: usize,

    /// Max bytes buffered before the blank line ending the headers must be seen
    /// (default: `16384`).
    pub header_section: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            start_line: 2048,
            header_section: 16 * 1024,
        }
    }
}
