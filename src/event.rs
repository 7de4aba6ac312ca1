use crate::ParseError;

/// Milestones reached while feeding a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Start line and headers are parsed. Emitted at most once.
    HeadersReceived,
    /// There are buffered body bytes to read.
    DataAvailable,
    /// No more input will be processed. Emitted exactly once, also after [`Event::Error`].
    Complete,
    /// The request is invalid. Emitted at most once, right before [`Event::Complete`].
    Error(ParseError),
}

/// Events produced by one feed, in the order they happened.
pub type Events = Vec<Event>;
