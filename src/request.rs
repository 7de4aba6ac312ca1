use crate::buffer::{InputBuffer, CRLF, CRLF_CRLF};
use crate::param::Params;
use crate::parser::{parse_header_section, parse_start_line};
use crate::util::LengthChecker;
use crate::{Body, Event, Events, Headers, Limits, ParseError};

/// Where the parser is in the request.
///
/// Transitions only go forward, `Empty` to `Complete`, or from any
/// state before `Body` to `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum State {
    /// Nothing received yet.
    Empty,
    /// Receiving the start line.
    StartLine,
    /// Start line parsed, receiving headers.
    HeaderSection,
    /// Headers parsed, receiving body.
    Body,
    /// The entire body is received.
    Complete,
    /// Parsing failed, see [`Request::error()`].
    ///
    /// The body never becomes available: reads return nothing, but are not
    /// reported as end of body either.
    Invalid,
}

impl State {
    /// No more input will be parsed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::Complete | State::Invalid)
    }
}

/// An incoming HTTP/1.x request, parsed incrementally from fed bytes.
///
/// ```
/// use h1feed::{Event, Request, State};
///
/// let mut request = Request::new();
///
/// // Partial input produces no events.
/// let events = request.feed(b"POST /greeting HTTP/1.1\r\nContent-Le");
/// assert!(events.is_empty());
/// assert_eq!(request.state(), State::HeaderSection);
///
/// let events = request.feed(b"ngth: 5\r\n\r\nHel");
/// assert_eq!(events, vec![Event::HeadersReceived, Event::DataAvailable]);
///
/// assert_eq!(request.method(), "POST");
/// assert_eq!(request.uri(), "/greeting");
/// assert_eq!(request.version(), "1.1");
/// assert_eq!(request.header("Content-Length"), "5");
///
/// let events = request.feed(b"lo");
/// assert_eq!(events, vec![Event::DataAvailable, Event::Complete]);
///
/// let mut body = request.body();
/// assert_eq!(body.available(), 5);
/// assert_eq!(body.read(1024).as_deref(), Some(&b"Hello"[..]));
/// assert_eq!(body.read(1024), None);
/// ```
#[derive(Debug)]
pub struct Request {
    buffer: InputBuffer,
    state: State,
    error: Option<ParseError>,
    limits: Limits,
    method: String,
    uri: String,
    version: String,
    headers: Headers,
    params: Params,
    bytes_received: u64,
    checker: Option<LengthChecker>,
    detached: bool,
}

impl Request {
    pub fn new() -> Self {
        Request::with_limits(Limits::default())
    }

    pub fn with_limits(limits: Limits) -> Self {
        Request {
            buffer: InputBuffer::new(),
            state: State::Empty,
            error: None,
            limits,
            method: String::new(),
            uri: String::new(),
            version: String::new(),
            headers: Headers::new(),
            params: Params::new(),
            bytes_received: 0,
            checker: None,
            detached: false,
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Set the start line limit. Only reliable before the first feed.
    pub fn set_start_line_limit(&mut self, limit: usize) {
        self.warn_late_limit();
        self.limits.start_line = limit;
    }

    /// Set the header section limit. Only reliable before the first feed.
    pub fn set_header_section_limit(&mut self, limit: usize) {
        self.warn_late_limit();
        self.limits.header_section = limit;
    }

    fn warn_late_limit(&self) {
        if self.state != State::Empty {
            debug!("Limit changed after parsing started in {:?}", self.state);
        }
    }

    /// Feed newly arrived bytes.
    ///
    /// Parses as far as the buffered input allows and returns the events for every
    /// milestone crossed. Once the request is complete or invalid, it is detached
    /// and further input is ignored.
    pub fn feed(&mut self, input: &[u8]) -> Events {
        let mut events = Events::new();

        if self.detached {
            trace!("Ignore {} bytes, detached in {:?}", input.len(), self.state);
            return events;
        }

        trace!("Feed {} bytes in {:?}", input.len(), self.state);

        self.bytes_received += input.len() as u64;
        self.buffer.append(input);

        let was_body = self.state == State::Body;

        if self.state == State::Empty && !self.buffer.is_empty() {
            self.state = State::StartLine;
        }

        while self.step(&mut events) {}

        match self.state {
            State::Body => {
                // Either all of this input is body, or whatever is left after
                // the headers were consumed in this feed.
                let amount = if was_body {
                    input.len()
                } else {
                    self.buffer.len()
                };
                self.receive_body(amount);

                if !input.is_empty() && !self.buffer.is_empty() {
                    events.push(Event::DataAvailable);
                }

                if self.checker.as_ref().map(|c| c.complete()).unwrap_or(true) {
                    trace!("Body complete");
                    self.state = State::Complete;
                    self.detach();
                    events.push(Event::Complete);
                }
            }
            State::Invalid => {
                // error is always set when entering Invalid
                let code = self.error.unwrap_or(ParseError::Unknown);
                debug!("Invalid request: {}", code);
                self.detach();
                events.push(Event::Error(code));
                events.push(Event::Complete);
            }
            _ => {}
        }

        events
    }

    /// Attempt one section transition. Returns true if the state advanced.
    fn step(&mut self, events: &mut Events) -> bool {
        match self.state {
            State::StartLine => self.try_start_line(),
            State::HeaderSection => self.try_header_section(events),
            _ => false,
        }
    }

    fn try_start_line(&mut self) -> bool {
        let Some(idx) = self.buffer.find(CRLF) else {
            if self.buffer.len() > self.limits.start_line {
                self.fail(ParseError::RequestUriTooLong);
            }
            return false;
        };

        let line = self.buffer.take(idx);
        self.buffer.consume(CRLF.len());

        let line = match parse_start_line(&line) {
            Ok(v) => v,
            Err(e) => {
                self.fail(e);
                return false;
            }
        };

        trace!(
            "Read start line: {} {} HTTP/{}",
            line.method,
            line.uri,
            line.version
        );

        self.method = line.method;
        self.uri = line.uri;
        self.version = line.version;
        self.state = State::HeaderSection;

        true
    }

    fn try_header_section(&mut self, events: &mut Events) -> bool {
        // The blank line directly after the start line means there are no fields.
        let (section_len, end_len) = if self.buffer.starts_with(CRLF) {
            (0, CRLF.len())
        } else if let Some(idx) = self.buffer.find(CRLF_CRLF) {
            (idx, CRLF_CRLF.len())
        } else {
            if self.buffer.len() > self.limits.header_section {
                self.fail(ParseError::RequestEntityTooLarge);
            }
            return false;
        };

        let section = self.buffer.take(section_len);
        self.buffer.consume(end_len);

        parse_header_section(&section, &mut self.headers);
        trace!("Headers: {:?}", self.headers);

        let expected = self.expected_content_length();
        trace!("Expect body of {} bytes", expected);
        self.checker = Some(LengthChecker::new(expected));

        self.state = State::Body;
        events.push(Event::HeadersReceived);

        true
    }

    fn receive_body(&mut self, amount: usize) {
        let Some(checker) = self.checker.as_mut() else {
            return;
        };

        let accepted = checker.append(amount);
        let excess = amount - accepted;

        if excess > 0 {
            debug!("Discard {} bytes past content-length", excess);
            let keep = self.buffer.len() - excess;
            self.buffer.truncate(keep);
        }
    }

    fn fail(&mut self, error: ParseError) {
        self.state = State::Invalid;
        self.error = Some(error);
    }

    fn detach(&mut self) {
        trace!("Detach in {:?}", self.state);
        self.detached = true;
    }

    /// Whether further input is ignored.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// `false` once parsing has failed.
    pub fn is_valid(&self) -> bool {
        self.state != State::Invalid
    }

    pub fn is_complete(&self) -> bool {
        self.state == State::Complete
    }

    /// The reason parsing failed. Only set when the state is [`State::Invalid`].
    pub fn error(&self) -> Option<ParseError> {
        self.error
    }

    /// Start line and headers have been parsed.
    pub fn has_headers(&self) -> bool {
        matches!(self.state, State::Body | State::Complete)
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Request target as sent, not decoded.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Version without the `HTTP/` prefix, i.e. `1.1`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// First value of header `field`, or `""` if it is absent.
    pub fn header(&self, field: &str) -> &str {
        self.headers.first(field).unwrap_or("")
    }

    /// All values of header `field`, in arrival order.
    pub fn headers_of(&self, field: &str) -> Vec<&str> {
        self.headers.all(field)
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }

    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.set(key, value);
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Content-length header value, `0` if missing or not a number.
    pub fn expected_content_length(&self) -> u64 {
        self.headers
            .first("content-length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }

    /// Total bytes fed while attached.
    pub fn bytes_received(&self) -> u64 {
        self.bytes_received
    }

    /// Body bytes received so far, read or not.
    pub fn body_received(&self) -> u64 {
        self.checker.as_ref().map(|c| c.handled()).unwrap_or(0)
    }

    /// Bytes held in the input buffer, parsed or not.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Body bytes ready to be read.
    pub fn available(&self) -> usize {
        if self.has_headers() {
            self.buffer.len()
        } else {
            0
        }
    }

    /// Take up to `max` body bytes.
    ///
    /// An empty vec means nothing is available right now. `None` means the
    /// body is complete and fully read.
    pub fn read_body(&mut self, max: usize) -> Option<Vec<u8>> {
        match self.state {
            State::Complete if self.buffer.is_empty() => None,
            State::Body | State::Complete => Some(self.buffer.take(max)),
            _ => Some(Vec::new()),
        }
    }

    /// Read-only view of the body.
    pub fn body(&mut self) -> Body<'_> {
        Body::new(self)
    }
}

impl Default for Request {
    fn default() -> Self {
        Request::new()
    }
}
