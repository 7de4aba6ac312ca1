use crate::{Event, Headers, ParseError, Request, State};

mod test_errors;

mod test_lifecycle;


const GET: &[u8] = b"GET /p HTTP/1.1\r\nAccept: text/html\r\n\r\n";

const POST: &[u8] = b"\
        POST /g HTTP/1.1\r\n\
        Content-Length: 5\r\n\
        \r\n\
        Hello";

/// Everything observable about a request once feeding is done.
#[derive(Debug, PartialEq, Eq)]
struct Snapshot {
    state: State,
    error: Option<ParseError>,
    method: String,
    uri: String,
    version: String,
    headers: Headers,
    body: Vec<u8>,
    events: Vec<Event>,
}

/// Feed each chunk in order, then drain the body.
fn run<C: AsRef<[u8]>>(mut request: Request, chunks: &[C]) -> Snapshot {
    let mut events = Vec::new();
    for chunk in chunks {
        events.extend(request.feed(chunk.as_ref()));
    }

    let mut body = Vec::new();
    while let Some(data) = request.read_body(usize::MAX) {
        if data.is_empty() {
            break;
        }
        body.extend(data);
    }

    Snapshot {
        state: request.state(),
        error: request.error(),
        method: request.method().to_string(),
        uri: request.uri().to_string(),
        version: request.version().to_string(),
        headers: request.headers().clone(),
        body,
        events,
    }
}

fn count(events: &[Event], event: Event) -> usize {
    events.iter().filter(|e| **e == event).count()
}
