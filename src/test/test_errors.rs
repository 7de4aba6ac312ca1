use super::*;
use crate::Limits;

fn assert_invalid(snap: &Snapshot, error: ParseError) {
    assert_eq!(snap.state, State::Invalid);
    assert_eq!(snap.error, Some(error));
    assert_eq!(snap.events, vec![Event::Error(error), Event::Complete]);
    assert!(snap.body.is_empty());
}

#[test]
fn missing_method_separator() {
    let snap = run(Request::new(), &[b"GET\r\n\r\n"]);
    assert_invalid(&snap, ParseError::BadRequest);
}

#[test]
fn missing_version_separator() {
    let snap = run(Request::new(), &[b"GET /\r\n\r\n"]);
    assert_invalid(&snap, ParseError::BadRequest);
}

#[test]
fn invalid_protocol() {
    let snap = run(Request::new(), &[b"GET /welcome XTTP/1.1\r\n\r\n"]);
    assert_invalid(&snap, ParseError::BadRequest);
}

#[test]
fn unsupported_version() {
    let mut r = Request::new();
    let events = r.feed(b"GET /welcome HTTP/2.0\r\n");

    assert_eq!(
        events,
        vec![
            Event::Error(ParseError::HttpVersionNotSupported),
            Event::Complete
        ]
    );
    assert!(!r.is_valid());

    // stays invalid
    r.feed(b"Host: q.test\r\n\r\n");
    assert!(!r.is_valid());
    assert_eq!(r.error(), Some(ParseError::HttpVersionNotSupported));
}

#[test]
fn request_uri_too_long() {
    let mut r = Request::new();
    r.set_start_line_limit(8);

    let snap = run(r, &[b"GET /a/very/long/path"]);
    assert_invalid(&snap, ParseError::RequestUriTooLong);
}

#[test]
fn request_uri_too_long_default_limit() {
    let mut line = b"GET /".to_vec();
    line.extend(std::iter::repeat(b'a').take(Limits::default().start_line));

    let snap = run(Request::new(), &[&line]);
    assert_invalid(&snap, ParseError::RequestUriTooLong);
}

#[test]
fn long_start_line_with_terminator_is_fine() {
    // The limit only applies while waiting for the terminator.
    let mut r = Request::new();
    r.set_start_line_limit(8);

    let snap = run(r, &[b"GET /a/very/long/path HTTP/1.1\r\n\r\n"]);
    assert_eq!(snap.state, State::Complete);
}

#[test]
fn request_entity_too_large() {
    let mut r = Request::new();
    r.set_header_section_limit(16);

    let snap = run(
        r,
        &[
            &b"GET /welcome HTTP/1.1\r\n"[..],
            &b"Accept: text/html\r\nHost: q.test\r\n"[..],
        ],
    );
    assert_invalid(&snap, ParseError::RequestEntityTooLarge);
}

#[test]
fn unknown_is_never_produced() {
    let inputs: &[&[u8]] = &[
        b"",
        b"\r\n",
        b" \r\n",
        b"  HTTP/1.1\r\n\r\n",
        b"GET  HTTP/1.1\r\n\r\n",
        b"GET / HTTP/1.\r\n\r\n",
    ];

    for input in inputs {
        let snap = run(Request::new(), &[input]);
        assert_ne!(snap.error, Some(ParseError::Unknown));
    }
}
