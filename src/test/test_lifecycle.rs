use super::*;

#[test]
fn get_events_once() {
    let snap = run(Request::new(), &[GET]);

    assert_eq!(snap.events, vec![Event::HeadersReceived, Event::Complete]);
    assert_eq!(snap.state, State::Complete);
    assert_eq!(snap.error, None);
    assert_eq!(snap.method, "GET");
    assert_eq!(snap.uri, "/p");
    assert_eq!(snap.version, "1.1");
    assert_eq!(snap.headers.first("Accept"), Some("text/html"));
}

#[test]
fn post_body() {
    let mut r = Request::new();
    let events = r.feed(POST);

    assert_eq!(
        events,
        vec![
            Event::HeadersReceived,
            Event::DataAvailable,
            Event::Complete
        ]
    );
    assert_eq!(r.header("Content-Length"), "5");
    assert_eq!(r.available(), 5);

    let data = r.read_body(1024);
    assert_eq!(data.as_deref(), Some(&b"Hello"[..]));
    assert_eq!(r.available(), 0);
    assert_eq!(r.state(), State::Complete);
    assert_eq!(r.read_body(1024), None);
}

#[test]
fn complete_once_with_trailing_input() {
    let mut r = Request::new();
    let mut events = r.feed(POST);
    events.extend(r.feed(b"GET /next HTTP/1.1\r\n\r\n"));
    events.extend(r.feed(b""));

    assert_eq!(count(&events, Event::Complete), 1);
    assert_eq!(count(&events, Event::HeadersReceived), 1);
    assert_eq!(r.uri(), "/g");
}

#[test]
fn no_data_available_after_complete() {
    let mut r = Request::new();
    r.feed(b"POST / HTTP/1.1\r\nContent-Length: 2\r\n\r\n");
    let events = r.feed(b"ok");
    assert_eq!(events, vec![Event::DataAvailable, Event::Complete]);

    assert!(r.feed(b"more").is_empty());
    assert_eq!(r.available(), 2);
}

#[test]
fn case_insensitive_and_repeated_headers() {
    let mut r = Request::new();
    r.feed(
        b"POST /h HTTP/1.1\r\n\
        CONTENT-LENGTH: 0\r\n\
        X-Forwarded-For: 10.0.0.1\r\n\
        x-forwarded-for: 10.0.0.2\r\n\
        \r\n",
    );

    assert_eq!(r.header("Content-Length"), "0");
    assert_eq!(r.headers_of("X-Forwarded-For"), vec!["10.0.0.1", "10.0.0.2"]);
    assert_eq!(r.header("X-Missing"), "");
    assert!(r.headers_of("X-Missing").is_empty());
}

#[test]
fn colon_less_header_line_skipped() {
    let mut r = Request::new();
    let events = r.feed(b"GET / HTTP/1.1\r\nHost: q.test\r\nnonsense\r\n\r\n");

    assert_eq!(events, vec![Event::HeadersReceived, Event::Complete]);
    assert!(r.is_valid());
    assert_eq!(r.headers().len(), 1);
}
