#![no_main]

use h1feed::{Event, Request};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((first, rest)) = data.split_first() else {
        return;
    };

    // First byte picks where to split the input.
    let at = (*first as usize).min(rest.len());
    let (a, b) = rest.split_at(at);

    let mut request = Request::new();
    request.set_start_line_limit(64);
    request.set_header_section_limit(256);

    let mut events = request.feed(a);
    events.extend(request.feed(b));

    let complete = events.iter().filter(|e| **e == Event::Complete).count();
    let headers = events
        .iter()
        .filter(|e| **e == Event::HeadersReceived)
        .count();
    assert!(complete <= 1);
    assert!(headers <= 1);
    assert_eq!(request.error().is_some(), !request.is_valid());

    let limit = request.expected_content_length();
    let mut body = 0;
    while let Some(data) = request.read_body(17) {
        if data.is_empty() {
            break;
        }
        body += data.len() as u64;
    }
    assert!(body <= limit);
});
