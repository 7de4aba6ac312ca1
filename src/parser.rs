use crate::buffer::{find, CRLF};
use crate::{Headers, ParseError};

const SCHEME: &[u8] = b"HTTP/";
const MAJOR_1: &[u8] = b"1.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StartLine {
    pub method: String,
    pub uri: String,
    pub version: String,
}

/// Parse a start line without its terminator.
///
/// `METHOD SP TARGET SP HTTP/1.x`. Splits on the first space twice, so the target
/// can't contain spaces but the version token may contain anything after `HTTP/1.`.
pub(crate) fn parse_start_line(line: &[u8]) -> Result<StartLine, ParseError> {
    let (method, rest) = split_once(line, b' ').ok_or(ParseError::BadRequest)?;
    let (uri, version) = split_once(rest, b' ').ok_or(ParseError::BadRequest)?;

    let version = version
        .strip_prefix(SCHEME)
        .ok_or(ParseError::BadRequest)?;

    if !version.starts_with(MAJOR_1) {
        return Err(ParseError::HttpVersionNotSupported);
    }

    Ok(StartLine {
        method: lossy(method),
        uri: lossy(uri),
        version: lossy(version),
    })
}

/// Parse every header line in `section` into `headers`.
///
/// `section` is the header block without the final blank line. Lines without
/// a colon are skipped.
pub(crate) fn parse_header_section(mut section: &[u8], headers: &mut Headers) {
    while !section.is_empty() {
        let (line, rest) = match find(section, CRLF) {
            Some(idx) => (&section[..idx], &section[idx + CRLF.len()..]),
            None => (section, &b""[..]),
        };

        parse_header_line(line, headers);

        section = rest;
    }
}

fn parse_header_line(line: &[u8], headers: &mut Headers) {
    let Some((field, value)) = split_once(line, b':') else {
        trace!("Skip header line without colon: {:?}", lossy(line));
        return;
    };

    headers.insert(&lossy(field), &lossy(value));
}

fn split_once(b: &[u8], sep: u8) -> Option<(&[u8], &[u8])> {
    let idx = b.iter().position(|c| *c == sep)?;
    Some((&b[..idx], &b[idx + 1..]))
}

fn lossy(b: &[u8]) -> String {
    String::from_utf8_lossy(b).into_owned()
}
