use std::io;

use thiserror::Error;

/// Terminal reasons a request could not be parsed.
///
/// Once one of these is detected the request is [`Invalid`](crate::State::Invalid)
/// and no further input is looked at.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Malformed start line: missing separators or not an `HTTP/` version.
    #[error("bad request")]
    BadRequest,

    /// The start line did not end within the configured limit.
    #[error("request uri too long")]
    RequestUriTooLong,

    /// The header section did not end within the configured limit.
    #[error("request entity too large")]
    RequestEntityTooLarge,

    /// The version major was something other than 1.
    #[error("http version not supported")]
    HttpVersionNotSupported,

    /// Reserved. The parser never produces it.
    #[error("unknown error")]
    Unknown,
}

impl ParseError {
    /// The status code a server would typically answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ParseError::BadRequest => 400,
            ParseError::RequestUriTooLong => 414,
            ParseError::RequestEntityTooLarge => 413,
            ParseError::HttpVersionNotSupported => 505,
            ParseError::Unknown => 500,
        }
    }
}

/// Errors from using the API, as opposed to errors in the incoming bytes.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request body is read only")]
    ReadOnly,

    #[cfg(feature = "http_crate")]
    #[error("request headers not received")]
    HeadersNotReceived,

    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "http_crate")]
    #[error("http: {0}")]
    Http(#[from] http::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<Error> for io::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::Io(e) => e,
            Error::ReadOnly => io::Error::new(io::ErrorKind::Unsupported, Error::ReadOnly),
            #[cfg(feature = "http_crate")]
            e @ (Error::HeadersNotReceived | Error::Http(_)) => {
                io::Error::new(io::ErrorKind::Other, e)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_error_status_codes() {
        assert_eq!(ParseError::BadRequest.status_code(), 400);
        assert_eq!(ParseError::RequestUriTooLong.status_code(), 414);
        assert_eq!(ParseError::RequestEntityTooLarge.status_code(), 413);
        assert_eq!(ParseError::HttpVersionNotSupported.status_code(), 505);
        assert_eq!(ParseError::Unknown.status_code(), 500);
    }

    #[test]
    fn read_only_into_io() {
        let e: io::Error = Error::ReadOnly.into();
        assert_eq!(e.kind(), io::ErrorKind::Unsupported);
        assert_eq!(e.to_string(), "request body is read only");
    }

    #[cfg(feature = "http_crate")]
    #[test]
    fn headers_not_received_into_io() {
        let e: io::Error = Error::HeadersNotReceived.into();
        assert_eq!(e.kind(), io::ErrorKind::Other);
    }
}
