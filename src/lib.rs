//! Sans-IO, incremental HTTP/1.x request parser.
//!
//! Bytes are fed as they arrive, in whatever fragments the transport delivers.
//! Every feed parses as far as the buffered input allows and returns the
//! [`Event`]s for the milestones crossed: headers received, body data available,
//! complete, or a terminal [`ParseError`].
//!
//! ```
//! use h1feed::{Event, Request};
//!
//! let mut request = Request::new();
//!
//! let events = request.feed(b"GET /welcome HTTP/1.1\r\nAccept: text/html\r\n\r\n");
//! assert_eq!(events, vec![Event::HeadersReceived, Event::Complete]);
//!
//! assert!(request.is_valid());
//! assert_eq!(request.method(), "GET");
//! assert_eq!(request.uri(), "/welcome");
//! assert_eq!(request.version(), "1.1");
//! assert_eq!(request.header("accept"), "text/html");
//! ```
//!
//! Errors are terminal and surface as events, the caller decides what to do
//! with the connection.
//!
//! ```
//! use h1feed::{Event, ParseError, Request};
//!
//! let mut request = Request::new();
//!
//! let events = request.feed(b"GET / HTTP/2.0\r\n");
//! assert_eq!(events, vec![Event::Error(ParseError::HttpVersionNotSupported), Event::Complete]);
//! assert!(!request.is_valid());
//! assert_eq!(request.error().map(|e| e.status_code()), Some(505));
//! ```
//!
//! Not supported: chunked transfer-encoding, percent decoding of the target,
//! folded header lines and pipelined requests.

#[macro_use]
extern crate log;

mod buffer;
mod parser;
mod util;

mod error;
pub use error::{Error, ParseError, Result};

mod event;
pub use event::{Event, Events};

mod limits;
pub use limits::Limits;

mod header;
pub use header::Headers;

pub mod param;
pub use param::Params;

mod request;
pub use request::{Request, State};

mod body;
pub use body::Body;

mod source;
pub use source::{ByteSource, ReadSource, Session};

#[cfg(feature = "http_crate")]
mod http_crate;

#[cfg(test)]
mod test;
