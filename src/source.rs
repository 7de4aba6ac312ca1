//! Binding a [`Request`] to the bytes of a connection.
//!
//! The request itself is sans-IO, it only ever sees what is passed to
//! [`Request::feed()`]. A [`Session`] borrows something that produces bytes
//! and feeds the request every time the caller signals the source is readable.
//! The session never owns the source, and lets go of it as soon as the request
//! is complete, invalid, or the source stops delivering.
//!
//! ```
//! use std::collections::VecDeque;
//! use h1feed::{Event, Request, Session};
//!
//! let mut incoming: VecDeque<u8> = VecDeque::new();
//! incoming.extend(b"GET /welcome HTTP/1.1\r\n");
//!
//! let mut session = Session::new(Request::new(), &mut incoming);
//! assert!(session.on_readable().is_empty());
//!
//! // Feeding with no new bytes is fine.
//! assert!(session.on_readable().is_empty());
//! assert!(session.is_attached());
//! ```

use std::collections::VecDeque;
use std::io;

use crate::{Body, Events, Request};

const READ_CHUNK: usize = 4096;

/// Something that hands out whatever bytes it has without blocking.
pub trait ByteSource {
    /// Append all currently available bytes to `dst`, returning how many.
    ///
    /// `Ok(0)` means nothing right now.
    fn read_available(&mut self, dst: &mut Vec<u8>) -> io::Result<usize>;

    /// The source will never produce more bytes.
    fn is_ended(&self) -> bool {
        false
    }
}

impl ByteSource for VecDeque<u8> {
    fn read_available(&mut self, dst: &mut Vec<u8>) -> io::Result<usize> {
        let n = self.len();
        dst.extend(self.drain(..));
        Ok(n)
    }
}

impl ByteSource for &[u8] {
    fn read_available(&mut self, dst: &mut Vec<u8>) -> io::Result<usize> {
        let n = self.len();
        dst.extend_from_slice(*self);
        *self = &[];
        Ok(n)
    }

    fn is_ended(&self) -> bool {
        self.is_empty()
    }
}

/// Adapts a non-blocking [`io::Read`], such as a socket in non-blocking mode.
///
/// Reads until the reader would block. A read of `0` bytes means the reader
/// is done.
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: Option<R>,
}

impl<R: io::Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        ReadSource { inner: Some(inner) }
    }

    pub fn into_inner(self) -> Option<R> {
        self.inner
    }
}

impl<R: io::Read> ByteSource for ReadSource<R> {
    fn read_available(&mut self, dst: &mut Vec<u8>) -> io::Result<usize> {
        let Some(inner) = self.inner.as_mut() else {
            return Ok(0);
        };

        let mut total = 0;
        let mut chunk = [0; READ_CHUNK];

        loop {
            match inner.read(&mut chunk) {
                Ok(0) => {
                    // inner is done reading
                    self.inner = None;
                    break;
                }
                Ok(n) => {
                    dst.extend_from_slice(&chunk[..n]);
                    total += n;
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(total)
    }

    fn is_ended(&self) -> bool {
        self.inner.is_none()
    }
}

/// A [`Request`] bound to a borrowed [`ByteSource`].
pub struct Session<'s, S: ?Sized> {
    request: Request,
    source: Option<&'s mut S>,
    scratch: Vec<u8>,
}

impl<'s, S: ByteSource + ?Sized> Session<'s, S> {
    pub fn new(request: Request, source: &'s mut S) -> Self {
        Session {
            request,
            source: Some(source),
            scratch: Vec::new(),
        }
    }

    /// Pull whatever the source has and feed it to the request.
    ///
    /// Call this whenever the source signals it is readable. A failing or ended
    /// source is treated as "no more bytes" and detached.
    pub fn on_readable(&mut self) -> Events {
        let Some(source) = self.source.as_mut() else {
            trace!("on_readable while detached");
            return Events::new();
        };

        self.scratch.clear();
        let result = source.read_available(&mut self.scratch);
        let ended = source.is_ended();

        let events = self.request.feed(&self.scratch);

        if let Err(e) = result {
            debug!("Byte source failed, no more input: {}", e);
            self.detach();
        } else if ended {
            debug!("Byte source ended in {:?}", self.request.state());
            self.detach();
        } else if self.request.is_detached() {
            self.detach();
        }

        events
    }

    /// Stop reading from the source. The request keeps what it has parsed.
    pub fn detach(&mut self) {
        if self.source.take().is_some() {
            trace!("Detach byte source");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.source.is_some()
    }
}

impl<'s, S: ?Sized> Session<'s, S> {
    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn body(&mut self) -> Body<'_> {
        self.request.body()
    }

    /// Release the source and hand back the request.
    pub fn into_request(self) -> Request {
        self.request
    }
}
