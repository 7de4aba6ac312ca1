use std::io;

use crate::{Error, Request};

/// Read-only view of the request body.
///
/// Only ever hands out bytes that came after the header section, and never more
/// than content-length. Implements [`io::Read`], where "nothing yet" is
/// [`io::ErrorKind::WouldBlock`] and end of body is `Ok(0)`. Writing always fails.
#[derive(Debug)]
pub struct Body<'a> {
    request: &'a mut Request,
}

impl<'a> Body<'a> {
    pub(crate) fn new(request: &'a mut Request) -> Self {
        Body { request }
    }

    /// Bytes that can be read right now.
    pub fn available(&self) -> usize {
        self.request.available()
    }

    /// Take up to `max` bytes.
    ///
    /// `Some(vec![])` when nothing is available, `None` once the body is
    /// complete and fully read.
    pub fn read(&mut self, max: usize) -> Option<Vec<u8>> {
        self.request.read_body(max)
    }

    /// Read everything that is available right now.
    pub fn read_available(&mut self) -> Option<Vec<u8>> {
        let max = self.available();
        self.read(max)
    }

    /// The body is fully read, or will never arrive.
    pub fn is_finished(&self) -> bool {
        match self.request.state() {
            crate::State::Invalid => true,
            crate::State::Complete => self.available() == 0,
            _ => false,
        }
    }

    /// Always fails, the body is input only.
    pub fn write(&mut self, _data: &[u8]) -> Result<usize, Error> {
        Err(Error::ReadOnly)
    }
}

impl io::Read for Body<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() || self.is_finished() {
            return Ok(0);
        }

        let Some(data) = self.request.read_body(buf.len()) else {
            return Ok(0);
        };

        if data.is_empty() {
            return Err(io::ErrorKind::WouldBlock.into());
        }

        buf[..data.len()].copy_from_slice(&data);

        Ok(data.len())
    }
}

impl io::Write for Body<'_> {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(Error::ReadOnly.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
