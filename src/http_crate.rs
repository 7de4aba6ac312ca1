use http::Version;

use crate::{Error, Request, Result};

impl Request {
    /// Convert the parsed start line and headers to an [`http::Request`].
    ///
    /// `1.0` maps to HTTP/1.0, any other `1.x` to HTTP/1.1. The body is not
    /// included, read it through [`Request::body()`].
    pub fn to_http(&self) -> Result<http::Request<()>> {
        if !self.has_headers() {
            return Err(Error::HeadersNotReceived);
        }

        let version = if self.version() == "1.0" {
            Version::HTTP_10
        } else {
            Version::HTTP_11
        };

        let mut builder = http::Request::builder()
            .method(self.method())
            .uri(self.uri())
            .version(version);

        for (name, value) in self.headers().iter() {
            builder = builder.header(name, value);
        }

        Ok(builder.body(())?)
    }
}
