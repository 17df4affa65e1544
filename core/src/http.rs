//! HTTP transport seam for the client.
//!
//! # Design
//! `HttpRequest` describes a GET as plain data; the dispatcher builds one per
//! call and hands it to an [`HttpTransport`] implementation. Keeping the
//! request a value (owned `String`s, header pairs assembled up front) means
//! there is no shared request object to mutate between calls.
//!
//! The response body is exposed as an unread [`Body`] stream. Ownership of the
//! stream passes to the caller: consuming readers take `self`, and dropping a
//! `Body` releases the underlying connection.

use std::fmt;
use std::io::{self, Read};

use tracing::debug;
use ureq::ResponseExt;

use crate::error::ApiError;

/// A GET request described as plain data.
///
/// Built once per dispatch by
/// [`NewsApiClient::get`](crate::NewsApiClient::get); the API never sends a
/// request body.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An unread response body stream.
///
/// Reading or dropping the `Body` is what releases the underlying
/// connection, so consume it on every path once a response is returned.
pub struct Body {
    reader: Box<dyn Read + Send>,
}

impl Body {
    pub fn new(reader: impl Read + Send + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Read the entire stream as UTF-8 text, consuming the body.
    pub fn read_to_string(mut self) -> io::Result<String> {
        let mut buf = String::new();
        self.reader.read_to_string(&mut buf)?;
        Ok(buf)
    }

    /// Read the entire stream as raw bytes, consuming the body.
    pub fn read_to_end(mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.reader.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Body(..)")
    }
}

/// The response to a dispatched request.
///
/// `status` is reported exactly as the server returned it — a 4xx/5xx is a
/// normal response at this layer, and the API's own error envelope lives in
/// the body for the caller to decode. `url` is the final resolved request
/// URL.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Body,
    pub url: String,
}

/// An HTTP collaborator capable of executing a GET with custom headers.
///
/// Implementations must not interpret status codes; every completed exchange
/// is `Ok`, and only a failure to complete the exchange at all (DNS,
/// connection, TLS) is an `Err`.
pub trait HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Default blocking transport backed by a [`ureq::Agent`].
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data rather than `Err`, leaving status
/// interpretation to the caller.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let response = builder
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let url = response.get_uri().to_string();
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        debug!(status, url = %url, "GET completed");

        let (_, body) = response.into_parts();
        Ok(HttpResponse {
            status,
            headers,
            body: Body::new(body.into_reader()),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn body_read_to_string_consumes_stream() {
        let body = Body::new(Cursor::new(b"{\"status\":\"ok\"}".to_vec()));
        assert_eq!(body.read_to_string().unwrap(), "{\"status\":\"ok\"}");
    }

    #[test]
    fn body_supports_incremental_reads() {
        let mut body = Body::new(Cursor::new(b"abcdef".to_vec()));
        let mut buf = [0u8; 4];
        assert_eq!(body.read(&mut buf).unwrap(), 4);
        assert_eq!(&buf, b"abcd");
        assert_eq!(body.read_to_end().unwrap(), b"ef");
    }
}
