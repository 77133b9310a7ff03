//! The in-flight request and the response sink.

use crate::headers::Headers;

/// An inbound request as seen by the middleware chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub headers: Headers,
}

impl Request {
    pub fn new(method: &str, path: &str) -> Self {
        Request {
            method: method.to_owned(),
            path: path.to_owned(),
            headers: Headers::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.add(name, value);
        self
    }
}

impl Default for Request {
    fn default() -> Self {
        Request::new("GET", "/")
    }
}

/// Recording response sink.
///
/// Nothing is sent anywhere: status, headers and body accumulate here and
/// the host decides what to do with them once the chain returns. Every
/// write is kept in order; a later status replaces an earlier one and body
/// writes append.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    status: Option<u16>,
    pub headers: Headers,
    body: String,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether anything has been written.
    pub fn is_written(&self) -> bool {
        self.status.is_some() || !self.body.is_empty()
    }

    pub fn write_status(&mut self, status: u16) {
        if let Some(previous) = self.status {
            tracing::debug!(previous, status, "status overwritten");
        }
        self.status = Some(status);
    }

    /// Append to the body, committing `200` if no status was written yet.
    pub fn write_body(&mut self, chunk: &str) {
        if self.status.is_none() {
            self.status = Some(200);
        }
        self.body.push_str(chunk);
    }

    /// Plain-text error reply: content type, `nosniff`, status and
    /// `message` followed by a newline.
    pub fn write_error(&mut self, status: u16, message: &str) {
        self.headers.remove("Content-Length");
        self.headers
            .set("Content-Type", "text/plain; charset=utf-8");
        self.headers.set("X-Content-Type-Options", "nosniff");
        self.write_status(status);
        self.body.push_str(message);
        self.body.push('\n');
    }
}
