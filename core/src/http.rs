//! HTTP response described as plain data.
//!
//! # Design
//! Transports buffer the whole response before handing it to the SDK, so
//! response interpretation never performs I/O and can be tested without a
//! network. All fields use owned types so a response can be cloned into both
//! a result and the failure it carries.

/// Status code for a successful request with no body.
pub const NO_CONTENT: u16 = 204;

/// A buffered HTTP response.
///
/// Produced by a [`Transport`](crate::transport::Transport) after executing a
/// request, then passed to
/// [`response_or_fail`](crate::sdk::response_or_fail) for interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// `true` for any 2xx status, including 204.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_no_content(&self) -> bool {
        self.status == NO_CONTENT
    }

    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
