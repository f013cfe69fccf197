//! Error types for the accounts SDK.
//!
//! # Design
//! SDK operations never return `Err`. Every failure ends up as an
//! [`SdkResponseError`] stored on the returned
//! [`SdkResponse`](crate::response::SdkResponse). The error keeps the raw
//! response when one was received so callers can inspect status and body,
//! and the lower-level cause when there was one.
//!
//! [`TransportError`] is the only error that surfaces as `Err`, and only from
//! constructors, which are not SDK operations.

use crate::http::HttpResponse;

/// Failures raised by a [`Transport`](crate::transport::Transport) or while
/// building one.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client failed to build, send, or read a request.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The base address or a resource path could not be parsed as a URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A default header value was not a valid HTTP header value.
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// The blocking facade could not start its runtime.
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Lower-level error wrapped by an [`SdkResponseError`].
#[derive(Debug, thiserror::Error)]
pub enum SdkErrorCause {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body did not decode into the expected type.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The SDK was used after `close()`.
    #[error("SDK has been disposed")]
    Disposed,

    /// A blocking call was made from a thread already driving an async
    /// runtime.
    #[error("blocking SDK called from inside an async runtime")]
    InsideRuntime,
}

/// Failure attached to an [`SdkResponse`](crate::response::SdkResponse).
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SdkResponseError {
    message: String,
    response: Option<HttpResponse>,
    #[source]
    cause: Option<SdkErrorCause>,
}

impl SdkResponseError {
    pub fn new(message: impl Into<String>, response: Option<HttpResponse>) -> Self {
        Self {
            message: message.into(),
            response,
            cause: None,
        }
    }

    /// Wrap `cause`, using its display text as the message.
    pub fn from_cause(cause: impl Into<SdkErrorCause>, response: Option<HttpResponse>) -> Self {
        let cause = cause.into();
        Self {
            message: cause.to_string(),
            response,
            cause: Some(cause),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raw response, absent when the request never produced one.
    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    pub fn cause(&self) -> Option<&SdkErrorCause> {
        self.cause.as_ref()
    }

    /// Status code of the raw response, if any.
    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self.cause, Some(SdkErrorCause::Transport(_)))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self.cause, Some(SdkErrorCause::Decode(_)))
    }
}
