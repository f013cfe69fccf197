//! Result wrapper returned by every SDK operation.

use crate::error::SdkResponseError;
use crate::http::{HttpResponse, NO_CONTENT};

/// Outcome of one SDK call.
///
/// Holds the raw response (when one was received), the decoded payload on
/// success, and the failure otherwise. A failure never carries a payload, and
/// a 204 success carries neither. Built once by the SDK and read-only after.
#[derive(Debug)]
pub struct SdkResponse<T> {
    response: Option<HttpResponse>,
    data: Option<T>,
    error: Option<SdkResponseError>,
}

impl<T> SdkResponse<T> {
    pub(crate) fn success(response: HttpResponse, data: T) -> Self {
        Self {
            response: Some(response),
            data: Some(data),
            error: None,
        }
    }

    pub(crate) fn no_content(response: HttpResponse) -> Self {
        Self {
            response: Some(response),
            data: None,
            error: None,
        }
    }

    pub(crate) fn failure(error: SdkResponseError) -> Self {
        Self {
            response: error.response().cloned(),
            data: None,
            error: Some(error),
        }
    }

    /// Status code of the raw response; `None` when no response was received.
    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status)
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn error(&self) -> Option<&SdkResponseError> {
        self.error.as_ref()
    }

    pub fn is_no_content(&self) -> bool {
        self.status() == Some(NO_CONTENT)
    }

    pub fn has_response_data(&self) -> bool {
        self.data.is_some()
    }

    /// `true` when no failure is attached. A 204 is a success.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a `Result` so callers can use `?`.
    ///
    /// `Ok(None)` is a no-content success.
    pub fn into_result(self) -> Result<Option<T>, SdkResponseError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }
}
