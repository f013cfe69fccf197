//! Shared request dispatch and response interpretation.
//!
//! # Design
//! [`SdkBase`] owns the transport and is composed into every resource SDK.
//! A resource only declares its path and entity type through [`Resource`];
//! the request, the status interpretation in [`response_or_fail`] and the
//! conversion of every error into a failure result all happen here, once.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn, Span};

use crate::config::{SdkConfig, DEFAULT_MEDIA_TYPE};
use crate::error::{SdkErrorCause, SdkResponseError, TransportError};
use crate::http::HttpResponse;
use crate::response::SdkResponse;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::ApiResponse;

/// Failure message used when there is no response to interpret.
pub const NULL_RESPONSE_MESSAGE: &str = "HttpResponseMessage is null!";

/// An API resource: a path segment and the entity served under it.
pub trait Resource {
    /// Path segment relative to the base address. Surrounding slashes are
    /// ignored.
    const PATH: &'static str;

    type Entity: DeserializeOwned;

    fn collection_path() -> &'static str {
        Self::PATH.trim_matches('/')
    }

    fn item_path(id: impl Display) -> String {
        format!("{}/{id}", Self::collection_path())
    }
}

/// Serialize `payload` with the SDK's JSON codec.
pub fn serialize<P: Serialize + ?Sized>(payload: &P) -> Result<String, serde_json::Error> {
    serde_json::to_string(payload)
}

/// Decode the body of `response` with the SDK's JSON codec.
pub fn deserialize_response<D: DeserializeOwned>(
    response: &HttpResponse,
) -> Result<D, serde_json::Error> {
    serde_json::from_str(&response.body)
}

/// Turn a raw response into a typed result.
///
/// - no response: failure with [`NULL_RESPONSE_MESSAGE`]
/// - 204: success without data, body ignored
/// - other 2xx: decoded body, or a decode failure that keeps the response
/// - anything else: failure whose message is the body text verbatim
pub fn response_or_fail<D: DeserializeOwned>(response: Option<HttpResponse>) -> SdkResponse<D> {
    let Some(response) = response else {
        return SdkResponse::failure(SdkResponseError::new(NULL_RESPONSE_MESSAGE, None));
    };

    if response.is_no_content() {
        return SdkResponse::no_content(response);
    }

    if response.is_success() {
        return match deserialize_response(&response) {
            Ok(data) => SdkResponse::success(response, data),
            Err(e) => {
                debug!(status = response.status, error = %e, "response body did not decode");
                SdkResponse::failure(SdkResponseError::from_cause(e, Some(response)))
            }
        };
    }

    debug!(status = response.status, "remote returned an error status");
    let message = response.body.clone();
    SdkResponse::failure(SdkResponseError::new(message, Some(response)))
}

/// Transport owner shared by every resource SDK.
#[derive(Debug)]
pub struct SdkBase<T = ReqwestTransport> {
    transport: Option<T>,
}

impl SdkBase<ReqwestTransport> {
    /// SDK for `base_url` accepting `application/json`.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_media_type(base_url, DEFAULT_MEDIA_TYPE)
    }

    pub fn with_media_type(base_url: &str, media_type: &str) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::builder(base_url)
            .media_type(media_type)
            .build()?;
        Ok(Self {
            transport: Some(transport),
        })
    }

    pub fn from_config(config: &SdkConfig) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::builder(&config.base_url)
            .media_type(config.media_type.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            transport: Some(transport),
        })
    }
}

impl<T: Transport> SdkBase<T> {
    /// Wrap an existing transport. Its default headers are replaced by
    /// `Accept: application/json`.
    pub fn with_transport(mut transport: T) -> Result<Self, TransportError> {
        transport.reset_default_headers(DEFAULT_MEDIA_TYPE)?;
        Ok(Self {
            transport: Some(transport),
        })
    }

    /// The owned transport, or `None` after [`close`](Self::close).
    pub fn transport(&self) -> Option<&T> {
        self.transport.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.transport.is_none()
    }

    /// Release the transport. Calling this again does nothing; requests made
    /// afterwards fail with a disposed error.
    pub fn close(&mut self) {
        if self.transport.take().is_some() {
            debug!("transport released");
        }
    }

    /// GET `path` and interpret the response as `D`.
    ///
    /// Never fails: transport errors and use after close are returned as
    /// failure results.
    #[instrument(
        name = "sdk_request",
        skip(self),
        fields(
            http.method = "GET",
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
        )
    )]
    pub async fn get<D: DeserializeOwned>(&self, path: &str) -> SdkResponse<D> {
        let Some(transport) = &self.transport else {
            warn!("request issued after the SDK was closed");
            return SdkResponse::failure(SdkResponseError::from_cause(SdkErrorCause::Disposed, None));
        };

        if let Ok(url) = transport.base_url().join(path.trim_start_matches('/')) {
            Span::current().record("http.url", url.as_str());
        }

        match transport.get(path).await {
            Ok(response) => {
                Span::current().record("http.status_code", response.status);
                response_or_fail(Some(response))
            }
            Err(e) => {
                warn!(error = %e, "transport failure");
                SdkResponse::failure(SdkResponseError::from_cause(e, None))
            }
        }
    }

    /// GET the collection of `R`.
    pub async fn get_all<R: Resource>(&self) -> SdkResponse<ApiResponse<Vec<R::Entity>>> {
        self.get(R::collection_path()).await
    }

    /// GET one `R` by id.
    pub async fn get_by_id<R: Resource>(
        &self,
        id: impl Display,
    ) -> SdkResponse<ApiResponse<R::Entity>> {
        self.get(&R::item_path(id)).await
    }
}
