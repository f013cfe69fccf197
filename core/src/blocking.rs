//! Opt-in blocking facade over the async SDK.
//!
//! # Design
//! Each blocking SDK owns a current-thread tokio runtime and drives the async
//! SDK to completion on it, so results are identical to the async API. The
//! calling thread is blocked for the whole round trip. Calls made from a
//! thread that is already driving a runtime return an
//! [`SdkErrorCause::InsideRuntime`] failure instead of blocking, and the
//! runtime is shut down in the background on drop so teardown never blocks.

use std::future::Future;

use tokio::runtime::{Builder, Handle, Runtime};
use tracing::warn;

use crate::accounts::google::{self, GoogleAccount};
use crate::config::SdkConfig;
use crate::error::{SdkErrorCause, SdkResponseError, TransportError};
use crate::response::SdkResponse;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::ApiResponse;

fn runtime() -> Result<Runtime, TransportError> {
    Ok(Builder::new_current_thread().enable_all().build()?)
}

/// Blocking SDK for `/google`.
#[derive(Debug)]
pub struct GoogleSdk<T = ReqwestTransport> {
    inner: google::GoogleSdk<T>,
    runtime: Option<Runtime>,
}

impl GoogleSdk<ReqwestTransport> {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::from_async(google::GoogleSdk::new(base_url)?)
    }

    pub fn with_media_type(base_url: &str, media_type: &str) -> Result<Self, TransportError> {
        Self::from_async(google::GoogleSdk::with_media_type(base_url, media_type)?)
    }

    pub fn from_config(config: &SdkConfig) -> Result<Self, TransportError> {
        Self::from_async(google::GoogleSdk::from_config(config)?)
    }
}

impl<T> GoogleSdk<T> {
    /// Run `call` to completion, or fail if the runtime is unusable here.
    fn block_on<D>(&self, call: impl Future<Output = SdkResponse<D>>) -> SdkResponse<D> {
        if Handle::try_current().is_ok() {
            warn!("blocking SDK called from inside an async runtime");
            return SdkResponse::failure(SdkResponseError::from_cause(
                SdkErrorCause::InsideRuntime,
                None,
            ));
        }
        match &self.runtime {
            Some(runtime) => runtime.block_on(call),
            None => SdkResponse::failure(SdkResponseError::from_cause(SdkErrorCause::Disposed, None)),
        }
    }
}

impl<T: Transport> GoogleSdk<T> {
    pub fn with_transport(transport: T) -> Result<Self, TransportError> {
        Self::from_async(google::GoogleSdk::with_transport(transport)?)
    }

    fn from_async(inner: google::GoogleSdk<T>) -> Result<Self, TransportError> {
        Ok(Self {
            inner,
            runtime: Some(runtime()?),
        })
    }

    pub fn get_all(&self) -> SdkResponse<ApiResponse<Vec<GoogleAccount>>> {
        self.block_on(self.inner.get_all())
    }

    pub fn get_by_id(&self, id: i64) -> SdkResponse<ApiResponse<GoogleAccount>> {
        self.block_on(self.inner.get_by_id(id))
    }

    pub fn close(&mut self) {
        self.inner.close();
    }
}

impl<T> Drop for GoogleSdk<T> {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
