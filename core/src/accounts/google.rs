//! Google accounts resource.

use serde::{Deserialize, Serialize};

use crate::config::SdkConfig;
use crate::error::TransportError;
use crate::response::SdkResponse;
use crate::sdk::{Resource, SdkBase};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::ApiResponse;

/// A Google account record.
///
/// Only `id` and `name` are typed; every other field the API sends is kept
/// verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleAccount {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The `google` resource.
#[derive(Debug, Clone, Copy)]
pub struct GoogleAccounts;

impl Resource for GoogleAccounts {
    const PATH: &'static str = "google";
    type Entity = GoogleAccount;
}

/// Async SDK for `/google`.
#[derive(Debug)]
pub struct GoogleSdk<T = ReqwestTransport> {
    base: SdkBase<T>,
}

impl GoogleSdk<ReqwestTransport> {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Ok(Self {
            base: SdkBase::new(base_url)?,
        })
    }

    pub fn with_media_type(base_url: &str, media_type: &str) -> Result<Self, TransportError> {
        Ok(Self {
            base: SdkBase::with_media_type(base_url, media_type)?,
        })
    }

    pub fn from_config(config: &SdkConfig) -> Result<Self, TransportError> {
        Ok(Self {
            base: SdkBase::from_config(config)?,
        })
    }
}

impl<T: Transport> GoogleSdk<T> {
    pub fn with_transport(transport: T) -> Result<Self, TransportError> {
        Ok(Self {
            base: SdkBase::with_transport(transport)?,
        })
    }

    pub fn base(&self) -> &SdkBase<T> {
        &self.base
    }

    /// All Google accounts.
    pub async fn get_all(&self) -> SdkResponse<ApiResponse<Vec<GoogleAccount>>> {
        self.base.get_all::<GoogleAccounts>().await
    }

    /// A single Google account.
    pub async fn get_by_id(&self, id: i64) -> SdkResponse<ApiResponse<GoogleAccount>> {
        self.base.get_by_id::<GoogleAccounts>(id).await
    }

    pub fn close(&mut self) {
        self.base.close();
    }
}
