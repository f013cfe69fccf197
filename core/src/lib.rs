//! Client SDK for the accounts REST API.
//!
//! # Overview
//! Every operation issues one GET and returns an [`SdkResponse`] that holds
//! either the decoded payload or an [`SdkResponseError`]. Operations never
//! return `Err` and never panic; callers branch on
//! [`SdkResponse::error`] or convert with [`SdkResponse::into_result`].
//!
//! # Design
//! - [`Transport`] is the only I/O seam; [`ReqwestTransport`] is the default
//!   and tests can inject their own.
//! - [`SdkBase`] owns the transport and interprets responses in
//!   [`response_or_fail`]. Resource SDKs such as [`GoogleSdk`] only declare a
//!   path and an entity type through [`Resource`].
//! - The API is async. [`blocking`] offers an explicit synchronous facade.
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), accounts_sdk::TransportError> {
//! let sdk = accounts_sdk::GoogleSdk::new("http://localhost:3000")?;
//! let result = sdk.get_by_id(42).await;
//! match result.error() {
//!     Some(err) => eprintln!("lookup failed: {err}"),
//!     None => println!("{:?}", result.data()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod accounts;
pub mod blocking;
pub mod config;
pub mod error;
pub mod http;
pub mod response;
pub mod sdk;
pub mod transport;
pub mod types;

pub use accounts::{GoogleAccount, GoogleAccounts, GoogleSdk};
pub use config::{ConfigError, SdkConfig};
pub use error::{SdkErrorCause, SdkResponseError, TransportError};
pub use http::HttpResponse;
pub use response::SdkResponse;
pub use sdk::{deserialize_response, response_or_fail, serialize, Resource, SdkBase};
pub use transport::{ReqwestTransport, Transport};
pub use types::ApiResponse;
