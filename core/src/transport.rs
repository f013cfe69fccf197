//! HTTP transport used by the SDK.
//!
//! # Design
//! [`Transport`] is the seam between the SDK and the network: it issues a GET
//! for a path relative to its base address and returns the fully buffered
//! [`HttpResponse`]. Non-2xx statuses are data, not errors; status
//! interpretation belongs to the SDK. Tests and callers with special needs
//! inject their own implementation; [`ReqwestTransport`] is the default.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use url::Url;

use crate::config::{DEFAULT_MEDIA_TYPE, DEFAULT_TIMEOUT};
use crate::error::TransportError;
use crate::http::HttpResponse;

/// Issues GET requests against a configured base address.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Base address every request path is resolved against.
    fn base_url(&self) -> &Url;

    /// Drop every default header and send only `Accept: {media_type}`.
    fn reset_default_headers(&mut self, media_type: &str) -> Result<(), TransportError>;

    /// GET `path` relative to [`base_url`](Transport::base_url). A leading
    /// `/` does not escape the base path.
    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError>;
}

/// Parse `raw` as a base address ending in exactly one `/`.
///
/// Without the trailing slash, `Url::join` would replace the last path
/// segment instead of appending to it.
pub fn normalize_base_url(raw: &str) -> Result<Url, TransportError> {
    let trimmed = raw.trim_end_matches('/');
    Ok(Url::parse(&format!("{trimmed}/"))?)
}

fn accept_headers(media_type: &str) -> Result<HeaderMap, TransportError> {
    let value =
        HeaderValue::from_str(media_type).map_err(|e| TransportError::InvalidHeader(e.to_string()))?;
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, value);
    Ok(headers)
}

/// Builder for a [`ReqwestTransport`].
#[derive(Debug)]
pub struct ReqwestTransportBuilder {
    base_url: String,
    media_type: String,
    timeout: Duration,
    client: Option<reqwest::Client>,
}

impl ReqwestTransportBuilder {
    fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            client: None,
        }
    }

    /// Media type sent in the `Accept` header.
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Per-request timeout. Ignored when a client is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use an already configured `reqwest::Client` instead of building one.
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// ## Errors
    ///
    /// Returns an error if the base URL or media type is invalid, or if the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<ReqwestTransport, TransportError> {
        let base_url = normalize_base_url(&self.base_url)?;
        let default_headers = accept_headers(&self.media_type)?;
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder().timeout(self.timeout).build()?,
        };
        Ok(ReqwestTransport {
            client,
            base_url,
            default_headers,
        })
    }
}

/// [`Transport`] backed by `reqwest`.
///
/// Default headers are kept here rather than baked into the client so they
/// can be reset after construction.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: Url,
    default_headers: HeaderMap,
}

impl ReqwestTransport {
    pub fn builder(base_url: &str) -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::new(base_url)
    }

    /// Transport with the default media type and timeout.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::builder(base_url).build()
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn reset_default_headers(&mut self, media_type: &str) -> Result<(), TransportError> {
        self.default_headers = accept_headers(media_type)?;
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        let response = self
            .client
            .get(url)
            .headers(self.default_headers.clone())
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_exactly_one_trailing_slash() {
        for raw in [
            "http://localhost:3000/api",
            "http://localhost:3000/api/",
            "http://localhost:3000/api///",
        ] {
            let url = normalize_base_url(raw).unwrap();
            assert_eq!(url.as_str(), "http://localhost:3000/api/", "{raw}");
        }
    }

    #[test]
    fn resource_paths_append_to_base_path() {
        let url = normalize_base_url("http://localhost:3000/api").unwrap();
        assert_eq!(
            url.join("google/42").unwrap().as_str(),
            "http://localhost:3000/api/google/42"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ReqwestTransport::new("not a url").unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl(_)));
    }

    #[test]
    fn builder_sets_accept_header() {
        let transport = ReqwestTransport::builder("http://localhost:3000")
            .media_type("application/vnd.accounts+json")
            .build()
            .unwrap();
        assert_eq!(
            transport.default_headers().get(ACCEPT).unwrap(),
            "application/vnd.accounts+json"
        );
        assert_eq!(transport.default_headers().len(), 1);
    }

    #[test]
    fn reset_replaces_all_default_headers() {
        let mut transport = ReqwestTransport::new("http://localhost:3000").unwrap();
        transport.reset_default_headers("text/plain").unwrap();
        assert_eq!(transport.default_headers().get(ACCEPT).unwrap(), "text/plain");
        assert_eq!(transport.default_headers().len(), 1);
    }

    #[test]
    fn invalid_media_type_is_rejected() {
        let err = ReqwestTransport::builder("http://localhost:3000")
            .media_type("bad\nvalue")
            .build()
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidHeader(_)));
    }
}
