//! Status-code scenarios against a wiremock server, plus an injected
//! transport.

use std::sync::{Arc, Mutex};

use accounts_sdk::{
    GoogleSdk, HttpResponse, ReqwestTransport, SdkBase, Transport, TransportError,
};
use async_trait::async_trait;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn sdk_for(server: &MockServer) -> GoogleSdk {
    GoogleSdk::new(&server.uri()).unwrap()
}

#[tokio::test]
async fn get_all_decodes_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/google"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"data":[{"id":1,"name":"Acme"}]}"#),
        )
        .mount(&server)
        .await;

    let result = sdk_for(&server).await.get_all().await;

    assert!(result.error().is_none());
    let accounts = &result.data().unwrap().data;
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, 1);
    assert_eq!(accounts[0].name, "Acme");
}

#[tokio::test]
async fn get_by_id_not_found_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/google/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("\"Not Found\""))
        .mount(&server)
        .await;

    let result = sdk_for(&server).await.get_by_id(42).await;

    assert!(result.data().is_none());
    let err = result.error().unwrap();
    assert_eq!(err.message(), "\"Not Found\"");
    assert_eq!(err.response().unwrap().status, 404);
}

#[tokio::test]
async fn no_content_is_success_without_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/google"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let result = sdk_for(&server).await.get_all().await;

    assert!(result.is_no_content());
    assert!(result.data().is_none());
    assert!(result.error().is_none());
}

#[tokio::test]
async fn server_error_body_is_kept_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/google/7"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database is down"))
        .mount(&server)
        .await;

    let result = sdk_for(&server).await.get_by_id(7).await;

    let err = result.error().unwrap();
    assert_eq!(err.message(), "database is down");
    assert!(err.cause().is_none());
    assert_eq!(result.status(), Some(500));
}

#[tokio::test]
async fn undecodable_success_keeps_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/google/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":{"id":"one"}}"#))
        .mount(&server)
        .await;

    let result = sdk_for(&server).await.get_by_id(1).await;

    let err = result.error().unwrap();
    assert!(err.is_decode());
    assert_eq!(err.response().unwrap().body, r#"{"data":{"id":"one"}}"#);
    assert!(result.data().is_none());
}

#[tokio::test]
async fn custom_media_type_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/google"))
        .and(header("accept", "application/vnd.accounts+json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = GoogleSdk::with_media_type(
        &format!("{}/api//", server.uri()),
        "application/vnd.accounts+json",
    )
    .unwrap();
    let result = sdk.get_all().await;

    assert!(result.data().unwrap().data.is_empty());
}

#[tokio::test]
async fn prebuilt_client_gets_reset_accept_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/google/3"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"data":{"id":3,"name":"Hooli"}}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = ReqwestTransport::builder(&server.uri())
        .client(reqwest::Client::new())
        .media_type("text/xml")
        .build()
        .unwrap();
    let sdk = GoogleSdk::with_transport(transport).unwrap();
    let result = sdk.get_by_id(3).await;

    assert_eq!(result.into_data().unwrap().into_inner().name, "Hooli");
}

#[tokio::test]
async fn leading_slash_keeps_base_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/google"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = SdkBase::new(&format!("{}/api", server.uri())).unwrap();
    let result = sdk.get::<serde_json::Value>("/google").await;

    assert!(result.is_success(), "{:?}", result.error());
    assert_eq!(result.data().unwrap()["data"], serde_json::json!([]));
}

/// Transport that replays one canned response and records what it was asked.
#[derive(Clone)]
struct CannedTransport {
    base_url: Url,
    response: Option<HttpResponse>,
    accept: Arc<Mutex<Option<String>>>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl CannedTransport {
    fn new(response: Option<HttpResponse>) -> Self {
        Self {
            base_url: Url::parse("http://canned.test/").unwrap(),
            response,
            accept: Arc::default(),
            paths: Arc::default(),
        }
    }
}

#[async_trait]
impl Transport for CannedTransport {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn reset_default_headers(&mut self, media_type: &str) -> Result<(), TransportError> {
        *self.accept.lock().unwrap() = Some(media_type.to_string());
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<HttpResponse, TransportError> {
        self.paths.lock().unwrap().push(path.to_string());
        match &self.response {
            Some(response) => Ok(response.clone()),
            None => Err(TransportError::InvalidHeader("canned failure".to_string())),
        }
    }
}

#[tokio::test]
async fn injected_transport_gets_json_accept_header() {
    let transport = CannedTransport::new(Some(HttpResponse::new(
        200,
        r#"{"data":{"id":5,"name":"Initech"}}"#,
    )));
    let accept = transport.accept.clone();
    let paths = transport.paths.clone();

    let sdk = GoogleSdk::with_transport(transport).unwrap();
    let result = sdk.get_by_id(5).await;

    assert_eq!(accept.lock().unwrap().as_deref(), Some("application/json"));
    assert_eq!(*paths.lock().unwrap(), vec!["google/5".to_string()]);
    assert_eq!(result.into_data().unwrap().data.name, "Initech");
}

#[tokio::test]
async fn injected_transport_error_becomes_failure() {
    let sdk = SdkBase::with_transport(CannedTransport::new(None)).unwrap();

    let result = sdk.get::<serde_json::Value>("google").await;

    let err = result.error().unwrap();
    assert!(err.is_transport());
    assert_eq!(err.message(), "invalid header value: canned failure");
    assert!(result.response().is_none());
}

#[tokio::test]
async fn closing_releases_injected_transport() {
    let transport = CannedTransport::new(Some(HttpResponse::new(204, "")));
    let paths = transport.paths.clone();
    let mut sdk = SdkBase::with_transport(transport).unwrap();

    sdk.close();
    assert!(sdk.transport().is_none());
    let result = sdk.get::<serde_json::Value>("google").await;

    assert!(!result.is_success());
    assert!(paths.lock().unwrap().is_empty());
    assert_eq!(Arc::strong_count(&paths), 1);
}
