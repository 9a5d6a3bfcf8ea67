/*
[INPUT]:  HTTP configuration (base URL, timeouts) and API credentials
[OUTPUT]: Signed requests and raw JSON response bodies
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::path::Path;
use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::Credentials;
use crate::http::{KalshiError, QueryParams, RequestSigner, Result};

/// Base URLs for the Kalshi trade API
pub const PRODUCTION_BASE_URL: &str = "https://api.elections.kalshi.com/trade-api/v2";
pub const DEMO_BASE_URL: &str = "https://demo-api.kalshi.co/trade-api/v2";

/// HTTP client configuration
///
/// Timeouts are unset by default, leaving reqwest's own behavior in place.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: PRODUCTION_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at the demo environment
    pub fn demo() -> Self {
        Self {
            base_url: DEMO_BASE_URL.to_string(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Main HTTP client for the Kalshi trade API
#[derive(Debug)]
pub struct KalshiClient {
    http_client: Client,
    base_url: String,
    signer: RequestSigner,
}

impl KalshiClient {
    /// Create a client against the production API
    pub fn new(key_id: impl Into<String>, private_key_path: impl AsRef<Path>) -> Result<Self> {
        Self::with_base_url(key_id, private_key_path, PRODUCTION_BASE_URL)
    }

    /// Create a client against an explicit base URL
    pub fn with_base_url(
        key_id: impl Into<String>,
        private_key_path: impl AsRef<Path>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let credentials = Credentials::from_pem_file(key_id, private_key_path)?;
        Self::with_config(credentials, ClientConfig::default().with_base_url(base_url))
    }

    /// Create a client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url;
        Url::parse(&base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| KalshiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url,
            signer: RequestSigner::new(credentials),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        self.signer.credentials()
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Build full URL by plain concatenation so the base path is kept
    fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Issue one signed request and return the JSON body unchanged
    ///
    /// Only the path (without any query fragment) is signed.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let path = normalize_path(path);
        let url = self.url(&path)?;
        let headers = self.signer.sign(&method, &path)?;

        debug!(method = %method, path = %path, "sending signed request");

        let mut builder = self.http_client.request(method.clone(), url);
        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(params) = params.filter(|params| !params.is_empty()) {
            builder = builder.query(params.pairs());
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            // A body that cannot be read must not hide the status
            let text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), method = %method, path = %path, "request failed");
            return Err(KalshiError::http_error(status, text));
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub(crate) async fn get(&self, path: &str, params: Option<&QueryParams>) -> Result<Value> {
        self.request(Method::GET, path, params, None).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, None, Some(&body)).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.request(Method::PUT, path, None, body.as_ref()).await
    }

    pub(crate) async fn delete<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value> {
        let body = body.map(serde_json::to_value).transpose()?;
        self.request(Method::DELETE, path, None, body.as_ref()).await
    }
}

/// Ensure the path starts with a single leading `/`
pub fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::auth::RsaPssSigner;
    use wiremock::MockServer;

    pub const TEST_KEY_PEM: &str = include_str!("../../tests/fixtures/test_rsa_key.pem");

    pub fn test_credentials() -> Credentials {
        Credentials::new(
            "test-key-id",
            RsaPssSigner::from_pem(TEST_KEY_PEM).expect("fixture key"),
        )
    }

    /// Client whose base URL carries a path prefix like the real API
    pub fn client_for(server: &MockServer) -> KalshiClient {
        KalshiClient::with_config(
            test_credentials(),
            ClientConfig::default().with_base_url(format!("{}/trade-api/v2", server.uri())),
        )
        .expect("client init")
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{client_for, test_credentials};
    use super::*;
    use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
    use wiremock::matchers::{body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("events"), "/events");
        assert_eq!(normalize_path("/events"), "/events");
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, PRODUCTION_BASE_URL);
        assert!(config.timeout.is_none());
        assert!(config.connect_timeout.is_none());
        assert_eq!(ClientConfig::demo().base_url, DEMO_BASE_URL);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = KalshiClient::with_config(
            test_credentials(),
            ClientConfig::default().with_base_url("not a url"),
        )
        .unwrap_err();
        assert!(matches!(err, KalshiError::UrlParse(_)));
    }

    #[test]
    fn test_base_url_kept_verbatim() {
        let client = KalshiClient::with_config(
            test_credentials(),
            ClientConfig::default().with_base_url("https://example.com/trade-api/v2/"),
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://example.com/trade-api/v2/");
        assert_eq!(
            client.url("/events").unwrap().as_str(),
            "https://example.com/trade-api/v2//events"
        );
    }

    #[tokio::test]
    async fn test_unreadable_error_body_keeps_status() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            // Promise more body than is sent, then hang up
            socket
                .write_all(b"HTTP/1.1 502 Bad Gateway\r\ncontent-length: 64\r\n\r\npartial")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let client = KalshiClient::with_config(
            test_credentials(),
            ClientConfig::default().with_base_url(format!("http://{addr}/trade-api/v2")),
        )
        .unwrap();

        let err = client.get("/exchange/status", None).await.unwrap_err();
        match err {
            KalshiError::Http { status, body } => {
                assert_eq!(status.as_u16(), 502);
                assert!(body.is_empty());
            }
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_request_signs_and_keeps_base_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/trade-api/v2/portfolio/balance"))
            .and(header("KALSHI-ACCESS-KEY", "test-key-id"))
            .and(header_exists("KALSHI-ACCESS-SIGNATURE"))
            .and(header_exists("KALSHI-ACCESS-TIMESTAMP"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "balance": 10_000,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let body = client
            .request(Method::GET, "portfolio/balance", None, None)
            .await
            .expect("request failed");
        assert_eq!(body, serde_json::json!({ "balance": 10_000 }));

        let requests = server.received_requests().await.expect("recording enabled");
        let request = &requests[0];
        let timestamp = request.headers["kalshi-access-timestamp"].to_str().unwrap();
        let signature = BASE64
            .decode(request.headers["kalshi-access-signature"].to_str().unwrap())
            .unwrap();
        let message = format!("{timestamp}.GET./portfolio/balance");
        assert!(client.credentials().signer().verify(message.as_bytes(), &signature));
    }

    #[tokio::test]
    async fn test_query_params_never_signed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/trade-api/v2/portfolio/fills"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "fills": [],
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut params = QueryParams::new();
        params.push("ticker", "KXBTC-25");
        params.push("limit", 5);
        client
            .request(Method::GET, "/portfolio/fills", Some(&params), None)
            .await
            .expect("request failed");

        let requests = server.received_requests().await.unwrap();
        let request = &requests[0];
        assert_eq!(request.url.query(), Some("ticker=KXBTC-25&limit=5"));

        let timestamp = request.headers["kalshi-access-timestamp"].to_str().unwrap();
        let signature = BASE64
            .decode(request.headers["kalshi-access-signature"].to_str().unwrap())
            .unwrap();
        let signer = client.credentials().signer();
        assert!(signer.verify(format!("{timestamp}.GET./portfolio/fills").as_bytes(), &signature));
        assert!(!signer.verify(
            format!("{timestamp}.GET./portfolio/fills?ticker=KXBTC-25&limit=5").as_bytes(),
            &signature
        ));
    }

    #[tokio::test]
    async fn test_empty_params_produce_no_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/trade-api/v2/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .request(Method::GET, "/events", Some(&QueryParams::new()), None)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_json_body_sent() {
        let server = MockServer::start().await;
        let payload = serde_json::json!({ "ticker": "KXBTC-25", "count": 3 });
        Mock::given(method("POST"))
            .and(path("/trade-api/v2/portfolio/orders"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "order": { "order_id": "abc" },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let body = client.post("/portfolio/orders", &payload).await.unwrap();
        assert_eq!(body["order"]["order_id"], "abc");
    }

    #[tokio::test]
    async fn test_not_found_is_http_error_with_body() {
        let server = MockServer::start().await;
        let error_body = r#"{"error":{"code":"not_found","message":"market not found"}}"#;
        Mock::given(method("GET"))
            .and(path("/trade-api/v2/markets/NOPE"))
            .respond_with(ResponseTemplate::new(404).set_body_string(error_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get("/markets/NOPE", None).await.unwrap_err();
        match err {
            KalshiError::Http { status, body } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body, error_body);
            }
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_array_body_passes_through() {
        let server = MockServer::start().await;
        let payload = serde_json::json!([1, "two", { "three": 3 }, null]);
        Mock::given(method("GET"))
            .and(path("/trade-api/v2/exchange/announcements"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let body = client.get("/exchange/announcements", None).await.unwrap();
        assert_eq!(body, payload);
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/trade-api/v2/communications/rfqs/rfq-1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let body = client
            .delete::<Value>("/communications/rfqs/rfq-1", None)
            .await
            .unwrap();
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_no_retry_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/trade-api/v2/exchange/status"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get("/exchange/status", None).await.unwrap_err();
        assert_eq!(err.status().map(|s| s.as_u16()), Some(503));
    }
}
