/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for kalshi-trade-adapter tests

use kalshi_trade_adapter::{ClientConfig, Credentials, KalshiClient};
use wiremock::MockServer;

pub const TEST_KEY_ID: &str = "a952bcbe-ec3b-4b5b-b8f9-11dae589608c";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Path of a PEM fixture under tests/fixtures
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Client pointed at the mock server with the API's `/trade-api/v2` prefix
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> KalshiClient {
    let credentials = Credentials::from_pem_file(TEST_KEY_ID, fixture_path("test_rsa_key.pem"))
        .expect("fixture credentials");
    KalshiClient::with_config(
        credentials,
        ClientConfig::default().with_base_url(format!("{}/trade-api/v2", server.uri())),
    )
    .expect("client init")
}
