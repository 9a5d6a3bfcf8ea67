/*
[INPUT]:  HTTP method, request path and API credentials
[OUTPUT]: Signed request headers (KALSHI-ACCESS-*)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::Method;

use crate::auth::Credentials;
use crate::http::Result;
use crate::time::current_time_millis;

pub const ACCESS_KEY_HEADER: &str = "KALSHI-ACCESS-KEY";
pub const ACCESS_SIGNATURE_HEADER: &str = "KALSHI-ACCESS-SIGNATURE";
pub const ACCESS_TIMESTAMP_HEADER: &str = "KALSHI-ACCESS-TIMESTAMP";

/// Authentication headers for exactly one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub access_key: String,
    pub access_signature: String,
    pub access_timestamp: String,
}

impl SignedHeaders {
    /// Header name/value pairs in wire order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (ACCESS_KEY_HEADER, self.access_key.as_str()),
            (ACCESS_SIGNATURE_HEADER, self.access_signature.as_str()),
            (ACCESS_TIMESTAMP_HEADER, self.access_timestamp.as_str()),
        ]
        .into_iter()
    }
}

/// Signs requests with the credential's RSA key
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign a request at the current wall-clock time
    pub fn sign(&self, method: &Method, path: &str) -> Result<SignedHeaders> {
        self.sign_at(current_time_millis(), method, path)
    }

    /// Sign a request for an explicit millisecond timestamp
    ///
    /// Format: "{timestamp}.{METHOD}.{path}", query string excluded
    pub fn sign_at(&self, timestamp_ms: i64, method: &Method, path: &str) -> Result<SignedHeaders> {
        let message = signing_message(timestamp_ms, method, path);
        let signature = self.credentials.signer().sign(message.as_bytes())?;

        Ok(SignedHeaders {
            access_key: self.credentials.key_id().to_string(),
            access_signature: BASE64.encode(signature),
            access_timestamp: timestamp_ms.to_string(),
        })
    }
}

/// Build the exact message covered by the signature
pub fn signing_message(timestamp_ms: i64, method: &Method, path: &str) -> String {
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    format!(
        "{timestamp_ms}.{}.{path}",
        method.as_str().to_ascii_uppercase()
    )
}
