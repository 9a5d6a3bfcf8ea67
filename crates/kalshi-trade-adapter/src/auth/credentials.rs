/*
[INPUT]:  API key id and private key location (argument or environment)
[OUTPUT]: Immutable credentials shared by the request signer
[POS]:    Auth layer - credential loading
[UPDATE]: When adding credential sources
*/

use std::path::Path;
use std::sync::Arc;

use crate::auth::RsaPssSigner;
use crate::http::{KalshiError, Result};

pub const KEY_ID_ENV: &str = "KALSHI_API_KEY_ID";
pub const PRIVATE_KEY_PATH_ENV: &str = "KALSHI_PRIVATE_KEY_PATH";

/// Credentials for authenticated requests
#[derive(Debug, Clone)]
pub struct Credentials {
    key_id: String,
    signer: Arc<RsaPssSigner>,
}

impl Credentials {
    pub fn new(key_id: impl Into<String>, signer: RsaPssSigner) -> Self {
        Self {
            key_id: key_id.into(),
            signer: Arc::new(signer),
        }
    }

    /// Load credentials from a key id and a PEM private key file
    pub fn from_pem_file(key_id: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let signer = RsaPssSigner::from_pem_file(path)?;
        Ok(Self::new(key_id, signer))
    }

    /// Load credentials from `KALSHI_API_KEY_ID` and `KALSHI_PRIVATE_KEY_PATH`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let key_id = lookup(KEY_ID_ENV)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| KalshiError::Config(format!("{KEY_ID_ENV} is not set")))?;
        let path = lookup(PRIVATE_KEY_PATH_ENV)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| KalshiError::Config(format!("{PRIVATE_KEY_PATH_ENV} is not set")))?;
        Self::from_pem_file(key_id, path)
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn signer(&self) -> &RsaPssSigner {
        &self.signer
    }
}
