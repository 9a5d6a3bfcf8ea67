/*
[INPUT]:  PEM-encoded RSA private key (file or string) and message bytes
[OUTPUT]: RSA-PSS (SHA-256, MGF1-SHA-256, 32-byte salt) signatures
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or key format
*/

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::rsa::KeyPair;
use aws_lc_rs::signature::{self, KeyPair as _, UnparsedPublicKey};

use crate::http::{KalshiError, Result};

const PKCS8_TAG: &str = "PRIVATE KEY";
const PKCS1_TAG: &str = "RSA PRIVATE KEY";
const ENCRYPTED_TAG: &str = "ENCRYPTED PRIVATE KEY";

/// RSA-PSS signer for request authentication
pub struct RsaPssSigner {
    key_pair: KeyPair,
    rng: SystemRandom,
}

impl RsaPssSigner {
    /// Load an unencrypted PKCS#8 or PKCS#1 PEM private key from disk
    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| KalshiError::KeyLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::parse(&content).map_err(|message| KalshiError::KeyLoad {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse an unencrypted PKCS#8 or PKCS#1 PEM private key held in memory
    pub fn from_pem(pem: &str) -> Result<Self> {
        Self::parse(pem).map_err(|message| KalshiError::KeyLoad {
            path: PathBuf::from("<inline>"),
            message,
        })
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        let block = pem::parse(content.trim()).map_err(|e| format!("invalid PEM: {e}"))?;

        let key_pair = match block.tag() {
            PKCS8_TAG => KeyPair::from_pkcs8(block.contents()),
            PKCS1_TAG => KeyPair::from_der(block.contents()),
            ENCRYPTED_TAG => return Err("encrypted private keys are not supported".to_string()),
            other => return Err(format!("PEM block `{other}` is not a private key")),
        }
        .map_err(|e| format!("RSA private key rejected: {e}"))?;

        Ok(Self {
            key_pair,
            rng: SystemRandom::new(),
        })
    }

    /// Sign a message and return the raw signature bytes
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let mut signature = vec![0u8; self.key_pair.public_modulus_len()];
        self.key_pair
            .sign(&signature::RSA_PSS_SHA256, &self.rng, message, &mut signature)
            .map_err(|_| KalshiError::Signature("RSA sign PSS failed".to_string()))?;
        Ok(signature)
    }

    /// DER-encoded RSAPublicKey matching this private key
    pub fn public_key_der(&self) -> &[u8] {
        self.key_pair.public_key().as_ref()
    }

    /// Modulus length in bytes, which is also the signature length
    pub fn modulus_len(&self) -> usize {
        self.key_pair.public_modulus_len()
    }

    /// Verify a signature against a message
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        UnparsedPublicKey::new(&signature::RSA_PSS_2048_8192_SHA256, self.public_key_der())
            .verify(message, signature)
            .is_ok()
    }
}

impl fmt::Debug for RsaPssSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPssSigner")
            .field("modulus_bits", &(self.modulus_len() * 8))
            .finish_non_exhaustive()
    }
}
