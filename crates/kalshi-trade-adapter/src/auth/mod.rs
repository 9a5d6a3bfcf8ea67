/*
[INPUT]:  API key id and RSA private key material
[OUTPUT]: Credentials and RSA-PSS signatures
[POS]:    Auth layer - handles Kalshi API key authentication
[UPDATE]: When auth flow or signature methods change
*/

pub mod credentials;
pub mod signer;

pub use credentials::Credentials;
pub use signer::RsaPssSigner;
