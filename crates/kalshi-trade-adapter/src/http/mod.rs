/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: Signed HTTP requests and raw JSON responses
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod communications;
pub mod error;
pub mod market;
pub mod portfolio;
pub mod public;
pub mod query;
pub mod signature;

pub use error::{KalshiError, Result};
pub use query::QueryParams;
pub use signature::{RequestSigner, SignedHeaders};

pub use client::{ClientConfig, DEMO_BASE_URL, KalshiClient, PRODUCTION_BASE_URL};
