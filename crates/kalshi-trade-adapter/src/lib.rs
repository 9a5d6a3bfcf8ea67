/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Kalshi adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod time;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, RsaPssSigner};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    KalshiClient,
    KalshiError,
    QueryParams,
    RequestSigner,
    Result,
    SignedHeaders,
};

pub use time::{
    PeriodInterval,
    current_time_millis,
    current_time_seconds,
    period_interval,
    seconds_since_epoch,
};

pub use reqwest::Method;

// Re-export all types
pub use types::*;
