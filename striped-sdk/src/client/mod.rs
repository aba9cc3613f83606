//! HTTP client for the platform REST API.
//!
//! Gated behind the `client` cargo feature so crates that only verify
//! webhooks do not pull in `reqwest`.

mod api;

pub use api::{
    ApiClient, DEFAULT_API_BASE, DEFAULT_API_VERSION, DEFAULT_MAX_RETRY, DEFAULT_RETRY_INTERVAL,
    IDEMPOTENCY_KEY_HEADER, SHOULD_RETRY_HEADER, VERSION_HEADER,
};
pub use reqwest::Method;

use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::objects::PlatformError;

/// Errors produced by the API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a status of 400 or above.
    #[error("code {status} for {method} {url} ({error})")]
    Api {
        method: Method,
        url: Url,
        status: StatusCode,
        error: PlatformError,
    },

    /// The server kept asking for a retry for longer than allowed.
    #[error("retried longer than {limit:?} (elapsed {elapsed:?})")]
    RetryExhausted { elapsed: Duration, limit: Duration },

    /// Response body could not be deserialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}
