//! Error body returned by the platform API on failed requests.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Envelope of an API error response: `{"error": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: PlatformError,
}

/// Structured API error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformError {
    /// One of `api_error`, `card_error`, `idempotency_error`,
    /// `invalid_request_error`, ...
    #[serde(default, rename = "type")]
    pub error_type: CompactString,
    /// Request parameter the error relates to.
    #[serde(default)]
    pub param: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<CompactString>,
    #[serde(default)]
    pub doc_url: Option<String>,
    /// Failed charge, for card errors.
    #[serde(default)]
    pub charge: Option<CompactString>,
    /// Card issuer's reason for declining, if provided.
    #[serde(default)]
    pub decline_code: Option<CompactString>,
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.code.as_deref().unwrap_or(&self.error_type),
            self.message
        )
    }
}
