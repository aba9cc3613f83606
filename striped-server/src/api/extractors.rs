//! Custom Axum extractors for webhook authentication.
//!
//! Provides `VerifiedWebhook`, which verifies the `Stripe-Signature` header
//! against the raw request body before anything decodes it.
//!
//! All cryptographic operations are delegated to [`striped_sdk::webhook`].

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use striped_sdk::signature::{SIGNATURE_HEADER, SignatureError};
use striped_sdk::webhook::{VerifiedEvent, verify_webhook};

use crate::state::AppState;

/// An Axum extractor that buffers the raw body and verifies it against the
/// `Stripe-Signature` header using the current verification snapshot.
///
/// # Header format
///
/// ```text
/// Stripe-Signature: t={unix_timestamp},v1={hex_hmac_sha256}[,v1=...]
/// ```
pub struct VerifiedWebhook(pub VerifiedEvent);

/// Errors that can occur during webhook verification.
///
/// Responses name the failure class only; digests and secrets never leave
/// the process.
#[derive(Debug, thiserror::Error)]
pub enum VerifiedWebhookError {
    #[error("failed to read request body")]
    BodyReadError,
    #[error(transparent)]
    Signature(#[from] SignatureError),
}

impl IntoResponse for VerifiedWebhookError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            VerifiedWebhookError::BodyReadError => {
                (StatusCode::BAD_REQUEST, "failed to read request body")
            }
            VerifiedWebhookError::Signature(SignatureError::InvalidHeader) => (
                StatusCode::BAD_REQUEST,
                "invalid Stripe-Signature header format",
            ),
            VerifiedWebhookError::Signature(SignatureError::TooOld) => {
                (StatusCode::UNAUTHORIZED, "signature expired")
            }
            VerifiedWebhookError::Signature(SignatureError::TimestampInFuture) => {
                (StatusCode::UNAUTHORIZED, "signature timestamp in the future")
            }
            VerifiedWebhookError::Signature(SignatureError::InvalidSignature) => {
                (StatusCode::UNAUTHORIZED, "signature verification failed")
            }
        };
        (status, message).into_response()
    }
}

impl FromRequest<AppState> for VerifiedWebhook {
    type Rejection = VerifiedWebhookError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        // A missing header and an unreadable one are both an empty header to
        // the parser.
        let header_value = req
            .headers()
            .get(SIGNATURE_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        let body = axum::body::to_bytes(req.into_body(), state.body_limit)
            .await
            .map_err(|_| VerifiedWebhookError::BodyReadError)?;

        let config = state.verification.snapshot().await;
        match verify_webhook(&header_value, body, &config) {
            Ok(verified) => Ok(VerifiedWebhook(verified)),
            Err(e) => {
                if e.is_security_incident() {
                    tracing::warn!(reason = e.kind(), "Rejected webhook delivery");
                } else {
                    tracing::info!(reason = e.kind(), "Rejected malformed webhook delivery");
                }
                Err(e.into())
            }
        }
    }
}
