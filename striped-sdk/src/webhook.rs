//! Webhook delivery verification.
//!
//! A delivery is verified against the **raw** request body. Decoding the
//! JSON first and re-serialising it would change the bytes and invalidate
//! the signature, so decoding only happens on a [`VerifiedEvent`].

use bytes::Bytes;
use subtle::Choice;

use crate::config::VerificationConfig;
use crate::objects::event::Event;
use crate::signature::{SignatureError, SignatureHeader, ct_eq, signed_payload_digest, unix_now};

/// A delivery body that has been authenticated and found fresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedEvent {
    body: Bytes,
    timestamp: i64,
}

impl VerifiedEvent {
    /// The untouched request body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Timestamp the sender signed the delivery with.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Take ownership of the untouched request body.
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Decode the body into any deserializable type.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Decode the body as an [`Event`].
    pub fn into_event(self) -> Result<Event, serde_json::Error> {
        self.decode()
    }
}

/// Verify an incoming webhook delivery against the current time.
///
/// * `signature_header` – value of the `Stripe-Signature` header, or `""`
///   when the header is absent.
/// * `body` – the raw request body, exactly as received.
/// * `config` – signing secrets and freshness window.
///
/// # Example
///
/// ```ignore
/// use striped_sdk::{VerificationConfig, verify_webhook};
///
/// let config = VerificationConfig::new(["whsec_..."])?;
/// let event = verify_webhook(signature_header, body, &config)?.into_event()?;
/// ```
pub fn verify_webhook(
    signature_header: &str,
    body: impl Into<Bytes>,
    config: &VerificationConfig,
) -> Result<VerifiedEvent, SignatureError> {
    verify_webhook_at(signature_header, body, config, unix_now())
}

/// [`verify_webhook`] with an explicit verification time (seconds since the
/// epoch).
pub fn verify_webhook_at(
    signature_header: &str,
    body: impl Into<Bytes>,
    config: &VerificationConfig,
    now: i64,
) -> Result<VerifiedEvent, SignatureError> {
    let header = SignatureHeader::parse(signature_header)?;
    let body = body.into();
    verify_signature(&body, &header, config, now)?;
    Ok(VerifiedEvent {
        body,
        timestamp: header.timestamp,
    })
}

/// Check freshness and the HMAC of `body` against an already parsed header.
pub fn verify_signature(
    body: &[u8],
    header: &SignatureHeader,
    config: &VerificationConfig,
    now: i64,
) -> Result<(), SignatureError> {
    check_timestamp(header.timestamp, config, now)?;

    // Every candidate is compared against every secret; the grid is walked
    // completely even after a match.
    let mut matched = Choice::from(0);
    for secret in config.secrets() {
        let expected = signed_payload_digest(secret.key(), header.timestamp, body);
        for candidate in header.signatures() {
            matched |= ct_eq(expected.as_ref(), candidate);
        }
    }

    if bool::from(matched) {
        Ok(())
    } else {
        Err(SignatureError::InvalidSignature)
    }
}

/// Check that `timestamp` lies inside the configured freshness window.
pub fn check_timestamp(
    timestamp: i64,
    config: &VerificationConfig,
    now: i64,
) -> Result<(), SignatureError> {
    if now.saturating_sub(timestamp) > config.max_age_secs() {
        return Err(SignatureError::TooOld);
    }
    if let Some(tolerance) = config.future_tolerance_secs()
        && timestamp.saturating_sub(now) > tolerance
    {
        return Err(SignatureError::TimestampInFuture);
    }
    Ok(())
}
