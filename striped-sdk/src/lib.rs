#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

//! Verification of Stripe webhook deliveries.
//!
//! A delivery is accepted only if its `Stripe-Signature` header carries a
//! `v1` HMAC-SHA256 digest of `"{timestamp}.{raw_body}"` under one of the
//! configured signing secrets, and the timestamp is inside the freshness
//! window. See [`webhook::verify_webhook`] for the entry point.

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
pub mod signature;
pub mod webhook;

pub use config::{SigningSecret, VerificationConfig};
pub use signature::{SignatureError, SignatureHeader};
pub use webhook::{VerifiedEvent, verify_webhook};
