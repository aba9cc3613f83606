//! Configuration types for webhook verification.
//!
//! These types represent the validated configuration the verifier reads.
//! Loading it from files or the environment is left to the embedding
//! application (see `striped-server`).

mod secret;
mod verification;

pub use secret::SigningSecret;
pub use verification::{DEFAULT_MAX_AGE, VerificationConfig, VerificationConfigError};
