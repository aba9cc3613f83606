//! Runtime configuration sharing.
//!
//! The verifier itself only ever sees an immutable
//! [`VerificationConfig`]; this module provides the store that lets a
//! running process swap that value as a whole (e.g. to rotate secrets).

mod config_store;

pub use config_store::{ConfigStore, ConfigWatcher};

use striped_sdk::VerificationConfig;

/// Store holding the active verification snapshot.
pub type VerificationStore = ConfigStore<VerificationConfig>;
