//! TOML file configuration structures.
//!
//! These structs directly map to the `striped-config.toml` file format.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub webhook: WebhookConfig,
}

/// Server configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The address and port to listen on (e.g., "0.0.0.0:8080").
    #[serde(default = "default_listen_addr")]
    pub listen: SocketAddr,
    /// Largest accepted webhook body, in bytes.
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen_addr(),
            body_limit: default_body_limit(),
        }
    }
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_body_limit() -> usize {
    1024 * 1024
}

/// Webhook verification section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Signing secrets (`whsec_...`). List two while rolling a secret.
    #[serde(default)]
    pub secrets: Vec<String>,
    /// Reject deliveries signed longer ago than this many seconds.
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: u64,
    /// Reject deliveries stamped more than this many seconds in the future.
    /// Unset means no bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub future_tolerance_secs: Option<u64>,
}

fn default_max_age_secs() -> u64 {
    300
}
