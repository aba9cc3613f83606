//! Configuration module for striped-server.
//!
//! Handles loading configuration from TOML files, CLI arguments,
//! and environment variables.

pub mod file;

use crate::config::file::FileConfig;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use striped_sdk::config::{VerificationConfig, VerificationConfigError};
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("invalid webhook configuration: {0}")]
    Verification(#[from] VerificationConfigError),
}

/// Server settings that only take effect at startup.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub listen: SocketAddr,
    pub body_limit: usize,
}

/// Loaded configuration result containing all parts.
#[derive(Debug)]
pub struct LoadedConfig {
    pub server: ServerSettings,
    pub verification: VerificationConfig,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    listen_override: Option<SocketAddr>,
    extra_secret: Option<String>,
}

impl ConfigLoader {
    /// Create a new config loader.
    ///
    /// `extra_secret` (usually from `STRIPE_WEBHOOK_SECRET`) is appended to
    /// the secrets listed in the file.
    pub fn new(
        config_path: impl AsRef<Path>,
        listen_override: Option<SocketAddr>,
        extra_secret: Option<String>,
    ) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            listen_override,
            extra_secret,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply CLI and environment overrides
    /// 3. Validate the configuration
    /// 4. Build the verification snapshot
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        let mut file_config: FileConfig = toml::from_str(&config_content)?;

        if let Some(listen) = self.listen_override {
            file_config.server.listen = listen;
        }
        if let Some(secret) = &self.extra_secret
            && !file_config.webhook.secrets.contains(secret)
        {
            file_config.webhook.secrets.push(secret.clone());
        }

        self.validate(&file_config)?;
        self.build_loaded_config(file_config)
    }

    /// Reload the configuration (used during SIGHUP).
    pub fn reload(&self) -> Result<LoadedConfig, ConfigError> {
        self.load()
    }

    fn validate(&self, config: &FileConfig) -> Result<(), ConfigError> {
        if config.webhook.secrets.is_empty() {
            return Err(ConfigError::ValidationError(
                "no webhook signing secret configured (set [webhook].secrets or STRIPE_WEBHOOK_SECRET)"
                    .to_owned(),
            ));
        }
        for secret in &config.webhook.secrets {
            if !secret.starts_with("whsec_") {
                tracing::warn!("A webhook secret does not start with whsec_; is it the right key?");
            }
        }
        if config.server.body_limit == 0 {
            return Err(ConfigError::ValidationError(
                "server.body_limit must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }

    fn build_loaded_config(&self, file_config: FileConfig) -> Result<LoadedConfig, ConfigError> {
        let webhook = file_config.webhook;
        let mut verification = VerificationConfig::new(webhook.secrets)?
            .with_max_age(Duration::from_secs(webhook.max_age_secs))?;
        if let Some(tolerance) = webhook.future_tolerance_secs {
            verification = verification.with_future_tolerance(Duration::from_secs(tolerance));
        }

        Ok(LoadedConfig {
            server: ServerSettings {
                listen: file_config.server.listen,
                body_limit: file_config.server.body_limit,
            },
            verification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_with_overrides() {
        let file = write_config(
            r#"
[server]
listen = "127.0.0.1:3000"

[webhook]
secrets = ["whsec_old"]
max_age_secs = 120
future_tolerance_secs = 5
"#,
        );
        let listen: SocketAddr = "127.0.0.1:4000".parse().unwrap();
        let loader = ConfigLoader::new(file.path(), Some(listen), Some("whsec_new".into()));
        let loaded = loader.load().unwrap();

        assert_eq!(loaded.server.listen, listen);
        assert_eq!(loaded.verification.secrets().len(), 2);
        assert_eq!(loaded.verification.max_age(), Duration::from_secs(120));
        assert_eq!(
            loaded.verification.future_tolerance(),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_env_secret_alone_is_enough() {
        let file = write_config("[webhook]\n");
        let loader = ConfigLoader::new(file.path(), None, Some("whsec_env".into()));
        let loaded = loader.load().unwrap();
        assert_eq!(loaded.verification.secrets().len(), 1);
    }

    #[test]
    fn test_env_secret_is_not_duplicated() {
        let file = write_config("[webhook]\nsecrets = [\"whsec_a\"]\n");
        let loader = ConfigLoader::new(file.path(), None, Some("whsec_a".into()));
        assert_eq!(loader.load().unwrap().verification.secrets().len(), 1);
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let file = write_config("[webhook]\n");
        let loader = ConfigLoader::new(file.path(), None, None);
        assert!(matches!(
            loader.load(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let file = write_config("[webhook]\nsecrets = [\"whsec_a\", \"\"]\n");
        let loader = ConfigLoader::new(file.path(), None, None);
        assert!(matches!(
            loader.load(),
            Err(ConfigError::Verification(VerificationConfigError::EmptySecret(1)))
        ));
    }

    #[test]
    fn test_zero_max_age_is_rejected() {
        let file = write_config("[webhook]\nsecrets = [\"whsec_a\"]\nmax_age_secs = 0\n");
        let loader = ConfigLoader::new(file.path(), None, None);
        assert!(matches!(
            loader.load(),
            Err(ConfigError::Verification(VerificationConfigError::ZeroMaxAge))
        ));
    }

    #[test]
    fn test_missing_file() {
        let loader = ConfigLoader::new("/nonexistent/striped-config.toml", None, None);
        assert!(matches!(loader.load(), Err(ConfigError::IoError(_))));
    }
}
