//! Verification configuration.

use std::time::Duration;

use super::SigningSecret;

/// Default freshness window for deliveries.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(5 * 60);

/// Errors produced when building a [`VerificationConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationConfigError {
    #[error("at least one signing secret is required")]
    NoSecrets,
    #[error("signing secret #{0} is empty")]
    EmptySecret(usize),
    #[error("max age must be greater than zero")]
    ZeroMaxAge,
}

/// Everything the verifier reads besides the delivery itself.
///
/// Built once and treated as read-only afterwards. To rotate secrets at
/// runtime, build a new value and swap it in as a whole.
#[derive(Debug, Clone)]
pub struct VerificationConfig {
    secrets: Vec<SigningSecret>,
    max_age: Duration,
    future_tolerance: Option<Duration>,
}

impl VerificationConfig {
    /// Create a config accepting signatures under any of `secrets`, with the
    /// default freshness window and no bound on future timestamps.
    pub fn new(
        secrets: impl IntoIterator<Item = impl Into<SigningSecret>>,
    ) -> Result<Self, VerificationConfigError> {
        let secrets: Vec<SigningSecret> = secrets.into_iter().map(Into::into).collect();
        if secrets.is_empty() {
            return Err(VerificationConfigError::NoSecrets);
        }
        if let Some(index) = secrets.iter().position(SigningSecret::is_empty) {
            return Err(VerificationConfigError::EmptySecret(index));
        }
        Ok(Self {
            secrets,
            max_age: DEFAULT_MAX_AGE,
            future_tolerance: None,
        })
    }

    /// Set the maximum accepted delivery age.
    pub fn with_max_age(mut self, max_age: Duration) -> Result<Self, VerificationConfigError> {
        if max_age.is_zero() {
            return Err(VerificationConfigError::ZeroMaxAge);
        }
        self.max_age = max_age;
        Ok(self)
    }

    /// Reject deliveries stamped more than `tolerance` in the future.
    pub fn with_future_tolerance(mut self, tolerance: Duration) -> Self {
        self.future_tolerance = Some(tolerance);
        self
    }

    /// Configured secrets, in the order they were given.
    pub fn secrets(&self) -> &[SigningSecret] {
        &self.secrets
    }

    /// Oldest accepted delivery age.
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// How far in the future a timestamp may lie, if bounded at all.
    pub fn future_tolerance(&self) -> Option<Duration> {
        self.future_tolerance
    }

    /// Max age in whole seconds, saturated to `i64`.
    pub(crate) fn max_age_secs(&self) -> i64 {
        duration_secs(self.max_age)
    }

    pub(crate) fn future_tolerance_secs(&self) -> Option<i64> {
        self.future_tolerance.map(duration_secs)
    }
}

fn duration_secs(duration: Duration) -> i64 {
    i64::try_from(duration.as_secs()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VerificationConfig::new(["whsec_a"]).unwrap();
        assert_eq!(config.secrets().len(), 1);
        assert_eq!(config.max_age(), Duration::from_secs(300));
        assert_eq!(config.future_tolerance(), None);
    }

    #[test]
    fn test_rejects_missing_or_empty_secrets() {
        let none: [&str; 0] = [];
        assert_eq!(
            VerificationConfig::new(none).unwrap_err(),
            VerificationConfigError::NoSecrets
        );
        assert_eq!(
            VerificationConfig::new(["whsec_a", ""]).unwrap_err(),
            VerificationConfigError::EmptySecret(1)
        );
    }

    #[test]
    fn test_rejects_zero_max_age() {
        let result = VerificationConfig::new(["whsec_a"])
            .unwrap()
            .with_max_age(Duration::ZERO);
        assert_eq!(result.unwrap_err(), VerificationConfigError::ZeroMaxAge);
    }

    #[test]
    fn test_huge_durations_saturate() {
        let config = VerificationConfig::new(["whsec_a"])
            .unwrap()
            .with_max_age(Duration::from_secs(u64::MAX))
            .unwrap();
        assert_eq!(config.max_age_secs(), i64::MAX);
    }
}
