//! Webhook signing secret.

use ring::hmac;

/// A webhook signing secret (`whsec_...`).
///
/// The HMAC key is derived once at construction. `Debug` never prints the
/// secret itself.
#[derive(Clone)]
pub struct SigningSecret {
    secret: Box<[u8]>,
    key: hmac::Key,
}

impl SigningSecret {
    /// Create a new SigningSecret from the raw secret bytes.
    pub fn new(secret: impl Into<Box<[u8]>>) -> Self {
        let secret = secret.into();
        let key = hmac::Key::new(hmac::HMAC_SHA256, &secret);
        Self { secret, key }
    }

    /// Get the HMAC-SHA256 key for this secret.
    pub fn key(&self) -> &hmac::Key {
        &self.key
    }

    /// Get the raw secret bytes.
    pub fn secret_bytes(&self) -> &[u8] {
        &self.secret
    }

    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningSecret")
            .field("secret", &"<redacted>")
            .field("len", &self.secret.len())
            .finish()
    }
}

impl From<&str> for SigningSecret {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes())
    }
}

impl From<String> for SigningSecret {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes().into_boxed_slice())
    }
}

impl From<&[u8]> for SigningSecret {
    fn from(value: &[u8]) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let secret = SigningSecret::from("whsec_do_not_print");
        let debug = format!("{secret:?}");
        assert!(!debug.contains("whsec_do_not_print"));
        assert!(debug.contains("<redacted>"));
    }
}
