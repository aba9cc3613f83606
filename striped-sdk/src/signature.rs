//! `Stripe-Signature` header parsing and the HMAC-SHA256 signing scheme.
//!
//! The wire format for the header is:
//!
//! ```text
//! Stripe-Signature: t={unix_timestamp},v1={hex_digest}[,v1={hex_digest}...][,v0={hex_digest}]
//! ```
//!
//! Every `v1` digest is `HMAC-SHA256("{timestamp}.{raw_body}", secret)`.
//! The sender emits one `v1` entry per active secret while a secret is being
//! rolled, and a fake `v0` entry for test-mode events. Only `v1` is ever
//! accepted; honouring any other scheme would open a downgrade attack.

use ring::hmac;
use smallvec::SmallVec;
use subtle::{Choice, ConstantTimeEq};

/// Header name carrying the delivery signature. HTTP header names are
/// case-insensitive; `http::HeaderMap` lookups normalise this for us.
pub const SIGNATURE_HEADER: &str = "Stripe-Signature";

/// The only signature scheme accepted for verification.
pub const SUPPORTED_SCHEME: &str = "v1";

/// Key of the timestamp element.
const TIMESTAMP_KEY: &str = "t";

/// Errors produced by header parsing and signature verification.
///
/// Callers are expected to log and count each variant separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// Header missing, structurally malformed, or without a usable `v1` entry.
    #[error("invalid Stripe-Signature header")]
    InvalidHeader,
    /// Timestamp older than the freshness window.
    #[error("webhook too old")]
    TooOld,
    /// Timestamp further in the future than the configured tolerance.
    #[error("webhook timestamp is in the future")]
    TimestampInFuture,
    /// No candidate digest matched any configured secret.
    #[error("invalid signature")]
    InvalidSignature,
}

impl SignatureError {
    /// Whether this rejection may indicate a forged or replayed delivery
    /// rather than a sender or proxy misconfiguration.
    pub fn is_security_incident(&self) -> bool {
        !matches!(self, SignatureError::InvalidHeader)
    }

    /// Stable, machine-friendly name for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            SignatureError::InvalidHeader => "invalid_header",
            SignatureError::TooOld => "too_old",
            SignatureError::TimestampInFuture => "timestamp_in_future",
            SignatureError::InvalidSignature => "invalid_signature",
        }
    }
}

// ---------------------------------------------------------------------------
// SignatureHeader — parsed header
// ---------------------------------------------------------------------------

/// Parsed `Stripe-Signature` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeader {
    /// Seconds since the epoch at which the sender claims to have signed.
    pub timestamp: i64,
    /// Raw `v1` digests, in header order. Never empty.
    signatures: SmallVec<[Box<[u8]>; 2]>,
}

impl SignatureHeader {
    /// Parse a raw header value. A missing header should be passed as `""`.
    ///
    /// Structural problems (empty header, an element without exactly one
    /// `=`, an unparsable or absent `t`) reject the whole header. Unknown
    /// keys and `v1` values that are not valid hex are skipped. If no `v1`
    /// digest survives, the header is rejected.
    pub fn parse(value: &str) -> Result<Self, SignatureError> {
        if value.is_empty() {
            return Err(SignatureError::InvalidHeader);
        }

        let mut timestamp = None;
        let mut signatures = SmallVec::new();

        for element in value.split(',') {
            let mut parts = element.split('=');
            let (Some(key), Some(val), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(SignatureError::InvalidHeader);
            };

            match key {
                TIMESTAMP_KEY => {
                    let parsed: i64 = val.parse().map_err(|_| SignatureError::InvalidHeader)?;
                    timestamp = Some(parsed);
                }
                SUPPORTED_SCHEME => {
                    // Malformed auxiliary entries are tolerated.
                    if let Ok(digest) = hex::decode(val) {
                        signatures.push(digest.into_boxed_slice());
                    }
                }
                _ => continue,
            }
        }

        let timestamp = timestamp.ok_or(SignatureError::InvalidHeader)?;
        if signatures.is_empty() {
            return Err(SignatureError::InvalidHeader);
        }

        Ok(Self {
            timestamp,
            signatures,
        })
    }

    /// Raw `v1` digests, in header order. Never empty.
    pub fn signatures(&self) -> &[Box<[u8]>] {
        &self.signatures
    }

    /// Format this header back into its wire form.
    pub fn to_header(&self) -> String {
        format_signature_header(self.timestamp, self.signatures.iter().map(|s| &**s))
    }
}

impl std::str::FromStr for SignatureHeader {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ---------------------------------------------------------------------------
// Signing
// ---------------------------------------------------------------------------

/// Compute `HMAC-SHA256("{timestamp}.{body}", key)` without copying the body.
pub fn signed_payload_digest(key: &hmac::Key, timestamp: i64, body: &[u8]) -> hmac::Tag {
    let mut ctx = hmac::Context::with_key(key);
    ctx.update(timestamp.to_string().as_bytes());
    ctx.update(b".");
    ctx.update(body);
    ctx.sign()
}

/// Sign `body` at `timestamp` with a raw secret, returning the digest bytes.
pub fn sign_payload(secret: &[u8], timestamp: i64, body: &[u8]) -> Box<[u8]> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, secret);
    signed_payload_digest(&key, timestamp, body)
        .as_ref()
        .to_owned()
        .into_boxed_slice()
}

/// Format a `t={timestamp},v1={hex}...` header value from its parts.
pub fn format_signature_header<'a>(
    timestamp: i64,
    signatures: impl IntoIterator<Item = &'a [u8]>,
) -> String {
    let mut header = format!("{TIMESTAMP_KEY}={timestamp}");
    for signature in signatures {
        header.push(',');
        header.push_str(SUPPORTED_SCHEME);
        header.push('=');
        header.push_str(&hex::encode(signature));
    }
    header
}

/// Sign `body` with every secret and produce a complete header value, the
/// way the sender does while a secret is being rolled.
pub fn sign_header(secrets: &[&[u8]], timestamp: i64, body: &[u8]) -> String {
    let digests: Vec<Box<[u8]>> = secrets
        .iter()
        .map(|secret| sign_payload(secret, timestamp, body))
        .collect();
    format_signature_header(timestamp, digests.iter().map(|d| &**d))
}

// ---------------------------------------------------------------------------
// Constant-time comparison and clock
// ---------------------------------------------------------------------------

/// Compare two byte strings without short-circuiting on the first
/// differing byte.
///
/// Inputs of different length compare unequal; lengths are not secret.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    ct_eq(a, b).into()
}

/// [`constant_time_eq`] returning a [`Choice`] so results can be folded
/// together without branching.
pub(crate) fn ct_eq(a: &[u8], b: &[u8]) -> Choice {
    a.ct_eq(b)
}

/// Current time in seconds since the epoch.
pub fn unix_now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST_A: &str = "5257a869e7ecebeda32affa62cdca3fa51cad7e77a0e56ff536d0ce8e108d8bd";
    const DIGEST_B: &str = "6ffbb59b2300aae63f272406069a9788598b792a944a07aba816edb039989a39";

    #[test]
    fn test_parse_header_with_test_mode_scheme() {
        let header = format!("t=1492774577,v1={DIGEST_A},v0={DIGEST_B}");
        let parsed = SignatureHeader::parse(&header).unwrap();
        assert_eq!(parsed.timestamp, 1492774577);
        assert_eq!(parsed.signatures.len(), 1);
        assert_eq!(&*parsed.signatures[0], hex::decode(DIGEST_A).unwrap());
    }

    #[test]
    fn test_parse_keeps_every_v1_in_order() {
        let header = format!("v1={DIGEST_B},t=10,v1={DIGEST_A}");
        let parsed: SignatureHeader = header.parse().unwrap();
        assert_eq!(parsed.timestamp, 10);
        assert_eq!(parsed.signatures.len(), 2);
        assert_eq!(&*parsed.signatures[0], hex::decode(DIGEST_B).unwrap());
        assert_eq!(&*parsed.signatures[1], hex::decode(DIGEST_A).unwrap());
    }

    #[test]
    fn test_parse_duplicate_timestamp_keeps_last() {
        let header = format!("t=1,t=2,v1={DIGEST_A}");
        let parsed = SignatureHeader::parse(&header).unwrap();
        assert_eq!(parsed.timestamp, 2);
        assert_eq!(parsed.signatures().len(), 1);
        assert_eq!(&*parsed.signatures()[0], hex::decode(DIGEST_A).unwrap());
    }

    #[test]
    fn test_parse_empty_header() {
        assert_eq!(SignatureHeader::parse(""), Err(SignatureError::InvalidHeader));
    }

    #[test]
    fn test_parse_element_without_separator() {
        let header = format!("t=10,v1={DIGEST_A},garbage");
        assert_eq!(
            SignatureHeader::parse(&header),
            Err(SignatureError::InvalidHeader)
        );
        assert_eq!(
            SignatureHeader::parse("garbage"),
            Err(SignatureError::InvalidHeader)
        );
    }

    #[test]
    fn test_parse_element_with_extra_separator() {
        let header = format!("t=10,v1={DIGEST_A}=");
        assert_eq!(
            SignatureHeader::parse(&header),
            Err(SignatureError::InvalidHeader)
        );
    }

    #[test]
    fn test_parse_bad_timestamp_is_fatal() {
        for header in [
            format!("t=abc,v1={DIGEST_A}"),
            format!("t=,v1={DIGEST_A}"),
            format!("t=1.5,v1={DIGEST_A}"),
        ] {
            assert_eq!(
                SignatureHeader::parse(&header),
                Err(SignatureError::InvalidHeader),
                "{header}"
            );
        }
    }

    #[test]
    fn test_parse_missing_timestamp() {
        let header = format!("v1={DIGEST_A}");
        assert_eq!(
            SignatureHeader::parse(&header),
            Err(SignatureError::InvalidHeader)
        );
    }

    #[test]
    fn test_parse_only_v0_is_rejected() {
        let header = format!("v0={DIGEST_B},t=10");
        assert_eq!(
            SignatureHeader::parse(&header),
            Err(SignatureError::InvalidHeader)
        );
    }

    #[test]
    fn test_parse_skips_undecodable_v1() {
        let header = format!("t=10,v1=not-hex,v1={DIGEST_A},v1=abc");
        let parsed = SignatureHeader::parse(&header).unwrap();
        assert_eq!(parsed.signatures.len(), 1);

        assert_eq!(
            SignatureHeader::parse("t=10,v1=zz"),
            Err(SignatureError::InvalidHeader)
        );
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let header = format!("t=10,v2=whatever,scheme=x,v1={DIGEST_A}");
        let parsed = SignatureHeader::parse(&header).unwrap();
        assert_eq!(parsed.signatures.len(), 1);
    }

    #[test]
    fn test_header_round_trips_through_formatter() {
        let header = sign_header(&[b"whsec_a".as_slice(), b"whsec_b".as_slice()], 1700000000, b"{}");
        let parsed = SignatureHeader::parse(&header).unwrap();
        assert_eq!(parsed.timestamp, 1700000000);
        assert_eq!(parsed.signatures.len(), 2);
        assert_eq!(parsed.to_header(), header);
    }

    #[test]
    fn test_sign_payload_known_vector() {
        let body = br#"{"id":"evt_1"}"#;
        let direct = hmac::sign(
            &hmac::Key::new(hmac::HMAC_SHA256, b"whsec_test"),
            br#"1492774577.{"id":"evt_1"}"#,
        );
        assert_eq!(
            sign_payload(b"whsec_test", 1492774577, body).as_ref(),
            direct.as_ref()
        );
        assert_eq!(direct.as_ref().len(), 32);
    }

    #[test]
    fn test_constant_time_eq() {
        let a = hex::decode(DIGEST_A).unwrap();
        let mut first = a.clone();
        first[0] ^= 1;
        let mut last = a.clone();
        last[31] ^= 0x80;

        assert!(constant_time_eq(&a, &a.clone()));
        assert!(!constant_time_eq(&a, &first));
        assert!(!constant_time_eq(&a, &last));
        assert!(!constant_time_eq(&a, &a[..31]));
        assert!(constant_time_eq(b"", b""));
    }

    #[test]
    fn test_error_classification() {
        assert!(!SignatureError::InvalidHeader.is_security_incident());
        assert!(SignatureError::TooOld.is_security_incident());
        assert!(SignatureError::InvalidSignature.is_security_incident());
        assert_eq!(SignatureError::TooOld.kind(), "too_old");
    }
}
