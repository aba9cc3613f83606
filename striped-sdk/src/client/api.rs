//! Request helper for the platform REST API.
//!
//! Every request carries the secret key as a bearer token, a random
//! idempotency key and the pinned API version. Request bodies are
//! URL-encoded forms; the API does not accept JSON.

use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::ClientError;
use crate::objects::ErrorResponse;

/// Root URL of the live API.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// API version sent with every request unless overridden.
pub const DEFAULT_API_VERSION: &str = "2019-11-05";

/// Header set to `true` on responses that should be retried.
pub const SHOULD_RETRY_HEADER: &str = "Stripe-Should-Retry";

/// Header carrying the per-request idempotency key.
pub const IDEMPOTENCY_KEY_HEADER: &str = "Idempotency-Key";

/// Header pinning the API version.
pub const VERSION_HEADER: &str = "Stripe-Version";

/// Longest total time spent retrying a single request.
pub const DEFAULT_MAX_RETRY: Duration = Duration::from_secs(30);

/// Pause between retries.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(2);

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Typed HTTP client for the platform API.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    secret_key: String,
    api_version: String,
    retry_interval: Duration,
    max_retry: Duration,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("secret_key", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("retry_interval", &self.retry_interval)
            .field("max_retry", &self.max_retry)
            .finish()
    }
}

impl ApiClient {
    /// Create a new `ApiClient`.
    ///
    /// * `base_url` – root URL of the API (e.g. [`DEFAULT_API_BASE`]).
    /// * `secret_key` – the account secret key (`sk_...`).
    ///
    /// Fails if the underlying HTTP client cannot be built.
    pub fn new(base_url: Url, secret_key: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            http,
            base_url,
            secret_key: secret_key.into(),
            api_version: DEFAULT_API_VERSION.to_owned(),
            retry_interval: DEFAULT_RETRY_INTERVAL,
            max_retry: DEFAULT_MAX_RETRY,
        })
    }

    /// Create a client for the live API at [`DEFAULT_API_BASE`].
    pub fn live(secret_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(Url::parse(DEFAULT_API_BASE)?, secret_key)
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http = client;
        self
    }

    /// Pin a different API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Configure how often and for how long retry-requested responses are
    /// retried.
    pub fn with_retry(mut self, interval: Duration, max_total: Duration) -> Self {
        self.retry_interval = interval;
        self.max_retry = max_total;
        self
    }

    /// Root URL that relative request paths are appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET {path}`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::GET, path, None).await
    }

    /// `POST {path}` with a form body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        self.request(Method::POST, path, Some(form)).await
    }

    /// `DELETE {path}`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::DELETE, path, None).await
    }

    /// Send a request and decode the JSON response into `T`.
    ///
    /// `path` is appended to the base URL, keeping any path prefix the base
    /// carries, unless it is already an absolute `http(s)://` URL.
    ///
    /// Responses with `Stripe-Should-Retry: true` are re-sent, with the same
    /// idempotency key, every `retry_interval` until `max_retry` has passed
    /// since the first attempt; then [`ClientError::RetryExhausted`] is
    /// returned. A status of 400 or above yields [`ClientError::Api`] with
    /// the decoded error body.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Option<&[(&str, &str)]>,
    ) -> Result<T, ClientError> {
        let start = Instant::now();
        let url = self.resolve(path)?;
        let body = form.map(encode_form);
        let idempotency_key = idempotency_key();

        loop {
            debug!(method = %method, url = %url, "Sending API request");

            let mut builder = self
                .http
                .request(method.clone(), url.clone())
                .bearer_auth(&self.secret_key)
                .header(IDEMPOTENCY_KEY_HEADER, &idempotency_key)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .header(VERSION_HEADER, &self.api_version)
                .header(
                    USER_AGENT,
                    concat!("striped-sdk/", env!("CARGO_PKG_VERSION")),
                );
            if let Some(body) = &body {
                builder = builder.body(body.clone());
            }

            let resp = builder.send().await?;

            if should_retry(&resp) {
                let elapsed = start.elapsed();
                if elapsed > self.max_retry {
                    warn!(method = %method, url = %url, elapsed = ?elapsed, "Giving up on API request");
                    return Err(ClientError::RetryExhausted {
                        elapsed,
                        limit: self.max_retry,
                    });
                }
                debug!(
                    method = %method,
                    url = %url,
                    status = %resp.status(),
                    "API asked for a retry"
                );
                tokio::time::sleep(self.retry_interval).await;
                continue;
            }

            return parse_response(resp, method, url).await;
        }
    }

    fn resolve(&self, path: &str) -> Result<Url, ClientError> {
        if path.starts_with("https://") || path.starts_with("http://") {
            return Ok(Url::parse(path)?);
        }
        let base = self.base_url.as_str().trim_end_matches('/');
        let url = if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };
        Ok(Url::parse(&url)?)
    }
}

fn should_retry(resp: &Response) -> bool {
    resp.headers()
        .get(SHOULD_RETRY_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

async fn parse_response<T: DeserializeOwned>(
    resp: Response,
    method: Method,
    url: Url,
) -> Result<T, ClientError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;

    if status.as_u16() >= 400 {
        let error = serde_json::from_slice::<ErrorResponse>(&bytes)
            .map(|body| body.error)
            .unwrap_or_default();
        return Err(ClientError::Api {
            method,
            url,
            status,
            error,
        });
    }

    serde_json::from_slice(&bytes).map_err(ClientError::Json)
}

/// URL-encode `key=value` pairs.
fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// A fresh random idempotency key.
fn idempotency_key() -> String {
    let bytes: [u8; 24] = rand::random();
    fast32::base64::RFC4648_NOPAD.encode(&bytes)
}
