//! HTTP API handlers.
//!
//! # Endpoints
//!
//! - `POST /webhooks/stripe` – receive a signed webhook delivery

use axum::{Router, routing::post};

use crate::state::AppState;

pub mod extractors;
mod webhook;

/// Build the webhook API router.
pub fn router() -> Router<AppState> {
    Router::new().route("/webhooks/stripe", post(webhook::receive_webhook))
}
