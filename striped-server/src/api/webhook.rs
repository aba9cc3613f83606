//! `POST /webhooks/stripe`

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use striped_core::events::ReceivedEvent;

use super::extractors::VerifiedWebhook;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Ack {
    pub received: bool,
}

/// Errors that can occur after a delivery has been authenticated.
#[derive(Debug)]
pub enum WebhookApiError {
    /// The body is authentic but not a valid event.
    InvalidEvent(serde_json::Error),
    /// The event router is gone (shutting down).
    Unavailable,
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> Response {
        match self {
            WebhookApiError::InvalidEvent(e) => {
                tracing::warn!(error = %e, "Verified webhook body is not a valid event");
                (StatusCode::BAD_REQUEST, "invalid event body").into_response()
            }
            WebhookApiError::Unavailable => {
                tracing::error!("Event router unavailable, rejecting delivery");
                (StatusCode::SERVICE_UNAVAILABLE, "temporarily unavailable").into_response()
            }
        }
    }
}

/// Receive one delivery: verify, decode, queue, acknowledge.
///
/// The sender redelivers anything not answered with a 2xx, so an event is
/// only acknowledged once it is queued.
pub async fn receive_webhook(
    State(state): State<AppState>,
    VerifiedWebhook(verified): VerifiedWebhook,
) -> Result<Json<Ack>, WebhookApiError> {
    let signed_at = verified.timestamp();
    let event = verified
        .into_event()
        .map_err(WebhookApiError::InvalidEvent)?;
    let received = ReceivedEvent::new(event, signed_at);

    tracing::debug!(
        delivery_id = %received.delivery_id,
        event_id = %received.event.id,
        event_type = %received.event_type(),
        "Accepted webhook delivery"
    );

    state
        .events
        .send(received)
        .await
        .map_err(|_| WebhookApiError::Unavailable)?;

    Ok(Json(Ack { received: true }))
}
