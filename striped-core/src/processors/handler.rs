//! Event handler trait and the default logging handler.

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

use crate::events::ReceivedEvent;

/// Errors a handler may report. They are logged by the router; the
/// delivery has already been acknowledged, so nothing is retried.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The event was understood but could not be acted upon.
    #[error("event rejected: {0}")]
    Rejected(String),

    /// Any other failure inside the handler.
    #[error(transparent)]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Something that reacts to verified events.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &ReceivedEvent) -> Result<(), HandlerError>;
}

/// Handler that only logs the events it sees.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

#[async_trait]
impl EventHandler for LoggingHandler {
    async fn handle(&self, event: &ReceivedEvent) -> Result<(), HandlerError> {
        info!(
            delivery_id = %event.delivery_id,
            event_id = %event.event.id,
            event_type = %event.event.event_type,
            livemode = event.event.livemode,
            "Received event"
        );
        Ok(())
    }
}
