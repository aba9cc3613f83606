//! Event type definitions for the in-process pipeline.

use striped_sdk::objects::Event;
use uuid::Uuid;

/// A verified and decoded delivery, as handed to the event router.
#[derive(Debug, Clone)]
pub struct ReceivedEvent {
    /// Locally generated id for correlating logs of one delivery.
    pub delivery_id: Uuid,
    /// Timestamp the sender signed the delivery with.
    pub signed_at: i64,
    pub event: Event,
}

impl ReceivedEvent {
    /// Wrap a decoded event with a fresh delivery id.
    pub fn new(event: Event, signed_at: i64) -> Self {
        Self {
            delivery_id: Uuid::now_v7(),
            signed_at,
            event,
        }
    }

    /// The event type name, e.g. `charge.succeeded`.
    pub fn event_type(&self) -> &str {
        &self.event.event_type
    }
}
