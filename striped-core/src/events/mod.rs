//! Event system for verified deliveries.
//!
//! # Event Flow
//!
//! 1. The HTTP layer verifies a delivery and decodes its `Event`
//! 2. It wraps it in a `ReceivedEvent` and sends it on the channel
//! 3. `EventRouter` dispatches it to the handlers registered for its type
//!
//! Events are not persisted; a delivery lost to a crash is redelivered by
//! the sender.

pub mod channels;
pub mod types;

pub use channels::{
    DEFAULT_CHANNEL_BUFFER, ReceivedEventReceiver, ReceivedEventSender, received_event_channel,
};
pub use types::ReceivedEvent;
