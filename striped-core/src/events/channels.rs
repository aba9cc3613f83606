//! Event channel factories and handles.

use super::types::ReceivedEvent;
use tokio::sync::mpsc;

/// Default buffer size for event channels.
///
/// This provides enough buffer to handle bursts while keeping memory bounded.
pub const DEFAULT_CHANNEL_BUFFER: usize = 256;

/// Sender handle for ReceivedEvent events.
pub type ReceivedEventSender = mpsc::Sender<ReceivedEvent>;
/// Receiver handle for ReceivedEvent events.
pub type ReceivedEventReceiver = mpsc::Receiver<ReceivedEvent>;

/// Create a new ReceivedEvent channel.
///
/// Returns a (sender, receiver) pair. Multiple senders can be cloned from
/// the returned sender; the receiver belongs to the `EventRouter`.
pub fn received_event_channel() -> (ReceivedEventSender, ReceivedEventReceiver) {
    mpsc::channel(DEFAULT_CHANNEL_BUFFER)
}
