//! Application state shared across all request handlers.

use striped_core::config::VerificationStore;
use striped_core::events::ReceivedEventSender;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
#[derive(Clone)]
pub struct AppState {
    /// Active verification snapshot (swapped on SIGHUP).
    pub verification: VerificationStore,
    /// Queue towards the event router.
    pub events: ReceivedEventSender,
    /// Largest accepted webhook body, in bytes.
    pub body_limit: usize,
}

impl AppState {
    /// Create a new AppState.
    pub fn new(
        verification: VerificationStore,
        events: ReceivedEventSender,
        body_limit: usize,
    ) -> Self {
        Self {
            verification,
            events,
            body_limit,
        }
    }
}
