//! Event processors.
//!
//! - `EventRouter`: Receives `ReceivedEvent`, dispatches to `EventHandler`s

pub mod event_router;
pub mod handler;

pub use event_router::EventRouter;
pub use handler::{EventHandler, HandlerError, LoggingHandler};
