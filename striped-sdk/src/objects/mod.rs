pub mod error;
pub mod event;
pub mod event_types;

pub use error::{ErrorResponse, PlatformError};
pub use event::{Event, EventData, EventRequest};
