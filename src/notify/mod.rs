//! Notification rendering module
//!
//! Turns categorized course changes into push-notification messages: title,
//! plain-text body and an optional deep link.

pub mod message;
pub mod datetime;
pub mod renderer;
pub mod builder;

// Re-export the main types for easier use
pub use message::NotificationMessage;
pub use datetime::format_event_datetime;
pub use renderer::MessageRenderer;
pub use builder::{create_diff_messages, DiffMessageBuilder};
