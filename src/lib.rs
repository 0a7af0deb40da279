pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod notify;

pub use crate::config::{EmojiConfig, NotifyConfig};
pub use crate::core::{
    Category, CategoryClassifier, ChangeStatus, CourseChangeSet, FileAggregator, FileChangeEvent,
};
pub use crate::error::{NotifyError, Result};
pub use crate::notify::{
    create_diff_messages, format_event_datetime, DiffMessageBuilder, MessageRenderer,
    NotificationMessage,
};
