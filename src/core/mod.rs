//! Core data model
//!
//! Contains course change records, categories, and per-course aggregation

pub mod events;
pub mod category;
pub mod aggregator;

// Re-export main types
pub use events::{ChangeStatus, CourseChangeSet, FileChangeEvent};
pub use category::{Category, CategoryClassifier};
pub use aggregator::FileAggregator;
