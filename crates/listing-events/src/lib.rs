//! Shared data types for the property ledger.
//!
//! This crate contains pure data structures with no store or scoring logic.
//! It is a dependency for all other crates in the workspace.

pub mod event;
pub mod property;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export event types
pub use event::{
    generate_event_id, LogCategory, LogEvent, MetadataValue, ParseCategoryError,
    DEFAULT_DESCRIPTION,
};

// Re-export property types
pub use property::{Coordinates, ParseModeError, Property, PropertyMode, Spec};
