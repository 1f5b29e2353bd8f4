//! Core store logic: property registry, append-only log writes, fan-out
//! match requests, and the fixed seed data set.

pub mod actions;
pub mod setup;
pub mod store;

pub use actions::{Channel, QuickAction};
pub use setup::seed_store;
pub use store::{MatchRequest, PropertyStore, StoreError};
