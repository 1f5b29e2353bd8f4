//! Initial store setup from the fixed seed data set.

mod properties;

pub use properties::seed_store;
