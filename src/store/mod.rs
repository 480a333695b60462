//! Client-side state for REST collections.
//!
//! [`ResourceStore`] covers flat collections, [`NestedStore`] a parent
//! collection with embedded children. Both are cheap `Clone` handles over
//! shared state guarded by a `parking_lot::RwLock` that is never held across
//! an `.await`.

pub mod nested;
pub mod resource;
pub mod state;

pub use nested::NestedStore;
pub use resource::ResourceStore;
pub use state::{ListState, ViewPhase};
