//! Routed screens.

pub mod placement;
pub mod search;
