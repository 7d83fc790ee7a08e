//! The ZoneSet aggregate: zones, occupancy, queries, and window moves.

mod operations;
mod queries;
mod types;

pub use types::*;
