//! Layout descriptors and the pure zone-rect computation.

mod calculation;
mod types;

pub use calculation::{compute_zones, LayoutRequest};
pub use types::{GridLayoutInfo, LayoutKind, C_MULTIPLIER};
