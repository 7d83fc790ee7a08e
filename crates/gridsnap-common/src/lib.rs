pub mod errors;
pub mod types;

pub use errors::PlatformError;
pub use types::{Point, Rect, ZoneId};
