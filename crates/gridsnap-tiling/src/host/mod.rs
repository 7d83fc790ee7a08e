//! Boundary to the host windowing system.

use gridsnap_common::errors::PlatformError;
use gridsnap_common::types::Rect;
use serde::{Deserialize, Serialize};

pub mod noop;

pub use noop::NoopWindowHost;

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Opaque handle to a host window. The core never owns, duplicates, or
/// closes the underlying handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// Opaque handle to a host monitor, consulted only for DPI translation of
/// custom canvas layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonitorId(pub u64);

/// Platform-agnostic port for the window operations the core requires.
pub trait WindowHost: Send + Sync {
    /// Translate a zone rect into the placement rect for `window` within
    /// `parent`, honouring DPI and client-area insets.
    fn compute_client_rect(&self, zone_rect: Rect, window: WindowId, parent: WindowId) -> Rect;

    /// Move and resize `window` to `rect`.
    fn resize_window(&self, window: WindowId, rect: Rect) -> Result<()>;

    /// Attach a 64-bit zone-occupancy mask to `window` so external
    /// observers can learn which zones it occupies.
    fn stamp_property(&self, window: WindowId, bitmask: u64) -> Result<()>;

    /// Convert a coordinate pair from layout-design units into device
    /// pixels for `monitor`.
    fn convert_dpi(&self, monitor: MonitorId, x: &mut i32, y: &mut i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_id_equality() {
        assert_eq!(WindowId(1), WindowId(1));
        assert_ne!(WindowId(1), WindowId(2));
    }

    #[test]
    fn window_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(WindowId(1));
        set.insert(WindowId(2));
        set.insert(WindowId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn window_id_serialization() {
        let id = WindowId(42);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: WindowId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn monitor_id_serialization() {
        let id = MonitorId(7);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: MonitorId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
