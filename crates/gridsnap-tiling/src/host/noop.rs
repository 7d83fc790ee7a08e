//! No-op WindowHost implementation.
//!
//! Used as a fallback on platforms where window control is not wired up,
//! and for testing.

use gridsnap_common::types::Rect;

use super::{MonitorId, Result, WindowHost, WindowId};

/// A window host that does nothing. Client rects come back untranslated,
/// mutations succeed silently, and DPI conversion is the identity.
pub struct NoopWindowHost;

impl WindowHost for NoopWindowHost {
    fn compute_client_rect(&self, zone_rect: Rect, _window: WindowId, _parent: WindowId) -> Rect {
        zone_rect
    }

    fn resize_window(&self, _window: WindowId, _rect: Rect) -> Result<()> {
        Ok(())
    }

    fn stamp_property(&self, _window: WindowId, _bitmask: u64) -> Result<()> {
        Ok(())
    }

    fn convert_dpi(&self, _monitor: MonitorId, _x: &mut i32, _y: &mut i32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_rect_is_identity() {
        let host = NoopWindowHost;
        let rect = Rect::new(1, 2, 3, 4);
        assert_eq!(
            host.compute_client_rect(rect, WindowId(1), WindowId(2)),
            rect
        );
    }

    #[test]
    fn mutations_succeed() {
        let host = NoopWindowHost;
        assert!(host.resize_window(WindowId(1), Rect::new(0, 0, 10, 10)).is_ok());
        assert!(host.stamp_property(WindowId(1), 0b101).is_ok());
    }

    #[test]
    fn dpi_conversion_is_identity() {
        let host = NoopWindowHost;
        let (mut x, mut y) = (100, 200);
        host.convert_dpi(MonitorId(1), &mut x, &mut y);
        assert_eq!((x, y), (100, 200));
    }
}
