//! An individual zone: pure data plus client-area translation via the host.

use gridsnap_common::types::{Rect, ZoneId};

use crate::host::{WindowHost, WindowId};

/// A rectangle in work-area coordinates into which a window may be snapped,
/// together with the stable id it receives when added to a
/// [`ZoneSet`](crate::zone_set::ZoneSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    rect: Rect,
    id: ZoneId,
}

impl Zone {
    /// Create a zone that has not been added to a set yet. The id stays at
    /// the reserved value 0 until insertion assigns the real one.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            id: ZoneId(0),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn id(&self) -> ZoneId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ZoneId) {
        self.id = id;
    }

    /// Translate the zone rect into the placement rect for `window` inside
    /// `parent`, honouring DPI and client-area insets. The translation lives
    /// behind the host port; the zone itself is pure data.
    pub fn actual_rect(&self, host: &dyn WindowHost, window: WindowId, parent: WindowId) -> Rect {
        host.compute_client_rect(self.rect, window, parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NoopWindowHost;

    #[test]
    fn new_zone_has_reserved_id() {
        let zone = Zone::new(Rect::new(0, 0, 100, 100));
        assert_eq!(zone.id(), ZoneId(0));
        assert_eq!(zone.rect(), Rect::new(0, 0, 100, 100));
    }

    #[test]
    fn actual_rect_delegates_to_host() {
        let zone = Zone::new(Rect::new(10, 20, 110, 220));
        let host = NoopWindowHost;
        let rect = zone.actual_rect(&host, WindowId(1), WindowId(2));
        assert_eq!(rect, zone.rect());
    }
}
