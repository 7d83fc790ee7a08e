//! Zone calculation and window placement operations.

use tracing::{debug, warn};

use gridsnap_common::types::{Point, Rect};

use crate::host::{WindowHost, WindowId};
use crate::layout::{self, LayoutKind, LayoutRequest};
use crate::store::LayoutStore;
use crate::zone::Zone;

use super::{MoveDirection, ZoneSet};

impl ZoneSet {
    /// Populate the zone list for `work_area` via the layout computation.
    ///
    /// Returns `false` and leaves the zones untouched on hard-invalid input
    /// (zero-area work area, zero zone count for a non-custom kind, missing
    /// custom layout). Otherwise the computed zones are appended; the return
    /// value is `false` when some of them came out degenerate, leaving the
    /// caller free to keep or discard the result.
    pub fn calculate_zones(
        &mut self,
        work_area: Rect,
        zone_count: usize,
        spacing: i32,
        host: &dyn WindowHost,
        store: &dyn LayoutStore,
    ) -> bool {
        if work_area.width() <= 0 || work_area.height() <= 0 {
            return false;
        }
        if zone_count == 0 && self.config.kind != LayoutKind::Custom {
            return false;
        }

        let custom = if self.config.kind == LayoutKind::Custom {
            match store.find_custom_zone_set(self.config.id) {
                Some(layout) => Some(layout),
                None => return false,
            }
        } else {
            None
        };

        let request = LayoutRequest {
            work_area,
            kind: self.config.kind,
            zone_count,
            spacing,
            main_zone_width: self.main_zone_width,
            custom: custom.as_ref(),
            monitor: self.config.monitor,
        };
        let (rects, ok) = layout::compute_zones(&request, host);
        if rects.is_empty() {
            return false;
        }

        debug!(kind = ?self.config.kind, zones = rects.len(), ok, "calculated zones");
        for rect in rects {
            self.add_zone(Zone::new(rect));
        }
        ok
    }

    /// Assign `window` to the single zone `index`.
    pub fn move_window_into_zone_by_index(
        &mut self,
        host: &dyn WindowHost,
        window: WindowId,
        parent: WindowId,
        index: usize,
        stamp: bool,
    ) {
        self.move_window_into_zone_by_index_set(host, window, parent, &[index], stamp);
    }

    /// Assign `window` to `indices`, resize it to the bounding box of the
    /// matching zones, and optionally stamp the occupancy mask.
    ///
    /// Out-of-range indices are dropped from the assignment without failing
    /// the call; they still set their bit in the stamp when below 64. Host
    /// failures are logged and swallowed so the occupancy map stays
    /// consistent with what was stored.
    pub fn move_window_into_zone_by_index_set(
        &mut self,
        host: &dyn WindowHost,
        window: WindowId,
        parent: WindowId,
        indices: &[usize],
        stamp: bool,
    ) {
        if self.zones.is_empty() {
            return;
        }

        let mut bounds: Option<Rect> = None;
        let mut bitmask: u64 = 0;

        let stored = self.window_index_set.entry(window).or_default();
        stored.clear();

        for &index in indices {
            if index < self.zones.len() {
                let placement = self.zones[index].actual_rect(host, window, parent);
                bounds = Some(match bounds {
                    Some(rect) => rect.union(&placement),
                    None => placement,
                });
                stored.push(index);
            }

            // The stamp channel is 64 bits wide; larger indices do not
            // participate in the mask.
            if index < u64::BITS as usize {
                bitmask |= 1 << index;
            }
        }

        if let Some(rect) = bounds {
            if let Err(err) = host.resize_window(window, rect) {
                warn!(window = window.0, %err, "window resize failed");
            }
        }
        if stamp {
            if let Err(err) = host.stamp_property(window, bitmask) {
                warn!(window = window.0, %err, "stamping window failed");
            }
        }
    }

    /// Move `window` one zone left or right.
    ///
    /// Unassigned windows enter from the far edge. At the edge, `cycle`
    /// wraps around to the opposite end; without it the window's assignment
    /// is cleared and the call reports `false`. Only the first stored index
    /// is consulted, so multi-zone windows collapse onto a single zone.
    pub fn move_window_into_zone_by_direction(
        &mut self,
        host: &dyn WindowHost,
        window: WindowId,
        parent: WindowId,
        direction: MoveDirection,
        cycle: bool,
    ) -> bool {
        if self.zones.is_empty() {
            return false;
        }

        let last = self.zones.len() - 1;
        let indices = self.zone_index_set_for_window(window);

        if indices.is_empty() {
            let target = match direction {
                MoveDirection::Left => last,
                MoveDirection::Right => 0,
            };
            self.move_window_into_zone_by_index_set(host, window, parent, &[target], true);
            return true;
        }

        let old = indices[0];
        let at_edge = match direction {
            MoveDirection::Left => old == 0,
            MoveDirection::Right => old == last,
        };

        if at_edge {
            if !cycle {
                self.move_window_into_zone_by_index_set(host, window, parent, &[], true);
                return false;
            }
            let target = match direction {
                MoveDirection::Left => last,
                MoveDirection::Right => 0,
            };
            self.move_window_into_zone_by_index_set(host, window, parent, &[target], true);
            return true;
        }

        let target = match direction {
            MoveDirection::Left => old - 1,
            MoveDirection::Right => old + 1,
        };
        self.move_window_into_zone_by_index_set(host, window, parent, &[target], true);
        true
    }

    /// Assign `window` to whatever zones `point` hits.
    pub fn move_window_into_zone_by_point(
        &mut self,
        host: &dyn WindowHost,
        window: WindowId,
        parent: WindowId,
        point: Point,
    ) {
        let indices = self.zones_from_point(point);
        self.move_window_into_zone_by_index_set(host, window, parent, &indices, true);
    }
}
