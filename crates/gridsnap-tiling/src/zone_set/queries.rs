//! Point queries and occupancy lookups.

use gridsnap_common::types::Point;

use crate::host::WindowId;

use super::ZoneSet;

/// Pixel halo around each zone within which a point still counts as near it.
const SENSITIVITY_RADIUS: i32 = 20;

impl ZoneSet {
    /// Zone indices hit by `point`, in ascending index order.
    ///
    /// A zone is *captured* when the point falls inside its rect expanded
    /// by the sensitivity radius (edges inclusive), and *strictly captured*
    /// under the half-open `[left, right) x [top, bottom)` convention.
    /// Degenerate zones are ignored. A single halo-only hit returns nothing.
    /// When captured zones overlap each other, the smallest-area one wins,
    /// with the later index breaking ties.
    pub fn zones_from_point(&self, point: Point) -> Vec<usize> {
        let mut captured = Vec::new();
        let mut strictly_captured = Vec::new();

        for (i, zone) in self.zones.iter().enumerate() {
            let rect = zone.rect();
            if !rect.is_proper() {
                continue;
            }
            if rect.expanded(SENSITIVITY_RADIUS).contains_inclusive(point) {
                captured.push(i);
            }
            if rect.contains_half_open(point) {
                strictly_captured.push(i);
            }
        }

        // A lone halo match is noise; only strict hits or multi-zone halo
        // overlaps count.
        if captured.len() == 1 && strictly_captured.is_empty() {
            return Vec::new();
        }

        let mut overlap = false;
        'pairs: for i in 0..captured.len() {
            for j in i + 1..captured.len() {
                let a = self.zones[captured[i]].rect();
                let b = self.zones[captured[j]].rect();
                if a.overlaps(&b) {
                    overlap = true;
                    break 'pairs;
                }
            }
        }

        if overlap {
            let mut smallest = 0;
            for i in 1..captured.len() {
                // `<=` so the later index wins ties.
                if self.zones[captured[i]].rect().area()
                    <= self.zones[captured[smallest]].rect().area()
                {
                    smallest = i;
                }
            }
            return vec![captured[smallest]];
        }

        captured
    }

    /// The zone indices `window` currently occupies; empty when unassigned.
    pub fn zone_index_set_for_window(&self, window: WindowId) -> Vec<usize> {
        self.window_index_set
            .get(&window)
            .cloned()
            .unwrap_or_default()
    }

    /// Overwrite the stored index set for `window`, but only when an entry
    /// already exists. This exists for a specific re-layout fixup path and
    /// must never create an assignment, hence the name.
    pub fn set_zone_index_set_for_window_dangerously(
        &mut self,
        window: WindowId,
        index: usize,
    ) -> bool {
        match self.window_index_set.get_mut(&window) {
            Some(stored) => {
                *stored = vec![index];
                true
            }
            None => false,
        }
    }

    /// `true` iff no window's index set contains `index`.
    pub fn is_zone_empty(&self, index: usize) -> bool {
        !self
            .window_index_set
            .values()
            .any(|indices| indices.contains(&index))
    }
}
