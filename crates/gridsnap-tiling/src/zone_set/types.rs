//! Core types and constructors for ZoneSet.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gridsnap_common::types::ZoneId;

use crate::host::{MonitorId, WindowId};
use crate::layout::LayoutKind;
use crate::zone::Zone;

/// Initial share of the work-area width claimed by the priority-grid main
/// column, in 1/10000 units.
pub const MAIN_ZONE_WIDTH_INITIAL: i32 = 7000;
/// Step applied by [`ZoneSet::change_main_zone_width`].
pub const MAIN_ZONE_WIDTH_STEP: i32 = 500;
pub const MAIN_ZONE_WIDTH_MIN: i32 = 1500;
pub const MAIN_ZONE_WIDTH_MAX: i32 = 8500;

/// Horizontal navigation direction for zone moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Left,
    Right,
}

/// Static configuration of a zone set: one monitor, one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSetConfig {
    pub id: Uuid,
    pub kind: LayoutKind,
    /// Host monitor the set belongs to; consulted only for DPI translation
    /// of custom canvas layouts.
    pub monitor: MonitorId,
}

impl ZoneSetConfig {
    pub fn new(id: Uuid, kind: LayoutKind, monitor: MonitorId) -> Self {
        Self { id, kind, monitor }
    }
}

/// An ordered collection of zones plus the window-occupancy map for one
/// monitor and one layout.
///
/// Insertion order fixes the public zone index. Windows are referenced by
/// opaque handle only; the set never owns them.
pub struct ZoneSet {
    pub(super) config: ZoneSetConfig,
    pub(super) zones: Vec<Zone>,
    pub(super) window_index_set: HashMap<WindowId, Vec<usize>>,
    pub(super) main_zone_width: i32,
}

impl ZoneSet {
    pub fn new(config: ZoneSetConfig) -> Self {
        Self {
            config,
            zones: Vec::new(),
            window_index_set: HashMap::new(),
            main_zone_width: MAIN_ZONE_WIDTH_INITIAL,
        }
    }

    /// Create a set around pre-built zones. Ids are re-assigned densely so
    /// the `1..=N` invariant holds regardless of what the zones carried.
    pub fn with_zones(config: ZoneSetConfig, zones: Vec<Zone>) -> Self {
        let mut set = Self::new(config);
        for zone in zones {
            set.add_zone(zone);
        }
        set
    }

    // -- Accessors --

    pub fn id(&self) -> Uuid {
        self.config.id
    }

    pub fn kind(&self) -> LayoutKind {
        self.config.kind
    }

    pub fn monitor(&self) -> MonitorId {
        self.config.monitor
    }

    /// Snapshot of the current zones in index order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn main_zone_width(&self) -> i32 {
        self.main_zone_width
    }

    // -- Mutators --

    /// Append a zone and assign its id. Ids start at 1: hosts store the id
    /// in a window property where the zero value is unusable.
    pub fn add_zone(&mut self, mut zone: Zone) {
        zone.set_id(ZoneId(self.zones.len() as u64 + 1));
        self.zones.push(zone);
    }

    /// Clear the zone list.
    ///
    /// Deliberately leaves the window-occupancy map alone: callers that
    /// recompute the layout right away expect the assignments to be
    /// re-applied, and `is_zone_empty` may report stale indices until then.
    /// A full reset has to clear assignments explicitly.
    pub fn kill_zones(&mut self) {
        self.zones.clear();
    }

    /// Step the priority-grid main column width by ±500, clamped to
    /// `[1500, 8500]`. Does not recompute the layout.
    pub fn change_main_zone_width(&mut self, increase: bool) {
        let step = if increase {
            MAIN_ZONE_WIDTH_STEP
        } else {
            -MAIN_ZONE_WIDTH_STEP
        };
        self.main_zone_width =
            (self.main_zone_width + step).clamp(MAIN_ZONE_WIDTH_MIN, MAIN_ZONE_WIDTH_MAX);
    }
}
