//! Boundary to user-defined layout storage.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::layout::GridLayoutInfo;

/// One zone of a canvas layout, as absolute coordinates in layout-design
/// units. Converted to device pixels against the set's monitor before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasZone {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasLayoutInfo {
    pub zones: Vec<CanvasZone>,
}

/// A user-defined layout as retrieved from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomLayout {
    Canvas(CanvasLayoutInfo),
    Grid(GridLayoutInfo),
}

/// Port to wherever user-defined layouts are persisted.
pub trait LayoutStore: Send + Sync {
    fn find_custom_zone_set(&self, id: Uuid) -> Option<CustomLayout>;
}

/// HashMap-backed store, for tests and embedding hosts that manage
/// persistence themselves.
#[derive(Debug, Default)]
pub struct MemoryLayoutStore {
    layouts: HashMap<Uuid, CustomLayout>,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: Uuid, layout: CustomLayout) {
        self.layouts.insert(id, layout);
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn find_custom_zone_set(&self, id: Uuid) -> Option<CustomLayout> {
        self.layouts.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_lookup() {
        let id = Uuid::new_v4();
        let mut store = MemoryLayoutStore::new();
        assert!(store.find_custom_zone_set(id).is_none());

        let layout = CustomLayout::Canvas(CanvasLayoutInfo {
            zones: vec![CanvasZone {
                x: 0,
                y: 0,
                width: 800,
                height: 600,
            }],
        });
        store.insert(id, layout.clone());
        assert_eq!(store.find_custom_zone_set(id), Some(layout));
        assert!(store.find_custom_zone_set(Uuid::new_v4()).is_none());
    }

    #[test]
    fn custom_layout_serialization() {
        let layout = CustomLayout::Grid(GridLayoutInfo::full_area());
        let json = serde_json::to_string(&layout).unwrap();
        let deserialized: CustomLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, deserialized);
    }

    #[test]
    fn canvas_layout_serialization() {
        let layout = CustomLayout::Canvas(CanvasLayoutInfo {
            zones: vec![
                CanvasZone {
                    x: 0,
                    y: 0,
                    width: 100,
                    height: 100,
                },
                CanvasZone {
                    x: 100,
                    y: 0,
                    width: 100,
                    height: 100,
                },
            ],
        });
        let json = serde_json::to_string(&layout).unwrap();
        let deserialized: CustomLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, deserialized);
    }
}
