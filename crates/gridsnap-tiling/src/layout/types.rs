//! Layout kinds and the declarative grid descriptor.

use serde::{Deserialize, Serialize};

/// Denominator for all percent values: percents are integers in 1/10000
/// units.
pub const C_MULTIPLIER: i32 = 10000;

/// The closed set of layout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutKind {
    Focus,
    Columns,
    Rows,
    Grid,
    PriorityGrid,
    Custom,
}

/// Declarative grid descriptor: per-row and per-column percents plus a map
/// assigning every cell to a logical child zone.
///
/// Well-formed descriptors have each percent vector summing to exactly
/// [`C_MULTIPLIER`], and cells carrying the same child index forming a
/// rectangular contiguous block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayoutInfo {
    pub rows: usize,
    pub columns: usize,
    /// Row heights in 1/10000 units.
    pub rows_percents: Vec<i32>,
    /// Column widths in 1/10000 units.
    pub columns_percents: Vec<i32>,
    /// `cell_child_map[row][col]` is the child zone spanning that cell.
    pub cell_child_map: Vec<Vec<usize>>,
}

impl GridLayoutInfo {
    /// Single-cell grid covering the whole work area.
    pub fn full_area() -> Self {
        Self {
            rows: 1,
            columns: 1,
            rows_percents: vec![C_MULTIPLIER],
            columns_percents: vec![C_MULTIPLIER],
            cell_child_map: vec![vec![0]],
        }
    }

    /// Priority-grid descriptor: a main column claiming `main_zone_width`
    /// of the work area, with the remaining zones stacked beside it.
    ///
    /// For fewer than two zones this degenerates to [`full_area`].
    /// Otherwise rows = `zone_count - 1` and columns = 2. The cell walk
    /// runs column-major from the bottom-right; once the counter reaches
    /// `zone_count` it is held at the last zone, so surplus cells merge
    /// into an L-shaped final zone.
    ///
    /// [`full_area`]: GridLayoutInfo::full_area
    pub fn priority(zone_count: usize, main_zone_width: i32) -> Self {
        if zone_count < 2 {
            return Self::full_area();
        }

        let rows = zone_count - 1;
        let columns = 2;

        // Prefix differences, not C_MULTIPLIER / rows: the percents must
        // sum to exactly C_MULTIPLIER.
        let n = rows as i32;
        let mut rows_percents = Vec::with_capacity(rows);
        for row in 0..n {
            rows_percents.push(C_MULTIPLIER * (row + 1) / n - C_MULTIPLIER * row / n);
        }

        let columns_percents = vec![main_zone_width, C_MULTIPLIER - main_zone_width];

        let mut cell_child_map = vec![vec![0usize; columns]; rows];
        let mut index = 0;
        for col in (0..columns).rev() {
            for row in (0..rows).rev() {
                cell_child_map[row][col] = index;
                index += 1;
                if index == zone_count {
                    index -= 1;
                }
            }
        }

        Self {
            rows,
            columns,
            rows_percents,
            columns_percents,
            cell_child_map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_area_descriptor() {
        let info = GridLayoutInfo::full_area();
        assert_eq!(info.rows, 1);
        assert_eq!(info.columns, 1);
        assert_eq!(info.rows_percents, vec![C_MULTIPLIER]);
        assert_eq!(info.cell_child_map, vec![vec![0]]);
    }

    #[test]
    fn priority_single_zone_is_full_area() {
        assert_eq!(
            GridLayoutInfo::priority(1, 7000),
            GridLayoutInfo::full_area()
        );
        assert_eq!(
            GridLayoutInfo::priority(0, 7000),
            GridLayoutInfo::full_area()
        );
    }

    #[test]
    fn priority_three_zones() {
        let info = GridLayoutInfo::priority(3, 7000);
        assert_eq!(info.rows, 2);
        assert_eq!(info.columns, 2);
        assert_eq!(info.rows_percents, vec![5000, 5000]);
        assert_eq!(info.columns_percents, vec![7000, 3000]);
        // Backward walk puts the main zone in the first column as one block
        // and stacks the rest on the side.
        assert_eq!(info.cell_child_map, vec![vec![2, 1], vec![2, 0]]);
    }

    #[test]
    fn priority_row_percents_sum_exactly() {
        for zone_count in 2..=12 {
            let info = GridLayoutInfo::priority(zone_count, 7000);
            let sum: i32 = info.rows_percents.iter().sum();
            assert_eq!(sum, C_MULTIPLIER, "zone_count={zone_count}");
            let sum: i32 = info.columns_percents.iter().sum();
            assert_eq!(sum, C_MULTIPLIER, "zone_count={zone_count}");
        }
    }

    #[test]
    fn priority_two_zones_has_no_merged_cells() {
        let info = GridLayoutInfo::priority(2, 6000);
        assert_eq!(info.cell_child_map, vec![vec![1, 0]]);
    }

    #[test]
    fn grid_layout_info_serialization() {
        let info = GridLayoutInfo::priority(4, 6500);
        let json = serde_json::to_string(&info).unwrap();
        let deserialized: GridLayoutInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info, deserialized);
    }
}
