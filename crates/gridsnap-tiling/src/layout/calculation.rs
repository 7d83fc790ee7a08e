//! Pure zone-rect computation for the built-in layout kinds.

use gridsnap_common::types::Rect;

use crate::host::{MonitorId, WindowHost};
use crate::store::{CanvasLayoutInfo, CustomLayout};

use super::types::{GridLayoutInfo, LayoutKind, C_MULTIPLIER};

/// Inputs to a zone computation.
pub struct LayoutRequest<'a> {
    pub work_area: Rect,
    pub kind: LayoutKind,
    pub zone_count: usize,
    /// Pixel gutter inserted around and between grid/column/row zones.
    pub spacing: i32,
    /// Priority-grid main column share, in 1/10000 units.
    pub main_zone_width: i32,
    /// Resolved custom layout; required when `kind` is `Custom`.
    pub custom: Option<&'a CustomLayout>,
    /// Monitor for DPI translation of custom canvas layouts.
    pub monitor: MonitorId,
}

/// Compute the zone rects for a request.
///
/// Returns the emitted rects plus an `ok` flag. A hard rejection (zero-area
/// work area, zero zone count for a non-custom kind, missing or invalid
/// custom layout) yields `(empty, false)`. A best-effort result still emits
/// every rect but reports `false` when some are degenerate, e.g. when the
/// work area is too small for the requested zone count and spacing.
pub fn compute_zones(req: &LayoutRequest<'_>, host: &dyn WindowHost) -> (Vec<Rect>, bool) {
    if req.work_area.width() <= 0 || req.work_area.height() <= 0 {
        return (Vec::new(), false);
    }
    if req.zone_count == 0 && req.kind != LayoutKind::Custom {
        return (Vec::new(), false);
    }

    match req.kind {
        LayoutKind::Focus => focus_zones(req.work_area, req.zone_count),
        LayoutKind::Columns | LayoutKind::Rows => {
            columns_rows_zones(req.work_area, req.kind, req.zone_count, req.spacing)
        }
        LayoutKind::Grid | LayoutKind::PriorityGrid => {
            let info = GridLayoutInfo::priority(req.zone_count, req.main_zone_width);
            grid_zones(req.work_area, &info, req.spacing)
        }
        LayoutKind::Custom => custom_zones(req, host),
    }
}

/// `zone_count` identical rects cascaded diagonally across the middle of
/// the work area.
fn focus_zones(work_area: Rect, zone_count: usize) -> (Vec<Rect>, bool) {
    let width = work_area.width();
    let height = work_area.height();

    let left = (f64::from(width) * 0.1) as i32;
    let top = (f64::from(height) * 0.1) as i32;
    let right = (f64::from(width) * 0.6) as i32;
    let bottom = (f64::from(height) * 0.6) as i32;
    let base = Rect::new(left, top, right, bottom);

    let ok = base.is_proper() && !base.has_negative_coords();

    // Truncate the 20% band first, then divide, so every offset lands on
    // the same pixel grid as the base rect.
    let (dx, dy) = if zone_count <= 1 {
        (0, 0)
    } else {
        let n = (zone_count - 1) as i32;
        (
            ((f64::from(width) * 0.2) as i32) / n,
            ((f64::from(height) * 0.2) as i32) / n,
        )
    };

    let mut rects = Vec::with_capacity(zone_count);
    for i in 0..zone_count as i32 {
        rects.push(Rect::new(
            left + i * dx,
            top + i * dy,
            right + i * dx,
            bottom + i * dy,
        ));
    }
    (rects, ok)
}

/// Even division of the work area into side-by-side columns or stacked
/// rows, with `spacing` on the outer edges and between every pair.
fn columns_rows_zones(
    work_area: Rect,
    kind: LayoutKind,
    zone_count: usize,
    spacing: i32,
) -> (Vec<Rect>, bool) {
    let n = zone_count as i32;
    let (total_width, total_height) = if kind == LayoutKind::Columns {
        (
            work_area.width() - spacing * (n + 1),
            work_area.height() - spacing * 2,
        )
    } else {
        (
            work_area.width() - spacing * 2,
            work_area.height() - spacing * (n + 1),
        )
    };

    let mut ok = true;
    let mut rects = Vec::with_capacity(zone_count);
    let mut left = spacing;
    let mut top = spacing;

    // Zone extents are prefix-sum differences, not total / n: the extents
    // must add up to exactly total_{width,height} or rounding drift opens
    // pixel seams between zones.
    for zone in 0..n {
        let rect = if kind == LayoutKind::Columns {
            let right = left + (zone + 1) * total_width / n - zone * total_width / n;
            Rect::new(left, top, right, total_height + spacing)
        } else {
            let bottom = top + (zone + 1) * total_height / n - zone * total_height / n;
            Rect::new(left, top, total_width + spacing, bottom)
        };

        if !rect.is_proper() || rect.has_negative_coords() {
            ok = false;
        }

        if kind == LayoutKind::Columns {
            left = rect.right + spacing;
        } else {
            top = rect.bottom + spacing;
        }
        rects.push(rect);
    }
    (rects, ok)
}

/// Shared grid subroutine: emit one rect per child block of a descriptor.
pub(crate) fn grid_zones(
    work_area: Rect,
    info: &GridLayoutInfo,
    spacing: i32,
) -> (Vec<Rect>, bool) {
    let rows = info.rows;
    let columns = info.columns;
    let total_width = i64::from(work_area.width() - spacing * (columns as i32 + 1));
    let total_height = i64::from(work_area.height() - spacing * (rows as i32 + 1));

    // Each boundary is prefix * total / C_MULTIPLIER, computed from a
    // running percent sum. However the individual percents round, the last
    // End stays exact. Intermediate products approach 10^9 so the math is
    // widened to i64.
    let denom = i64::from(C_MULTIPLIER);
    let mut row_start = vec![0i32; rows];
    let mut row_end = vec![0i32; rows];
    let mut prefix: i64 = 0;
    for row in 0..rows {
        let gutter = (row as i32 + 1) * spacing;
        row_start[row] = (prefix * total_height / denom) as i32 + gutter;
        prefix += i64::from(info.rows_percents[row]);
        row_end[row] = (prefix * total_height / denom) as i32 + gutter;
    }

    let mut col_start = vec![0i32; columns];
    let mut col_end = vec![0i32; columns];
    prefix = 0;
    for col in 0..columns {
        let gutter = (col as i32 + 1) * spacing;
        col_start[col] = (prefix * total_width / denom) as i32 + gutter;
        prefix += i64::from(info.columns_percents[col]);
        col_end[col] = (prefix * total_width / denom) as i32 + gutter;
    }

    let mut ok = true;
    let mut rects = Vec::new();
    for row in 0..rows {
        for col in 0..columns {
            let child = info.cell_child_map[row][col];
            let top_edge = row == 0 || info.cell_child_map[row - 1][col] != child;
            let left_edge = col == 0 || info.cell_child_map[row][col - 1] != child;
            if !(top_edge && left_edge) {
                continue; // not the top-left cell of its block
            }

            let mut max_row = row;
            while max_row + 1 < rows && info.cell_child_map[max_row + 1][col] == child {
                max_row += 1;
            }
            let mut max_col = col;
            while max_col + 1 < columns && info.cell_child_map[row][max_col + 1] == child {
                max_col += 1;
            }

            let rect = Rect::new(
                col_start[col],
                row_start[row],
                col_end[max_col],
                row_end[max_row],
            );
            if !rect.is_proper() || rect.has_negative_coords() {
                ok = false;
            }
            rects.push(rect);
        }
    }
    (rects, ok)
}

fn custom_zones(req: &LayoutRequest<'_>, host: &dyn WindowHost) -> (Vec<Rect>, bool) {
    let Some(custom) = req.custom else {
        return (Vec::new(), false);
    };
    match custom {
        CustomLayout::Canvas(info) => canvas_zones(info, req.monitor, host),
        CustomLayout::Grid(info) => grid_zones(req.work_area, info, req.spacing),
    }
}

/// Absolute canvas zones, DPI-converted against the set's monitor. Any
/// negative stored coordinate or dimension rejects the whole layout.
fn canvas_zones(
    info: &CanvasLayoutInfo,
    monitor: MonitorId,
    host: &dyn WindowHost,
) -> (Vec<Rect>, bool) {
    let mut rects = Vec::with_capacity(info.zones.len());
    for zone in &info.zones {
        if zone.x < 0 || zone.y < 0 || zone.width < 0 || zone.height < 0 {
            return (Vec::new(), false);
        }

        let (mut x, mut y) = (zone.x, zone.y);
        let (mut width, mut height) = (zone.width, zone.height);
        host.convert_dpi(monitor, &mut x, &mut y);
        host.convert_dpi(monitor, &mut width, &mut height);

        rects.push(Rect::new(x, y, x + width, y + height));
    }
    (rects, true)
}
