//! Grid snapping for component positions and sizes.

use kurbo::{Point, Size};

/// Default grid size in canvas units (matches the visual grid).
pub const GRID_SIZE: f64 = 20.0;

/// Result of a snap operation.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate was snapped.
    pub snapped_x: bool,
    /// Whether the Y coordinate was snapped.
    pub snapped_y: bool,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Round a single coordinate to the nearest multiple of `grid_size`.
///
/// A non-positive or non-finite grid size leaves the value untouched.
pub fn snap_value(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return value;
    }
    (value / grid_size).round() * grid_size
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid_size: f64) -> SnapResult {
    if grid_size <= 0.0 || !grid_size.is_finite() {
        return SnapResult::none(point);
    }

    SnapResult {
        point: Point::new(snap_value(point.x, grid_size), snap_value(point.y, grid_size)),
        snapped_x: true,
        snapped_y: true,
    }
}

/// Snap a point if snapping is enabled, otherwise return it unchanged.
pub fn snap_point(point: Point, enabled: bool, grid_size: f64) -> SnapResult {
    if enabled {
        snap_to_grid(point, grid_size)
    } else {
        SnapResult::none(point)
    }
}

/// Round a size to the nearest multiple of `grid_size` on each axis.
pub fn snap_size(size: Size, grid_size: f64) -> Size {
    Size::new(snap_value(size.width, grid_size), snap_value(size.height, grid_size))
}
