//! Camera module for pan/zoom transforms.
//!
//! Every conversion between screen space (pixels relative to the canvas
//! container) and canvas space goes through [`Camera`], so drop placement,
//! move, resize and context-menu hit testing all agree on where a component is.

use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.5;
/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 2.0;
/// Zoom change applied per wheel tick.
pub const ZOOM_STEP: f64 = 0.1;

/// Clamp a zoom factor into `[MIN_ZOOM, MAX_ZOOM]`.
///
/// NaN collapses to `MIN_ZOOM` so the invariant holds for any input.
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return MIN_ZOOM;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// View transform for the canvas.
///
/// `screen = canvas * zoom + pan`, and its inverse
/// `canvas = (screen - pan) / zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Pan offset in screen pixels.
    pub pan: Vec2,
    /// Zoom factor.
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Create a camera from a pan offset and zoom factor.
    pub fn new(pan: Vec2, zoom: f64) -> Self {
        Self {
            pan,
            zoom: clamp_zoom(zoom),
        }
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts canvas coordinates to screen coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    /// Get the inverse transform for input handling.
    ///
    /// This transform converts screen coordinates to canvas coordinates.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.pan)
    }

    /// Convert a screen point to canvas coordinates.
    pub fn screen_to_canvas(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    /// Convert a canvas point to screen coordinates.
    pub fn canvas_to_screen(&self, canvas_point: Point) -> Point {
        self.transform() * canvas_point
    }

    /// Convert a screen-space movement into a canvas-space movement.
    pub fn screen_delta_to_canvas(&self, delta: Vec2) -> Vec2 {
        delta / self.zoom
    }

    /// Screen-space bounding box of a canvas-space rectangle.
    pub fn canvas_rect_to_screen(&self, rect: Rect) -> Rect {
        self.transform().transform_rect_bbox(rect)
    }
}
