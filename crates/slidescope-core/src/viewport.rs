use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::geometry::{ImageGeometry, Point, Size};

/// Size of the region captured for magnification, in displayed-image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportWindow {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportWindow {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl ViewportWindow {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Top-left corner of the viewport window in displayed-image space.
///
/// Only exists while the pointer hovers the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CursorState {
    pub clamped_x: f64,
    pub clamped_y: f64,
}

impl CursorState {
    pub fn origin(&self) -> Point {
        Point::new(self.clamped_x, self.clamped_y)
    }

    /// Right and bottom edges of the window anchored at this cursor.
    pub fn far_corner(&self, window: &ViewportWindow) -> Point {
        Point::new(self.clamped_x + window.width, self.clamped_y + window.height)
    }
}

/// Centre `window` on the pointer and keep it inside the displayed image.
///
/// When the window is larger than the image on an axis the upper bound goes
/// negative; that axis then pins to 0.
pub fn track(pointer: Point, geometry: &ImageGeometry, window: &ViewportWindow) -> CursorState {
    let rel = geometry.container_to_display(pointer);
    let raw_left = rel.x - window.width / 2.0;
    let raw_top = rel.y - window.height / 2.0;

    CursorState {
        clamped_x: clamp_axis(raw_left, geometry.display_width - window.width),
        clamped_y: clamp_axis(raw_top, geometry.display_height - window.height),
    }
}

fn clamp_axis(raw: f64, upper: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.min(upper).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_axis_negative_upper_pins_to_zero() {
        assert_eq!(clamp_axis(40.0, -20.0), 0.0);
        assert_eq!(clamp_axis(-40.0, -20.0), 0.0);
    }

    #[test]
    fn test_clamp_axis_nan_is_zero() {
        assert_eq!(clamp_axis(f64::NAN, 100.0), 0.0);
    }

    #[test]
    fn test_clamp_axis_infinite_pointer() {
        assert_eq!(clamp_axis(f64::INFINITY, 100.0), 100.0);
        assert_eq!(clamp_axis(f64::NEG_INFINITY, 100.0), 0.0);
    }
}
