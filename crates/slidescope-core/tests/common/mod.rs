#![allow(dead_code)]

use slidescope_core::detection::DetectionBox;
use slidescope_core::geometry::ImageGeometry;
use slidescope_core::viewport::{CursorState, ViewportWindow};

pub fn geometry(offset_x: f64, offset_y: f64, width: f64, height: f64) -> ImageGeometry {
    ImageGeometry {
        offset_x,
        offset_y,
        display_width: width,
        display_height: height,
    }
}

pub fn window(width: f64, height: f64) -> ViewportWindow {
    ViewportWindow { width, height }
}

pub fn cursor(x: f64, y: f64) -> CursorState {
    CursorState {
        clamped_x: x,
        clamped_y: y,
    }
}

pub fn bbox(x1: f64, y1: f64, x2: f64, y2: f64, label: &str) -> DetectionBox {
    DetectionBox::new(x1, y1, x2, y2, label)
}

/// A handful of boxes spread over an 800x600 image.
pub fn sample_boxes() -> Vec<DetectionBox> {
    vec![
        bbox(10.0, 10.0, 40.0, 40.0, "lymphocyte"),
        bbox(300.0, 200.0, 420.0, 320.0, "lymphocyte"),
        bbox(500.0, 100.0, 560.0, 150.0, "neutrophil"),
        bbox(700.0, 500.0, 790.0, 590.0, "monocyte"),
    ]
}
