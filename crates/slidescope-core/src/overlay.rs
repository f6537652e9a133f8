use serde::{Deserialize, Serialize};

use crate::detection::DetectionBox;
use crate::geometry::ImageGeometry;

/// A detection rectangle ready to draw on the primary overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

impl DisplayBox {
    /// Shift into container space, for renderers that draw against the
    /// container rather than the image element.
    pub fn in_container(&self, geometry: &ImageGeometry) -> DisplayBox {
        DisplayBox {
            left: self.left + geometry.offset_x,
            top: self.top + geometry.offset_y,
            ..self.clone()
        }
    }
}

/// Project every box into displayed-image space, preserving input order.
///
/// No culling is done here: boxes outside the image are clipped by the
/// renderer.
pub fn project_all(boxes: &[DetectionBox], _geometry: &ImageGeometry) -> Vec<DisplayBox> {
    boxes
        .iter()
        .map(|b| DisplayBox {
            left: b.x1,
            top: b.y1,
            width: b.width(),
            height: b.height(),
            label: b.label.clone(),
        })
        .collect()
}
