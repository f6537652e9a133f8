use serde::{Deserialize, Serialize};

use crate::geometry::{Point, RenderedImage};

/// A labelled detection rectangle with `x1 <= x2` and `y1 <= y2`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub label: String,
}

impl DetectionBox {
    /// Build a box from two opposite corners in any order.
    pub fn new(xa: f64, ya: f64, xb: f64, yb: f64, label: impl Into<String>) -> Self {
        Self {
            x1: xa.min(xb),
            y1: ya.min(yb),
            x2: xa.max(xb),
            y2: ya.max(yb),
            label: label.into(),
        }
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Open-interval overlap with the rectangle `[left, right) x [top, bottom)`.
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, left: f64, top: f64, right: f64, bottom: f64) -> bool {
        self.x2 > left && self.x1 < right && self.y2 > top && self.y1 < bottom
    }
}

/// Which pixel grid raw detection coordinates are expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionSpace {
    /// Coordinates are already displayed-image pixels and are used as-is.
    #[default]
    Display,
    /// Coordinates are intrinsic-image pixels and follow the fit scale and crop.
    Intrinsic,
}

impl std::fmt::Display for DetectionSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectionSpace::Display => write!(f, "Display"),
            DetectionSpace::Intrinsic => write!(f, "Intrinsic"),
        }
    }
}

/// Express raw boxes in displayed-image space for the current fit.
pub fn to_display_space(
    boxes: &[DetectionBox],
    space: DetectionSpace,
    rendered: &RenderedImage,
) -> Vec<DetectionBox> {
    match space {
        DetectionSpace::Display => boxes.to_vec(),
        DetectionSpace::Intrinsic => boxes
            .iter()
            .map(|b| {
                let tl = rendered.intrinsic_to_display(Point::new(b.x1, b.y1));
                let br = rendered.intrinsic_to_display(Point::new(b.x2, b.y2));
                DetectionBox {
                    x1: tl.x,
                    y1: tl.y,
                    x2: br.x,
                    y2: br.y,
                    label: b.label.clone(),
                }
            })
            .collect(),
    }
}
