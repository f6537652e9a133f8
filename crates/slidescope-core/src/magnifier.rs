use serde::{Deserialize, Serialize};

use crate::detection::DetectionBox;
use crate::geometry::{ImageGeometry, Point, Size};
use crate::viewport::{CursorState, ViewportWindow};

/// Where the enlarged image sits relative to the magnified pane's top-left.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundPlacement {
    pub offset: Point,
    pub size: Size,
}

/// A detection box in magnified-pane coordinates.
///
/// Not clipped to the pane; partial boxes may extend past its edges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MagnifiedBox {
    /// Position of the source box in the input sequence.
    pub index: usize,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MagnifiedView {
    pub pane: Size,
    pub background: BackgroundPlacement,
    pub boxes: Vec<MagnifiedBox>,
}

/// What the magnifier pane shows for the current pointer state.
#[derive(Clone, Debug, PartialEq)]
pub enum MagnifierView {
    /// Pointer is not over the image.
    Placeholder,
    Active(MagnifiedView),
}

impl MagnifierView {
    pub fn is_active(&self) -> bool {
        matches!(self, MagnifierView::Active(_))
    }

    pub fn visible_boxes(&self) -> &[MagnifiedBox] {
        match self {
            MagnifierView::Placeholder => &[],
            MagnifierView::Active(view) => &view.boxes,
        }
    }
}

/// Size of the magnified pane for a capture window at `zoom`.
pub fn pane_size(window: &ViewportWindow, zoom: f64) -> Size {
    window.size().scaled(zoom)
}

/// Background placement that aligns the cursor corner with the pane origin.
pub fn background_placement(
    cursor: &CursorState,
    geometry: &ImageGeometry,
    zoom: f64,
) -> BackgroundPlacement {
    BackgroundPlacement {
        offset: Point::new(-cursor.clamped_x * zoom, -cursor.clamped_y * zoom),
        size: geometry.display_size().scaled(zoom),
    }
}

/// Keep boxes that overlap the viewport window and re-express them in pane
/// coordinates. Boxes touching the window only along an edge are dropped.
pub fn cull_and_project(
    cursor: &CursorState,
    boxes: &[DetectionBox],
    window: &ViewportWindow,
    zoom: f64,
) -> Vec<MagnifiedBox> {
    let left = cursor.clamped_x;
    let top = cursor.clamped_y;
    let far = cursor.far_corner(window);

    boxes
        .iter()
        .enumerate()
        .filter(|(_, b)| b.overlaps(left, top, far.x, far.y))
        .map(|(index, b)| MagnifiedBox {
            index,
            left: (b.x1 - left) * zoom,
            top: (b.y1 - top) * zoom,
            width: b.width() * zoom,
            height: b.height() * zoom,
            label: b.label.clone(),
        })
        .collect()
}

/// Build the magnifier contents, or the placeholder when not hovering.
pub fn project_magnified(
    cursor: Option<&CursorState>,
    boxes: &[DetectionBox],
    geometry: &ImageGeometry,
    window: &ViewportWindow,
    zoom: f64,
) -> MagnifierView {
    let Some(cursor) = cursor else {
        return MagnifierView::Placeholder;
    };

    MagnifierView::Active(MagnifiedView {
        pane: pane_size(window, zoom),
        background: background_placement(cursor, geometry, zoom),
        boxes: cull_and_project(cursor, boxes, window, zoom),
    })
}
