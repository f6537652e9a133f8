use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::ViewerConfig;
use crate::detection::{to_display_space, DetectionBox};
use crate::geometry::{fit_image, resolve, ImageGeometry, Point, RenderedImage, Size};
use crate::magnifier::{project_magnified, MagnifierView};
use crate::overlay::{project_all, DisplayBox};
use crate::viewport::{track, CursorState};

/// Input events that drive the viewer.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    /// The image finished loading and its intrinsic size is known.
    ImageLoaded { container: Size, intrinsic: Size },
    /// The container changed size after the image was loaded.
    ContainerResized { container: Size },
    /// A new detection set arrived. Replaces the previous one.
    DetectionsLoaded(Vec<DetectionBox>),
    /// Pointer position in container space.
    PointerMoved(Point),
    PointerLeft,
}

/// Layout derived from the most recent load or resize.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub container: Size,
    pub rendered: RenderedImage,
    pub geometry: ImageGeometry,
    /// Detection boxes expressed in displayed-image space.
    pub boxes: Arc<[DetectionBox]>,
}

/// Lens rectangle drawn over the main image, in container space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LensRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything the renderer needs for one event cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerFrame {
    pub geometry: Option<ImageGeometry>,
    pub overlay: Vec<DisplayBox>,
    pub lens: Option<LensRect>,
    pub magnifier: MagnifierView,
}

/// Immutable snapshot of one viewer's state.
///
/// Every transition goes through [`ViewerSession::apply`], which returns a
/// new snapshot and leaves `self` untouched.
#[derive(Clone, Debug)]
pub struct ViewerSession {
    config: Arc<ViewerConfig>,
    intrinsic: Option<Size>,
    raw_boxes: Arc<[DetectionBox]>,
    layout: Option<Layout>,
    pointer: Option<Point>,
    cursor: Option<CursorState>,
}

impl ViewerSession {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config: Arc::new(config),
            intrinsic: None,
            raw_boxes: Arc::from(Vec::<DetectionBox>::new()),
            layout: None,
            pointer: None,
            cursor: None,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn geometry(&self) -> Option<&ImageGeometry> {
        self.layout.as_ref().map(|l| &l.geometry)
    }

    pub fn cursor(&self) -> Option<&CursorState> {
        self.cursor.as_ref()
    }

    /// Detection boxes as received, before any coordinate-space conversion.
    pub fn raw_boxes(&self) -> &[DetectionBox] {
        &self.raw_boxes
    }

    pub fn is_hovering(&self) -> bool {
        self.cursor.is_some()
    }

    /// Same session with a different config; layout and cursor are rebuilt.
    pub fn with_config(&self, config: ViewerConfig) -> ViewerSession {
        let mut next = self.clone();
        next.config = Arc::new(config);
        if let Some(container) = self.layout.as_ref().map(|l| l.container) {
            next.relayout(container);
        }
        next
    }

    pub fn apply(&self, event: ViewerEvent) -> ViewerSession {
        let mut next = self.clone();
        match event {
            ViewerEvent::ImageLoaded {
                container,
                intrinsic,
            } => {
                next.intrinsic = Some(intrinsic);
                next.relayout(container);
            }
            ViewerEvent::ContainerResized { container } => {
                if next.intrinsic.is_some() {
                    next.relayout(container);
                } else {
                    trace!("Resize before image load ignored");
                }
            }
            ViewerEvent::DetectionsLoaded(boxes) => {
                debug!(count = boxes.len(), "Detections loaded");
                next.raw_boxes = Arc::from(boxes);
                if let Some(container) = next.layout.as_ref().map(|l| l.container) {
                    next.relayout(container);
                }
            }
            ViewerEvent::PointerMoved(pointer) => {
                next.pointer = Some(pointer);
                next.retrack();
            }
            ViewerEvent::PointerLeft => {
                next.pointer = None;
                next.cursor = None;
            }
        }
        next
    }

    /// Convenience for folding a sequence of events.
    pub fn apply_all(&self, events: impl IntoIterator<Item = ViewerEvent>) -> ViewerSession {
        events
            .into_iter()
            .fold(self.clone(), |session, event| session.apply(event))
    }

    pub fn frame(&self) -> ViewerFrame {
        let Some(layout) = self.layout.as_ref() else {
            return ViewerFrame {
                geometry: None,
                overlay: Vec::new(),
                lens: None,
                magnifier: MagnifierView::Placeholder,
            };
        };

        let window = &self.config.viewport;
        let lens = self.cursor.map(|c| {
            let corner = layout.geometry.display_to_container(c.origin());
            LensRect {
                left: corner.x,
                top: corner.y,
                width: window.width,
                height: window.height,
            }
        });

        ViewerFrame {
            geometry: Some(layout.geometry),
            overlay: project_all(&layout.boxes, &layout.geometry),
            lens,
            magnifier: project_magnified(
                self.cursor.as_ref(),
                &layout.boxes,
                &layout.geometry,
                window,
                self.config.zoom_factor,
            ),
        }
    }

    fn relayout(&mut self, container: Size) {
        let Some(intrinsic) = self.intrinsic else {
            return;
        };
        let Some(rendered) = fit_image(container, intrinsic, self.config.fit) else {
            trace!("Image not measured yet, geometry left unresolved");
            self.layout = None;
            self.cursor = None;
            return;
        };

        let geometry = resolve(container, rendered.size);
        let boxes = to_display_space(&self.raw_boxes, self.config.detection_space, &rendered);
        self.layout = Some(Layout {
            container,
            rendered,
            geometry,
            boxes: Arc::from(boxes),
        });
        self.retrack();
    }

    fn retrack(&mut self) {
        self.cursor = match (self.pointer, self.layout.as_ref()) {
            (Some(pointer), Some(layout)) => {
                Some(track(pointer, &layout.geometry, &self.config.viewport))
            }
            _ => None,
        };
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
