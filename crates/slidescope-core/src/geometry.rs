use serde::{Deserialize, Serialize};
use tracing::debug;

/// Width and height in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn is_measured(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

/// A position in pixels. Which space it lives in depends on context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How the rendering layer scales an image into its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitPolicy {
    /// Fill the container on both axes, cropping the overflow around the centre.
    #[default]
    Cover,
    /// Fit entirely inside the container, letterboxing the short axis.
    Contain,
}

impl std::fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitPolicy::Cover => write!(f, "Cover"),
            FitPolicy::Contain => write!(f, "Contain"),
        }
    }
}

/// The image element as the rendering layer lays it out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedImage {
    /// Visible element box, already clipped to the container.
    pub size: Size,
    /// Intrinsic-to-rendered scale factor (uniform on both axes).
    pub scale: f64,
    /// Origin of the visible region inside the fully scaled image.
    pub crop: Point,
    /// Intrinsic image dimensions the fit was computed from.
    pub intrinsic: Size,
}

impl RenderedImage {
    /// Texture-normalised `(min, max)` window of the visible region.
    pub fn uv_window(&self) -> (Point, Point) {
        let full_w = self.intrinsic.width * self.scale;
        let full_h = self.intrinsic.height * self.scale;
        (
            Point::new(self.crop.x / full_w, self.crop.y / full_h),
            Point::new(
                (self.crop.x + self.size.width) / full_w,
                (self.crop.y + self.size.height) / full_h,
            ),
        )
    }

    /// Map a point from intrinsic-image pixels into displayed-image pixels.
    pub fn intrinsic_to_display(&self, p: Point) -> Point {
        Point::new(p.x * self.scale - self.crop.x, p.y * self.scale - self.crop.y)
    }
}

/// Apply `policy` to an image of `intrinsic` size inside `container`.
///
/// Returns `None` until both sizes are measured, so geometry can never be
/// resolved against an image that has not finished loading.
pub fn fit_image(container: Size, intrinsic: Size, policy: FitPolicy) -> Option<RenderedImage> {
    if !container.is_measured() || !intrinsic.is_measured() {
        return None;
    }

    let sx = container.width / intrinsic.width;
    let sy = container.height / intrinsic.height;
    let scale = match policy {
        FitPolicy::Cover => sx.max(sy),
        FitPolicy::Contain => sx.min(sy),
    };

    let scaled = intrinsic.scaled(scale);
    let size = Size::new(
        scaled.width.min(container.width),
        scaled.height.min(container.height),
    );
    let crop = Point::new(
        ((scaled.width - size.width) / 2.0).max(0.0),
        ((scaled.height - size.height) / 2.0).max(0.0),
    );

    Some(RenderedImage {
        size,
        scale,
        crop,
        intrinsic,
    })
}

/// Placement of the displayed image inside its container.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageGeometry {
    /// Container-space left edge of the displayed image.
    pub offset_x: f64,
    /// Container-space top edge of the displayed image.
    pub offset_y: f64,
    pub display_width: f64,
    pub display_height: f64,
}

impl ImageGeometry {
    pub fn display_size(&self) -> Size {
        Size::new(self.display_width, self.display_height)
    }

    /// Convert a container-space point into displayed-image space.
    pub fn container_to_display(&self, p: Point) -> Point {
        Point::new(p.x - self.offset_x, p.y - self.offset_y)
    }

    /// Convert a displayed-image-space point into container space.
    pub fn display_to_container(&self, p: Point) -> Point {
        Point::new(p.x + self.offset_x, p.y + self.offset_y)
    }
}

/// Centre a rendered image inside its container.
///
/// Callers must only invoke this once the rendered size is measured
/// (see [`fit_image`]).
pub fn resolve(container: Size, rendered: Size) -> ImageGeometry {
    let geometry = ImageGeometry {
        offset_x: (container.width - rendered.width) / 2.0,
        offset_y: (container.height - rendered.height) / 2.0,
        display_width: rendered.width,
        display_height: rendered.height,
    };
    debug!(
        offset_x = geometry.offset_x,
        offset_y = geometry.offset_y,
        width = geometry.display_width,
        height = geometry.display_height,
        "Resolved image geometry"
    );
    geometry
}
