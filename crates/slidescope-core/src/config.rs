use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_ZOOM_FACTOR;
use crate::detection::DetectionSpace;
use crate::error::{Result, SlideError};
use crate::geometry::FitPolicy;
use crate::viewport::ViewportWindow;

/// Viewer tuning loaded from TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f64,
    #[serde(default)]
    pub fit: FitPolicy,
    #[serde(default)]
    pub detection_space: DetectionSpace,
    #[serde(default)]
    pub viewport: ViewportWindow,
}

fn default_zoom_factor() -> f64 {
    DEFAULT_ZOOM_FACTOR
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            fit: FitPolicy::default(),
            detection_space: DetectionSpace::default(),
            viewport: ViewportWindow::default(),
        }
    }
}

impl ViewerConfig {
    /// Reject values the projection math cannot work with.
    pub fn validate(&self) -> Result<()> {
        check_positive("viewport.width", self.viewport.width)?;
        check_positive("viewport.height", self.viewport.height)?;
        check_positive("zoom_factor", self.zoom_factor)?;
        Ok(())
    }

    /// Returns self after validation, for builder-style loading.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SlideError::InvalidConfig(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}
