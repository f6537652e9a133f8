use std::path::Path;

use image::RgbaImage;

use crate::error::{Result, SlideError};
use crate::geometry::Size;

/// Read intrinsic pixel dimensions without decoding pixel data.
pub fn read_dimensions(path: &Path) -> Result<Size> {
    let (width, height) = image::image_dimensions(path)?;
    check_dimensions(width, height)?;
    Ok(Size::new(width as f64, height as f64))
}

/// Decode an image file into 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?.to_rgba8();
    check_dimensions(img.width(), img.height())?;
    Ok(img)
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(SlideError::InvalidDimensions { width, height });
    }
    Ok(())
}
