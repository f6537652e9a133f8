use image::{Rgba, RgbaImage};

use slidescope_core::error::SlideError;
use slidescope_core::geometry::Size;
use slidescope_core::io::image_io::{load_rgba, read_dimensions};

#[test]
fn test_read_dimensions_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slide.png");
    RgbaImage::from_pixel(32, 18, Rgba([200, 40, 40, 255]))
        .save(&path)
        .unwrap();

    assert_eq!(read_dimensions(&path).unwrap(), Size::new(32.0, 18.0));
}

#[test]
fn test_load_rgba_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slide.png");
    RgbaImage::from_pixel(4, 3, Rgba([1, 2, 3, 255])).save(&path).unwrap();

    let img = load_rgba(&path).unwrap();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(2, 1), &Rgba([1, 2, 3, 255]));
}

#[test]
fn test_missing_image_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_dimensions(&dir.path().join("absent.png")).unwrap_err();
    assert!(matches!(err, SlideError::Image(_) | SlideError::Io(_)), "got: {err}");
}
