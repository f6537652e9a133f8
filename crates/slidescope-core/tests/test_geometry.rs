use approx::assert_relative_eq;

use slidescope_core::geometry::{fit_image, resolve, FitPolicy, Point, Size};

const CONTAINERS: [(f64, f64); 4] = [(800.0, 600.0), (600.0, 800.0), (1024.0, 1024.0), (333.0, 97.0)];
const IMAGES: [(f64, f64); 5] = [
    (800.0, 600.0),
    (2000.0, 1000.0),
    (1000.0, 2000.0),
    (64.0, 48.0),
    (40_000.0, 30_001.0),
];

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

#[test]
fn test_resolve_exact_fit_has_zero_offsets() {
    let g = resolve(Size::new(800.0, 600.0), Size::new(800.0, 600.0));
    assert_eq!(g.offset_x, 0.0);
    assert_eq!(g.offset_y, 0.0);
    assert_eq!(g.display_width, 800.0);
    assert_eq!(g.display_height, 600.0);
}

#[test]
fn test_resolve_centres_smaller_image() {
    let g = resolve(Size::new(800.0, 600.0), Size::new(800.0, 400.0));
    assert_eq!(g.offset_x, 0.0);
    assert_eq!(g.offset_y, 100.0);
    assert_eq!(g.display_size(), Size::new(800.0, 400.0));
}

#[test]
fn test_container_display_roundtrip() {
    let g = resolve(Size::new(800.0, 600.0), Size::new(600.0, 600.0));
    let p = Point::new(123.5, 77.25);
    assert_eq!(g.display_to_container(g.container_to_display(p)), p);
    assert_eq!(g.container_to_display(Point::new(100.0, 0.0)), Point::new(0.0, 0.0));
}

// ---------------------------------------------------------------------------
// fit_image
// ---------------------------------------------------------------------------

#[test]
fn test_cover_crops_wide_image_horizontally() {
    let r = fit_image(
        Size::new(800.0, 600.0),
        Size::new(2000.0, 1000.0),
        FitPolicy::Cover,
    )
    .unwrap();
    assert_relative_eq!(r.scale, 0.6);
    assert_eq!(r.size, Size::new(800.0, 600.0));
    assert_relative_eq!(r.crop.x, 200.0, epsilon = 1e-9);
    assert_eq!(r.crop.y, 0.0);

    let (uv_min, uv_max) = r.uv_window();
    assert_relative_eq!(uv_min.x, 200.0 / 1200.0, epsilon = 1e-9);
    assert_relative_eq!(uv_max.x, 1000.0 / 1200.0, epsilon = 1e-9);
    assert_relative_eq!(uv_min.y, 0.0);
    assert_relative_eq!(uv_max.y, 1.0, epsilon = 1e-9);
}

#[test]
fn test_contain_letterboxes_wide_image() {
    let container = Size::new(800.0, 600.0);
    let r = fit_image(container, Size::new(2000.0, 1000.0), FitPolicy::Contain).unwrap();
    assert_relative_eq!(r.scale, 0.4);
    assert_relative_eq!(r.size.width, 800.0, epsilon = 1e-9);
    assert_relative_eq!(r.size.height, 400.0, epsilon = 1e-9);
    assert_eq!(r.crop, Point::new(0.0, 0.0));

    let g = resolve(container, r.size);
    assert_relative_eq!(g.offset_y, 100.0, epsilon = 1e-9);
}

#[test]
fn test_intrinsic_to_display_applies_scale_and_crop() {
    let r = fit_image(
        Size::new(800.0, 600.0),
        Size::new(2000.0, 1000.0),
        FitPolicy::Cover,
    )
    .unwrap();
    // Centre of the source image lands at the centre of the container.
    let p = r.intrinsic_to_display(Point::new(1000.0, 500.0));
    assert_relative_eq!(p.x, 400.0, epsilon = 1e-9);
    assert_relative_eq!(p.y, 300.0, epsilon = 1e-9);
}

#[test]
fn test_fit_requires_measured_sizes() {
    let good = Size::new(800.0, 600.0);
    assert!(fit_image(good, Size::new(0.0, 600.0), FitPolicy::Cover).is_none());
    assert!(fit_image(good, Size::new(800.0, 0.0), FitPolicy::Contain).is_none());
    assert!(fit_image(Size::new(0.0, 0.0), good, FitPolicy::Cover).is_none());
    assert!(fit_image(good, Size::new(f64::NAN, 10.0), FitPolicy::Cover).is_none());
}

// ---------------------------------------------------------------------------
// Offset invariants
// ---------------------------------------------------------------------------

#[test]
fn test_cover_offsets_non_negative() {
    for &(cw, ch) in &CONTAINERS {
        for &(iw, ih) in &IMAGES {
            let container = Size::new(cw, ch);
            let r = fit_image(container, Size::new(iw, ih), FitPolicy::Cover).unwrap();
            let g = resolve(container, r.size);
            assert!(g.offset_x >= 0.0, "{cw}x{ch} / {iw}x{ih}: {g:?}");
            assert!(g.offset_y >= 0.0, "{cw}x{ch} / {iw}x{ih}: {g:?}");
            assert_relative_eq!(g.offset_x, (cw - r.size.width) / 2.0);
            assert_relative_eq!(g.offset_y, (ch - r.size.height) / 2.0);
        }
    }
}

#[test]
fn test_displayed_image_stays_inside_container() {
    for policy in [FitPolicy::Cover, FitPolicy::Contain] {
        for &(cw, ch) in &CONTAINERS {
            for &(iw, ih) in &IMAGES {
                let container = Size::new(cw, ch);
                let r = fit_image(container, Size::new(iw, ih), policy).unwrap();
                let g = resolve(container, r.size);
                let right = g.offset_x + g.display_width;
                let bottom = g.offset_y + g.display_height;
                assert!(right <= cw + 1e-9, "{policy}: {right} > {cw}");
                assert!(bottom <= ch + 1e-9, "{policy}: {bottom} > {ch}");

                let fills_x = (right - cw).abs() < 1e-9 && g.offset_x.abs() < 1e-9;
                let fills_y = (bottom - ch).abs() < 1e-9 && g.offset_y.abs() < 1e-9;
                assert!(fills_x || fills_y, "{policy}: no axis fills container {g:?}");
            }
        }
    }
}
