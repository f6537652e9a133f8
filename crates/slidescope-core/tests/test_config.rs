use slidescope_core::config::ViewerConfig;
use slidescope_core::detection::DetectionSpace;
use slidescope_core::error::SlideError;
use slidescope_core::geometry::FitPolicy;

#[test]
fn test_default_config() {
    let c = ViewerConfig::default();
    assert_eq!(c.viewport.width, 100.0);
    assert_eq!(c.viewport.height, 100.0);
    assert_eq!(c.zoom_factor, 5.0);
    assert_eq!(c.fit, FitPolicy::Cover);
    assert_eq!(c.detection_space, DetectionSpace::Display);
    assert!(c.validate().is_ok());
}

#[test]
fn test_full_toml() {
    let text = r#"
zoom_factor = 4.0
fit = "Contain"
detection_space = "Intrinsic"

[viewport]
width = 80.0
height = 60.0
"#;
    let c: ViewerConfig = toml::from_str(text).unwrap();
    assert_eq!(c.zoom_factor, 4.0);
    assert_eq!(c.fit, FitPolicy::Contain);
    assert_eq!(c.detection_space, DetectionSpace::Intrinsic);
    assert_eq!((c.viewport.width, c.viewport.height), (80.0, 60.0));
}

#[test]
fn test_partial_toml_uses_defaults() {
    let c: ViewerConfig = toml::from_str("zoom_factor = 3.0\n").unwrap();
    assert_eq!(c.zoom_factor, 3.0);
    assert_eq!(c.viewport.width, 100.0);
    assert_eq!(c.fit, FitPolicy::Cover);
}

#[test]
fn test_partial_viewport_table_uses_defaults() {
    let c: ViewerConfig = toml::from_str("[viewport]\nwidth = 200.0\n").unwrap();
    assert_eq!(c.viewport.width, 200.0);
    assert_eq!(c.viewport.height, 100.0);
    assert!(c.validate().is_ok());
}

#[test]
fn test_toml_roundtrip_preserves_values() {
    let original = ViewerConfig {
        zoom_factor: 2.5,
        fit: FitPolicy::Contain,
        ..ViewerConfig::default()
    };
    let text = toml::to_string_pretty(&original).unwrap();
    let restored: ViewerConfig = toml::from_str(&text).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn test_validate_rejects_zero_zoom() {
    let c = ViewerConfig {
        zoom_factor: 0.0,
        ..ViewerConfig::default()
    };
    let err = c.validate().unwrap_err();
    assert!(matches!(err, SlideError::InvalidConfig(_)));
    assert!(err.to_string().contains("zoom_factor"), "got: {err}");
}

#[test]
fn test_validate_rejects_bad_window() {
    let mut c = ViewerConfig::default();
    c.viewport.height = -5.0;
    assert!(c.clone().validated().is_err());

    c.viewport.height = f64::NAN;
    assert!(c.validate().is_err());
}

#[test]
fn test_display_names() {
    assert_eq!(format!("{}", FitPolicy::Cover), "Cover");
    assert_eq!(format!("{}", DetectionSpace::Intrinsic), "Intrinsic");
}
