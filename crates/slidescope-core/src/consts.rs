/// Default magnifier capture width in displayed-image pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 100.0;

/// Default magnifier capture height in displayed-image pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 100.0;

/// Default ratio between magnified-pane pixels and displayed-image pixels.
pub const DEFAULT_ZOOM_FACTOR: f64 = 5.0;

/// Number of fields in a serialized detection tuple: x1, y1, x2, y2, label.
pub const DETECTION_TUPLE_LEN: usize = 5;
