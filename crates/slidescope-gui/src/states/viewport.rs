/// Main image display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Intrinsic image size in pixels.
    pub image_size: Option<[usize; 2]>,
    /// Set when a new image arrived and the session has not seen it yet.
    pub pending_load: bool,
    /// Screen rect of the viewer area, measured when it was last painted.
    pub container_rect: Option<egui::Rect>,
    /// Container size the session was last laid out against.
    pub container_size: Option<egui::Vec2>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            image_size: None,
            pending_load: false,
            container_rect: None,
            container_size: None,
        }
    }
}
