pub mod magnifier;
pub mod menu_bar;
pub mod patient;
pub mod status;
pub mod viewer;

pub(crate) const BOX_COLOR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
pub(crate) const LENS_COLOR: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

pub(crate) fn section_header(ui: &mut egui::Ui, label: &str) {
    ui.add_space(4.0);
    ui.strong(label);
    ui.separator();
}

/// Texture UV window of the visible part of the slide.
pub(crate) fn visible_uv(app: &crate::app::SlideApp) -> egui::Rect {
    match app.session.layout() {
        Some(layout) => {
            let (min, max) = layout.rendered.uv_window();
            egui::Rect::from_min_max(
                egui::pos2(min.x as f32, min.y as f32),
                egui::pos2(max.x as f32, max.y as f32),
            )
        }
        None => egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
    }
}

/// Outline a detection rectangle.
pub(crate) fn stroke_box(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_stroke(
        rect,
        2.0,
        egui::Stroke::new(2.0, BOX_COLOR),
        egui::epaint::StrokeKind::Inside,
    );
}
