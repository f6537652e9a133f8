use slidescope_core::magnifier::{pane_size, MagnifierView};
use slidescope_core::session::ViewerFrame;

use crate::app::SlideApp;
use crate::panels::{section_header, stroke_box, visible_uv};

pub fn show(ctx: &egui::Context, app: &mut SlideApp, frame: &ViewerFrame) {
    let config = app.session.config();
    let pane = pane_size(&config.viewport, config.zoom_factor);
    let pane = egui::vec2(pane.width as f32, pane.height as f32);

    egui::SidePanel::right("magnifier")
        .resizable(false)
        .exact_width(pane.x + 16.0)
        .show(ctx, |ui| {
            section_header(ui, "Zoomed View");

            let (pane_rect, _) = ui.allocate_exact_size(pane, egui::Sense::hover());
            let painter = ui.painter_at(pane_rect);
            painter.rect_filled(pane_rect, 0.0, egui::Color32::from_gray(30));

            let texture_id = app.viewport.texture.as_ref().map(|t| t.id());
            match (&frame.magnifier, texture_id) {
                (MagnifierView::Active(view), Some(texture_id)) => {
                    let bg = view.background;
                    let bg_rect = egui::Rect::from_min_size(
                        pane_rect.min + egui::vec2(bg.offset.x as f32, bg.offset.y as f32),
                        egui::vec2(bg.size.width as f32, bg.size.height as f32),
                    );
                    painter.image(texture_id, bg_rect, visible_uv(app), egui::Color32::WHITE);

                    for b in &view.boxes {
                        stroke_box(
                            &painter,
                            egui::Rect::from_min_size(
                                pane_rect.min + egui::vec2(b.left as f32, b.top as f32),
                                egui::vec2(b.width as f32, b.height as f32),
                            ),
                        );
                    }
                }
                _ => {
                    painter.text(
                        pane_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Hover over the main image to see zoomed view",
                        egui::FontId::proportional(14.0),
                        egui::Color32::from_gray(140),
                    );
                }
            }

            painter.rect_stroke(
                pane_rect,
                0.0,
                egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
                egui::epaint::StrokeKind::Inside,
            );
        });
}
