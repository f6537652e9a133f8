use slidescope_core::session::{LensRect, ViewerFrame};

use crate::app::SlideApp;
use crate::panels::{stroke_box, visible_uv, LENS_COLOR};

pub fn show(ctx: &egui::Context, app: &mut SlideApp, frame: &ViewerFrame) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| ui.heading("Whole Slide Image"));
        ui.add_space(4.0);

        let rect = ui.available_rect_before_wrap();
        // The session is laid out against this rect at the start of the next pass.
        if app.viewport.container_rect != Some(rect) {
            app.viewport.container_rect = Some(rect);
            ctx.request_repaint();
        }
        paint_background(ui, rect);

        let Some(texture_id) = app.viewport.texture.as_ref().map(|t| t.id()) else {
            show_placeholder(ui);
            return;
        };

        ui.allocate_rect(rect, egui::Sense::hover());
        let Some(geometry) = frame.geometry else {
            return;
        };

        let painter = ui.painter_at(rect);
        let img_rect = egui::Rect::from_min_size(
            rect.min + egui::vec2(geometry.offset_x as f32, geometry.offset_y as f32),
            egui::vec2(geometry.display_width as f32, geometry.display_height as f32),
        );
        painter.image(texture_id, img_rect, visible_uv(app), egui::Color32::WHITE);

        // Boxes are drawn against the container, so they carry the image offset.
        for b in &frame.overlay {
            let b = b.in_container(&geometry);
            stroke_box(
                &painter,
                egui::Rect::from_min_size(
                    rect.min + egui::vec2(b.left as f32, b.top as f32),
                    egui::vec2(b.width as f32, b.height as f32),
                ),
            );
        }

        if let Some(lens) = frame.lens {
            draw_lens(&painter, rect, &lens);
        }
    });
}

fn draw_lens(painter: &egui::Painter, container: egui::Rect, lens: &LensRect) {
    let lens_rect = egui::Rect::from_min_size(
        container.min + egui::vec2(lens.left as f32, lens.top as f32),
        egui::vec2(lens.width as f32, lens.height as f32),
    );
    painter.rect_filled(lens_rect, 0.0, LENS_COLOR.gamma_multiply(0.2));
    painter.rect_stroke(
        lens_rect,
        0.0,
        egui::Stroke::new(2.0, LENS_COLOR),
        egui::epaint::StrokeKind::Inside,
    );
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a slide image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
