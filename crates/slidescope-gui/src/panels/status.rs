use crate::app::SlideApp;

pub fn show(ctx: &egui::Context, app: &mut SlideApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            if let Some(g) = app.session.geometry() {
                ui.label(format!(
                    "Displayed {:.0}x{:.0} at ({:.0}, {:.0})",
                    g.display_width, g.display_height, g.offset_x, g.offset_y
                ));
                ui.separator();
            }
            if let Some(c) = app.session.cursor() {
                ui.label(format!("Window ({:.0}, {:.0})", c.clamped_x, c.clamped_y));
                ui.separator();
            }
            let config = app.session.config();
            ui.label(format!(
                "Zoom: {}x  Fit: {}  Boxes: {} space",
                config.zoom_factor, config.fit, config.detection_space
            ));
        });

        ui.add_space(2.0);
    });
}
