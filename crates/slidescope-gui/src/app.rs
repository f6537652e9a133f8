use std::sync::mpsc;

use slidescope_core::geometry::{Point, Size};
use slidescope_core::session::{ViewerEvent, ViewerSession};
use slidescope_core::summary::summarize;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::worker;

pub struct SlideApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub session: ViewerSession,
    pub show_about: bool,
}

impl SlideApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            session: ViewerSession::default(),
            show_about: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { path, image } => {
                    let size = image.size;
                    let texture = ctx.load_texture("slide", image, egui::TextureOptions::LINEAR);
                    self.viewport.texture = Some(texture);
                    self.viewport.image_size = Some(size);
                    self.viewport.pending_load = true;
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{})",
                        path.display(),
                        size[0],
                        size[1]
                    ));
                    self.ui_state.image_path = Some(path);
                }
                WorkerResult::PayloadLoaded { path, payload } => {
                    self.ui_state.cell_summary = summarize(&payload.detections);
                    self.ui_state.add_log(format!(
                        "Loaded {} detections from {}",
                        payload.detections.len(),
                        path.display()
                    ));
                    self.ui_state.patient = Some(payload.patient);
                    self.ui_state.payload_path = Some(path);
                    self.dispatch(ViewerEvent::DetectionsLoaded(payload.detections));
                }
                WorkerResult::ConfigImported { config } => {
                    self.session = self.session.with_config(config);
                    self.ui_state.add_log("Config imported".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Advance the viewer session by one event.
    pub fn dispatch(&mut self, event: ViewerEvent) {
        self.session = self.session.apply(event);
    }

    /// Lay the session out against the viewer area measured last frame.
    fn sync_container(&mut self) {
        let (Some([w, h]), Some(rect)) = (self.viewport.image_size, self.viewport.container_rect)
        else {
            return;
        };
        let container = rect.size();
        let size = Size::new(container.x as f64, container.y as f64);

        if self.viewport.pending_load {
            self.viewport.pending_load = false;
            self.viewport.container_size = Some(container);
            self.dispatch(ViewerEvent::ImageLoaded {
                container: size,
                intrinsic: Size::new(w as f64, h as f64),
            });
        } else if self.viewport.container_size != Some(container) {
            self.viewport.container_size = Some(container);
            self.dispatch(ViewerEvent::ContainerResized { container: size });
        }
    }

    /// Feed the pointer into the session before any panel reads it.
    fn track_pointer(&mut self, ctx: &egui::Context) {
        let Some(rect) = self.viewport.container_rect else {
            return;
        };
        // Windows and popups above the viewer hide it from the pointer.
        let hover = ctx.pointer_hover_pos().filter(|&pos| {
            ctx.layer_id_at(pos)
                .map_or(true, |layer| layer.order == egui::Order::Background)
        });
        if let Some(event) = pointer_event(rect, hover, self.session.is_hovering()) {
            self.dispatch(event);
        }
    }
}

/// Session event for a pointer at `hover`, given the viewer area `rect`.
fn pointer_event(
    rect: egui::Rect,
    hover: Option<egui::Pos2>,
    hovering: bool,
) -> Option<ViewerEvent> {
    match hover.filter(|pos| rect.contains(*pos)) {
        Some(pos) => {
            let local = pos - rect.min;
            Some(ViewerEvent::PointerMoved(Point::new(
                local.x as f64,
                local.y as f64,
            )))
        }
        None if hovering => Some(ViewerEvent::PointerLeft),
        None => None,
    }
}

impl eframe::App for SlideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.sync_container();
        self.track_pointer(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::patient::show(ctx, self);

        // Both image panels paint from the same snapshot.
        let frame = self.session.frame();
        panels::magnifier::show(ctx, self, &frame);
        panels::viewer::show(ctx, self, &frame);

        // About dialog
        if self.show_about {
            egui::Window::new("About Slidescope")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Slidescope");
                        ui.label("Slide detection viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use slidescope_core::magnifier::MagnifierView;

    use super::*;

    fn viewer_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(200.0, 40.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_pointer_inside_is_local() {
        let event = pointer_event(viewer_rect(), Some(egui::pos2(550.0, 290.0)), false);
        assert_eq!(
            event,
            Some(ViewerEvent::PointerMoved(Point::new(350.0, 250.0)))
        );
    }

    #[test]
    fn test_pointer_outside_leaves_once() {
        let outside = Some(egui::pos2(10.0, 10.0));
        assert_eq!(
            pointer_event(viewer_rect(), outside, true),
            Some(ViewerEvent::PointerLeft)
        );
        assert_eq!(pointer_event(viewer_rect(), outside, false), None);
        assert_eq!(pointer_event(viewer_rect(), None, false), None);
    }

    #[test]
    fn test_lens_and_magnifier_share_one_cursor() {
        let session = ViewerSession::default().apply_all([
            ViewerEvent::ImageLoaded {
                container: Size::new(800.0, 600.0),
                intrinsic: Size::new(800.0, 600.0),
            },
            pointer_event(viewer_rect(), Some(egui::pos2(550.0, 290.0)), false)
                .expect("pointer inside viewer"),
        ]);
        let frame = session.frame();
        let lens = frame.lens.expect("lens while hovering");
        let MagnifierView::Active(view) = frame.magnifier else {
            panic!("magnifier should be active");
        };
        let zoom = session.config().zoom_factor;
        assert_eq!(view.background.offset.x, -lens.left * zoom);
        assert_eq!(view.background.offset.y, -lens.top * zoom);
    }
}
