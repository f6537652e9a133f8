use std::path::Path;
use std::sync::mpsc;

use slidescope_core::io::image_io::load_rgba;
use slidescope_core::payload::load_payload;
use tracing::{info, warn};

use crate::convert::rgba_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the file-loading worker. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let result = match cmd {
                WorkerCommand::LoadImage { path } => handle_load_image(&path),
                WorkerCommand::LoadPayload { path } => handle_load_payload(&path),
            };
            if result_tx.send(result).is_err() {
                break;
            }
            ctx.request_repaint();
        }
    });

    cmd_tx
}

fn handle_load_image(path: &Path) -> WorkerResult {
    match load_rgba(path) {
        Ok(img) => {
            info!(path = %path.display(), width = img.width(), height = img.height(), "Image decoded");
            WorkerResult::ImageLoaded {
                path: path.to_path_buf(),
                image: rgba_to_color_image(&img),
            }
        }
        Err(e) => {
            warn!(path = %path.display(), "Image load failed: {e}");
            WorkerResult::Error {
                message: format!("Failed to open {}: {e}", path.display()),
            }
        }
    }
}

fn handle_load_payload(path: &Path) -> WorkerResult {
    match load_payload(path) {
        Ok(payload) => WorkerResult::PayloadLoaded {
            path: path.to_path_buf(),
            payload,
        },
        Err(e) => {
            warn!(path = %path.display(), "Payload load failed: {e}");
            WorkerResult::Error {
                message: format!("Failed to load {}: {e}", path.display()),
            }
        }
    }
}
