use std::path::PathBuf;

use slidescope_core::config::ViewerConfig;
use slidescope_core::payload::SlidePayload;

/// Commands sent from the UI thread to the worker.
pub enum WorkerCommand {
    LoadImage { path: PathBuf },
    LoadPayload { path: PathBuf },
}

/// Results sent from the worker (and file dialogs) back to the UI thread.
pub enum WorkerResult {
    ImageLoaded {
        path: PathBuf,
        image: egui::ColorImage,
    },
    PayloadLoaded {
        path: PathBuf,
        payload: SlidePayload,
    },
    ConfigImported {
        config: ViewerConfig,
    },
    Error {
        message: String,
    },
}
