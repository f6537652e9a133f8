use std::path::PathBuf;

use slidescope_core::payload::PatientRecord;
use slidescope_core::summary::CellSummary;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub image_path: Option<PathBuf>,
    pub payload_path: Option<PathBuf>,

    /// Patient metadata from the last payload, if any.
    pub patient: Option<PatientRecord>,
    pub cell_summary: CellSummary,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
