pub mod normalize;

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::consts::DETECTION_TUPLE_LEN;
use crate::detection::DetectionBox;
use crate::error::{Result, SlideError};

pub use normalize::normalize_object_literal;

/// Patient metadata shown next to the slide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub patient_id: String,
    pub date: String,
    pub sample_type: String,
}

/// A parsed slide payload: patient metadata plus detections in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlidePayload {
    pub patient: PatientRecord,
    pub detections: Vec<DetectionBox>,
}

#[derive(Deserialize)]
struct RawPayload {
    #[serde(default)]
    patient_id: Value,
    #[serde(default)]
    date: Value,
    #[serde(default)]
    sample_type: Value,
    #[serde(default)]
    inference_results: Value,
}

/// Read and parse a payload file.
pub fn load_payload(path: &Path) -> Result<SlidePayload> {
    let text = std::fs::read_to_string(path)?;
    let payload = parse_payload(&text)?;
    debug!(
        path = %path.display(),
        detections = payload.detections.len(),
        "Payload loaded"
    );
    Ok(payload)
}

/// Parse a payload document.
///
/// The outer document must be valid JSON. Problems inside
/// `inference_results` never fail the parse: they are logged and yield an
/// empty detection list.
pub fn parse_payload(text: &str) -> Result<SlidePayload> {
    let raw: RawPayload =
        serde_json::from_str(text).map_err(|e| SlideError::InvalidPayload(e.to_string()))?;

    let patient = PatientRecord {
        patient_id: value_text(&raw.patient_id),
        date: value_text(&raw.date),
        sample_type: value_text(&raw.sample_type),
    };

    let detections = match detection_results(&raw.inference_results) {
        Ok(entries) => parse_detections(entries),
        Err(reason) => {
            warn!("Detection results unavailable, showing none: {reason}");
            Vec::new()
        }
    };

    Ok(SlidePayload {
        patient,
        detections,
    })
}

/// Parse `inference_results` when it arrives as a string rather than an object.
pub fn parse_inference_text(text: &str) -> std::result::Result<Value, String> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(_) => serde_json::from_str(&normalize_object_literal(text))
            .map_err(|e| format!("inference_results is not parseable: {e}")),
    }
}

fn detection_results(inference: &Value) -> std::result::Result<Vec<Value>, String> {
    let parsed;
    let inference = match inference {
        Value::String(text) => {
            parsed = parse_inference_text(text)?;
            &parsed
        }
        Value::Null => return Err("inference_results missing".into()),
        other => other,
    };

    match inference.pointer("/output/detection_results") {
        Some(Value::Array(entries)) => Ok(entries.clone()),
        Some(_) => Err("output.detection_results is not a list".into()),
        None => Err("output.detection_results missing".into()),
    }
}

/// Convert `[x1, y1, x2, y2, label]` tuples, skipping malformed entries.
pub fn parse_detections(entries: Vec<Value>) -> Vec<DetectionBox> {
    let mut boxes = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        match parse_detection(entry) {
            Some(b) => boxes.push(b),
            None => warn!(index = idx, entry = %entry, "Skipping malformed detection"),
        }
    }
    boxes
}

fn parse_detection(entry: &Value) -> Option<DetectionBox> {
    let items = entry.as_array()?;
    if items.len() != DETECTION_TUPLE_LEN {
        return None;
    }

    let mut coords = [0.0f64; 4];
    for (slot, item) in coords.iter_mut().zip(items) {
        let v = item.as_f64()?;
        if !v.is_finite() {
            return None;
        }
        *slot = v;
    }

    let label = items[4].as_str()?.trim();
    if label.is_empty() {
        return None;
    }

    Some(DetectionBox::new(
        coords[0], coords[1], coords[2], coords[3], label,
    ))
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
