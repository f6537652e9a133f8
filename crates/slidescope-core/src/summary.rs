use crate::detection::DetectionBox;

/// Count for one detection label.
#[derive(Clone, Debug, PartialEq)]
pub struct CellCount {
    pub label: String,
    pub count: usize,
    /// Share of all detections, 0..=100.
    pub percentage: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellSummary {
    pub total: usize,
    /// One row per label, in order of first appearance.
    pub rows: Vec<CellCount>,
}

pub fn summarize(boxes: &[DetectionBox]) -> CellSummary {
    let mut rows: Vec<CellCount> = Vec::new();
    for b in boxes {
        match rows.iter_mut().find(|r| r.label == b.label) {
            Some(row) => row.count += 1,
            None => rows.push(CellCount {
                label: b.label.clone(),
                count: 1,
                percentage: 0.0,
            }),
        }
    }

    let total = boxes.len();
    for row in &mut rows {
        row.percentage = if total > 0 {
            row.count as f64 / total as f64 * 100.0
        } else {
            0.0
        };
    }

    CellSummary { total, rows }
}
