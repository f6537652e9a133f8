use approx::assert_relative_eq;

use slidescope_core::detection::DetectionBox;
use slidescope_core::summary::summarize;

fn labelled(labels: &[&str]) -> Vec<DetectionBox> {
    labels
        .iter()
        .map(|l| DetectionBox::new(0.0, 0.0, 1.0, 1.0, *l))
        .collect()
}

#[test]
fn test_counts_in_first_appearance_order() {
    let s = summarize(&labelled(&["neutrophil", "lymphocyte", "neutrophil", "monocyte"]));
    assert_eq!(s.total, 4);
    let rows: Vec<(&str, usize)> = s.rows.iter().map(|r| (r.label.as_str(), r.count)).collect();
    assert_eq!(rows, [("neutrophil", 2), ("lymphocyte", 1), ("monocyte", 1)]);
}

#[test]
fn test_percentages() {
    let s = summarize(&labelled(&["a", "a", "b"]));
    assert_relative_eq!(s.rows[0].percentage, 200.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(s.rows[1].percentage, 100.0 / 3.0, epsilon = 1e-9);
    let sum: f64 = s.rows.iter().map(|r| r.percentage).sum();
    assert_relative_eq!(sum, 100.0, epsilon = 1e-9);
}

#[test]
fn test_empty_summary() {
    let s = summarize(&[]);
    assert_eq!(s.total, 0);
    assert!(s.rows.is_empty());
}
