use console::Style;
use slidescope_core::config::ViewerConfig;
use slidescope_core::geometry::{ImageGeometry, Size};
use slidescope_core::magnifier::MagnifierView;
use slidescope_core::overlay::DisplayBox;
use slidescope_core::payload::PatientRecord;
use slidescope_core::summary::CellSummary;
use slidescope_core::viewport::CursorState;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

fn title(s: &Styles, text: &str) {
    println!();
    println!("  {}", s.title.apply_to(text));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(text.chars().count())));
    println!();
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

pub fn print_patient(patient: &PatientRecord) {
    let s = Styles::new();
    title(&s, "Patient Information");
    println!("  {:<14}{}", s.label.apply_to("Patient ID"), s.value.apply_to(or_dash(&patient.patient_id)));
    println!("  {:<14}{}", s.label.apply_to("Date"), s.value.apply_to(or_dash(&patient.date)));
    println!("  {:<14}{}", s.label.apply_to("Sample Type"), s.value.apply_to(or_dash(&patient.sample_type)));
}

pub fn print_cell_counts(summary: &CellSummary) {
    let s = Styles::new();
    println!();
    println!("  {}", s.header.apply_to("Cell Counts"));
    if summary.rows.is_empty() {
        println!("    {}", s.disabled.apply_to("no detections"));
        return;
    }
    println!(
        "    {:<20}{:>8}{:>12}",
        s.label.apply_to("Cell Type"),
        s.label.apply_to("Count"),
        s.label.apply_to("Percentage")
    );
    for row in &summary.rows {
        println!(
            "    {:<20}{:>8}{:>11.1}%",
            row.label, row.count, row.percentage
        );
    }
    println!("    {:<20}{:>8}", s.value.apply_to("Total"), s.value.apply_to(summary.total));
}

pub fn print_layout(config: &ViewerConfig, container: Size, intrinsic: Size, geometry: &ImageGeometry) {
    let s = Styles::new();
    title(&s, "Viewer Layout");
    println!(
        "  {:<14}{}",
        s.label.apply_to("Fit"),
        s.method.apply_to(config.fit)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Detections"),
        s.method.apply_to(format!("{} space", config.detection_space))
    );
    println!(
        "  {:<14}{}x{}",
        s.label.apply_to("Container"),
        container.width,
        container.height
    );
    println!(
        "  {:<14}{}x{}",
        s.label.apply_to("Image"),
        intrinsic.width,
        intrinsic.height
    );
    println!(
        "  {:<14}{:.1}x{:.1} at ({:.1}, {:.1})",
        s.label.apply_to("Displayed"),
        geometry.display_width,
        geometry.display_height,
        geometry.offset_x,
        geometry.offset_y
    );
    println!(
        "  {:<14}{}x{} @ {}x",
        s.label.apply_to("Magnifier"),
        config.viewport.width,
        config.viewport.height,
        config.zoom_factor
    );
}

pub fn print_cursor(cursor: Option<&CursorState>) {
    let s = Styles::new();
    println!();
    match cursor {
        Some(c) => println!(
            "  {:<14}({:.1}, {:.1})",
            s.label.apply_to("Window"),
            c.clamped_x,
            c.clamped_y
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Window"),
            s.disabled.apply_to("not hovering")
        ),
    }
}

pub fn print_overlay(boxes: &[DisplayBox], limit: usize) {
    let s = Styles::new();
    println!();
    println!("  {} ({})", s.header.apply_to("Overlay"), boxes.len());
    for b in boxes.iter().take(limit) {
        println!(
            "    {:<16}left {:>8.1}  top {:>8.1}  {:>7.1}x{:<7.1}",
            b.label, b.left, b.top, b.width, b.height
        );
    }
    if boxes.len() > limit {
        println!("    {}", s.disabled.apply_to(format!("... {} more", boxes.len() - limit)));
    }
}

pub fn print_magnifier(view: &MagnifierView) {
    let s = Styles::new();
    println!();
    let MagnifierView::Active(active) = view else {
        println!(
            "  {}  {}",
            s.header.apply_to("Magnifier"),
            s.disabled.apply_to("placeholder")
        );
        return;
    };
    println!(
        "  {} {}x{} pane, background {:.1}x{:.1} at ({:.1}, {:.1})",
        s.header.apply_to("Magnifier"),
        active.pane.width,
        active.pane.height,
        active.background.size.width,
        active.background.size.height,
        active.background.offset.x,
        active.background.offset.y
    );
    if active.boxes.is_empty() {
        println!("    {}", s.disabled.apply_to("no boxes in view"));
    }
    for b in &active.boxes {
        println!(
            "    #{:<4}{:<16}left {:>8.1}  top {:>8.1}  {:>7.1}x{:<7.1}",
            b.index, b.label, b.left, b.top, b.width, b.height
        );
    }
}
