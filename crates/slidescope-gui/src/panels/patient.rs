use crate::app::SlideApp;
use crate::panels::section_header;

pub fn show(ctx: &egui::Context, app: &mut SlideApp) {
    egui::SidePanel::left("patient")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            section_header(ui, "Patient Information");
            match app.ui_state.patient {
                Some(ref patient) => {
                    egui::Grid::new("patient_grid")
                        .num_columns(2)
                        .spacing([12.0, 6.0])
                        .show(ui, |ui| {
                            field_row(ui, "Patient ID:", &patient.patient_id);
                            field_row(ui, "Date:", &patient.date);
                            field_row(ui, "Sample Type:", &patient.sample_type);
                        });
                }
                None => {
                    ui.weak("No patient data loaded");
                }
            }

            ui.add_space(12.0);
            section_header(ui, "Cell Counts");
            cell_count_table(ui, app);
        });
}

fn field_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.weak(label);
    ui.strong(if value.is_empty() { "-" } else { value });
    ui.end_row();
}

fn cell_count_table(ui: &mut egui::Ui, app: &SlideApp) {
    let summary = &app.ui_state.cell_summary;
    egui::Grid::new("cell_counts")
        .num_columns(3)
        .striped(true)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            ui.small("CELL TYPE");
            ui.small("COUNT");
            ui.small("PERCENTAGE");
            ui.end_row();

            for row in &summary.rows {
                ui.label(&row.label);
                ui.label(row.count.to_string());
                ui.label(format!("{:.1}%", row.percentage));
                ui.end_row();
            }
        });

    ui.add_space(4.0);
    ui.label(format!("Total: {}", summary.total));
}
