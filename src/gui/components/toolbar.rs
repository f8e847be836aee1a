// src/gui/components/toolbar.rs
//
// Refresh / reset / export row, product count, and the status + notice lines.

use eframe::egui::{self, Color32, widgets::Spinner};

use crate::gui::app::App;
use crate::config::options::ExportFormat;

const NOTICE: Color32 = Color32::from_rgb(214, 140, 30);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.add_enabled(!app.running, egui::Button::new("Refresh")).clicked() {
            app.refresh();
        }
        if app.running {
            ui.add(Spinner::new());
        }

        let filtered = app.catalog.filters().is_active();
        if ui.add_enabled(filtered, egui::Button::new("Reset filters")).clicked() {
            app.catalog.reset_filters();
            logf!("UI: Filters reset");
        }

        ui.separator();
        ui.label(format!(
            "{} of {} product(s)",
            app.catalog.visible_count(),
            app.catalog.total_count()
        ));
        if app.skipped > 0 {
            ui.weak(format!("({} row(s) skipped)", app.skipped));
        }

        ui.separator();
        ui.checkbox(&mut app.state.gui.show_filters, "Filters");
        ui.checkbox(&mut app.state.gui.show_notes, "Notes");

        ui.separator();
        let export = &mut app.state.options.export;
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.checkbox(&mut export.include_headers, "Headers");
        let can_export = app.catalog.visible_count() > 0;
        if ui.add_enabled(can_export, egui::Button::new("Export")).clicked() {
            app.export();
        }
    });

    ui.horizontal(|ui| {
        ui.label(app.status_text());
        if app.catalog.origin().is_fallback() {
            ui.colored_label(NOTICE, "• sample data");
        }
    });

    if let Some(msg) = app.notice_text() {
        ui.horizontal(|ui| {
            ui.colored_label(NOTICE, msg);
            if ui.small_button("✕").clicked() {
                app.dismiss_notice();
            }
        });
    }
}
