// src/gui/components/filter_panel.rs
//
// One checkbox group per facet. "All" is checked while the facet has no
// selected values; picking a value unchecks it, checking "All" clears the facet.

use eframe::egui;

use crate::data::Facet;
use crate::gui::app::App;

enum Change {
    Toggle(Facet, String),
    Clear(Facet),
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Filters");
    ui.separator();

    let mut changes = Vec::new();

    egui::ScrollArea::vertical()
        .id_salt("filter_panel_scroll")
        .show(ui, |ui| {
            for facet in Facet::ALL {
                let values = app.catalog.facet_values(facet);
                let filters = app.catalog.filters();

                egui::CollapsingHeader::new(facet.label())
                    .default_open(true)
                    .show(ui, |ui| {
                        let mut all = filters.selected(facet).is_empty();
                        if ui.checkbox(&mut all, "All").changed() && all {
                            changes.push(Change::Clear(facet));
                        }
                        for v in values {
                            let mut on = filters.is_selected(facet, &v);
                            let label = if v.is_empty() { "(blank)" } else { v.as_str() };
                            if ui.checkbox(&mut on, label).changed() {
                                changes.push(Change::Toggle(facet, v.clone()));
                            }
                        }
                    });
            }
        });

    if changes.is_empty() { return; }

    app.catalog.update_filters(|f| {
        for c in &changes {
            match c {
                Change::Toggle(facet, v) => { f.toggle(*facet, v); }
                Change::Clear(facet) => f.clear(*facet),
            }
        }
    });
    logf!(
        "UI: Filters changed ({} of {} shown)",
        app.catalog.visible_count(),
        app.catalog.total_count()
    );
}
