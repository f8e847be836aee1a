// src/gui/components/product_table.rs
//
// Draws the shown products. Purely a view over `app.catalog`.

use eframe::egui::{self, Align, Color32, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::embed::EmbedResolver;
use crate::gui::app::App;

const AVAILABLE: Color32 = Color32::from_rgb(46, 160, 67);
const SOLD: Color32 = Color32::from_rgb(200, 70, 70);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let catalog = &app.catalog;

    if catalog.visible_count() == 0 {
        ui.centered_and_justified(|ui| {
            let msg = if app.running { "Loading…" } else { "No products match the current filters." };
            ui.label(msg);
        });
        return;
    }

    let show_notes = app.state.gui.show_notes;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(36.0))   // ID
        .column(Column::initial(110.0))          // Category
        .column(Column::initial(90.0))           // Gender
        .column(Column::initial(60.0))           // Size
        .column(Column::initial(100.0))          // Status
        .column(Column::initial(110.0));         // Links
    if show_notes {
        table = table.column(Column::remainder());
    }

    table
        .header(22.0, |mut header| {
            for h in ["ID", "Category", "Gender", "Size", "Status", "Post"] {
                header.col(|ui| { ui.strong(h); });
            }
            if show_notes {
                header.col(|ui| { ui.strong("Notes"); });
            }
        })
        .body(|body| {
            body.rows(22.0, catalog.visible_count(), |mut row| {
                let Some(p) = catalog.visible_at(row.index()) else { return };

                row.col(|ui| { ui.label(p.id().to_string()); });
                row.col(|ui| { ui.label(p.category()); });
                row.col(|ui| { ui.label(p.gender()); });
                row.col(|ui| { ui.label(p.size()); });
                row.col(|ui| {
                    let color = if p.is_available() { AVAILABLE } else { SOLD };
                    ui.label(RichText::new(p.status()).color(color));
                });
                row.col(|ui| {
                    ui.hyperlink_to("open", p.url());
                    if let Some(embed) = app.embeds.resolve(p.url()) {
                        ui.hyperlink_to("embed", embed);
                    }
                });
                if show_notes {
                    row.col(|ui| { ui.label(p.notes()); });
                }
            });
        });
}
