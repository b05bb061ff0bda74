use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::UsageRecord;
use crate::stats::SummaryStats;

// ---------------------------------------------------------------------------
// Data preview
// ---------------------------------------------------------------------------

/// Render the first rows of the dataset with every source column.
pub fn preview_table(ui: &mut Ui, columns: &[String], rows: &[UsageRecord]) {
    if columns.is_empty() {
        ui.label("The dataset has no columns.");
        return;
    }

    ui.push_id("data_preview", |ui: &mut Ui| {
        egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .columns(Column::auto().at_least(60.0).resizable(true), columns.len())
                .header(22.0, |mut header| {
                    for col in columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(col);
                        });
                    }
                })
                .body(|mut body| {
                    for rec in rows {
                        body.row(20.0, |mut row| {
                            for col in columns {
                                row.col(|ui: &mut Ui| {
                                    ui.label(rec.cell(col));
                                });
                            }
                        });
                    }
                });
        });
    });
}

// ---------------------------------------------------------------------------
// Statistics table
// ---------------------------------------------------------------------------

/// Render the descriptive statistics, one row per statistic.
pub fn stats_table(ui: &mut Ui, stats: &SummaryStats) {
    egui::Frame::new()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .corner_radius(5.0)
        .inner_margin(8.0)
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("summary_stats")
                .striped(true)
                .min_col_width(80.0)
                .spacing([16.0, 4.0])
                .show(ui, |ui: &mut Ui| {
                    ui.label("");
                    for col in &stats.columns {
                        ui.label(RichText::new(col.column).strong());
                    }
                    ui.end_row();

                    for (label, cells) in stats.formatted_rows() {
                        ui.label(RichText::new(label).strong());
                        for cell in cells {
                            ui.label(RichText::new(cell).monospace());
                        }
                        ui.end_row();
                    }
                });
        });
}
