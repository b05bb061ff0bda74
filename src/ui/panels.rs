use eframe::egui::{Color32, RichText, Ui};

use crate::data::model::Dataset;
use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the navigation sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(6.0);
        ui.label(
            RichText::new("🌾 Pesticides Use")
                .size(20.0)
                .color(Color32::from_rgb(110, 170, 90)),
        );
    });
    ui.add_space(6.0);

    ui.heading("Navigation");
    ui.separator();

    ui.strong("Go to");
    let mut page = state.page;
    for option in Page::ALL {
        ui.radio_value(&mut page, option, option.label());
    }
    state.set_page(page);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status strip above the page.
pub fn top_bar(ui: &mut Ui, dataset: &Dataset, source: &str) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("Pesticides Use Dashboard").strong());
        ui.separator();
        ui.label(format!(
            "{} rows, {} areas loaded from {source}",
            dataset.len(),
            dataset.areas.len()
        ));
        if let Some((min, max)) = dataset.year_bounds {
            ui.separator();
            ui.label(format!("Years {min}–{max}"));
        }
    });
}

/// Shown in place of every page when the dataset cannot be loaded.
pub fn load_error(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(RichText::new(message).color(Color32::RED));
    });
}
