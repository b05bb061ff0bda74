use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::data::model::Dataset;
use crate::state::{AppState, Page};
use crate::ui::{plot, table};
use crate::views::{self, Selection};

const WARNING_COLOR: Color32 = Color32::from_rgb(230, 160, 40);

/// Draws one page into the central panel.
pub type PageRenderer = fn(&mut Ui, &Dataset, &mut AppState, &DashboardConfig);

impl Page {
    /// The renderer responsible for this page.
    pub fn renderer(self) -> PageRenderer {
        match self {
            Page::Home => home,
            Page::CountryAnalysis => country_analysis,
            Page::GlobalTrends => global_trends,
        }
    }
}

/// Render the selected page, scrolled as a whole.
pub fn central_panel(ui: &mut Ui, dataset: &Dataset, state: &mut AppState, config: &DashboardConfig) {
    let render = state.page.renderer();
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| render(ui, dataset, state, config));
}

fn notice(ui: &mut Ui, text: &str) {
    ui.colored_label(WARNING_COLOR, format!("⚠ {text}"));
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

fn home(ui: &mut Ui, dataset: &Dataset, _state: &mut AppState, config: &DashboardConfig) {
    let view = views::home_view(dataset, config.preview_rows, config.top_n);

    ui.heading("🌍 Crop Protection and Pesticide Usage Trends");
    ui.label(
        "Welcome to the Pesticides Use Dashboard. This app allows you to explore global \
         pesticide usage data.",
    );
    ui.add_space(12.0);

    ui.heading("📊 Overview of the Data");
    table::preview_table(ui, view.columns, view.preview);
    ui.add_space(12.0);

    ui.heading("🔍 Key Statistics");
    ui.label("Summary of pesticide usage data:");
    table::stats_table(ui, &view.stats);
    ui.add_space(12.0);

    ui.heading(format!("🌍 Top {} Countries by Pesticide Usage", config.top_n));
    if view.top_countries.is_empty() {
        notice(ui, "No data available.");
        return;
    }
    ui.label(
        RichText::new(format!("Top {} Countries by Total Pesticide Use", config.top_n)).strong(),
    );
    plot::ranked_bar_chart(
        ui,
        "top_countries",
        &view.top_countries,
        "Country",
        "Total Pesticide Use (tonnes)",
    );
}

// ---------------------------------------------------------------------------
// Country Analysis
// ---------------------------------------------------------------------------

fn country_analysis(ui: &mut Ui, dataset: &Dataset, state: &mut AppState, _config: &DashboardConfig) {
    ui.heading("🌍 Country-Specific Analysis");
    ui.label("Explore pesticide usage trends for specific countries over time.");
    ui.add_space(8.0);

    // ---- Country selector ----
    let mut country = state.country.clone().unwrap_or_default();
    egui::ComboBox::from_label("Select a Country")
        .selected_text(&country)
        .width(260.0)
        .show_ui(ui, |ui: &mut Ui| {
            for area in &dataset.areas {
                ui.selectable_value(&mut country, area.clone(), area);
            }
        });
    if !country.is_empty() {
        state.set_country(country.clone());
    }

    // ---- Year range: two linked handles ----
    let (min_year, max_year) = state.year_bounds;
    let mut start = state.year_range.start();
    let mut end = state.year_range.end();
    ui.label("Select Year Range");
    ui.add_enabled_ui(dataset.year_bounds.is_some(), |ui: &mut Ui| {
        let from = ui.add(egui::Slider::new(&mut start, min_year..=max_year).text("From"));
        let to = ui.add(egui::Slider::new(&mut end, min_year..=max_year).text("To"));
        if from.changed() && start > end {
            end = start;
        }
        if to.changed() && end < start {
            start = end;
        }
    });
    state.set_year_range(start, end);
    ui.add_space(8.0);

    match views::country_view(dataset, &country, state.year_range) {
        Selection::Data(trend) => {
            ui.heading(trend.subheader());
            plot::trend_line_chart(ui, &trend);
        }
        Selection::Empty { notice: text } => notice(ui, text),
    }
}

// ---------------------------------------------------------------------------
// Global Trends
// ---------------------------------------------------------------------------

fn global_trends(ui: &mut Ui, dataset: &Dataset, state: &mut AppState, _config: &DashboardConfig) {
    ui.heading("📈 Global Trends");
    ui.label("Explore global pesticide usage trends with an interactive map.");
    ui.add_space(8.0);

    let (min_year, max_year) = state.year_bounds;
    let mut year = state.year;
    ui.add_enabled_ui(dataset.year_bounds.is_some(), |ui: &mut Ui| {
        ui.add(egui::Slider::new(&mut year, min_year..=max_year).text("Select a Year"));
    });
    state.set_year(year);
    ui.add_space(8.0);

    match views::global_view(dataset, state.year) {
        Selection::Data(snapshot) => {
            plot::choropleth(ui, &snapshot);

            egui::CollapsingHeader::new(format!(
                "{} lowest reported totals in {}",
                snapshot.lowest.len(),
                snapshot.year
            ))
            .id_salt("lowest_users")
            .default_open(false)
            .show(ui, |ui: &mut Ui| {
                for (area, value) in &snapshot.lowest.entries {
                    ui.label(format!("{area}: {value:.2}"));
                }
            });

            if !snapshot.unmatched.is_empty() {
                if state.map_warned_year != Some(snapshot.year) {
                    log::warn!(
                        "{} areas in {} have no map location: {:?}",
                        snapshot.unmatched.len(),
                        snapshot.year,
                        snapshot.unmatched
                    );
                    state.map_warned_year = Some(snapshot.year);
                }
                egui::CollapsingHeader::new(format!(
                    "{} areas not shown on the map",
                    snapshot.unmatched.len()
                ))
                .id_salt("unmatched_areas")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    for area in &snapshot.unmatched {
                        let value = snapshot.value_of(area).unwrap_or(f64::NAN);
                        ui.label(format!("{area}: {value:.2}"));
                    }
                });
            }
        }
        Selection::Empty { notice: text } => notice(ui, text),
    }
}
