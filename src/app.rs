use eframe::egui;

use crate::config::DashboardConfig;
use crate::data::loader::DatasetStore;
use crate::state::AppState;
use crate::ui::{pages, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PesticideDashboard {
    pub config: DashboardConfig,
    /// Read-once source of the dataset; every frame borrows from its cache.
    pub store: DatasetStore,
    pub state: AppState,
}

impl PesticideDashboard {
    pub fn new(config: DashboardConfig, store: DatasetStore, state: AppState) -> Self {
        Self {
            config,
            store,
            state,
        }
    }
}

impl eframe::App for PesticideDashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Left side panel: navigation ----
        egui::SidePanel::left("navigation")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        let dataset = match self.store.load() {
            Ok(ds) => ds,
            Err(e) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    panels::load_error(ui, &format!("Error: {e}"));
                });
                return;
            }
        };

        // ---- Top panel: dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, dataset, &self.store.path().display().to_string());
        });

        // ---- Central panel: selected page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            pages::central_panel(ui, dataset, &mut self.state, &self.config);
        });
    }
}
