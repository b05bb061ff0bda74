mod app;
mod color;
mod config;
mod data;
mod geo;
mod state;
mod stats;
mod ui;
mod views;

use anyhow::{anyhow, Context};
use app::PesticideDashboard;
use config::DashboardConfig;
use data::loader::DatasetStore;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();

    // The dashboard cannot show anything without data, so a bad source file
    // stops the process before a window opens.
    let store = DatasetStore::new(&config.data_path);
    let state = match store.load() {
        Ok(dataset) => AppState::for_dataset(dataset),
        Err(e) => {
            log::error!("Failed to load {}: {e}", config.data_path.display());
            return Err(e).with_context(|| {
                format!("loading dataset from {}", config.data_path.display())
            });
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size)
            .with_title(&config.window_title),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(PesticideDashboard::new(config, store, state)))),
    )
    .map_err(|e| anyhow!("running the dashboard window: {e}"))
}
