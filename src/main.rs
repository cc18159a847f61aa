mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use eframe::egui;

use app::BikeDashboardApp;
use data::loader;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = loader::load_dataset(
        Path::new(loader::HOURLY_PATH),
        Path::new(loader::DAILY_PATH),
    )
    .context("loading the bike-share dataset")?;

    log::info!(
        "Loaded {} hourly and {} daily rows covering years {:?}",
        dataset.hourly.len(),
        dataset.daily.len(),
        dataset.years
    );
    if dataset.is_empty() {
        log::warn!("both source tables are empty; the charts will be blank");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bike Share Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(BikeDashboardApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard shell failed: {e}"))
}
