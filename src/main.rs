use std::path::PathBuf;

use anyhow::Result;
use eframe::egui;
use infection_scatter::app::ScatterApp;
use infection_scatter::data;
use infection_scatter::state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    // Only argument: the directory to scan (defaults to the working directory).
    let directory = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let chart = data::load_chart(&directory).inspect_err(|e| {
        log::error!("Failed to load {}: {e:#}", directory.display());
    })?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let state = AppState::new(directory, chart);
    eframe::run_native(
        "Infection Scatter",
        options,
        Box::new(move |_cc| Ok(Box::new(ScatterApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}
