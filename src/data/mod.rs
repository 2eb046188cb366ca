/// Data layer: experiment records, loading, filtering and tiering.
///
/// Architecture:
/// ```text
///  experiment_*.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read files (name order) → Vec<Experiment>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  peak = max(infectionRatio), keep peak ≥ 0.125
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   tier    │  colour bucket + marker area relative to max peak
///   └──────────┘
///        │
///        ▼
///   ScatterChart
/// ```

pub mod chart;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sample;
pub mod tier;

use std::path::Path;

use anyhow::Result;

use model::ScatterChart;

/// Load a directory and build its chart.
pub fn load_chart(dir: &Path) -> Result<ScatterChart> {
    let experiments = loader::load_directory(dir)?;
    let chart = chart::build_chart(&experiments)?;
    log::info!(
        "Loaded {} experiments from {}: {} plotted, {} below threshold",
        chart.loaded,
        dir.display(),
        chart.len(),
        chart.discarded
    );
    Ok(chart)
}
