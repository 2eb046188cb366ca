use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::data::load_chart;
use crate::data::model::{PlotPoint, ScatterChart, Tier};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Directory the current chart was loaded from.
    pub directory: PathBuf,

    /// Current chart. Kept when a later load fails.
    pub chart: Option<ScatterChart>,

    /// Tiers currently drawn. Hiding a tier does not change the chart.
    pub visible_tiers: BTreeSet<Tier>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// State for a chart that has already been loaded from `directory`.
    pub fn new(directory: PathBuf, chart: ScatterChart) -> Self {
        Self {
            directory,
            chart: Some(chart),
            visible_tiers: Tier::ALL.into_iter().collect(),
            status_message: None,
        }
    }

    /// Load `dir` and make it current. On failure the previous chart and
    /// directory stay and the error goes to the status line.
    pub fn open_directory(&mut self, dir: &Path) {
        match load_chart(dir) {
            Ok(chart) => {
                self.directory = dir.to_path_buf();
                self.chart = Some(chart);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", dir.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Re-read the current directory.
    pub fn reload(&mut self) {
        let dir = self.directory.clone();
        self.open_directory(&dir);
    }

    /// Show or hide one tier.
    pub fn toggle_tier(&mut self, tier: Tier) {
        if !self.visible_tiers.remove(&tier) {
            self.visible_tiers.insert(tier);
        }
    }

    /// Points of the current chart whose tier is visible.
    pub fn visible_points(&self) -> impl Iterator<Item = &PlotPoint> {
        self.chart
            .iter()
            .flat_map(|c| c.points.iter())
            .filter(move |p| self.visible_tiers.contains(&p.tier))
    }
}
