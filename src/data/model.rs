use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ExperimentRecord – one experiment_*.json file
// ---------------------------------------------------------------------------

/// A single experiment as written by the simulator.
///
/// Only `killRate`, `rescueRate` and `infectionRatio` are required; the rest
/// are carried for display and may be missing or `null` in older files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentRecord {
    pub kill_rate: f64,
    pub rescue_rate: f64,
    /// Fraction of infected mosquitoes, one entry per generation.
    pub infection_ratio: Vec<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infected_males_at_start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infected_females_at_start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation_length: Option<u64>,
}

impl ExperimentRecord {
    /// A record with only the required fields set.
    pub fn new(kill_rate: f64, rescue_rate: f64, infection_ratio: Vec<f64>) -> Self {
        Self {
            kill_rate,
            rescue_rate,
            infection_ratio,
            start_time: None,
            infected_males_at_start: None,
            infected_females_at_start: None,
            water_ratio: None,
            simulation_length: None,
        }
    }

    /// Peak infection ratio, or `None` for an empty series.
    pub fn peak(&self) -> Option<f64> {
        self.infection_ratio.iter().copied().reduce(f64::max)
    }
}

/// A record together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub path: PathBuf,
    pub record: ExperimentRecord,
}

impl Experiment {
    /// File name for labels; falls back to the full path.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

// ---------------------------------------------------------------------------
// Tier – severity bucket relative to the run's maximum peak
// ---------------------------------------------------------------------------

/// Ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    High,
    MediumHigh,
    Medium,
    Low,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::High, Tier::MediumHigh, Tier::Medium, Tier::Low];

    pub fn label(self) -> &'static str {
        match self {
            Tier::High => "high",
            Tier::MediumHigh => "medium-high",
            Tier::Medium => "medium",
            Tier::Low => "low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// PlotPoint / ScatterChart – the plottable dataset
// ---------------------------------------------------------------------------

/// One bubble on the scatter plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    /// File name of the source experiment, unique within a directory.
    pub name: String,
    pub kill_rate: f64,
    pub rescue_rate: f64,
    pub peak: f64,
    /// Marker area in square points; the largest peak gets the full area.
    pub area: f64,
    pub tier: Tier,
    pub start_time: Option<String>,
    pub simulation_length: Option<u64>,
    pub water_ratio: Option<f64>,
    pub infected_males_at_start: Option<f64>,
    pub infected_females_at_start: Option<f64>,
}

/// Everything the plot needs, computed once per load.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    /// Retained points, in file-name order.
    pub points: Vec<PlotPoint>,
    /// Largest peak among retained points; always positive.
    pub max_peak: f64,
    /// Number of experiments that were read.
    pub loaded: usize,
    /// Number of experiments dropped by the peak threshold.
    pub discarded: usize,
}

impl ScatterChart {
    /// Number of plotted points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Point count per tier, with zero entries for unused tiers.
    pub fn tier_counts(&self) -> BTreeMap<Tier, usize> {
        let mut counts: BTreeMap<Tier, usize> = Tier::ALL.iter().map(|t| (*t, 0)).collect();
        for p in &self.points {
            *counts.entry(p.tier).or_default() += 1;
        }
        counts
    }
}
