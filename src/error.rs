use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning loaded experiments into a plottable chart.
#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    /// Nothing survived the peak threshold, so there is no maximum to
    /// scale markers against.
    #[error("no data to plot: none of {loaded} experiment(s) reached the peak infection threshold")]
    NoQualifyingRecords { loaded: usize },

    /// `infectionRatio` was an empty array; its peak is undefined.
    #[error("{}: infectionRatio is empty", .path.display())]
    EmptySeries { path: PathBuf },
}
