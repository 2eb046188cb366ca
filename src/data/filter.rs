use crate::error::ChartError;

use super::model::Experiment;

// ---------------------------------------------------------------------------
// Peak threshold: experiments that never got going are dropped
// ---------------------------------------------------------------------------

/// Minimum peak infection ratio an experiment needs to be plotted.
pub const PEAK_THRESHOLD: f64 = 0.125;

/// Whether an experiment with this peak is kept.
pub fn passes_threshold(peak: f64) -> bool {
    peak >= PEAK_THRESHOLD
}

/// Pair every experiment that passes the threshold with its peak.
///
/// Order is preserved. An empty `infectionRatio` anywhere in the input is an
/// error, even if other experiments would qualify.
pub fn retained(experiments: &[Experiment]) -> Result<Vec<(&Experiment, f64)>, ChartError> {
    let mut kept = Vec::with_capacity(experiments.len());
    for exp in experiments {
        let peak = exp.record.peak().ok_or_else(|| ChartError::EmptySeries {
            path: exp.path.clone(),
        })?;
        if passes_threshold(peak) {
            kept.push((exp, peak));
        } else {
            log::debug!("{}: peak {peak:.4} below threshold, skipped", exp.name());
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::data::model::ExperimentRecord;

    fn experiment(name: &str, series: &[f64]) -> Experiment {
        Experiment {
            path: PathBuf::from(name),
            record: ExperimentRecord::new(0.5, 0.5, series.to_vec()),
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(passes_threshold(0.125));
        assert!(!passes_threshold(0.124_999));
    }

    #[test]
    fn drops_low_peaks_and_keeps_order() {
        let exps = vec![
            experiment("a", &[0.3, 0.5]),
            experiment("b", &[0.05, 0.1]),
            experiment("c", &[0.125]),
        ];
        let kept = retained(&exps).unwrap();
        let names: Vec<_> = kept.iter().map(|(e, _)| e.name()).collect();
        assert_eq!(names, ["a", "c"]);
        assert_eq!(kept[0].1, 0.5);
        assert_eq!(kept[1].1, 0.125);
    }

    #[test]
    fn empty_series_is_reported_with_its_path() {
        let exps = vec![experiment("a", &[0.3]), experiment("broken", &[])];
        assert_eq!(
            retained(&exps).unwrap_err(),
            ChartError::EmptySeries {
                path: PathBuf::from("broken")
            }
        );
    }
}
