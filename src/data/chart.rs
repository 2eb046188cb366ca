use crate::error::ChartError;

use super::filter::retained;
use super::model::{Experiment, PlotPoint, ScatterChart};
use super::tier::{classify, marker_area};

/// Turn loaded experiments into the plottable dataset.
///
/// Pure: no I/O, and the output depends only on the input order. Fails with
/// [`ChartError::NoQualifyingRecords`] instead of dividing by a zero maximum.
pub fn build_chart(experiments: &[Experiment]) -> Result<ScatterChart, ChartError> {
    let kept = retained(experiments)?;

    let max_peak = kept.iter().map(|(_, peak)| *peak).fold(0.0, f64::max);
    if kept.is_empty() || max_peak <= 0.0 {
        return Err(ChartError::NoQualifyingRecords {
            loaded: experiments.len(),
        });
    }

    let points: Vec<PlotPoint> = kept
        .iter()
        .map(|(exp, peak)| PlotPoint {
            name: exp.name(),
            kill_rate: exp.record.kill_rate,
            rescue_rate: exp.record.rescue_rate,
            peak: *peak,
            area: marker_area(*peak, max_peak),
            tier: classify(*peak, max_peak),
            start_time: exp.record.start_time.clone(),
            simulation_length: exp.record.simulation_length,
            water_ratio: exp.record.water_ratio,
            infected_males_at_start: exp.record.infected_males_at_start,
            infected_females_at_start: exp.record.infected_females_at_start,
        })
        .collect();

    Ok(ScatterChart {
        discarded: experiments.len() - points.len(),
        loaded: experiments.len(),
        points,
        max_peak,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::data::filter::PEAK_THRESHOLD;
    use crate::data::model::{ExperimentRecord, Tier};
    use crate::data::tier::MAX_MARKER_AREA;

    fn experiment(name: &str, kill: f64, rescue: f64, series: &[f64]) -> Experiment {
        Experiment {
            path: PathBuf::from(name),
            record: ExperimentRecord::new(kill, rescue, series.to_vec()),
        }
    }

    #[test]
    fn single_qualifying_experiment_is_high_with_full_area() {
        let chart = build_chart(&[experiment("a", 0.1, 0.9, &[0.3, 0.5])]).unwrap();
        assert_eq!(chart.len(), 1);
        assert_eq!(chart.max_peak, 0.5);
        let p = &chart.points[0];
        assert_eq!((p.kill_rate, p.rescue_rate), (0.1, 0.9));
        assert_eq!(p.tier, Tier::High);
        assert_eq!(p.area, MAX_MARKER_AREA);
    }

    #[test]
    fn nothing_above_threshold_is_no_data() {
        let err = build_chart(&[experiment("a", 0.1, 0.9, &[0.05, 0.1])]).unwrap_err();
        assert_eq!(err, ChartError::NoQualifyingRecords { loaded: 1 });
    }

    #[test]
    fn empty_input_is_no_data() {
        assert_eq!(
            build_chart(&[]).unwrap_err(),
            ChartError::NoQualifyingRecords { loaded: 0 }
        );
    }

    #[test]
    fn threshold_peak_next_to_half_is_medium() {
        let chart = build_chart(&[
            experiment("a", 0.2, 0.2, &[0.5]),
            experiment("b", 0.4, 0.4, &[0.125]),
        ])
        .unwrap();
        assert_eq!(chart.points[0].tier, Tier::High);
        assert_eq!(chart.points[1].tier, Tier::Medium);
        assert_eq!(chart.points[1].area, 250.0);
    }

    #[test]
    fn every_tier_is_reachable() {
        let chart = build_chart(&[
            experiment("hi", 0.0, 0.0, &[1.0]),
            experiment("mh", 0.0, 0.0, &[0.5]),
            experiment("me", 0.0, 0.0, &[0.25]),
            experiment("lo", 0.0, 0.0, &[0.125]),
            experiment("gone", 0.0, 0.0, &[0.1]),
        ])
        .unwrap();
        let tiers: Vec<_> = chart.points.iter().map(|p| p.tier).collect();
        assert_eq!(tiers, [Tier::High, Tier::MediumHigh, Tier::Medium, Tier::Low]);
        assert_eq!(chart.loaded, 5);
        assert_eq!(chart.discarded, 1);
        assert_eq!(chart.tier_counts()[&Tier::Low], 1);
    }

    #[test]
    fn retained_points_respect_threshold_and_scale() {
        let exps: Vec<_> = (0..40)
            .map(|i| {
                let peak = i as f64 / 40.0;
                experiment(&format!("e{i}"), 0.0, 0.0, &[0.0, peak])
            })
            .collect();
        let chart = build_chart(&exps).unwrap();
        assert!(chart.points.iter().all(|p| p.peak >= PEAK_THRESHOLD));
        assert!(chart.points.iter().all(|p| p.area > 0.0 && p.area <= MAX_MARKER_AREA));
        assert!(chart.points.windows(2).all(|w| w[0].area < w[1].area));
        assert_eq!(chart.points.last().map(|p| p.area), Some(MAX_MARKER_AREA));
        assert_eq!(chart.loaded, chart.len() + chart.discarded);
    }

    #[test]
    fn points_carry_file_name_and_run_details() {
        let mut exp = experiment("runs/experiment_7.json", 0.3, 0.6, &[0.2, 0.4]);
        exp.record.water_ratio = Some(0.25);
        exp.record.simulation_length = Some(2);
        let chart = build_chart(&[exp]).unwrap();
        let p = &chart.points[0];
        assert_eq!(p.name, "experiment_7.json");
        assert_eq!(p.water_ratio, Some(0.25));
        assert_eq!(p.simulation_length, Some(2));
    }

    #[test]
    fn building_twice_gives_the_same_chart() {
        let exps = vec![
            experiment("a", 0.1, 0.2, &[0.2, 0.7]),
            experiment("b", 0.3, 0.4, &[0.15]),
        ];
        assert_eq!(build_chart(&exps).unwrap(), build_chart(&exps).unwrap());
    }
}
