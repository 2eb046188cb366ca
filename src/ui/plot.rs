use std::collections::BTreeMap;
use std::f64::consts::PI;

use eframe::egui::Ui;
use egui_plot::{MarkerShape, Plot, PlotPoints, Points};

use crate::color::{fill_color, outline_color};
use crate::data::model::PlotPoint;
use crate::state::AppState;

pub const TITLE: &str = "Kill Rate vs. Rescue Rate vs. Max Infection Ratio";

// ---------------------------------------------------------------------------
// Hover text
// ---------------------------------------------------------------------------

/// Series name for one bubble. File names are unique within a directory, so
/// two experiments at the same rates still get different names.
pub fn series_name(p: &PlotPoint) -> String {
    format!("{}: {}", p.tier, p.name)
}

/// Multi-line run details shown under the coordinates.
pub fn point_detail(p: &PlotPoint) -> String {
    let mut text = format!("peak {:.3}", p.peak);
    if let Some(t) = &p.start_time {
        text.push_str(&format!("\nstarted {t}"));
    }
    if let Some(n) = p.simulation_length {
        text.push_str(&format!("\n{n} generations"));
    }
    if let Some(w) = p.water_ratio {
        text.push_str(&format!("\nwater ratio {w:.3}"));
    }
    if let (Some(m), Some(f)) = (p.infected_males_at_start, p.infected_females_at_start) {
        text.push_str(&format!("\ninfected at start: {m:.3} males, {f:.3} females"));
    }
    text
}

/// Series name → details, for the hover formatter.
pub fn hover_index<'a>(
    points: impl IntoIterator<Item = &'a PlotPoint>,
) -> BTreeMap<String, String> {
    points
        .into_iter()
        .map(|p| (series_name(p), point_detail(p)))
        .collect()
}

/// Tooltip for the hovered series; `name` is empty away from any marker.
pub fn hover_label(index: &BTreeMap<String, String>, name: &str, x: f64, y: f64) -> String {
    let coords = format!("Kill Rate: {x:.3}\nRescue Rate: {y:.3}");
    if name.is_empty() {
        return coords;
    }
    match index.get(name) {
        Some(detail) => format!("{name}\n{coords}\n{detail}"),
        None => format!("{name}\n{coords}"),
    }
}

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Marker radius for a given area in square points.
pub fn radius_for_area(area: f64) -> f32 {
    (area / PI).sqrt() as f32
}

/// Render the bubble scatter in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    if state.chart.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a folder of experiment_*.json files  (File → Open folder…)");
        });
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(TITLE);
    });

    // The formatter closure must own its data.
    let index = hover_index(state.visible_points());

    // No legend: tier visibility lives in the side panel.
    Plot::new("scatter_plot")
        .x_axis_label("Kill Rate")
        .y_axis_label("Rescue Rate")
        .include_x(0.0)
        .include_x(1.0)
        .include_y(0.0)
        .include_y(1.0)
        .label_formatter(move |name, value| hover_label(&index, name, value.x, value.y))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // egui_plot sizes markers per series, so each bubble is its own
            // pair of series.
            for p in state.visible_points() {
                let xy = [p.kill_rate, p.rescue_rate];
                let radius = radius_for_area(p.area);
                let name = series_name(p);

                let fill = Points::new(PlotPoints::new(vec![xy]))
                    .name(&name)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(radius)
                    .color(fill_color(p.tier));
                let outline = Points::new(PlotPoints::new(vec![xy]))
                    .name(&name)
                    .shape(MarkerShape::Circle)
                    .filled(false)
                    .radius(radius)
                    .color(outline_color(p.tier));

                plot_ui.points(fill);
                plot_ui.points(outline);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::chart::build_chart;
    use crate::data::model::{Experiment, ExperimentRecord, Tier};
    use crate::data::tier::MAX_MARKER_AREA;

    fn experiment(name: &str, kill: f64, rescue: f64, peak: f64) -> Experiment {
        Experiment {
            path: name.into(),
            record: ExperimentRecord::new(kill, rescue, vec![0.0, peak]),
        }
    }

    #[test]
    fn radius_grows_with_square_root_of_area() {
        let full = radius_for_area(MAX_MARKER_AREA);
        let quarter = radius_for_area(MAX_MARKER_AREA / 4.0);
        assert!((full - 2.0 * quarter).abs() < 1e-4);
        assert!((full - 17.841).abs() < 1e-2);
    }

    #[test]
    fn shared_coordinates_hover_their_own_experiment() {
        let chart = build_chart(&[
            experiment("experiment_a.json", 0.5, 0.5, 0.8),
            experiment("experiment_b.json", 0.5, 0.5, 0.3),
        ])
        .unwrap();
        let index = hover_index(&chart.points);
        assert_eq!(index.len(), 2);

        let b = &chart.points[1];
        let label = hover_label(&index, &series_name(b), 0.5, 0.5);
        assert!(label.starts_with("medium-high: experiment_b.json"), "{label}");
        assert!(label.contains("peak 0.300"), "{label}");
        assert!(!label.contains("peak 0.800"), "{label}");
    }

    #[test]
    fn details_include_run_parameters() {
        let mut exp = experiment("experiment_a.json", 0.1, 0.2, 0.6);
        exp.record.water_ratio = Some(0.125);
        exp.record.infected_males_at_start = Some(0.25);
        exp.record.infected_females_at_start = Some(0.5);
        let chart = build_chart(&[exp]).unwrap();

        let detail = point_detail(&chart.points[0]);
        assert!(detail.contains("water ratio 0.125"), "{detail}");
        assert!(detail.contains("0.250 males, 0.500 females"), "{detail}");
    }

    #[test]
    fn hidden_tiers_are_left_out_of_the_plot_data() {
        let chart = build_chart(&[
            experiment("experiment_a.json", 0.2, 0.2, 0.8),
            experiment("experiment_b.json", 0.4, 0.4, 0.3),
        ])
        .unwrap();
        let mut state = AppState::new(".".into(), chart);
        state.toggle_tier(Tier::High);

        let index = hover_index(state.visible_points());
        let names: Vec<_> = index.keys().cloned().collect();
        assert_eq!(names, ["medium-high: experiment_b.json"]);
    }

    #[test]
    fn empty_name_shows_only_coordinates() {
        let label = hover_label(&BTreeMap::new(), "", 0.25, 0.75);
        assert_eq!(label, "Kill Rate: 0.250\nRescue Rate: 0.750");
    }
}
