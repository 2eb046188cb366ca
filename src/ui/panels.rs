use eframe::egui::{self, Color32, RichText, Ui};

use crate::color::swatch_color;
use crate::data::filter::PEAK_THRESHOLD;
use crate::data::model::Tier;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – tier legend and visibility
// ---------------------------------------------------------------------------

/// Render the left tier panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Peak infection");
    ui.separator();

    let Some(chart) = &state.chart else {
        ui.label("No experiments loaded.");
        return;
    };

    let counts = chart.tier_counts();
    let max_peak = chart.max_peak;

    // Collect toggles first; `chart` borrows `state`.
    let mut toggled: Vec<Tier> = Vec::new();
    for tier in Tier::ALL {
        let n = counts.get(&tier).copied().unwrap_or(0);
        let (lo, hi) = tier_bounds(tier, max_peak);

        let mut checked = state.visible_tiers.contains(&tier);
        let text = RichText::new(format!("{tier}  ({n})")).color(swatch_color(tier));
        if ui
            .checkbox(&mut checked, text)
            .on_hover_text(format!("{lo:.3} < peak ≤ {hi:.3}"))
            .changed()
        {
            toggled.push(tier);
        }
    }
    for tier in toggled {
        state.toggle_tier(tier);
    }

    ui.separator();
    ui.label(format!("Max peak: {max_peak:.3}"));
    ui.label(format!("Threshold: {PEAK_THRESHOLD}"));
}

/// Peak range covered by a tier, as (exclusive lower, inclusive upper).
fn tier_bounds(tier: Tier, max_peak: f64) -> (f64, f64) {
    match tier {
        Tier::High => (max_peak / 2.0, max_peak),
        Tier::MediumHigh => (max_peak / 4.0, max_peak / 2.0),
        Tier::Medium => (max_peak / 8.0, max_peak / 4.0),
        Tier::Low => (0.0, max_peak / 8.0),
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(state.directory.display().to_string());

        if let Some(chart) = &state.chart {
            ui.separator();
            ui.label(format!(
                "{} experiments loaded, {} plotted, {} below threshold",
                chart.loaded,
                chart.len(),
                chart.discarded
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open experiment folder")
        .set_directory(&state.directory)
        .pick_folder();

    if let Some(dir) = folder {
        state.open_directory(&dir);
    }
}
