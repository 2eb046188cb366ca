use eframe::egui::Color32;
use palette::{Darken, Hsl, IntoColor, Srgb};

use crate::data::model::Tier;

// ---------------------------------------------------------------------------
// Tier colours
// ---------------------------------------------------------------------------

/// Fill opacity shared by every marker (0.5 of full).
pub const MARKER_ALPHA: u8 = 128;

/// Opaque base colour for a tier.
pub fn tier_rgb(tier: Tier) -> Srgb<u8> {
    match tier {
        Tier::High => Srgb::new(255, 0, 0),          // red
        Tier::MediumHigh => Srgb::new(255, 165, 0),  // orange
        Tier::Medium => Srgb::new(255, 215, 0),      // gold
        Tier::Low => Srgb::new(50, 205, 50),         // limegreen
    }
}

/// Translucent marker fill.
pub fn fill_color(tier: Tier) -> Color32 {
    let c = tier_rgb(tier);
    Color32::from_rgba_unmultiplied(c.red, c.green, c.blue, MARKER_ALPHA)
}

/// Opaque swatch colour for the legend.
pub fn swatch_color(tier: Tier) -> Color32 {
    let c = tier_rgb(tier);
    Color32::from_rgb(c.red, c.green, c.blue)
}

/// A darker shade of the tier colour, used for marker outlines so
/// overlapping bubbles stay distinguishable.
pub fn outline_color(tier: Tier) -> Color32 {
    let base: Srgb = tier_rgb(tier).into_format();
    let hsl: Hsl = base.into_color();
    let rgb: Srgb = hsl.darken(0.35).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}
