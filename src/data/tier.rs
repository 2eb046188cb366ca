use super::model::Tier;

/// Marker area given to the experiment with the largest peak.
pub const MAX_MARKER_AREA: f64 = 1000.0;

/// Bucket a peak relative to the largest retained peak.
///
/// Boundaries are half-open from below: a peak exactly at `max / 2` is
/// medium-high, not high.
pub fn classify(peak: f64, max_peak: f64) -> Tier {
    if peak > max_peak / 2.0 {
        Tier::High
    } else if peak > max_peak / 4.0 {
        Tier::MediumHigh
    } else if peak > max_peak / 8.0 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Marker area, linear in `peak`. `max_peak` must be positive.
pub fn marker_area(peak: f64, max_peak: f64) -> f64 {
    MAX_MARKER_AREA * (peak / max_peak)
}
