/// Water Stress Index scoring.
///
/// Turns one district's rainfall departure into its WSI and its synthetic
/// affected-population estimate. These are the declared heuristics of the
/// system, reproduced exactly: the WSI is a bounded linear index, not a
/// hydrological model, and the population figure is a placeholder derived
/// from the departure, not a census value. Do not "improve" either formula
/// here; both are part of the published feed contract.

// ---------------------------------------------------------------------------
// Scoring constants
// ---------------------------------------------------------------------------

/// WSI floor: a district with no rainfall deficit still scores 0.3.
pub const WSI_BASE: f64 = 0.3;

/// WSI span above the floor; a 100% (or worse) deficit scores 0.3 + 0.6.
pub const WSI_SPAN: f64 = 0.6;

/// Baseline for the synthetic affected-population estimate.
pub const POPULATION_BASE: i64 = 5000;

// ---------------------------------------------------------------------------
// Scoring functions
// ---------------------------------------------------------------------------

/// Normalized rainfall deficit in [0, 1].
///
/// Surplus rainfall (positive departure) contributes zero stress, and a
/// deficit beyond -100% saturates at 1. Total over all inputs: a NaN
/// departure behaves like no deficit.
pub fn deficit_factor(departure: f64) -> f64 {
    (departure.min(0.0).abs() / 100.0).clamp(0.0, 1.0)
}

/// Water Stress Index for one rainfall departure, rounded to 2 decimal
/// places.
///
/// Linear in the deficit: `0.3 + deficit_factor * 0.6`, so the result is
/// always within [0.3, 0.9]. The floor means "no data distress" never
/// reads as zero risk, and the cap is a declared limitation of the
/// heuristic: it cannot distinguish a -100% deficit from anything worse.
pub fn water_stress_index(departure: f64) -> f64 {
    round2(WSI_BASE + deficit_factor(departure) * WSI_SPAN)
}

/// Synthetic affected-population estimate for one rainfall departure.
///
/// `5000 + abs(round(departure * 100))`. The magnitude tracks how far the
/// district sits from normal rainfall in either direction; it exists so
/// the feed has a population column, nothing more.
pub fn estimate_affected_population(departure: f64) -> i64 {
    // f64 as i64 saturates, so extreme departures cannot wrap the sum.
    POPULATION_BASE.saturating_add((departure * 100.0).round().abs() as i64)
}

/// Round to exactly 2 decimal places, the feed's published precision.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
