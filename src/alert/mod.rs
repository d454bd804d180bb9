/// Alerting for the drought monitoring service.
///
/// Submodules:
/// - `thresholds` — WSI severity tiers and critical-district alerts.
/// - `staleness` — detection of an outdated risk feed.

pub mod staleness;
pub mod thresholds;
