/// Risk analysis for the drought monitoring service.
///
/// Pure computation over ingested district rows: scoring, ranking, and
/// the pipeline that chains them into the published feed. Nothing in
/// this module performs I/O; grids come in from `report_source` and
/// feeds go out as plain values.
///
/// Submodules:
/// - `scoring` — departure → WSI and population estimate.
/// - `ranking` — criticality ordering and the publication cap.
/// - `pipeline` — ingest → score → classify → rank, plus feed assembly.

pub mod pipeline;
pub mod ranking;
pub mod scoring;
