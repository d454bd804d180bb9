//! Decision core of the drought early-warning service.
//!
//! Turns the IMD district rainfall report into a ranked Water Stress
//! Index feed and triages incoming water-tanker aid requests. The host
//! application (HTTP API, database, dashboard) feeds this crate plain
//! data and consumes plain data; everything here is deterministic given
//! its inputs and an injected clock.
//!
//! Module map:
//! - [`model`] — shared domain types.
//! - [`layout`] — the positional column contract of the report.
//! - [`report_source`] — report file → cell grid.
//! - [`ingest`] — cell grid → district rows.
//! - [`analysis`] — scoring, ranking, pipeline, feed assembly.
//! - [`alert`] — severity tiers, critical alerts, feed staleness.
//! - [`triage`] — aid request scoring and fraud flagging.
//! - [`verify`] — operational check that a layout still fits a report.
//! - [`dev_mode`] — replay of saved reports for local work.
//! - [`logging`] — structured service logging.

pub mod alert;
pub mod analysis;
pub mod dev_mode;
pub mod ingest;
pub mod layout;
pub mod logging;
pub mod model;
pub mod report_source;
pub mod triage;
pub mod verify;
