//! In-process metric state.
//!
//! Holds the occupancy gauge and renders it in Prometheus text format for the
//! `/metrics` handler.

pub mod metrics;

pub use metrics::{ExporterMetrics, GaugeVec};
