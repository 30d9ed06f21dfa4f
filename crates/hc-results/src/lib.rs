//! hc-results: artifact writers for cycle analysis runs.
//!
//! Everything that touches the filesystem lives behind [`OutputSink`], so the
//! orchestration layer stays testable without disk or display dependencies.

pub mod chart;
pub mod metrics;
pub mod sink;
pub mod store;

pub use chart::{Series, indexed_series, line_chart};
pub use metrics::{MetricsRow, SweepSection, render_metrics_csv, render_parametric_csv};
pub use sink::{DirectorySink, MemorySink, OutputSink};
pub use store::{DesignStateStore, RunManifest};

/// Fixed artifact names.
pub const METRICS_CSV: &str = "hp_timeseries_metrics.csv";
pub const COP_CHART_SVG: &str = "cop_timeseries.svg";
pub const PARAMETRIC_CSV: &str = "parametric_study.csv";
pub const PARAMETRIC_CHART_SVG: &str = "parametric_study.svg";
pub const DESIGN_STATE_JSON: &str = "design_state.json";
pub const MANIFEST_JSON: &str = "manifest.json";

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Design state not found: {path}")]
    DesignStateNotFound { path: String },
}
