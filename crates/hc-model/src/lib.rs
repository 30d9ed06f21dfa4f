//! hc-model: orchestration layer for heat-pump cycle analysis.
//!
//! Owns the [`HeatPumpModel`]: a cycle parameter snapshot plus a pluggable
//! solver backend, wrapped in the single-retry stabilization heuristic, and
//! exposed through four run modes (design, off-design, parametric sweep,
//! dataset batch) that write their artifacts through `hc-results`.

pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod outcome;
pub mod sweep;

// Re-export key types for convenience
pub use config::ModelConfig;
pub use dataset::{DatasetRow, FilterRanges, read_dataset, sniff_column};
pub use error::{ModelError, ModelResult};
pub use model::{
    DEFAULT_FALLBACK_PR, DEFAULT_OFFDESIGN_DELTA_T_K, DatasetSummary, HeatPumpModel,
};
pub use outcome::{CycleMetrics, SolveOutcome};
pub use sweep::{SWEEP_POINTS, SweepVariable, standard_sweeps};
