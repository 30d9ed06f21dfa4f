//! Error types for the orchestration layer.

use hc_cycle::CycleError;
use hc_results::ResultsError;
use hc_solver::SolverError;

/// Unified error for run modes, wrapping errors from the backend crates.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    #[error("Cycle error: {0}")]
    Cycle(#[from] CycleError),

    #[error("Results error: {0}")]
    Results(#[from] ResultsError),

    #[error("Dataset error: {message}")]
    Dataset { message: String },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

impl From<csv::Error> for ModelError {
    fn from(err: csv::Error) -> Self {
        ModelError::Dataset {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ModelError {
    fn from(err: serde_yaml::Error) -> Self {
        ModelError::Config {
            message: err.to_string(),
        }
    }
}
