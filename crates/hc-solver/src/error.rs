//! Error types for solver operations.

use hc_cycle::CycleError;
use thiserror::Error;

/// Errors that can occur during cycle solving.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Invalid state: {what}")]
    InvalidState { what: String },

    #[error("Off-design solve requires a design state reference")]
    MissingDesignState,

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Cycle error: {0}")]
    Cycle(#[from] CycleError),
}

pub type SolverResult<T> = Result<T, SolverError>;
