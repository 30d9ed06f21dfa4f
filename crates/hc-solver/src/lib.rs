//! hc-solver: cycle solver seam and bundled estimator backend.
//!
//! The thermodynamic equation solving for the heat-pump cycle is an external
//! concern behind the [`CycleSolver`] trait: a backend receives a solve mode
//! and an immutable [`hc_cycle::CycleSpec`] snapshot and returns a
//! [`SolveReport`]. The bundled [`IdealCycleBackend`] is a closed-form
//! Carnot-limited estimator, good enough to drive the orchestration layer and
//! its stabilization heuristic; property-library backends plug in behind the
//! same trait.

pub mod design_state;
pub mod error;
pub mod ideal;
pub mod report;
pub mod traits;

// Re-exports
pub use design_state::DesignState;
pub use error::{SolverError, SolverResult};
pub use ideal::IdealCycleBackend;
pub use report::{ConnectionState, SolveReport};
pub use traits::{CycleSolver, SolveMode};
