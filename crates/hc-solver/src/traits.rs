//! Solver seam.

use crate::design_state::DesignState;
use crate::error::SolverResult;
use crate::report::SolveReport;
use hc_cycle::CycleSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Solve mode for the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMode {
    /// Size the components at nominal boundary conditions.
    Design,
    /// Solve the fixed hardware under perturbed boundary conditions using a
    /// previously saved design state as the sizing constraint.
    OffDesign,
}

impl fmt::Display for SolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveMode::Design => write!(f, "design"),
            SolveMode::OffDesign => write!(f, "offdesign"),
        }
    }
}

/// Trait for cycle solver backends.
///
/// Backends are synchronous and solve one operating point per call from an
/// immutable parameter snapshot. `&mut self` allows backends to keep internal
/// caches or iteration state between calls.
pub trait CycleSolver: Send {
    /// Backend name for logging and manifests.
    fn name(&self) -> &str;

    /// Solve the cycle at the operating point described by `spec`.
    ///
    /// `design` must be `Some` for off-design solves; design solves ignore it.
    fn solve(
        &mut self,
        mode: SolveMode,
        spec: &CycleSpec,
        design: Option<&DesignState>,
    ) -> SolverResult<SolveReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_display() {
        assert_eq!(SolveMode::Design.to_string(), "design");
        assert_eq!(SolveMode::OffDesign.to_string(), "offdesign");
    }
}
