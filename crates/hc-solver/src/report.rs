//! Solve result types.

use crate::traits::SolveMode;
use hc_cycle::StateSpec;
use serde::{Deserialize, Serialize};

/// Fluid state resolved on one connection after a solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionState {
    pub label: String,
    pub state: StateSpec,
}

/// Output of one solve call.
///
/// `compressor_power_kw` may be `None` or non-positive on a degenerate solve;
/// this is the only field whose validity the orchestration layer inspects
/// before accepting a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    pub mode: SolveMode,
    /// Compressor shaft power (kW, positive = work input)
    pub compressor_power_kw: Option<f64>,
    /// Condenser heat duty (kW, negative = heat rejected to the sink)
    pub condenser_duty_kw: f64,
    /// Evaporator heat duty (kW, positive = heat absorbed from the source)
    pub evaporator_duty_kw: f64,
    /// Compressor pressure ratio used, when pinned
    pub compressor_pr: Option<f64>,
    /// Resolved states on the five connections
    pub connections: Vec<ConnectionState>,
}

impl SolveReport {
    /// Whether the compressor result is physically usable: present, finite,
    /// and strictly positive (zero power would make COP undefined).
    pub fn compressor_power_valid(&self) -> bool {
        matches!(self.compressor_power_kw, Some(p) if p.is_finite() && p > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(power: Option<f64>) -> SolveReport {
        SolveReport {
            mode: SolveMode::Design,
            compressor_power_kw: power,
            condenser_duty_kw: -120.0,
            evaporator_duty_kw: 70.0,
            compressor_pr: None,
            connections: Vec::new(),
        }
    }

    #[test]
    fn power_validity() {
        assert!(report(Some(50.0)).compressor_power_valid());
        assert!(!report(None).compressor_power_valid());
        assert!(!report(Some(-3.0)).compressor_power_valid());
        // Zero power would give an infinite COP, so it counts as invalid
        assert!(!report(Some(0.0)).compressor_power_valid());
        assert!(!report(Some(f64::NAN)).compressor_power_valid());
    }
}
