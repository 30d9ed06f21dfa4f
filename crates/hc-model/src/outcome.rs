//! Typed solve outcomes.
//!
//! Replaces the sentinel checks (`None`, negative power) of ad hoc
//! post-processing with a tagged outcome: a solve either converged to usable
//! metrics, produced a physically invalid result, or failed outright.

use hc_solver::SolveReport;

/// Scalar performance metrics derived from a converged solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleMetrics {
    /// Coefficient of performance, |condenser duty| / compressor power
    pub cop: f64,
    pub compressor_power_kw: f64,
    pub condenser_duty_kw: f64,
    pub evaporator_duty_kw: f64,
}

/// Outcome of one solve attempt, after validity inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Converged(CycleMetrics),
    /// The solver returned without error but the result is physically
    /// unusable (missing or non-positive compressor power).
    Invalid { reason: String },
    /// The solver raised; recorded per-row in batch mode instead of aborting
    /// the whole batch.
    Failed { error: String },
}

impl SolveOutcome {
    /// Classify a report by inspecting the compressor result.
    pub fn from_report(report: &SolveReport) -> Self {
        match report.compressor_power_kw {
            Some(p) if p.is_finite() && p > 0.0 => SolveOutcome::Converged(CycleMetrics {
                cop: report.condenser_duty_kw.abs() / p,
                compressor_power_kw: p,
                condenser_duty_kw: report.condenser_duty_kw,
                evaporator_duty_kw: report.evaporator_duty_kw,
            }),
            Some(p) => SolveOutcome::Invalid {
                reason: format!("compressor power {p:.3} kW is not positive"),
            },
            None => SolveOutcome::Invalid {
                reason: "compressor power missing from solve report".to_string(),
            },
        }
    }

    pub fn metrics(&self) -> Option<&CycleMetrics> {
        match self {
            SolveOutcome::Converged(m) => Some(m),
            _ => None,
        }
    }

    pub fn cop(&self) -> Option<f64> {
        self.metrics().map(|m| m.cop)
    }
}
