//! Bundled closed-form cycle estimator.

use crate::design_state::DesignState;
use crate::error::{SolverError, SolverResult};
use crate::report::{ConnectionState, SolveReport};
use crate::traits::{CycleSolver, SolveMode};
use hc_core::units::{celsius, kelvin_of};
use hc_cycle::{CycleSpec, connections};

/// Carnot-limited ideal-cycle estimator.
///
/// This is deliberately not an equation solver: COP is estimated as the
/// isentropic efficiency times the Carnot heating COP at the given lift,
/// floored at 1. It reproduces the failure modes the orchestration layer has
/// to handle:
///
/// - a lift above `max_free_lift_k` does not converge unless the compressor
///   pressure ratio is pinned, in which case the pin caps the effective lift
///   (`lift_per_pr_k` kelvin of lift per unit of pressure ratio above 1);
/// - inverted or degenerate boundary temperatures are invalid states.
///
/// Off-design solves scale the design condenser duty by the lift ratio,
/// clamped to ±50% of nominal, and require a design state for the same
/// refrigerant.
#[derive(Debug, Clone)]
pub struct IdealCycleBackend {
    /// Largest lift (K) the estimator accepts with a free pressure ratio
    pub max_free_lift_k: f64,
    /// Effective lift granted per unit of pinned pressure ratio above 1 (K)
    pub lift_per_pr_k: f64,
}

impl Default for IdealCycleBackend {
    fn default() -> Self {
        Self {
            max_free_lift_k: 70.0,
            lift_per_pr_k: 18.0,
        }
    }
}

impl IdealCycleBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective lift after applying a pinned pressure ratio, if any.
    fn effective_lift_k(&self, spec: &CycleSpec, lift_k: f64) -> SolverResult<f64> {
        match spec.compressor.pr {
            None => {
                if lift_k > self.max_free_lift_k {
                    return Err(SolverError::ConvergenceFailed {
                        what: format!(
                            "lift {:.1} K exceeds {:.1} K with free pressure ratio",
                            lift_k, self.max_free_lift_k
                        ),
                    });
                }
                Ok(lift_k)
            }
            Some(pr) => {
                if pr <= 1.0 {
                    return Err(SolverError::InvalidState {
                        what: format!("pinned pressure ratio {pr:.2} is not above 1"),
                    });
                }
                Ok(lift_k.min(self.lift_per_pr_k * (pr - 1.0)))
            }
        }
    }

    fn estimate_cop(&self, spec: &CycleSpec, lift_eff_k: f64) -> f64 {
        let t_sink_k = kelvin_of(celsius(spec.sink_t_c));
        let cop_carnot = t_sink_k / lift_eff_k;
        (spec.compressor.eta_s * cop_carnot).max(1.0)
    }

    fn build_report(
        mode: SolveMode,
        spec: &CycleSpec,
        power_kw: f64,
        q_cond_kw: f64,
    ) -> SolveReport {
        let boundaries = spec.boundary_states();
        let conns = connections()
            .iter()
            .map(|c| {
                let state = boundaries
                    .iter()
                    .find(|(label, _)| *label == c.label)
                    .map(|(_, s)| *s)
                    .unwrap_or_default();
                ConnectionState {
                    label: c.label.to_string(),
                    state,
                }
            })
            .collect();

        SolveReport {
            mode,
            compressor_power_kw: Some(power_kw),
            condenser_duty_kw: q_cond_kw,
            evaporator_duty_kw: q_cond_kw.abs() - power_kw,
            compressor_pr: spec.compressor.pr,
            connections: conns,
        }
    }
}

impl CycleSolver for IdealCycleBackend {
    fn name(&self) -> &str {
        "ideal-cycle"
    }

    fn solve(
        &mut self,
        mode: SolveMode,
        spec: &CycleSpec,
        design: Option<&DesignState>,
    ) -> SolverResult<SolveReport> {
        spec.validate()?;

        let lift_k = spec.lift_k();
        if lift_k <= 0.0 {
            return Err(SolverError::InvalidState {
                what: format!(
                    "sink {:.1} °C is not above source {:.1} °C",
                    spec.sink_t_c, spec.source_t_c
                ),
            });
        }

        let lift_eff_k = self.effective_lift_k(spec, lift_k)?;
        let cop = self.estimate_cop(spec, lift_eff_k);

        let q_cond_kw = match mode {
            SolveMode::Design => {
                let q = spec
                    .condenser
                    .duty_kw
                    .ok_or_else(|| SolverError::InvalidState {
                        what: "design solve requires a specified condenser duty".to_string(),
                    })?;
                if q >= 0.0 {
                    return Err(SolverError::NonPhysical {
                        what: "condenser duty must be negative (heat rejected)",
                    });
                }
                q
            }
            SolveMode::OffDesign => {
                let design = design.ok_or(SolverError::MissingDesignState)?;
                if design.refrigerant != spec.refrigerant {
                    return Err(SolverError::InvalidState {
                        what: format!(
                            "design state is for {}, spec uses {}",
                            design.refrigerant, spec.refrigerant
                        ),
                    });
                }
                // Fixed hardware: capacity degrades as the lift grows past
                // the design point and recovers below it, within ±50%.
                let capacity_ratio = (design.lift_k / lift_eff_k).clamp(0.5, 1.5);
                -(design.condenser_duty_kw.abs() * capacity_ratio)
            }
        };

        let power_kw = q_cond_kw.abs() / cop;
        tracing::debug!(
            mode = %mode,
            lift_k = lift_eff_k,
            cop,
            power_kw,
            "ideal cycle estimate"
        );

        Ok(Self::build_report(mode, spec, power_kw, q_cond_kw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design_state() -> DesignState {
        let spec = CycleSpec::default();
        let mut backend = IdealCycleBackend::new();
        let report = backend.solve(SolveMode::Design, &spec, None).unwrap();
        DesignState::from_report(&spec, &report).unwrap()
    }

    #[test]
    fn nominal_design_point_converges() {
        let spec = CycleSpec::default();
        let mut backend = IdealCycleBackend::new();
        let report = backend.solve(SolveMode::Design, &spec, None).unwrap();

        let power = report.compressor_power_kw.unwrap();
        assert!(power > 0.0);
        assert_eq!(report.condenser_duty_kw, -1000.0);
        // Energy balance: evaporator duty + power = |condenser duty|
        let balance = report.evaporator_duty_kw + power - report.condenser_duty_kw.abs();
        assert!(balance.abs() < 1e-9);
        // 60 K lift at eta_s 0.85 gives a COP around 5
        let cop = report.condenser_duty_kw.abs() / power;
        assert!(cop > 4.0 && cop < 6.0, "cop = {cop}");
    }

    #[test]
    fn inverted_lift_is_invalid_state() {
        let mut spec = CycleSpec::default();
        spec.sink_t_c = 10.0;
        let mut backend = IdealCycleBackend::new();
        let err = backend.solve(SolveMode::Design, &spec, None).unwrap_err();
        assert!(matches!(err, SolverError::InvalidState { .. }));
    }

    #[test]
    fn excessive_free_lift_fails_then_pinned_ratio_converges() {
        let mut spec = CycleSpec::default();
        spec.source_t_c = 2.0;
        spec.sink_t_c = 95.0;
        let mut backend = IdealCycleBackend::new();

        let err = backend.solve(SolveMode::Design, &spec, None).unwrap_err();
        assert!(matches!(err, SolverError::ConvergenceFailed { .. }));

        spec.compressor.pin_pr(4.0).unwrap();
        let report = backend.solve(SolveMode::Design, &spec, None).unwrap();
        assert!(report.compressor_power_valid());
        assert_eq!(report.compressor_pr, Some(4.0));
    }

    #[test]
    fn cop_decreases_with_lift() {
        let mut backend = IdealCycleBackend::new();

        let mut low = CycleSpec::default();
        low.source_t_c = 30.0;
        let mut high = CycleSpec::default();
        high.source_t_c = 10.0;

        let cop_of = |backend: &mut IdealCycleBackend, spec: &CycleSpec| {
            let r = backend.solve(SolveMode::Design, spec, None).unwrap();
            r.condenser_duty_kw.abs() / r.compressor_power_kw.unwrap()
        };

        assert!(cop_of(&mut backend, &low) > cop_of(&mut backend, &high));
    }

    #[test]
    fn offdesign_requires_design_state() {
        let spec = CycleSpec::default();
        let mut backend = IdealCycleBackend::new();
        let err = backend.solve(SolveMode::OffDesign, &spec, None).unwrap_err();
        assert!(matches!(err, SolverError::MissingDesignState));
    }

    #[test]
    fn offdesign_capacity_scales_with_lift() {
        let design = design_state();
        let mut backend = IdealCycleBackend::new();

        // Colder source, larger lift, reduced capacity
        let mut spec = CycleSpec::default();
        spec.source_t_c = 5.0;
        let report = backend
            .solve(SolveMode::OffDesign, &spec, Some(&design))
            .unwrap();
        assert!(report.condenser_duty_kw.abs() < design.condenser_duty_kw.abs());
        assert!(report.compressor_power_valid());
    }

    #[test]
    fn offdesign_rejects_refrigerant_mismatch() {
        let design = design_state();
        let mut spec = CycleSpec::default();
        spec.refrigerant = hc_cycle::Refrigerant::R290;
        let mut backend = IdealCycleBackend::new();
        let err = backend
            .solve(SolveMode::OffDesign, &spec, Some(&design))
            .unwrap_err();
        assert!(matches!(err, SolverError::InvalidState { .. }));
    }
}
