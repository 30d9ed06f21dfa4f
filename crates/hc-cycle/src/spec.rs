//! Cycle parameter snapshot.

use crate::components::{Compressor, HeatExchanger};
use crate::error::{CycleError, CycleResult};
use crate::refrigerant::Refrigerant;
use crate::topology::StateSpec;
use serde::{Deserialize, Serialize};

/// Complete parameter set for one solve of the fixed cycle.
///
/// A `CycleSpec` is a cheap-to-clone snapshot: run modes build perturbed
/// copies instead of mutating shared component objects, so one scenario
/// cannot leak state into the next. The single documented exception is the
/// stabilization fallback, which pins the compressor pressure ratio on the
/// model's stored spec (see hc-model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleSpec {
    /// Working fluid, fixed at construction
    pub refrigerant: Refrigerant,
    pub compressor: Compressor,
    pub condenser: HeatExchanger,
    pub evaporator: HeatExchanger,
    /// Evaporator outlet temperature (connection 2), °C. This is the heat
    /// source boundary condition.
    pub source_t_c: f64,
    /// Condenser outlet temperature (connection 4), °C. This is the heat
    /// sink boundary condition.
    pub sink_t_c: f64,
}

impl Default for CycleSpec {
    /// Nominal design point: R134a, 1 MW condenser load, 20 °C source,
    /// 80 °C sink, 2% exchanger pressure drop, eta_s = 0.85.
    fn default() -> Self {
        Self {
            refrigerant: Refrigerant::R134a,
            compressor: Compressor {
                eta_s: 0.85,
                pr: None,
            },
            condenser: HeatExchanger {
                pr: 0.98,
                duty_kw: Some(-1000.0),
            },
            evaporator: HeatExchanger {
                pr: 0.98,
                duty_kw: None,
            },
            source_t_c: 20.0,
            sink_t_c: 80.0,
        }
    }
}

impl CycleSpec {
    /// Check all parameters against physical bounds.
    pub fn validate(&self) -> CycleResult<()> {
        if !self.source_t_c.is_finite() {
            return Err(CycleError::NonPhysical {
                what: "source temperature must be finite",
            });
        }
        if !self.sink_t_c.is_finite() {
            return Err(CycleError::NonPhysical {
                what: "sink temperature must be finite",
            });
        }
        // Re-run constructor validation on the component parameters, which
        // may have been edited field-wise since construction.
        Compressor::new(self.compressor.eta_s)?;
        if let Some(pr) = self.compressor.pr {
            let mut probe = Compressor::new(self.compressor.eta_s)?;
            probe.pin_pr(pr)?;
        }
        HeatExchanger::new(self.condenser.pr, self.condenser.duty_kw)?;
        HeatExchanger::new(self.evaporator.pr, self.evaporator.duty_kw)?;
        Ok(())
    }

    /// Boundary states on the two specified connections: saturated vapor at
    /// the evaporator outlet (connection 2) and saturated liquid at the
    /// condenser outlet (connection 4).
    pub fn boundary_states(&self) -> [(&'static str, StateSpec); 2] {
        [
            (
                "2",
                StateSpec {
                    t_c: Some(self.source_t_c),
                    x: Some(1.0),
                    ..StateSpec::default()
                },
            ),
            (
                "4",
                StateSpec {
                    t_c: Some(self.sink_t_c),
                    x: Some(0.0),
                    ..StateSpec::default()
                },
            ),
        ]
    }

    /// Temperature lift from source to sink in kelvin.
    pub fn lift_k(&self) -> f64 {
        self.sink_t_c - self.source_t_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec_is_valid() {
        let spec = CycleSpec::default();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.source_t_c, 20.0);
        assert_eq!(spec.sink_t_c, 80.0);
        assert_eq!(spec.condenser.duty_kw, Some(-1000.0));
        assert!((spec.lift_k() - 60.0).abs() < 1e-12);
    }

    #[test]
    fn validate_catches_edited_fields() {
        let mut spec = CycleSpec::default();
        spec.compressor.eta_s = 1.4;
        assert!(spec.validate().is_err());

        let mut spec = CycleSpec::default();
        spec.compressor.pr = Some(0.5);
        assert!(spec.validate().is_err());

        let mut spec = CycleSpec::default();
        spec.sink_t_c = f64::NAN;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn boundary_states_carry_quality() {
        let spec = CycleSpec::default();
        let [(l2, s2), (l4, s4)] = spec.boundary_states();
        assert_eq!(l2, "2");
        assert_eq!(s2.t_c, Some(20.0));
        assert_eq!(s2.x, Some(1.0));
        assert_eq!(l4, "4");
        assert_eq!(s4.x, Some(0.0));
    }

    #[test]
    fn spec_snapshot_round_trips_through_clone() {
        let spec = CycleSpec::default();
        let mut copy = spec.clone();
        copy.source_t_c = 5.0;
        // Mutating the copy must not touch the original
        assert_eq!(spec.source_t_c, 20.0);
    }
}
