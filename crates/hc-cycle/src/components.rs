//! Component parameter models.
//!
//! These are parameter carriers, not equation models: the cycle solver owns
//! the thermodynamics. Constructors validate physical bounds so an invalid
//! parameter set is rejected before it ever reaches a solve.

use crate::error::{CycleError, CycleResult};
use serde::{Deserialize, Serialize};

/// Compressor parameters.
///
/// ## Sign conventions
/// - `eta_s` is the isentropic efficiency, ideal over actual specific work
/// - `pr` is outlet/inlet pressure ratio; `None` leaves the ratio free for
///   the solver to determine, `Some` pins it (the stabilization fallback
///   pins it to force convergence)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Compressor {
    /// Isentropic efficiency (0 < eta_s <= 1)
    pub eta_s: f64,
    /// Pinned pressure ratio (> 1), or None when free
    pub pr: Option<f64>,
}

impl Compressor {
    /// Create a compressor with a free pressure ratio.
    ///
    /// # Errors
    /// Returns error if the efficiency is out of physical bounds.
    pub fn new(eta_s: f64) -> CycleResult<Self> {
        validate_eta_s(eta_s)?;
        Ok(Self { eta_s, pr: None })
    }

    /// Replace the isentropic efficiency, keeping any pinned pressure ratio.
    pub fn set_eta_s(&mut self, eta_s: f64) -> CycleResult<()> {
        validate_eta_s(eta_s)?;
        self.eta_s = eta_s;
        Ok(())
    }

    /// Pin the pressure ratio, typically as a stabilization fallback.
    pub fn pin_pr(&mut self, pr: f64) -> CycleResult<()> {
        if !pr.is_finite() {
            return Err(CycleError::NonPhysical {
                what: "pressure ratio must be finite",
            });
        }
        if pr <= 1.0 {
            return Err(CycleError::NonPhysical {
                what: "compressor pressure ratio must exceed 1",
            });
        }
        self.pr = Some(pr);
        Ok(())
    }
}

fn validate_eta_s(eta_s: f64) -> CycleResult<()> {
    if !eta_s.is_finite() || eta_s <= 0.0 || eta_s > 1.0 {
        return Err(CycleError::InvalidArg {
            what: "isentropic efficiency must be in (0,1]",
        });
    }
    Ok(())
}

/// Heat exchanger parameters, used for both evaporator and condenser.
///
/// `pr` here is outlet/inlet pressure ratio across the exchanger and models
/// the pressure drop, so it sits in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatExchanger {
    /// Pressure ratio across the exchanger (0 < pr <= 1)
    pub pr: f64,
    /// Specified heat duty in kW (negative = heat rejected from the fluid),
    /// or None when the duty is a solver result rather than a specification
    pub duty_kw: Option<f64>,
}

impl HeatExchanger {
    pub fn new(pr: f64, duty_kw: Option<f64>) -> CycleResult<Self> {
        if !pr.is_finite() || pr <= 0.0 || pr > 1.0 {
            return Err(CycleError::InvalidArg {
                what: "exchanger pressure ratio must be in (0,1]",
            });
        }
        if let Some(q) = duty_kw {
            if !q.is_finite() {
                return Err(CycleError::NonPhysical {
                    what: "heat duty must be finite",
                });
            }
        }
        Ok(Self { pr, duty_kw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compressor_creation() {
        let cp = Compressor::new(0.85).unwrap();
        assert_eq!(cp.eta_s, 0.85);
        assert!(cp.pr.is_none());
    }

    #[test]
    fn compressor_invalid_efficiency() {
        assert!(Compressor::new(1.5).is_err());
        assert!(Compressor::new(0.0).is_err());
        assert!(Compressor::new(f64::NAN).is_err());
    }

    #[test]
    fn compressor_pin_rejects_sub_unity_ratio() {
        let mut cp = Compressor::new(0.85).unwrap();
        assert!(cp.pin_pr(0.9).is_err());
        assert!(cp.pin_pr(4.0).is_ok());
        assert_eq!(cp.pr, Some(4.0));
    }

    #[test]
    fn set_eta_s_revalidates() {
        let mut cp = Compressor::new(0.85).unwrap();
        assert!(cp.set_eta_s(0.65).is_ok());
        assert_eq!(cp.eta_s, 0.65);
        assert!(cp.set_eta_s(1.2).is_err());
        assert_eq!(cp.eta_s, 0.65, "rejected value leaves the old one in place");
    }

    #[test]
    fn exchanger_bounds() {
        assert!(HeatExchanger::new(0.98, Some(-1000.0)).is_ok());
        assert!(HeatExchanger::new(1.02, None).is_err());
        assert!(HeatExchanger::new(0.98, Some(f64::INFINITY)).is_err());
    }
}
