//! Reference design state artifact.

use crate::report::SolveReport;
use hc_cycle::{CycleSpec, Refrigerant};
use serde::{Deserialize, Serialize};

/// Nominal sizing of the cycle, produced by a design solve and consumed as
/// the constraint for every off-design solve. Serialized to JSON by the
/// results store so off-design runs can reuse it across process lifetimes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignState {
    pub refrigerant: Refrigerant,
    pub source_t_c: f64,
    pub sink_t_c: f64,
    pub condenser_duty_kw: f64,
    pub evaporator_duty_kw: f64,
    pub compressor_power_kw: f64,
    pub lift_k: f64,
}

impl DesignState {
    /// Capture a design state from a converged design report.
    ///
    /// Returns `None` when the report has no usable compressor power, since
    /// an unsized design cannot constrain off-design solves.
    pub fn from_report(spec: &CycleSpec, report: &SolveReport) -> Option<Self> {
        if !report.compressor_power_valid() {
            return None;
        }
        Some(Self {
            refrigerant: spec.refrigerant,
            source_t_c: spec.source_t_c,
            sink_t_c: spec.sink_t_c,
            condenser_duty_kw: report.condenser_duty_kw,
            evaporator_duty_kw: report.evaporator_duty_kw,
            compressor_power_kw: report.compressor_power_kw.unwrap_or(0.0),
            lift_k: spec.lift_k(),
        })
    }
}
