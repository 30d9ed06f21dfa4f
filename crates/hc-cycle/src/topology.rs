//! Fixed five-component cycle topology.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five components of the vapor-compression cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    CycleCloser,
    Evaporator,
    Compressor,
    Condenser,
    ExpansionValve,
}

impl ComponentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::CycleCloser => "cycle closer",
            ComponentKind::Evaporator => "evaporator",
            ComponentKind::Compressor => "compressor",
            ComponentKind::Condenser => "condenser",
            ComponentKind::ExpansionValve => "expansion valve",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A directed connection between two components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub label: &'static str,
    pub from: ComponentKind,
    pub to: ComponentKind,
}

/// The five directed connections closing the cycle, in flow order.
///
/// Labels follow the conventional numbering: connection 1 leaves the cycle
/// closer, connection 0 returns to it.
pub fn connections() -> [Connection; 5] {
    use ComponentKind::*;
    [
        Connection {
            label: "1",
            from: CycleCloser,
            to: Evaporator,
        },
        Connection {
            label: "2",
            from: Evaporator,
            to: Compressor,
        },
        Connection {
            label: "3",
            from: Compressor,
            to: Condenser,
        },
        Connection {
            label: "4",
            from: Condenser,
            to: ExpansionValve,
        },
        Connection {
            label: "0",
            from: ExpansionValve,
            to: CycleCloser,
        },
    ]
}

/// Fluid state carried on a connection.
///
/// Any subset of the four properties may be specified as a boundary
/// condition; the solver fills in the rest.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StateSpec {
    /// Temperature (°C)
    pub t_c: Option<f64>,
    /// Pressure (bar)
    pub p_bar: Option<f64>,
    /// Specific enthalpy (kJ/kg)
    pub h_kj_per_kg: Option<f64>,
    /// Vapor quality (0 = saturated liquid, 1 = saturated vapor)
    pub x: Option<f64>,
}
