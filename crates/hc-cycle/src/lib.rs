//! hc-cycle: fixed vapor-compression cycle description.
//!
//! Provides the five-component heat-pump topology (cycle closer, evaporator,
//! compressor, condenser, expansion valve), the directed connections between
//! them, and the validated parameter snapshot (`CycleSpec`) that every solve
//! consumes. The topology is fixed for the process lifetime; only parameter
//! values vary between solves.

pub mod components;
pub mod error;
pub mod refrigerant;
pub mod spec;
pub mod topology;

// Re-exports
pub use components::{Compressor, HeatExchanger};
pub use error::{CycleError, CycleResult};
pub use refrigerant::Refrigerant;
pub use spec::CycleSpec;
pub use topology::{ComponentKind, Connection, StateSpec, connections};
