//! hc-core: stable foundation for heatcycle.
//!
//! Contains:
//! - units (uom temperature type + the Celsius/Kelvin conversions this tool cares about)
//! - numeric (Real + linspace for sweep grids)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;
