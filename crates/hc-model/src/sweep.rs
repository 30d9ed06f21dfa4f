//! Parametric sweep definitions.

use std::fmt;

/// Number of points per sweep, linearly spaced including both endpoints.
pub const SWEEP_POINTS: usize = 11;

/// The three independent variables of the parametric study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepVariable {
    SourceTemperature,
    SinkTemperature,
    IsentropicEfficiency,
}

impl SweepVariable {
    /// Column/label name used in CSV and chart output.
    pub fn label(&self) -> &'static str {
        match self {
            SweepVariable::SourceTemperature => "T_source_C",
            SweepVariable::SinkTemperature => "T_sink_C",
            SweepVariable::IsentropicEfficiency => "eta_s",
        }
    }

    /// Sweep range. Each variable is swept with the other two held at their
    /// defaults.
    pub fn range(&self) -> (f64, f64) {
        match self {
            SweepVariable::SourceTemperature => (0.0, 40.0),
            SweepVariable::SinkTemperature => (60.0, 100.0),
            SweepVariable::IsentropicEfficiency => (0.65, 0.95),
        }
    }
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The standard study: all three variables, in a fixed order.
pub fn standard_sweeps() -> [SweepVariable; 3] {
    [
        SweepVariable::SourceTemperature,
        SweepVariable::SinkTemperature,
        SweepVariable::IsentropicEfficiency,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_core::linspace;

    #[test]
    fn source_sweep_covers_spec_range() {
        let (lo, hi) = SweepVariable::SourceTemperature.range();
        let points = linspace(lo, hi, SWEEP_POINTS);
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], 0.0);
        assert_eq!(points[10], 40.0);
    }

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<&str> = standard_sweeps().iter().map(|v| v.label()).collect();
        assert_eq!(labels, vec!["T_source_C", "T_sink_C", "eta_s"]);
    }
}
