//! YAML configuration file.

use crate::dataset::FilterRanges;
use crate::error::ModelResult;
use crate::model::DEFAULT_FALLBACK_PR;
use hc_cycle::{CycleSpec, Refrigerant};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration overriding the nominal design point. Every field
/// has a default, so an empty file (or no file at all) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub refrigerant: Refrigerant,
    pub condenser_duty_kw: f64,
    pub source_t_c: f64,
    pub sink_t_c: f64,
    pub eta_s: f64,
    pub condenser_pr: f64,
    pub evaporator_pr: f64,
    pub fallback_pr: f64,
    pub source_range_c: (f64, f64),
    pub sink_range_c: (f64, f64),
}

impl Default for ModelConfig {
    fn default() -> Self {
        let spec = CycleSpec::default();
        let filters = FilterRanges::default();
        Self {
            refrigerant: spec.refrigerant,
            condenser_duty_kw: spec.condenser.duty_kw.unwrap_or(-1000.0),
            source_t_c: spec.source_t_c,
            sink_t_c: spec.sink_t_c,
            eta_s: spec.compressor.eta_s,
            condenser_pr: spec.condenser.pr,
            evaporator_pr: spec.evaporator.pr,
            fallback_pr: DEFAULT_FALLBACK_PR,
            source_range_c: filters.source_c,
            sink_range_c: filters.sink_c,
        }
    }
}

impl ModelConfig {
    pub fn load(path: &Path) -> ModelResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ModelConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Build the cycle spec described by this config. Validation happens in
    /// `HeatPumpModel::new`, not here.
    pub fn to_spec(&self) -> CycleSpec {
        let mut spec = CycleSpec {
            refrigerant: self.refrigerant,
            ..CycleSpec::default()
        };
        spec.compressor.eta_s = self.eta_s;
        spec.condenser.pr = self.condenser_pr;
        spec.condenser.duty_kw = Some(self.condenser_duty_kw);
        spec.evaporator.pr = self.evaporator_pr;
        spec.source_t_c = self.source_t_c;
        spec.sink_t_c = self.sink_t_c;
        spec
    }

    pub fn filter_ranges(&self) -> FilterRanges {
        FilterRanges {
            source_c: self.source_range_c,
            sink_c: self.sink_range_c,
        }
    }
}
