//! Design state persistence and run manifests.

use crate::{ResultsError, ResultsResult};
use hc_solver::DesignState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// JSON store for the reference design state produced by a design run and
/// consumed by every off-design solve.
#[derive(Clone)]
pub struct DesignStateStore {
    path: PathBuf,
}

impl DesignStateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn save(&self, design: &DesignState) -> ResultsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(design)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn load(&self) -> ResultsResult<DesignState> {
        if !self.path.exists() {
            return Err(ResultsError::DesignStateNotFound {
                path: self.path.display().to_string(),
            });
        }
        let content = fs::read_to_string(&self.path)?;
        let design = serde_json::from_str(&content)?;
        Ok(design)
    }
}

/// Small manifest written next to run artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub mode: String,
    pub backend: String,
    pub refrigerant: String,
    pub timestamp: String,
}

impl RunManifest {
    pub fn new(mode: &str, backend: &str, refrigerant: &str) -> Self {
        Self {
            mode: mode.to_string(),
            backend: backend.to_string(),
            refrigerant: refrigerant.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn to_json(&self) -> ResultsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_cycle::Refrigerant;

    fn sample() -> DesignState {
        DesignState {
            refrigerant: Refrigerant::R134a,
            source_t_c: 20.0,
            sink_t_c: 80.0,
            condenser_duty_kw: -1000.0,
            evaporator_duty_kw: 800.0,
            compressor_power_kw: 200.0,
            lift_k: 60.0,
        }
    }

    #[test]
    fn save_load_round_trip() {
        let dir = std::env::temp_dir().join("hc_results_store_test");
        let store = DesignStateStore::new(dir.join("design_state.json"));
        store.save(&sample()).unwrap();
        assert!(store.exists());
        let loaded = store.load().unwrap();
        assert_eq!(loaded, sample());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn load_missing_is_a_typed_error() {
        let store = DesignStateStore::new(PathBuf::from(
            "/definitely/not/here/design_state.json",
        ));
        let err = store.load().unwrap_err();
        assert!(matches!(err, ResultsError::DesignStateNotFound { .. }));
    }

    #[test]
    fn manifest_serializes() {
        let manifest = RunManifest::new("design", "ideal-cycle", "R134a");
        let json = manifest.to_json().unwrap();
        assert!(json.contains("\"mode\": \"design\""));
    }
}
