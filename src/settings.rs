//! # Settings Module
//!
//! ## Purpose
//! Stores the default inputs of every problem type so a session starts from the course
//! values (or from the user's own ones) instead of from zeros.
//!
//! ## Key Features
//! - **Defaults**: `Settings::default()` reproduces the classroom example of each problem
//! - **Persistence**: JSON file, `reactor_settings.json` in the working directory by default
//! - **Forgiving load**: a missing file gives the defaults, a malformed one is reported
//!   in the log and also gives the defaults
//!
//! ## Configuration Format
//! ```json
//! {
//!   "batch": { "k": 0.23, "x": 0.99 },
//!   "cstr": { "fa0": 5.0, "x": 0.99, "v0": 10.0, "k": 0.006 },
//!   "levenspiel": {
//!     "fa0": 1.0, "x_int": 0.3, "x_final": 0.8,
//!     "x_values": [0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.85],
//!     "rate_values": [0.0053, 0.0052, 0.005, 0.0045, 0.004, 0.0033, 0.0025, 0.0018, 0.00125, 0.001]
//!   }
//! }
//! ```
use crate::ReactorDesign::levenspiel::SizingRequest;
use crate::ReactorDesign::rate_table::RateTable;
use crate::ReactorDesign::reactor_error::ReactorDesignError;
use crate::ReactorDesign::reactor_problems::{BatchTask, CstrTask, LevenspielTask};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const SETTINGS_FILE: &str = "reactor_settings.json";

/// Default inputs of the CSTR + PFR problem. The rate table is kept as two raw lists
/// so that an edited file goes through `RateTable::new` validation when used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevenspielDefaults {
    pub fa0: f64,
    pub x_int: f64,
    pub x_final: f64,
    pub x_values: Vec<f64>,
    pub rate_values: Vec<f64>,
}

impl Default for LevenspielDefaults {
    fn default() -> Self {
        Self {
            fa0: 1.0,
            x_int: 0.3,
            x_final: 0.8,
            x_values: vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.85],
            rate_values: vec![
                0.0053, 0.0052, 0.005, 0.0045, 0.004, 0.0033, 0.0025, 0.0018, 0.00125, 0.001,
            ],
        }
    }
}

impl LevenspielDefaults {
    pub fn rate_table(&self) -> Result<RateTable, ReactorDesignError> {
        RateTable::new(self.x_values.clone(), self.rate_values.clone())
    }

    /// the rate table as the two-row text block accepted by `parse_rate_data`
    pub fn rate_data_text(&self) -> String {
        let join = |values: &[f64]| {
            values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        format!("{}\n{}", join(&self.x_values), join(&self.rate_values))
    }

    pub fn request(&self) -> SizingRequest {
        SizingRequest::new(self.fa0, self.x_int, self.x_final)
    }

    pub fn task(&self) -> Result<LevenspielTask, ReactorDesignError> {
        Ok(LevenspielTask::new(self.rate_table()?, self.request()))
    }
}

/// Default inputs of all problem types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub batch: BatchTask,
    pub cstr: CstrTask,
    pub levenspiel: LevenspielDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            batch: BatchTask { k: 0.23, x: 0.99 },
            cstr: CstrTask {
                fa0: 5.0,
                x: 0.99,
                v0: 10.0,
                k: 0.006,
            },
            levenspiel: LevenspielDefaults::default(),
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file, failing on I/O or format errors.
    /// A missing file is not an error: defaults are returned.
    pub fn try_load(path: &Path) -> Result<Self, ReactorDesignError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Like `try_load`, but any error is logged and replaced by the defaults.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                info!("settings loaded from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("cannot read settings from {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ReactorDesignError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("settings saved to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReactorDesign::rate_table::parse_rate_data;
    use crate::ReactorDesign::reactor_problems::ReactorProblem;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid_problems() {
        let settings = Settings::default();
        assert!(settings.batch.validate().is_ok());
        assert!(settings.cstr.validate().is_ok());
        let task = settings.levenspiel.task().unwrap();
        let report = task.solve().unwrap();
        assert_relative_eq!(
            report.value("CSTR volume").unwrap(),
            0.3 / 0.0045,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_rate_data_text_parses_back() {
        let defaults = LevenspielDefaults::default();
        let table = parse_rate_data(&defaults.rate_data_text()).unwrap();
        assert_eq!(table, defaults.rate_table().unwrap());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nothing_here.json");
        assert_eq!(Settings::try_load(&path).unwrap(), Settings::default());
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let mut settings = Settings::default();
        settings.batch.k = 0.5;
        settings.levenspiel.x_final = 0.85;
        settings.save(&path).unwrap();
        let loaded = Settings::try_load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ \"batch\": { \"k\": 0.23 ").unwrap();
        assert!(matches!(
            Settings::try_load(&path),
            Err(ReactorDesignError::Json(_))
        ));
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
