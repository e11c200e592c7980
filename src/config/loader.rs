//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading salary
//! settings and the combination table from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::Settings;
use crate::planner::ShiftPlanner;

use super::types::SettingsFile;

/// Name of the settings file inside a configuration directory.
pub const SETTINGS_FILE: &str = "settings.yaml";

/// Loads and provides access to schedule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── settings.yaml   # Salary, title and combination table
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_earnings::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Hourly rate: {}", loader.settings().hourly_rate());
/// # Ok::<(), shift_earnings::error::ScheduleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: Settings,
    schedule_title: String,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if:
    /// - `settings.yaml` is missing (`ConfigNotFound`)
    /// - the file is not valid YAML, or holds a negative salary or negative
    ///   hours (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let settings_path = path.as_ref().join(SETTINGS_FILE);
        let file = Self::load_yaml::<SettingsFile>(&settings_path)?;

        let settings = Settings::new(file.basic_salary, file.shift_combinations).map_err(|e| {
            ScheduleError::ConfigParseError {
                path: settings_path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        info!(
            path = %settings_path.display(),
            combinations = settings.shift_combinations().len(),
            "Loaded schedule settings"
        );

        Ok(Self {
            settings,
            schedule_title: file.schedule_title,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ScheduleResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ScheduleError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ScheduleError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the configured schedule title.
    pub fn schedule_title(&self) -> &str {
        &self.schedule_title
    }

    /// Creates an empty planner carrying the configured title.
    pub fn new_planner(&self) -> ShiftPlanner {
        let mut planner = ShiftPlanner::new();
        planner.set_title(&self.schedule_title);
        planner
    }
}
