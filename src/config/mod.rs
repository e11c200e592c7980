//! Configuration loading for the shift earnings engine.
//!
//! This module loads the salary, schedule title and shift combination table
//! from a YAML configuration directory.
//!
//! # Example
//!
//! ```no_run
//! use shift_earnings::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} combinations", config.settings().shift_combinations().len());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SETTINGS_FILE};
pub use types::SettingsFile;
