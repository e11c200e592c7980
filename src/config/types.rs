//! Configuration types.
//!
//! These structures are deserialized from `settings.yaml` in a
//! configuration directory.

use serde::Deserialize;

use crate::models::{ShiftCombination, default_shift_combinations};
use crate::planner::DEFAULT_SCHEDULE_TITLE;

/// Contents of `settings.yaml`.
///
/// ```yaml
/// schedule_title: Work Schedule
/// basic_salary: 52000
/// shift_combinations:
///   - id: "4-10"
///     combination: Evening (4-10)
///     hours: 6
/// ```
///
/// `shift_combinations` falls back to the built-in table when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsFile {
    /// Title for the schedule.
    #[serde(default = "default_title")]
    pub schedule_title: String,
    /// Monthly basic salary.
    pub basic_salary: f64,
    /// Combination table, in display order.
    #[serde(default = "default_shift_combinations")]
    pub shift_combinations: Vec<ShiftCombination>,
}

fn default_title() -> String {
    DEFAULT_SCHEDULE_TITLE.to_string()
}
