//! Salary settings and the shift combination table.
//!
//! [`Settings`] holds the monthly basic salary, the hourly rate derived from
//! it and the user-editable table of [`ShiftCombination`]s that maps a shift
//! (or a set of shifts worked on the same day) to paid hours.

use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Weeks per year used to annualize the monthly salary.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Ordinary hours per week used to derive the hourly rate.
pub const HOURS_PER_WEEK: f64 = 40.0;

/// Derives the hourly rate from a monthly salary.
///
/// `basic_salary * 12 / 52 / 40`: annualize, split into weeks, then into
/// ordinary hours.
///
/// # Example
///
/// ```
/// use shift_earnings::models::hourly_rate_for;
///
/// assert_eq!(hourly_rate_for(52_000.0), 300.0);
/// ```
pub fn hourly_rate_for(basic_salary: f64) -> f64 {
    basic_salary * 12.0 / WEEKS_PER_YEAR / HOURS_PER_WEEK
}

/// A named paid-hours rule for one shift or a set of shifts.
///
/// The `id` is either a single shift code (`"4-10"`) or the `+`-joined,
/// sorted codes of a multi-shift day (`"4-10+9-4"`). `AM` may stand in for
/// `9-4` anywhere in the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftCombination {
    /// Combination identifier.
    pub id: String,
    /// Human-readable label.
    #[serde(rename = "combination")]
    pub label: String,
    /// Paid hours.
    pub hours: f64,
}

impl ShiftCombination {
    /// Creates a combination.
    pub fn new(id: impl Into<String>, label: impl Into<String>, hours: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            hours,
        }
    }

    /// Amount paid for this combination at `hourly_rate`.
    pub fn amount(&self, hourly_rate: f64) -> f64 {
        self.hours * hourly_rate
    }
}

/// The built-in combination table used when nothing is configured.
pub fn default_shift_combinations() -> Vec<ShiftCombination> {
    vec![
        ShiftCombination::new("9-4", "Sunday/Special (9-4)", 7.0),
        ShiftCombination::new("4-10", "Evening (4-10)", 6.0),
        ShiftCombination::new("12-10", "Saturday Regular (12-10)", 10.0),
        ShiftCombination::new("N", "Night (N)", 9.0),
        ShiftCombination::new("4-10+AM", "Sunday/Special + Evening", 14.0),
        ShiftCombination::new("AM+N", "Sunday/Special + Night", 17.0),
        ShiftCombination::new("4-10+N", "Evening + Night", 16.0),
        ShiftCombination::new("12-10+N", "Saturday Regular + Night", 20.0),
        ShiftCombination::new("4-10+AM+N", "Sunday/Special + Evening + Night", 24.0),
    ]
}

/// Salary configuration and combination table.
///
/// The hourly rate is always derived from the basic salary and cannot be set
/// directly. On deserialization any stored `hourlyRate` is ignored and
/// re-derived.
///
/// # Example
///
/// ```
/// use shift_earnings::models::{Settings, ShiftCombination};
///
/// let mut settings = Settings::new(52_000.0, vec![ShiftCombination::new("N", "Night", 9.0)])?;
/// assert_eq!(settings.hourly_rate(), 300.0);
///
/// settings.set_basic_salary(26_000.0)?;
/// assert_eq!(settings.hourly_rate(), 150.0);
/// # Ok::<(), shift_earnings::error::ScheduleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SettingsRecord")]
pub struct Settings {
    basic_salary: f64,
    hourly_rate: f64,
    shift_combinations: Vec<ShiftCombination>,
}

/// Stored settings shape.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsRecord {
    #[serde(default)]
    basic_salary: f64,
    #[serde(default)]
    shift_combinations: Vec<ShiftCombination>,
}

impl TryFrom<SettingsRecord> for Settings {
    type Error = ScheduleError;

    fn try_from(record: SettingsRecord) -> ScheduleResult<Self> {
        Settings::new(record.basic_salary, record.shift_combinations)
    }
}

impl Settings {
    /// Creates settings from a monthly salary and a combination table.
    ///
    /// Returns `InvalidSettings` if the salary is negative or not finite, or
    /// any combination has negative or non-finite hours.
    pub fn new(basic_salary: f64, shift_combinations: Vec<ShiftCombination>) -> ScheduleResult<Self> {
        validate_salary(basic_salary)?;
        for combination in &shift_combinations {
            validate_hours(&combination.id, combination.hours)?;
        }

        Ok(Self {
            basic_salary,
            hourly_rate: hourly_rate_for(basic_salary),
            shift_combinations,
        })
    }

    /// Monthly basic salary.
    pub fn basic_salary(&self) -> f64 {
        self.basic_salary
    }

    /// Hourly rate derived from the basic salary.
    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    /// The combination table, in configured order.
    pub fn shift_combinations(&self) -> &[ShiftCombination] {
        &self.shift_combinations
    }

    /// Returns true if at least one combination is configured.
    pub fn has_combinations(&self) -> bool {
        !self.shift_combinations.is_empty()
    }

    /// Replaces the basic salary and re-derives the hourly rate.
    pub fn set_basic_salary(&mut self, basic_salary: f64) -> ScheduleResult<()> {
        validate_salary(basic_salary)?;
        self.basic_salary = basic_salary;
        self.hourly_rate = hourly_rate_for(basic_salary);
        Ok(())
    }

    /// Sets the paid hours of the combination with exactly `combination_id`.
    pub fn set_shift_hours(&mut self, combination_id: &str, hours: f64) -> ScheduleResult<()> {
        validate_hours(combination_id, hours)?;

        let combination = self
            .shift_combinations
            .iter_mut()
            .find(|c| c.id == combination_id)
            .ok_or_else(|| ScheduleError::CombinationNotFound {
                id: combination_id.to_string(),
            })?;

        combination.hours = hours;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            basic_salary: 0.0,
            hourly_rate: 0.0,
            shift_combinations: default_shift_combinations(),
        }
    }
}

fn validate_salary(basic_salary: f64) -> ScheduleResult<()> {
    if !basic_salary.is_finite() || basic_salary < 0.0 {
        return Err(ScheduleError::InvalidSettings {
            field: "basic_salary".to_string(),
            message: format!("must be a non-negative amount, got {}", basic_salary),
        });
    }
    Ok(())
}

fn validate_hours(combination_id: &str, hours: f64) -> ScheduleResult<()> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(ScheduleError::InvalidSettings {
            field: format!("hours[{}]", combination_id),
            message: format!("must be a non-negative number of hours, got {}", hours),
        });
    }
    Ok(())
}

/// Parses a salary typed with grouping commas, e.g. `"52,000"`.
///
/// Digits before the first `.` are kept and everything else is ignored.
/// Empty input parses as 0; values too large for `u64` saturate.
///
/// # Example
///
/// ```
/// use shift_earnings::models::parse_salary_input;
///
/// assert_eq!(parse_salary_input("Rs 1,25,000"), 125_000);
/// assert_eq!(parse_salary_input(""), 0);
/// ```
pub fn parse_salary_input(input: &str) -> u64 {
    let digits: String = input
        .split('.')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}
