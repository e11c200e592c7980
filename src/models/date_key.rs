//! Calendar date keys and month handling.
//!
//! Schedules are keyed by [`DateKey`], the `YYYY-MM-DD` string form of a
//! calendar day. [`YearMonth`] names the month shown in the calendar.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day as a `YYYY-MM-DD` map key.
///
/// Equality is string equality. A key is not validated on construction,
/// since stored schedules may contain anything; [`DateKey::date`] parses it.
///
/// # Example
///
/// ```
/// use shift_earnings::models::DateKey;
///
/// // March is month index 2
/// let key = DateKey::from_ymd0(2024, 2, 5);
/// assert_eq!(key.as_str(), "2024-03-05");
/// assert_eq!(key.date().unwrap().to_string(), "2024-03-05");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Wraps a raw key without validating it.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Builds a key from a year, a 0-based month index and a day of month.
    ///
    /// Like [`DateKey::new`] this does not validate; an out-of-range month
    /// index produces a key that [`DateKey::date`] rejects.
    pub fn from_ymd0(year: i32, month0: u32, day: u32) -> Self {
        Self(format!("{:04}-{:02}-{:02}", year, u64::from(month0) + 1, day))
    }

    /// Builds the key for a date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format(DATE_KEY_FORMAT).to_string())
    }

    /// Returns the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the key into a date.
    ///
    /// Only the canonical zero-padded form is accepted: `"2024-3-9"` names
    /// the same day as `"2024-03-09"` but would be a different map key.
    pub fn date(&self) -> ScheduleResult<NaiveDate> {
        let date = NaiveDate::parse_from_str(&self.0, DATE_KEY_FORMAT).map_err(|e| {
            ScheduleError::InvalidDateKey {
                key: self.0.clone(),
                message: e.to_string(),
            }
        })?;

        let canonical = Self::from_date(date);
        if canonical != *self {
            return Err(ScheduleError::InvalidDateKey {
                key: self.0.clone(),
                message: format!("expected YYYY-MM-DD, as in '{}'", canonical),
            });
        }
        Ok(date)
    }

    /// Returns the day of the week of the key's date.
    pub fn weekday(&self) -> ScheduleResult<Weekday> {
        Ok(self.date()?.weekday())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DateKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// A calendar month, such as the month currently viewed.
///
/// Months are 1-based (`3` is March), matching `chrono`.
/// [`YearMonth::from_zero_based`] accepts the 0-based index used by
/// [`DateKey::from_ymd0`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    first_day: NaiveDate,
}

impl YearMonth {
    /// Creates a month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> ScheduleResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or(ScheduleError::InvalidMonth { year, month })
    }

    /// Creates a month from a year and a 0-based month index.
    pub fn from_zero_based(year: i32, month0: u32) -> ScheduleResult<Self> {
        let month = month0
            .checked_add(1)
            .ok_or(ScheduleError::InvalidMonth { year, month: month0 })?;
        Self::new(year, month)
    }

    /// Returns the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The 1-based month number.
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Number of days in the month.
    pub fn days_in_month(&self) -> u32 {
        (28..=31)
            .rev()
            .find(|day| NaiveDate::from_ymd_opt(self.year(), self.month(), *day).is_some())
            .unwrap_or(28)
    }

    /// Returns true if `date` falls in this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The following month. Stays put at the end of the supported range.
    pub fn next(&self) -> Self {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(*self)
    }

    /// The preceding month. Stays put at the start of the supported range.
    pub fn prev(&self) -> Self {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
            .unwrap_or(*self)
    }

    /// Key for a day of this month.
    pub fn date_key(&self, day: u32) -> DateKey {
        DateKey::from_ymd0(self.year(), self.month() - 1, day)
    }

    /// Keys for every day of the month, in order.
    pub fn day_keys(&self) -> Vec<DateKey> {
        (1..=self.days_in_month())
            .map(|day| self.date_key(day))
            .collect()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%B %Y"))
    }
}
