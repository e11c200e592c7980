//! Day classification.
//!
//! Which shifts a day offers depends on its weekday and on whether it is
//! flagged special. [`DayKind`] captures that combination.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The kind of calendar day for shift eligibility.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::DayKind;
/// use chrono::Weekday;
///
/// assert_eq!(DayKind::classify(Weekday::Sat, false), DayKind::Saturday);
/// // The special flag wins over the weekday
/// assert_eq!(DayKind::classify(Weekday::Sat, true), DayKind::Special);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday, not special.
    Weekday,
    /// Saturday, not special.
    Saturday,
    /// Sunday, not special.
    Sunday,
    /// Any day flagged special.
    Special,
}

impl DayKind {
    /// Classifies a day. The first matching rule wins: special, Saturday,
    /// Sunday, then weekday.
    pub fn classify(weekday: Weekday, is_special: bool) -> Self {
        if is_special {
            return DayKind::Special;
        }
        match weekday {
            Weekday::Sat => DayKind::Saturday,
            Weekday::Sun => DayKind::Sunday,
            _ => DayKind::Weekday,
        }
    }

    /// Classifies a date.
    pub fn for_date(date: NaiveDate, is_special: bool) -> Self {
        Self::classify(date.weekday(), is_special)
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Weekday => write!(f, "Weekday"),
            DayKind::Saturday => write!(f, "Saturday"),
            DayKind::Sunday => write!(f, "Sunday"),
            DayKind::Special => write!(f, "Special Date"),
        }
    }
}

/// Day-of-week index with Sunday as 0 and Saturday as 6.
pub fn day_of_week_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_classify_regular_days() {
        assert_eq!(DayKind::classify(Weekday::Mon, false), DayKind::Weekday);
        assert_eq!(DayKind::classify(Weekday::Fri, false), DayKind::Weekday);
        assert_eq!(DayKind::classify(Weekday::Sat, false), DayKind::Saturday);
        assert_eq!(DayKind::classify(Weekday::Sun, false), DayKind::Sunday);
    }

    #[test]
    fn test_special_overrides_every_weekday() {
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(DayKind::classify(weekday, true), DayKind::Special);
        }
    }

    #[test]
    fn test_for_date() {
        // 2024-03-09 is a Saturday, 2024-03-10 a Sunday
        assert_eq!(DayKind::for_date(make_date("2024-03-09"), false), DayKind::Saturday);
        assert_eq!(DayKind::for_date(make_date("2024-03-10"), false), DayKind::Sunday);
        assert_eq!(DayKind::for_date(make_date("2024-03-11"), false), DayKind::Weekday);
    }

    #[test]
    fn test_day_of_week_index() {
        assert_eq!(day_of_week_index(Weekday::Sun), 0);
        assert_eq!(day_of_week_index(Weekday::Mon), 1);
        assert_eq!(day_of_week_index(Weekday::Sat), 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(DayKind::Special.to_string(), "Special Date");
        assert_eq!(DayKind::Weekday.to_string(), "Weekday");
    }
}
