//! Schedule and special-date maps.
//!
//! Both maps are keyed by [`DateKey`]. They are ordered maps so that every
//! pass over a schedule visits days in the same order, which keeps
//! floating-point totals reproducible.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DateKey, ShiftCode, YearMonth};

/// Shifts selected per day. An absent key means no shifts.
pub type ScheduleMap = BTreeMap<DateKey, Vec<ShiftCode>>;

/// Special-date flags per day. An absent key means not special.
pub type SpecialDatesMap = BTreeMap<DateKey, bool>;

/// Returns true if `date_key` is flagged special.
pub fn is_special_date(special_dates: &SpecialDatesMap, date_key: &DateKey) -> bool {
    special_dates.get(date_key).copied().unwrap_or(false)
}

/// How much data a month holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthActivity {
    /// Number of shift selections across all days of the month.
    pub shift_count: usize,
    /// Number of days flagged special.
    pub special_date_count: usize,
}

impl MonthActivity {
    /// Counts the shifts and special dates of `month`.
    pub fn for_month(
        schedule: &ScheduleMap,
        special_dates: &SpecialDatesMap,
        month: YearMonth,
    ) -> Self {
        month
            .day_keys()
            .iter()
            .fold(Self::default(), |mut activity, key| {
                activity.shift_count += schedule.get(key).map_or(0, Vec::len);
                if is_special_date(special_dates, key) {
                    activity.special_date_count += 1;
                }
                activity
            })
    }

    /// Returns true if the month holds no shifts and no special dates.
    pub fn is_empty(&self) -> bool {
        self.shift_count == 0 && self.special_date_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_special_flag_is_false() {
        let mut special_dates = SpecialDatesMap::new();
        special_dates.insert(DateKey::from("2024-03-05"), true);
        special_dates.insert(DateKey::from("2024-03-06"), false);

        assert!(is_special_date(&special_dates, &DateKey::from("2024-03-05")));
        assert!(!is_special_date(&special_dates, &DateKey::from("2024-03-06")));
        assert!(!is_special_date(&special_dates, &DateKey::from("2024-03-07")));
    }

    #[test]
    fn test_month_activity_counts_only_the_month() {
        let mut schedule = ScheduleMap::new();
        schedule.insert(
            DateKey::from("2024-03-05"),
            vec![ShiftCode::FourToTen, ShiftCode::Night],
        );
        schedule.insert(DateKey::from("2024-03-31"), vec![ShiftCode::Night]);
        schedule.insert(DateKey::from("2024-04-01"), vec![ShiftCode::Night]);

        let mut special_dates = SpecialDatesMap::new();
        special_dates.insert(DateKey::from("2024-03-12"), true);
        special_dates.insert(DateKey::from("2024-03-13"), false);
        special_dates.insert(DateKey::from("2024-02-12"), true);

        let activity =
            MonthActivity::for_month(&schedule, &special_dates, YearMonth::new(2024, 3).unwrap());
        assert_eq!(activity.shift_count, 3);
        assert_eq!(activity.special_date_count, 1);
        assert!(!activity.is_empty());
    }

    #[test]
    fn test_schedule_map_deserializes_stored_shape() {
        let json = r#"{ "2024-03-05": ["9-4", "N"], "2024-03-06": ["4-10"] }"#;
        let schedule: ScheduleMap = serde_json::from_str(json).unwrap();

        assert_eq!(
            schedule[&DateKey::from("2024-03-05")],
            vec![ShiftCode::NineToFour, ShiftCode::Night]
        );
        assert_eq!(schedule.len(), 2);
    }
}
