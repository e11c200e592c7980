//! Calendar state with rule-checked editing.
//!
//! [`ShiftPlanner`] owns a schedule and its special-date flags and applies
//! the eligibility rules at the toggle boundary: conflicting or ineligible
//! shifts are rejected, and changing a day's special flag drops the shifts
//! the day no longer offers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculation::{
    SelectionCheck, check_selection, compute_earnings, compute_earnings_breakdown,
    eligible_shifts, special_toggle_clears,
};
use crate::error::ScheduleResult;
use crate::models::{
    DateKey, EarningsBreakdown, EarningsSummary, MonthActivity, ScheduleMap, Settings, ShiftCode,
    SpecialDatesMap, YearMonth, is_special_date, sort_for_display,
};

/// Title given to a new schedule.
pub const DEFAULT_SCHEDULE_TITLE: &str = "Work Schedule";

/// Result of toggling a shift on a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The shift was added.
    Added,
    /// The shift was already selected and has been removed.
    Removed,
    /// The rules did not allow the shift; nothing changed.
    Rejected(SelectionCheck),
}

/// A titled schedule with special-date flags.
///
/// # Example
///
/// ```
/// use shift_earnings::models::{DateKey, ShiftCode};
/// use shift_earnings::planner::{ShiftPlanner, ToggleOutcome};
///
/// let mut planner = ShiftPlanner::new();
/// // 2024-03-09 is a Saturday
/// let saturday = DateKey::from("2024-03-09");
///
/// assert_eq!(planner.toggle_shift(&saturday, ShiftCode::TwelveToTen)?, ToggleOutcome::Added);
///
/// // Marking the day special drops 12-10
/// let cleared = planner.set_special_date(&saturday, true)?;
/// assert_eq!(cleared, vec![ShiftCode::TwelveToTen]);
/// assert!(planner.day_shifts(&saturday).is_empty());
/// # Ok::<(), shift_earnings::error::ScheduleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftPlanner {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    schedule: ScheduleMap,
    #[serde(default)]
    special_dates: SpecialDatesMap,
}

fn default_title() -> String {
    DEFAULT_SCHEDULE_TITLE.to_string()
}

impl Default for ShiftPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftPlanner {
    /// Creates an empty planner.
    pub fn new() -> Self {
        Self::from_parts(ScheduleMap::new(), SpecialDatesMap::new())
    }

    /// Creates a planner over existing maps. Existing entries are kept as
    /// they are, even if they break the eligibility rules.
    pub fn from_parts(schedule: ScheduleMap, special_dates: SpecialDatesMap) -> Self {
        Self {
            title: default_title(),
            schedule,
            special_dates,
        }
    }

    /// The schedule title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renames the schedule. Blank titles fall back to the default.
    pub fn set_title(&mut self, title: &str) {
        let title = title.trim();
        self.title = if title.is_empty() {
            default_title()
        } else {
            title.to_string()
        };
    }

    /// The schedule map.
    pub fn schedule(&self) -> &ScheduleMap {
        &self.schedule
    }

    /// The special-date map.
    pub fn special_dates(&self) -> &SpecialDatesMap {
        &self.special_dates
    }

    /// Returns true if the day is flagged special.
    pub fn is_special(&self, date_key: &DateKey) -> bool {
        is_special_date(&self.special_dates, date_key)
    }

    /// Shifts selected on a day, in display order.
    pub fn day_shifts(&self, date_key: &DateKey) -> Vec<ShiftCode> {
        let mut shifts = self.schedule.get(date_key).cloned().unwrap_or_default();
        sort_for_display(&mut shifts);
        shifts
    }

    /// Shifts the day offers given its current special flag.
    pub fn eligible_shifts(&self, date_key: &DateKey) -> ScheduleResult<Vec<ShiftCode>> {
        Ok(eligible_shifts(date_key.weekday()?, self.is_special(date_key)))
    }

    /// Toggles `code` on a day.
    ///
    /// A selected shift is removed. An unselected shift is added only if the
    /// day offers it and no selected shift excludes it. Removing the last
    /// shift removes the day from the schedule.
    pub fn toggle_shift(&mut self, date_key: &DateKey, code: ShiftCode) -> ScheduleResult<ToggleOutcome> {
        let weekday = date_key.weekday()?;
        let current = self.schedule.get(date_key).map_or(&[][..], Vec::as_slice);

        match check_selection(&code, current, weekday, self.is_special(date_key)) {
            SelectionCheck::AlreadySelected => {
                self.remove_shift(date_key, &code);
                debug!(date_key = %date_key, shift = %code, "Shift removed");
                Ok(ToggleOutcome::Removed)
            }
            SelectionCheck::Allowed => {
                self.schedule.entry(date_key.clone()).or_default().push(code.clone());
                debug!(date_key = %date_key, shift = %code, "Shift added");
                Ok(ToggleOutcome::Added)
            }
            rejected => {
                debug!(date_key = %date_key, shift = %code, reason = ?rejected, "Shift toggle rejected");
                Ok(ToggleOutcome::Rejected(rejected))
            }
        }
    }

    /// Sets or clears a day's special flag and returns the shifts that were
    /// deselected because the day no longer offers them.
    ///
    /// Shifts are only deselected when the flag actually changes; setting a
    /// flag to its current value leaves the day untouched.
    pub fn set_special_date(&mut self, date_key: &DateKey, is_special: bool) -> ScheduleResult<Vec<ShiftCode>> {
        let weekday = date_key.weekday()?;
        let cleared = if is_special == self.is_special(date_key) {
            Vec::new()
        } else {
            let current = self.schedule.get(date_key).map_or(&[][..], Vec::as_slice);
            special_toggle_clears(weekday, is_special, current)
        };

        if is_special {
            self.special_dates.insert(date_key.clone(), true);
        } else {
            self.special_dates.remove(date_key);
        }

        for code in &cleared {
            self.remove_shift(date_key, code);
        }

        info!(
            date_key = %date_key,
            is_special,
            cleared = cleared.len(),
            "Special date updated"
        );
        Ok(cleared)
    }

    /// Removes every shift and the special flag of one day. Returns true if
    /// anything was removed.
    pub fn clear_date(&mut self, date_key: &DateKey) -> bool {
        let had_shifts = self.schedule.remove(date_key).is_some();
        let had_flag = self.special_dates.remove(date_key).is_some();
        had_shifts || had_flag
    }

    /// Removes every entry of `month` and reports what was removed.
    pub fn reset_month(&mut self, month: YearMonth) -> MonthActivity {
        let removed = self.month_activity(month);

        for date_key in month.day_keys() {
            self.schedule.remove(&date_key);
            self.special_dates.remove(&date_key);
        }

        info!(
            month = %month,
            shifts = removed.shift_count,
            special_dates = removed.special_date_count,
            "Month reset"
        );
        removed
    }

    /// Counts the shifts and special dates of `month`.
    pub fn month_activity(&self, month: YearMonth) -> MonthActivity {
        MonthActivity::for_month(&self.schedule, &self.special_dates, month)
    }

    /// Earnings for the viewed month.
    pub fn earnings(&self, settings: &Settings, reference_date: NaiveDate, viewed: YearMonth) -> EarningsSummary {
        compute_earnings(&self.schedule, settings, &self.special_dates, reference_date, viewed)
    }

    /// Earnings for the viewed month with every contribution.
    pub fn earnings_breakdown(
        &self,
        settings: &Settings,
        reference_date: NaiveDate,
        viewed: YearMonth,
    ) -> EarningsBreakdown {
        compute_earnings_breakdown(&self.schedule, settings, &self.special_dates, reference_date, viewed)
    }

    fn remove_shift(&mut self, date_key: &DateKey, code: &ShiftCode) {
        if let Some(shifts) = self.schedule.get_mut(date_key) {
            shifts.retain(|selected| selected != code);
            if shifts.is_empty() {
                self.schedule.remove(date_key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use crate::models::ShiftCombination;

    // March 2024: the 9th is a Saturday, the 10th a Sunday, the 12th a Tuesday
    fn saturday() -> DateKey {
        DateKey::from("2024-03-09")
    }

    fn sunday() -> DateKey {
        DateKey::from("2024-03-10")
    }

    fn tuesday() -> DateKey {
        DateKey::from("2024-03-12")
    }

    #[test]
    fn test_new_planner_is_empty() {
        let planner = ShiftPlanner::new();
        assert_eq!(planner.title(), DEFAULT_SCHEDULE_TITLE);
        assert!(planner.schedule().is_empty());
        assert!(planner.special_dates().is_empty());
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut planner = ShiftPlanner::new();
        assert_eq!(
            planner.toggle_shift(&tuesday(), ShiftCode::FourToTen).unwrap(),
            ToggleOutcome::Added
        );
        assert_eq!(planner.day_shifts(&tuesday()), vec![ShiftCode::FourToTen]);

        assert_eq!(
            planner.toggle_shift(&tuesday(), ShiftCode::FourToTen).unwrap(),
            ToggleOutcome::Removed
        );
        assert!(!planner.schedule().contains_key(&tuesday()));
    }

    #[test]
    fn test_toggle_rejects_ineligible_shift() {
        let mut planner = ShiftPlanner::new();
        let outcome = planner.toggle_shift(&tuesday(), ShiftCode::TwelveToTen).unwrap();
        assert!(matches!(
            outcome,
            ToggleOutcome::Rejected(SelectionCheck::NotEligible { .. })
        ));
        assert!(planner.schedule().is_empty());
    }

    #[test]
    fn test_toggle_rejects_conflict() {
        let mut planner = ShiftPlanner::new();
        planner.set_special_date(&saturday(), true).unwrap();
        planner.toggle_shift(&saturday(), ShiftCode::NineToFour).unwrap();
        planner.toggle_shift(&saturday(), ShiftCode::FourToTen).unwrap();

        planner.set_special_date(&saturday(), false).unwrap();
        // 9-4 was dropped, 4-10 is still selected and blocks 12-10
        assert_eq!(
            planner.toggle_shift(&saturday(), ShiftCode::TwelveToTen).unwrap(),
            ToggleOutcome::Rejected(SelectionCheck::Conflicts {
                with: ShiftCode::FourToTen
            })
        );
    }

    #[test]
    fn test_toggle_invalid_key_is_error() {
        let mut planner = ShiftPlanner::new();
        assert!(planner.toggle_shift(&DateKey::from("2024-02-31"), ShiftCode::Night).is_err());
    }

    #[test]
    fn test_unpadded_key_is_rejected() {
        let mut planner = ShiftPlanner::new();
        planner.set_special_date(&saturday(), true).unwrap();
        planner.toggle_shift(&saturday(), ShiftCode::NineToFour).unwrap();

        let unpadded = DateKey::from("2024-3-9");
        assert!(matches!(
            planner.toggle_shift(&unpadded, ShiftCode::TwelveToTen),
            Err(ScheduleError::InvalidDateKey { .. })
        ));
        assert!(planner.set_special_date(&unpadded, false).is_err());
        assert!(planner.eligible_shifts(&unpadded).is_err());

        assert_eq!(planner.schedule().len(), 1);
        let removed = planner.reset_month(YearMonth::new(2024, 3).unwrap());
        assert_eq!(removed.shift_count, 1);
        assert!(planner.schedule().is_empty());
    }

    #[test]
    fn test_unchanged_special_flag_clears_nothing() {
        let mut schedule = ScheduleMap::new();
        schedule.insert(saturday(), vec![ShiftCode::TwelveToTen]);
        schedule.insert(tuesday(), vec![ShiftCode::NineToFour]);
        let mut special_dates = SpecialDatesMap::new();
        special_dates.insert(saturday(), true);
        let mut planner = ShiftPlanner::from_parts(schedule, special_dates);

        // Already special: 12-10 stays
        assert!(planner.set_special_date(&saturday(), true).unwrap().is_empty());
        assert_eq!(planner.day_shifts(&saturday()), vec![ShiftCode::TwelveToTen]);

        // Already regular: 9-4 stays
        assert!(planner.set_special_date(&tuesday(), false).unwrap().is_empty());
        assert_eq!(planner.day_shifts(&tuesday()), vec![ShiftCode::NineToFour]);

        // Changing the flag still applies the deselection
        assert_eq!(
            planner.set_special_date(&saturday(), false).unwrap(),
            Vec::<ShiftCode>::new()
        );
        assert_eq!(
            planner.set_special_date(&saturday(), true).unwrap(),
            vec![ShiftCode::TwelveToTen]
        );
    }

    #[test]
    fn test_special_off_keeps_nine_to_four_on_sunday() {
        let mut planner = ShiftPlanner::new();
        planner.toggle_shift(&sunday(), ShiftCode::NineToFour).unwrap();
        planner.set_special_date(&sunday(), true).unwrap();

        let cleared = planner.set_special_date(&sunday(), false).unwrap();
        assert!(cleared.is_empty());
        assert_eq!(planner.day_shifts(&sunday()), vec![ShiftCode::NineToFour]);
        assert!(!planner.is_special(&sunday()));
    }

    #[test]
    fn test_special_off_drops_nine_to_four_on_weekday() {
        let mut planner = ShiftPlanner::new();
        planner.set_special_date(&tuesday(), true).unwrap();
        planner.toggle_shift(&tuesday(), ShiftCode::NineToFour).unwrap();
        planner.toggle_shift(&tuesday(), ShiftCode::Night).unwrap();

        let cleared = planner.set_special_date(&tuesday(), false).unwrap();
        assert_eq!(cleared, vec![ShiftCode::NineToFour]);
        assert_eq!(planner.day_shifts(&tuesday()), vec![ShiftCode::Night]);
    }

    #[test]
    fn test_day_shifts_in_display_order() {
        let mut planner = ShiftPlanner::new();
        planner.toggle_shift(&sunday(), ShiftCode::Night).unwrap();
        planner.toggle_shift(&sunday(), ShiftCode::FourToTen).unwrap();
        planner.toggle_shift(&sunday(), ShiftCode::NineToFour).unwrap();

        assert_eq!(
            planner.day_shifts(&sunday()),
            vec![ShiftCode::NineToFour, ShiftCode::FourToTen, ShiftCode::Night]
        );
        // Stored order is insertion order
        assert_eq!(planner.schedule()[&sunday()][0], ShiftCode::Night);
    }

    #[test]
    fn test_eligible_shifts_follow_special_flag() {
        let mut planner = ShiftPlanner::new();
        assert_eq!(
            planner.eligible_shifts(&tuesday()).unwrap(),
            vec![ShiftCode::FourToTen, ShiftCode::Night]
        );
        planner.set_special_date(&tuesday(), true).unwrap();
        assert_eq!(planner.eligible_shifts(&tuesday()).unwrap().len(), 3);
    }

    #[test]
    fn test_clear_date() {
        let mut planner = ShiftPlanner::new();
        planner.toggle_shift(&tuesday(), ShiftCode::Night).unwrap();
        planner.set_special_date(&tuesday(), true).unwrap();

        assert!(planner.clear_date(&tuesday()));
        assert!(!planner.is_special(&tuesday()));
        assert!(planner.day_shifts(&tuesday()).is_empty());
        assert!(!planner.clear_date(&tuesday()));
    }

    #[test]
    fn test_reset_month_only_touches_that_month() {
        let mut planner = ShiftPlanner::new();
        planner.toggle_shift(&sunday(), ShiftCode::NineToFour).unwrap();
        planner.toggle_shift(&sunday(), ShiftCode::Night).unwrap();
        planner.set_special_date(&tuesday(), true).unwrap();
        let april = DateKey::from("2024-04-02");
        planner.toggle_shift(&april, ShiftCode::Night).unwrap();

        let removed = planner.reset_month(YearMonth::new(2024, 3).unwrap());
        assert_eq!(removed.shift_count, 2);
        assert_eq!(removed.special_date_count, 1);
        assert!(planner.month_activity(YearMonth::new(2024, 3).unwrap()).is_empty());
        assert_eq!(planner.day_shifts(&april), vec![ShiftCode::Night]);
    }

    #[test]
    fn test_set_title() {
        let mut planner = ShiftPlanner::new();
        planner.set_title("  March roster ");
        assert_eq!(planner.title(), "March roster");
        planner.set_title("   ");
        assert_eq!(planner.title(), DEFAULT_SCHEDULE_TITLE);
    }

    #[test]
    fn test_earnings_use_planner_maps() {
        let mut planner = ShiftPlanner::new();
        planner.toggle_shift(&tuesday(), ShiftCode::FourToTen).unwrap();
        let settings =
            Settings::new(52_000.0, vec![ShiftCombination::new("4-10", "Evening", 6.0)]).unwrap();

        let summary = planner.earnings(
            &settings,
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            YearMonth::new(2024, 3).unwrap(),
        );
        assert_eq!(summary.total_amount, 1800.0);
        assert_eq!(summary.month_to_date_amount, 1800.0);
    }

    #[test]
    fn test_deserialize_stored_planner() {
        let json = r#"{
            "schedule": { "2024-03-09": ["12-10", "N"] },
            "specialDates": { "2024-03-12": true }
        }"#;
        let planner: ShiftPlanner = serde_json::from_str(json).unwrap();

        assert_eq!(planner.title(), DEFAULT_SCHEDULE_TITLE);
        assert_eq!(planner.day_shifts(&saturday()).len(), 2);
        assert!(planner.is_special(&tuesday()));
    }
}
