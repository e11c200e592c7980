//! Shift eligibility rules.
//!
//! Decides which shifts a day offers, which shifts cannot be worked on the
//! same day, and which shifts must be dropped when a day's special flag
//! changes. These rules gate toggles; they never repair a schedule that
//! already holds an illegal combination.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::ShiftCode;

use super::DayKind;

/// Outcome of checking whether a shift may be toggled on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SelectionCheck {
    /// The shift is already selected; toggling it off is always allowed.
    AlreadySelected,
    /// The shift may be added.
    Allowed,
    /// The day does not offer this shift.
    NotEligible {
        /// The kind of day that was checked.
        day_kind: DayKind,
    },
    /// A selected shift excludes the candidate.
    Conflicts {
        /// The selected shift that blocks the candidate.
        with: ShiftCode,
    },
}

impl SelectionCheck {
    /// Returns true if the toggle is permitted.
    pub fn is_selectable(&self) -> bool {
        matches!(self, SelectionCheck::AlreadySelected | SelectionCheck::Allowed)
    }
}

/// Shifts offered on a kind of day, in display order.
pub fn eligible_shifts_for_kind(day_kind: DayKind) -> Vec<ShiftCode> {
    match day_kind {
        DayKind::Special | DayKind::Sunday => vec![
            ShiftCode::NineToFour,
            ShiftCode::FourToTen,
            ShiftCode::Night,
        ],
        DayKind::Saturday => vec![ShiftCode::TwelveToTen, ShiftCode::Night],
        DayKind::Weekday => vec![ShiftCode::FourToTen, ShiftCode::Night],
    }
}

/// Shifts offered on a day, in display order.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::eligible_shifts;
/// use shift_earnings::models::ShiftCode;
/// use chrono::Weekday;
///
/// assert_eq!(
///     eligible_shifts(Weekday::Sat, false),
///     vec![ShiftCode::TwelveToTen, ShiftCode::Night]
/// );
/// assert_eq!(
///     eligible_shifts(Weekday::Sat, true),
///     vec![ShiftCode::NineToFour, ShiftCode::FourToTen, ShiftCode::Night]
/// );
/// ```
pub fn eligible_shifts(weekday: Weekday, is_special: bool) -> Vec<ShiftCode> {
    eligible_shifts_for_kind(DayKind::classify(weekday, is_special))
}

/// Returns true if `code` is offered on the day.
pub fn is_eligible(code: &ShiftCode, weekday: Weekday, is_special: bool) -> bool {
    eligible_shifts(weekday, is_special).contains(code)
}

/// Returns true if `a` and `b` cannot be worked on the same day.
///
/// `9-4` and `12-10` overlap, as do `12-10` and `4-10`. `9-4` and `4-10`
/// are back to back and combine freely. `N` combines with anything.
pub fn excludes(a: &ShiftCode, b: &ShiftCode) -> bool {
    use ShiftCode::{FourToTen, NineToFour, TwelveToTen};

    matches!(
        (a, b),
        (NineToFour, TwelveToTen)
            | (TwelveToTen, NineToFour)
            | (TwelveToTen, FourToTen)
            | (FourToTen, TwelveToTen)
    )
}

/// Checks whether `candidate` may be toggled on a day currently holding
/// `current`.
pub fn check_selection(
    candidate: &ShiftCode,
    current: &[ShiftCode],
    weekday: Weekday,
    is_special: bool,
) -> SelectionCheck {
    if current.contains(candidate) {
        return SelectionCheck::AlreadySelected;
    }

    let day_kind = DayKind::classify(weekday, is_special);
    if !eligible_shifts_for_kind(day_kind).contains(candidate) {
        return SelectionCheck::NotEligible { day_kind };
    }

    match current.iter().find(|selected| excludes(selected, candidate)) {
        Some(selected) => SelectionCheck::Conflicts {
            with: selected.clone(),
        },
        None => SelectionCheck::Allowed,
    }
}

/// Returns true if `candidate` may be toggled: it is already selected, or it
/// is offered on the day and no selected shift excludes it.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::can_select_shift;
/// use shift_earnings::models::ShiftCode;
/// use chrono::Weekday;
///
/// let current = [ShiftCode::NineToFour];
/// assert!(can_select_shift(&ShiftCode::FourToTen, &current, Weekday::Sun, false));
/// assert!(!can_select_shift(&ShiftCode::TwelveToTen, &current, Weekday::Sun, true));
/// ```
pub fn can_select_shift(
    candidate: &ShiftCode,
    current: &[ShiftCode],
    weekday: Weekday,
    is_special: bool,
) -> bool {
    check_selection(candidate, current, weekday, is_special).is_selectable()
}

/// Shifts the caller must deselect when a day's special flag changes.
///
/// Turning the flag on drops `12-10`, which special days do not offer.
/// Turning it off on any day but Sunday drops `9-4`, which only Sundays and
/// special days offer.
pub fn special_toggle_clears(
    weekday: Weekday,
    turning_on: bool,
    current: &[ShiftCode],
) -> Vec<ShiftCode> {
    let dropped = if turning_on {
        ShiftCode::TwelveToTen
    } else if weekday != Weekday::Sun {
        ShiftCode::NineToFour
    } else {
        return Vec::new();
    };

    if current.contains(&dropped) {
        vec![dropped]
    } else {
        Vec::new()
    }
}
