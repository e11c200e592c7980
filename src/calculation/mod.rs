//! Calculation logic for the shift earnings engine.
//!
//! This module contains day classification, the shift eligibility rules
//! that gate schedule toggles, the combination lookup rules (alias
//! resolution and multi-shift keys) and the monthly earnings calculation.

mod combination_lookup;
mod day_detection;
mod earnings;
mod eligibility;

pub use combination_lookup::{
    COMBINATION_SEPARATOR, NINE_TO_FOUR_ALIAS, combination_key, find_combination, resolve_alias,
};
pub use day_detection::{DayKind, day_of_week_index};
pub use earnings::{
    WARN_INVALID_DATE_KEY, WARN_NEGATIVE_ADJUSTMENT, WARN_NO_HOURLY_RATE, WARN_UNMATCHED_SHIFT,
    compute_earnings, compute_earnings_breakdown,
};
pub use eligibility::{
    SelectionCheck, can_select_shift, check_selection, eligible_shifts, eligible_shifts_for_kind,
    excludes, is_eligible, special_toggle_clears,
};
