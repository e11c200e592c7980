//! Core data models for the shift earnings engine.
//!
//! This module contains all the domain models used throughout the engine.

mod date_key;
mod earnings;
mod schedule;
mod settings;
mod shift_code;

pub use date_key::{DateKey, YearMonth};
pub use earnings::{
    AuditStep, AuditTrace, AuditWarning, EarningsBreakdown, EarningsLine, EarningsSummary,
    LineKind,
};
pub use schedule::{MonthActivity, ScheduleMap, SpecialDatesMap, is_special_date};
pub use settings::{
    HOURS_PER_WEEK, Settings, ShiftCombination, WEEKS_PER_YEAR, default_shift_combinations,
    hourly_rate_for, parse_salary_input,
};
pub use shift_code::{SHIFT_DISPLAY_ORDER, ShiftCode, ShiftInfo, sort_for_display};
