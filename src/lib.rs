//! Shift Earnings Engine for monthly shift calendars
//!
//! This crate decides which shifts may be scheduled on a given day and
//! computes the earnings for a month of scheduled shifts, including the
//! month-to-date portion and a step-by-step audit trail.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use shift_earnings::calculation::compute_earnings;
//! use shift_earnings::models::{DateKey, ScheduleMap, Settings, ShiftCode, SpecialDatesMap, YearMonth};
//!
//! let mut schedule = ScheduleMap::new();
//! schedule.insert(DateKey::new("2024-03-02"), vec![ShiftCode::TwelveToTen]);
//!
//! let mut settings = Settings::default();
//! settings.set_basic_salary(52_000.0).unwrap();
//!
//! let viewed = YearMonth::new(2024, 3).unwrap();
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let summary = compute_earnings(&schedule, &settings, &SpecialDatesMap::new(), today, viewed);
//!
//! assert_eq!(summary.total_amount, 3000.0);
//! assert_eq!(summary.month_to_date_amount, 3000.0);
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
