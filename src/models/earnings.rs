//! Earnings result models.
//!
//! This module contains the [`EarningsSummary`] returned by the calculator
//! and the [`EarningsBreakdown`] that additionally records every
//! contribution and an audit trace of the rule decisions behind it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DateKey, ShiftCode};

/// Monthly totals produced by the earnings calculator.
///
/// # Example
///
/// ```
/// use shift_earnings::models::EarningsSummary;
///
/// let summary = EarningsSummary::default();
/// assert_eq!(summary.total_amount, 0.0);
/// assert_eq!(summary.month_to_date_amount, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarningsSummary {
    /// Earnings for every scheduled day of the viewed month.
    pub total_amount: f64,
    /// Earnings from the 1st of the reference month through the reference day.
    pub month_to_date_amount: f64,
}

/// What produced an earnings line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Hours of a single shift.
    Shift,
    /// Difference between a multi-shift combination and its individual shifts.
    CombinationAdjustment,
}

/// A single contribution to the monthly total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningsLine {
    /// The schedule key this line came from.
    pub date_key: DateKey,
    /// The parsed date.
    pub date: NaiveDate,
    /// The kind of contribution.
    pub kind: LineKind,
    /// The shifts priced by this line: one code for [`LineKind::Shift`], the
    /// whole day for [`LineKind::CombinationAdjustment`].
    pub shifts: Vec<ShiftCode>,
    /// Id of the matched combination, as configured.
    pub combination_id: String,
    /// Paid hours of the matched combination.
    pub hours: f64,
    /// Hourly rate applied.
    pub rate: f64,
    /// Amount added to the total. Adjustments may be negative.
    pub amount: f64,
    /// Whether the amount also counts toward month-to-date.
    pub counts_toward_month_to_date: bool,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag data that contributed nothing or something unexpected
/// without stopping the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The audit trace for one calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// Full result of an earnings calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    /// The totals.
    pub summary: EarningsSummary,
    /// Every contribution, in the order it was added.
    pub lines: Vec<EarningsLine>,
    /// Rule decisions and warnings.
    pub audit_trace: AuditTrace,
}

impl EarningsBreakdown {
    /// Lines for a single day.
    pub fn lines_for<'a>(&'a self, date_key: &'a DateKey) -> impl Iterator<Item = &'a EarningsLine> + 'a {
        self.lines.iter().filter(move |line| &line.date_key == date_key)
    }

    /// Sum of all line amounts for a single day.
    pub fn day_total(&self, date_key: &DateKey) -> f64 {
        self.lines_for(date_key).map(|line| line.amount).sum()
    }
}
