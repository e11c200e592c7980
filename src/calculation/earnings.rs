//! Monthly earnings calculation.
//!
//! Prices every scheduled shift of the viewed month against the configured
//! combination table, applies multi-shift combination adjustments and
//! accumulates month-to-date earnings up to a reference date.
//!
//! The calculation is a pure function of its inputs. Schedules are ordered
//! maps, so entries are always visited in the same order and totals are
//! bit-for-bit reproducible.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DateKey, EarningsBreakdown, EarningsLine,
    EarningsSummary, LineKind, ScheduleMap, Settings, ShiftCode, ShiftCombination,
    SpecialDatesMap, YearMonth, is_special_date,
};

use super::{DayKind, combination_key, find_combination};

/// Warning code for a shift with no matching combination.
pub const WARN_UNMATCHED_SHIFT: &str = "UNMATCHED_SHIFT";
/// Warning code for a schedule key that is not a date.
pub const WARN_INVALID_DATE_KEY: &str = "INVALID_DATE_KEY";
/// Warning code for a combination worth less than its individual shifts.
pub const WARN_NEGATIVE_ADJUSTMENT: &str = "NEGATIVE_ADJUSTMENT";
/// Warning code for a day priced with no hourly rate configured.
pub const WARN_NO_HOURLY_RATE: &str = "NO_HOURLY_RATE";

/// Computes total and month-to-date earnings for the viewed month.
///
/// Returns zeros when the schedule is empty or no combinations are
/// configured. Days outside `viewed` contribute nothing. A contribution
/// counts toward month-to-date when its day is in the month of
/// `reference_date` and not after it.
///
/// # Example
///
/// ```
/// use shift_earnings::calculation::compute_earnings;
/// use shift_earnings::models::{
///     DateKey, ScheduleMap, Settings, ShiftCode, ShiftCombination, SpecialDatesMap, YearMonth,
/// };
/// use chrono::NaiveDate;
///
/// let settings = Settings::new(52_000.0, vec![ShiftCombination::new("4-10", "Evening", 6.0)])?;
/// let mut schedule = ScheduleMap::new();
/// schedule.insert(DateKey::from("2024-03-05"), vec![ShiftCode::FourToTen]);
///
/// let summary = compute_earnings(
///     &schedule,
///     &settings,
///     &SpecialDatesMap::new(),
///     NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
///     YearMonth::new(2024, 3)?,
/// );
/// assert_eq!(summary.total_amount, 1800.0);
/// assert_eq!(summary.month_to_date_amount, 1800.0);
/// # Ok::<(), shift_earnings::error::ScheduleError>(())
/// ```
pub fn compute_earnings(
    schedule: &ScheduleMap,
    settings: &Settings,
    special_dates: &SpecialDatesMap,
    reference_date: NaiveDate,
    viewed: YearMonth,
) -> EarningsSummary {
    compute_earnings_breakdown(schedule, settings, special_dates, reference_date, viewed).summary
}

/// Computes earnings and records every contribution and rule decision.
///
/// The returned summary is identical to [`compute_earnings`].
pub fn compute_earnings_breakdown(
    schedule: &ScheduleMap,
    settings: &Settings,
    special_dates: &SpecialDatesMap,
    reference_date: NaiveDate,
    viewed: YearMonth,
) -> EarningsBreakdown {
    if schedule.is_empty() {
        debug!("No schedule data, earnings are zero");
        return EarningsBreakdown::default();
    }

    if !settings.has_combinations() {
        debug!("No shift combinations configured, earnings are zero");
        return EarningsBreakdown::default();
    }

    let mut calculation = Calculation::new(settings, reference_date);

    for (date_key, shifts) in schedule {
        if shifts.is_empty() {
            continue;
        }

        let date = match date_key.date() {
            Ok(date) => date,
            Err(e) => {
                warn!(date_key = %date_key, error = %e, "Skipping schedule entry with invalid date key");
                calculation.warn(WARN_INVALID_DATE_KEY, e.to_string());
                continue;
            }
        };

        if !viewed.contains(date) {
            debug!(date_key = %date_key, viewed = %viewed, "Skipping entry outside viewed month");
            continue;
        }

        let is_special = is_special_date(special_dates, date_key);
        calculation.price_day(date_key, date, DayKind::for_date(date, is_special), shifts);
    }

    debug!(
        total = calculation.summary.total_amount,
        month_to_date = calculation.summary.month_to_date_amount,
        "Earnings calculated"
    );

    calculation.finish()
}

/// Running state of one calculation.
struct Calculation<'a> {
    combinations: &'a [ShiftCombination],
    hourly_rate: f64,
    reference_date: NaiveDate,
    reference_month: YearMonth,
    summary: EarningsSummary,
    lines: Vec<EarningsLine>,
    trace: AuditTrace,
}

impl<'a> Calculation<'a> {
    fn new(settings: &'a Settings, reference_date: NaiveDate) -> Self {
        Self {
            combinations: settings.shift_combinations(),
            hourly_rate: settings.hourly_rate(),
            reference_date,
            reference_month: YearMonth::from_date(reference_date),
            summary: EarningsSummary::default(),
            lines: Vec::new(),
            trace: AuditTrace::default(),
        }
    }

    fn finish(self) -> EarningsBreakdown {
        EarningsBreakdown {
            summary: self.summary,
            lines: self.lines,
            audit_trace: self.trace,
        }
    }

    fn has_rate(&self) -> bool {
        self.hourly_rate > 0.0
    }

    fn counts_toward_month_to_date(&self, date: NaiveDate) -> bool {
        self.reference_month.contains(date) && date.day() <= self.reference_date.day()
    }

    /// Amount for a single shift from its own combination, 0 when unmatched.
    fn single_amount(&self, code: &ShiftCode) -> f64 {
        find_combination(self.combinations, code.as_str())
            .map_or(0.0, |combination| combination.amount(self.hourly_rate))
    }

    fn price_day(&mut self, date_key: &DateKey, date: NaiveDate, day_kind: DayKind, shifts: &[ShiftCode]) {
        let month_to_date = self.counts_toward_month_to_date(date);
        debug!(
            date_key = %date_key,
            day_kind = %day_kind,
            shifts = shifts.len(),
            month_to_date,
            "Pricing day"
        );

        if !self.has_rate() {
            self.warn(
                WARN_NO_HOURLY_RATE,
                format!("{}: no hourly rate configured, shifts priced at zero", date_key),
            );
            return;
        }

        for code in shifts {
            match find_combination(self.combinations, code.as_str()) {
                Some(combination) => {
                    let amount = combination.amount(self.hourly_rate);
                    self.record(
                        EarningsLine {
                            date_key: date_key.clone(),
                            date,
                            kind: LineKind::Shift,
                            shifts: vec![code.clone()],
                            combination_id: combination.id.clone(),
                            hours: combination.hours,
                            rate: self.hourly_rate,
                            amount,
                            counts_toward_month_to_date: month_to_date,
                        },
                        day_kind,
                        format!(
                            "Shift {}: {} hours × {} = {}",
                            code, combination.hours, self.hourly_rate, amount
                        ),
                    );
                }
                None => {
                    warn!(date_key = %date_key, shift = %code, "No combination configured for shift");
                    self.warn(
                        WARN_UNMATCHED_SHIFT,
                        format!("{}: no combination configured for shift {}", date_key, code),
                    );
                }
            }
        }

        if shifts.len() > 1 {
            self.adjust_for_combination(date_key, date, day_kind, shifts, month_to_date);
        }
    }

    /// Replaces the summed single-shift amounts with the amount of the
    /// configured multi-shift combination, if one exists.
    fn adjust_for_combination(
        &mut self,
        date_key: &DateKey,
        date: NaiveDate,
        day_kind: DayKind,
        shifts: &[ShiftCode],
        month_to_date: bool,
    ) {
        let key = combination_key(shifts);
        let Some(multi) = find_combination(self.combinations, &key) else {
            debug!(date_key = %date_key, key = %key, "No multi-shift combination configured");
            return;
        };

        // Alias-aware like the single-shift lines: an `AM` entry prices 9-4
        // here too, so this always equals the day's single-shift lines.
        let individual_total = shifts
            .iter()
            .fold(0.0, |sum, code| sum + self.single_amount(code));
        let multi_amount = multi.amount(self.hourly_rate);
        let difference = multi_amount - individual_total;

        if difference < 0.0 {
            warn!(
                date_key = %date_key,
                key = %key,
                difference,
                "Multi-shift combination pays less than its individual shifts"
            );
            self.warn(
                WARN_NEGATIVE_ADJUSTMENT,
                format!(
                    "{}: combination {} pays {} less than its individual shifts",
                    date_key, key, -difference
                ),
            );
        }

        self.record(
            EarningsLine {
                date_key: date_key.clone(),
                date,
                kind: LineKind::CombinationAdjustment,
                shifts: shifts.to_vec(),
                combination_id: multi.id.clone(),
                hours: multi.hours,
                rate: self.hourly_rate,
                amount: difference,
                counts_toward_month_to_date: month_to_date,
            },
            day_kind,
            format!(
                "Combination {}: {} - {} = {}",
                key, multi_amount, individual_total, difference
            ),
        );
    }

    fn record(&mut self, line: EarningsLine, day_kind: DayKind, reasoning: String) {
        self.summary.total_amount += line.amount;
        if line.counts_toward_month_to_date {
            self.summary.month_to_date_amount += line.amount;
        }

        let (rule_id, rule_name) = match line.kind {
            LineKind::Shift => ("single_shift", "Single Shift Rate"),
            LineKind::CombinationAdjustment => {
                ("combination_adjustment", "Multi-Shift Combination Adjustment")
            }
        };

        let shifts: Vec<&str> = line.shifts.iter().map(ShiftCode::as_str).collect();
        let step = AuditStep {
            step_number: self.trace.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input: serde_json::json!({
                "date": line.date_key.as_str(),
                "day_kind": day_kind,
                "shifts": shifts,
                "combination_id": line.combination_id,
                "hours": line.hours,
                "hourly_rate": line.rate,
            }),
            output: serde_json::json!({
                "amount": line.amount,
                "month_to_date": line.counts_toward_month_to_date,
            }),
            reasoning,
        };

        self.trace.steps.push(step);
        self.lines.push(line);
    }

    fn warn(&mut self, code: &str, message: String) {
        self.trace.warnings.push(AuditWarning {
            code: code.to_string(),
            message,
        });
    }
}
