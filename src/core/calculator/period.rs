//! Period aggregation: minute and pay totals over a closed date window.

use super::paid::holiday_paid_minutes;
use super::pay::{overtime_pay, pay_for_minutes};
use crate::models::{AbsenceEntry, State, TimeEntry};
use crate::utils::date::in_range;
use chrono::NaiveDate;

/// Sum of raw minutes over timed entries inside `[from, to]`.
pub fn sum_minutes_in_period(list: &[TimeEntry], from: NaiveDate, to: NaiveDate) -> i64 {
    list.iter()
        .filter(|e| in_range(e.date, from, to))
        .map(|e| e.minutes)
        .sum()
}

/// Sum of holiday paid minutes over absence entries inside `[from, to]`.
pub fn sum_holiday_minutes_in_period(
    list: &[AbsenceEntry],
    from: NaiveDate,
    to: NaiveDate,
) -> i64 {
    list.iter()
        .filter(|e| in_range(e.date, from, to))
        .map(holiday_paid_minutes)
        .sum()
}

/// Multiplier-weighted overtime earnings inside `[from, to]`.
pub fn sum_overtime_earnings(
    list: &[TimeEntry],
    from: NaiveDate,
    to: NaiveDate,
    rate: f64,
) -> f64 {
    list.iter()
        .filter(|e| in_range(e.date, from, to))
        .map(|e| overtime_pay(e, rate))
        .sum()
}

/// Aggregated minutes and pay per category for one period window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodTotals {
    pub regular_min: i64,
    pub holiday_min: i64,
    pub overtime_min: i64,
    pub regular_pay: f64,
    pub holiday_pay: f64,
    pub overtime_pay: f64,
}

impl PeriodTotals {
    pub fn total_minutes(&self) -> i64 {
        self.regular_min + self.holiday_min + self.overtime_min
    }

    pub fn total_pay(&self) -> f64 {
        self.regular_pay + self.holiday_pay + self.overtime_pay
    }
}

/// Totals for regular hours, holiday paid minutes and overtime in one window.
pub fn period_totals(state: &State, from: NaiveDate, to: NaiveDate, rate: f64) -> PeriodTotals {
    let regular_min = sum_minutes_in_period(&state.hours, from, to);
    let holiday_min = sum_holiday_minutes_in_period(&state.holidays, from, to);
    let overtime_min = sum_minutes_in_period(&state.overtimes, from, to);

    PeriodTotals {
        regular_min,
        holiday_min,
        overtime_min,
        regular_pay: pay_for_minutes(regular_min, rate),
        holiday_pay: pay_for_minutes(holiday_min, rate),
        overtime_pay: sum_overtime_earnings(&state.overtimes, from, to, rate),
    }
}
