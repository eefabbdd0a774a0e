//! Historical weekly overview: every entry in every pay-relevant list is
//! bucketed by the Sunday that starts its week, across the whole history,
//! not just the current period. Display capping is left to the caller.

use super::paid::holiday_paid_minutes;
use super::pay::{overtime_pay, pay_for_minutes};
use crate::models::State;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeekBucket {
    pub start: NaiveDate, // Sunday
    pub end: NaiveDate,   // following Saturday
    pub regular_min: i64,
    pub holiday_min: i64,
    pub overtime_min: i64,
    pub regular_pay: f64,
    pub holiday_pay: f64,
    pub overtime_pay: f64,
}

impl WeekBucket {
    fn new(start: NaiveDate) -> Self {
        Self {
            start,
            end: start + Duration::days(6),
            ..Default::default()
        }
    }

    pub fn total_minutes(&self) -> i64 {
        self.regular_min + self.holiday_min + self.overtime_min
    }

    pub fn total_pay(&self) -> f64 {
        self.regular_pay + self.holiday_pay + self.overtime_pay
    }
}

fn bucket<'a>(
    map: &'a mut BTreeMap<NaiveDate, WeekBucket>,
    date: NaiveDate,
) -> &'a mut WeekBucket {
    let start = crate::utils::date::start_of_week_sunday(date);
    map.entry(start).or_insert_with(|| WeekBucket::new(start))
}

/// All week buckets with any regular, holiday or overtime content, most
/// recent week first.
pub fn weekly_overview(state: &State, rate: f64) -> Vec<WeekBucket> {
    let mut map: BTreeMap<NaiveDate, WeekBucket> = BTreeMap::new();

    for e in &state.hours {
        bucket(&mut map, e.date).regular_min += e.minutes;
    }
    for e in &state.holidays {
        bucket(&mut map, e.date).holiday_min += holiday_paid_minutes(e);
    }
    for e in &state.overtimes {
        let w = bucket(&mut map, e.date);
        w.overtime_min += e.minutes;
        w.overtime_pay += overtime_pay(e, rate);
    }

    for w in map.values_mut() {
        w.regular_pay = pay_for_minutes(w.regular_min, rate);
        w.holiday_pay = pay_for_minutes(w.holiday_min, rate);
    }

    map.into_values().rev().collect()
}
