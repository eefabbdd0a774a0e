//! Calendar utilities: date parsing, inclusive range enumeration and
//! week/month/year window boundaries. Weeks run Sunday..Saturday.
//!
//! All functions work on plain calendar dates (no timezone, no time of day),
//! so period windows are closed date intervals at full-day precision.

use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Date plus weekday for human output, e.g. "20.08.2025 - Wednesday".
pub fn fmt_date_with_weekday(d: NaiveDate) -> String {
    d.format("%d.%m.%Y - %A").to_string()
}

/// Ordered calendar dates from `from` to `to` inclusive.
/// Empty when the range is reversed. Steps by calendar days, so month,
/// year and leap-year rollovers come out right.
pub fn enumerate_dates_inclusive(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    if to < from {
        return Vec::new();
    }

    let mut out = Vec::new();
    let mut d = from;
    while d <= to {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break, // end of the calendar
        }
    }
    out
}

/// The Sunday that starts the week containing `d`.
pub fn start_of_week_sunday(d: NaiveDate) -> NaiveDate {
    let back = d.weekday().num_days_from_sunday() as i64;
    d - Duration::days(back)
}

/// The Saturday that ends the week containing `d`.
pub fn end_of_week_saturday(d: NaiveDate) -> NaiveDate {
    start_of_week_sunday(d) + Duration::days(6)
}

pub fn start_of_month(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap_or(d)
}

pub fn end_of_month(d: NaiveDate) -> NaiveDate {
    let first = start_of_month(d);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    match next_month {
        Some(n) => n - Duration::days(1),
        None => d,
    }
}

pub fn start_of_year(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), 1, 1).unwrap_or(d)
}

pub fn end_of_year(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), 12, 31).unwrap_or(d)
}

/// True iff `d` lies within the closed interval `[from, to]`.
pub fn in_range(d: NaiveDate, from: NaiveDate, to: NaiveDate) -> bool {
    d >= from && d <= to
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn range_crosses_leap_day() {
        let dates = enumerate_dates_inclusive(d("2024-02-28"), d("2024-03-01"));
        assert_eq!(dates, vec![d("2024-02-28"), d("2024-02-29"), d("2024-03-01")]);
    }

    #[test]
    fn range_crosses_year_boundary() {
        let dates = enumerate_dates_inclusive(d("2025-12-30"), d("2026-01-02"));
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[0], d("2025-12-30"));
        assert_eq!(dates[3], d("2026-01-02"));
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(enumerate_dates_inclusive(d("2025-05-10"), d("2025-05-09")).is_empty());
    }

    #[test]
    fn single_day_range() {
        assert_eq!(
            enumerate_dates_inclusive(d("2025-05-10"), d("2025-05-10")),
            vec![d("2025-05-10")]
        );
    }

    #[test]
    fn week_runs_sunday_to_saturday() {
        // 2025-08-20 is a Wednesday
        assert_eq!(start_of_week_sunday(d("2025-08-20")), d("2025-08-17"));
        assert_eq!(end_of_week_saturday(d("2025-08-20")), d("2025-08-23"));
        // Sunday starts its own week, Saturday still belongs to it
        assert_eq!(start_of_week_sunday(d("2025-08-17")), d("2025-08-17"));
        assert_eq!(start_of_week_sunday(d("2025-08-23")), d("2025-08-17"));
        // next day rolls to the next bucket
        assert_eq!(start_of_week_sunday(d("2025-08-24")), d("2025-08-24"));
    }

    #[test]
    fn month_boundaries() {
        assert_eq!(start_of_month(d("2024-02-15")), d("2024-02-01"));
        assert_eq!(end_of_month(d("2024-02-15")), d("2024-02-29"));
        assert_eq!(end_of_month(d("2025-12-05")), d("2025-12-31"));
    }

    #[test]
    fn year_boundaries() {
        assert_eq!(start_of_year(d("2025-06-10")), d("2025-01-01"));
        assert_eq!(end_of_year(d("2025-06-10")), d("2025-12-31"));
    }

    #[test]
    fn in_range_is_inclusive_at_both_ends() {
        let from = d("2025-08-17");
        let to = d("2025-08-23");
        assert!(in_range(from, from, to));
        assert!(in_range(to, from, to));
        assert!(!in_range(d("2025-08-16"), from, to));
        assert!(!in_range(d("2025-08-24"), from, to));
    }
}
