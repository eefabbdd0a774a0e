//! Mutation guard: the only write path into the entry lists.
//!
//! Enforces the one-entry-per-date invariant for single and range adds, and
//! evaluates the holidays limit before any mutation so a refused operation
//! leaves the list untouched.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{AbsenceEntry, Dated};
use crate::utils::date::{enumerate_dates_inclusive, fmt_date};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Outcome of a range add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeReport {
    pub added: usize,
    pub skipped: usize,
}

/// Single id allocator shared by the single-add and range-add paths.
pub fn next_id<E: Dated>(list: &[E]) -> u32 {
    list.iter().map(|e| e.id()).max().unwrap_or(0) + 1
}

/// Append one entry, refusing duplicates by date. The entry gets a fresh id.
pub fn add_single<E: Dated>(list: &mut Vec<E>, mut entry: E) -> AppResult<()> {
    if list.iter().any(|e| e.date() == entry.date()) {
        return Err(AppError::DuplicateDate(fmt_date(entry.date())));
    }
    entry.set_id(next_id(list));
    list.push(entry);
    Ok(())
}

/// Append one entry per date in `[from, to]`, skipping dates already present.
/// Fails with `InvalidRange` for a reversed range and `RangeAllDuplicates`
/// when nothing is left to add; those two cases are deliberately distinct.
pub fn add_range<E, F>(
    list: &mut Vec<E>,
    from: NaiveDate,
    to: NaiveDate,
    build: F,
) -> AppResult<RangeReport>
where
    E: Dated,
    F: Fn(NaiveDate) -> E,
{
    let dates = enumerate_dates_inclusive(from, to);
    if dates.is_empty() {
        return Err(AppError::InvalidRange);
    }

    let existing: HashSet<NaiveDate> = list.iter().map(|e| e.date()).collect();
    let to_add: Vec<NaiveDate> = dates
        .iter()
        .copied()
        .filter(|d| !existing.contains(d))
        .collect();

    if to_add.is_empty() {
        return Err(AppError::RangeAllDuplicates(dates.len()));
    }

    let skipped = dates.len() - to_add.len();
    let added = to_add.len();

    for d in to_add {
        let mut entry = build(d);
        entry.set_id(next_id(list));
        list.push(entry);
    }

    Ok(RangeReport { added, skipped })
}

/// Days from `[from, to]` that are not yet present in the list, i.e. the
/// true incremental delta a range add would contribute, in day units.
pub fn incremental_range_days(
    list: &[AbsenceEntry],
    from: NaiveDate,
    to: NaiveDate,
    day_value: f64,
) -> f64 {
    let existing: HashSet<NaiveDate> = list.iter().map(|e| e.date).collect();
    let new_days = enumerate_dates_inclusive(from, to)
        .into_iter()
        .filter(|d| !existing.contains(d))
        .count();
    new_days as f64 * day_value
}

/// Refuse a holiday addition that would push the total over the limit.
/// Called before `add_single`/`add_range` so state is never half-applied.
pub fn check_holidays_limit(taken: f64, incoming: f64, limit: f64) -> AppResult<()> {
    if limit - (taken + incoming) < 0.0 {
        return Err(AppError::HolidaysLimitExceeded(limit));
    }
    Ok(())
}

/// Remove the entry with the given id.
pub fn delete_by_id<E: Dated>(list: &mut Vec<E>, id: u32) -> AppResult<()> {
    let before = list.len();
    list.retain(|e| e.id() != id);
    if list.len() == before {
        return Err(AppError::NoSuchEntry(id));
    }
    Ok(())
}
