//! Holiday paid-minutes mapping.

use crate::models::AbsenceEntry;

/// Paid minutes for a full holiday (7h 30m).
pub const HOLIDAY_FULL_MIN: i64 = 450;
/// Paid minutes for a half holiday (3h 30m). Deliberately more than half of
/// a full day; the schedule is non-linear.
pub const HOLIDAY_HALF_MIN: i64 = 210;

/// Paid minutes credited for one absence entry.
///
/// Day values other than 1 and 0.5 can only come from imports. Those fall
/// back to a plain proportion of the full day, which does not follow the
/// half-day schedule above; kept that way on purpose until the policy for
/// odd day values is settled.
pub fn holiday_paid_minutes(entry: &AbsenceEntry) -> i64 {
    if entry.day_value == 1.0 {
        return HOLIDAY_FULL_MIN;
    }
    if entry.day_value == 0.5 {
        return HOLIDAY_HALF_MIN;
    }
    (entry.day_value * HOLIDAY_FULL_MIN as f64).round() as i64
}
