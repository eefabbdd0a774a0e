//! Minutes-to-money conversion.

use crate::models::TimeEntry;

/// Regular and holiday pay: straight hourly rate.
pub fn pay_for_minutes(minutes: i64, rate: f64) -> f64 {
    (minutes as f64 / 60.0) * rate
}

/// Overtime pay for one entry: hourly rate weighted by its multiplier.
pub fn overtime_pay(entry: &TimeEntry, rate: f64) -> f64 {
    (entry.minutes as f64 / 60.0) * rate * entry.effective_multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::parse_date;

    #[test]
    fn regular_pay_480_minutes_at_20() {
        assert_eq!(pay_for_minutes(480, 20.0), 160.0);
    }

    #[test]
    fn overtime_pay_uses_multiplier() {
        let e = TimeEntry::new(parse_date("2025-08-20").unwrap(), 120, 1.5);
        assert_eq!(overtime_pay(&e, 20.0), 60.0);
    }

    #[test]
    fn sub_one_multiplier_counts_as_one() {
        let e = TimeEntry::new(parse_date("2025-08-20").unwrap(), 60, 0.5);
        assert_eq!(overtime_pay(&e, 20.0), 20.0);
    }
}
