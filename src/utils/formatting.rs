//! Formatting utilities used for CLI output.

use crate::models::Currency;

/// Minutes as "7h 30m"; bare hours collapse to "7h".
pub fn mins2readable(mins: i64) -> String {
    let m = mins.max(0);
    let hours = m / 60;
    let minutes = m % 60;
    if minutes == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {:02}m", hours, minutes)
    }
}

/// Money rounded to 2 decimals with the currency label, e.g. "160.00 PLN".
pub fn fmt_money(v: f64, currency: Currency) -> String {
    format!("{:.2} {}", (v * 100.0).round() / 100.0, currency)
}

/// Day counts print without a trailing ".0" for whole days.
pub fn fmt_days(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_minutes() {
        assert_eq!(mins2readable(450), "7h 30m");
        assert_eq!(mins2readable(480), "8h");
        assert_eq!(mins2readable(0), "0h");
    }

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(fmt_money(160.0, Currency::PLN), "160.00 PLN");
        assert_eq!(fmt_money(59.999, Currency::EUR), "60.00 EUR");
    }

    #[test]
    fn whole_days_print_clean() {
        assert_eq!(fmt_days(3.0), "3");
        assert_eq!(fmt_days(2.5), "2.5");
    }
}
