use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_HOLIDAYS_LIMIT: f64 = 25.0;
pub const DEFAULT_RATE: f64 = 0.0;

/// Currency is a display label only, no conversion is ever performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    PLN,
    EUR,
    GBP,
}

impl Currency {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "PLN" => Some(Currency::PLN),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::PLN => "PLN",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub holidays_limit: f64,
    pub hourly_rate: f64,
    pub currency: Currency,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            holidays_limit: DEFAULT_HOLIDAYS_LIMIT,
            hourly_rate: DEFAULT_RATE,
            currency: Currency::default(),
        }
    }
}

/// Clamp a holidays limit to non-negative 0.5-day steps.
/// Returns None when the value is not a usable number.
pub fn normalize_limit(v: f64) -> Option<f64> {
    if !v.is_finite() || v < 0.0 {
        return None;
    }
    Some((v * 2.0).round() / 2.0)
}

/// Clamp a money amount to non-negative 2-decimal precision.
pub fn normalize_money(v: f64) -> Option<f64> {
    if !v.is_finite() || v < 0.0 {
        return None;
    }
    Some((v * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_snaps_to_half_day_steps() {
        assert_eq!(normalize_limit(25.3), Some(25.5));
        assert_eq!(normalize_limit(25.2), Some(25.0));
        assert_eq!(normalize_limit(0.0), Some(0.0));
        assert_eq!(normalize_limit(-1.0), None);
        assert_eq!(normalize_limit(f64::NAN), None);
    }

    #[test]
    fn money_rounds_to_cents() {
        assert_eq!(normalize_money(55.555), Some(55.56));
        assert_eq!(normalize_money(-0.01), None);
        assert_eq!(normalize_money(f64::INFINITY), None);
    }
}
