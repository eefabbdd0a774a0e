//! Time utilities: parsing HH:MM into minutes and back.

use crate::errors::{AppError, AppResult};

/// Parse "HH:MM" into total minutes. Hours are unbounded, minutes 0..=59.
pub fn parse_hhmm(s: &str) -> AppResult<i64> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))?;

    let hours: i64 = h
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidTime(s.to_string()))?;
    let minutes: i64 = m
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidTime(s.to_string()))?;

    if hours < 0 || !(0..60).contains(&minutes) {
        return Err(AppError::InvalidTime(s.to_string()));
    }

    Ok(hours * 60 + minutes)
}
