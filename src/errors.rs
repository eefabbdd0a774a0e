//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid list name: {0}")]
    InvalidList(String),

    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidSetting(&'static str, String),

    // ---------------------------
    // Mutation guard
    // ---------------------------
    #[error("An entry for {0} already exists in this list")]
    DuplicateDate(String),

    #[error("Invalid range: make sure 'from' <= 'to'")]
    InvalidRange,

    #[error("All {0} days in this range already exist in this list")]
    RangeAllDuplicates(usize),

    #[error("Holidays limit ({0} days) would be exceeded")]
    HolidaysLimitExceeded(f64),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No entry with id {0} in this list")]
    NoSuchEntry(u32),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
