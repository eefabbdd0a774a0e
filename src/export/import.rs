use crate::errors::{AppError, AppResult};
use crate::models::{Settings, State};
use crate::store::{settings_from_value, state_from_value};
use serde_json::Value;
use std::fs;

/// Read a backup payload from disk and rebuild settings and state from it.
///
/// Parsing is strict at the top level: unreadable files and invalid JSON
/// fail the import. Nothing is mutated here; the caller swaps in the result
/// only on success, so a failed import leaves everything untouched.
/// Field-level tolerance matches the store: a missing settings object keeps
/// `current`, missing lists are empty, all lists pass the normalizer.
pub fn read_payload(path: &str, current: &Settings) -> AppResult<(Settings, State)> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Import(format!("cannot read {}: {}", path, e)))?;

    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| AppError::Import(format!("not valid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(AppError::Import(
            "expected a JSON object at the top level".to_string(),
        ));
    }

    let settings = settings_from_value(&value, current.clone());
    let state = state_from_value(&value);
    Ok((settings, state))
}
