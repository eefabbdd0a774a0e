//! JSON store: one document holding the settings and the five entry lists,
//! in the same camelCase shape as the export payload.
//!
//! Reading is forgiving: a missing or corrupt store yields defaults, and
//! every list is funnelled through the normalizer, so whatever is on disk
//! round-trips into well-formed entries. Writing replaces the whole file.

use crate::core::normalize::{normalize_absence_list, normalize_time_list};
use crate::errors::AppResult;
use crate::models::settings::{normalize_limit, normalize_money};
use crate::models::state::STATE_VERSION;
use crate::models::{AbsenceEntry, Currency, ListKind, Settings, State, TimeEntry};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Everything the store file holds.
#[derive(Debug, Default)]
pub struct StoreData {
    pub settings: Settings,
    pub state: State,
}

/// Handle to the JSON store file.
pub struct Store {
    path: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoreDoc<'a> {
    version: u32,
    settings: &'a Settings,
    holidays: &'a [AbsenceEntry],
    sickness: &'a [AbsenceEntry],
    childcare: &'a [AbsenceEntry],
    overtimes: &'a [TimeEntry],
    hours: &'a [TimeEntry],
}

impl Store {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Load settings and state. First run (no file) and corrupt files both
    /// come back as defaults; this never fails.
    pub fn load(&self) -> StoreData {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return StoreData::default();
        };
        let Ok(value) = serde_json::from_str::<Value>(&raw) else {
            return StoreData::default();
        };

        StoreData {
            settings: settings_from_value(&value, Settings::default()),
            state: state_from_value(&value),
        }
    }

    /// Write the whole store file, creating parent directories if needed.
    pub fn save(&self, settings: &Settings, state: &State) -> AppResult<()> {
        if let Some(parent) = Path::new(&self.path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let doc = StoreDoc {
            version: state.version,
            settings,
            holidays: &state.holidays,
            sickness: &state.sickness,
            childcare: &state.childcare,
            overtimes: &state.overtimes,
            hours: &state.hours,
        };
        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn list(value: &Value, key: &str) -> Vec<Value> {
    match value.get(key) {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

/// Rebuild a `State` from an untrusted JSON document. Missing lists are
/// empty; present lists pass through the normalizer.
pub fn state_from_value(value: &Value) -> State {
    State {
        version: value
            .get("version")
            .and_then(Value::as_u64)
            .map(|v| v as u32)
            .unwrap_or(STATE_VERSION),
        holidays: normalize_absence_list(&list(value, "holidays")),
        sickness: normalize_absence_list(&list(value, "sickness")),
        childcare: normalize_absence_list(&list(value, "childcare")),
        overtimes: normalize_time_list(&list(value, "overtimes"), ListKind::Overtimes),
        hours: normalize_time_list(&list(value, "hours"), ListKind::Hours),
    }
}

/// Patch valid settings fields from an untrusted JSON document onto `base`.
/// A missing settings object or an invalid field keeps the base value.
pub fn settings_from_value(value: &Value, base: Settings) -> Settings {
    let mut out = base;
    let Some(s) = value.get("settings").and_then(Value::as_object) else {
        return out;
    };

    if let Some(v) = s.get("holidaysLimit").and_then(Value::as_f64) {
        if let Some(limit) = normalize_limit(v) {
            out.holidays_limit = limit;
        }
    }
    if let Some(v) = s.get("hourlyRate").and_then(Value::as_f64) {
        if let Some(rate) = normalize_money(v) {
            out.hourly_rate = rate;
        }
    }
    if let Some(code) = s.get("currency").and_then(Value::as_str) {
        if let Some(cur) = Currency::from_code(code) {
            out.currency = cur;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_lists_are_empty() {
        let state = state_from_value(&json!({"version": 1}));
        assert!(state.holidays.is_empty());
        assert!(state.hours.is_empty());
    }

    #[test]
    fn settings_patch_keeps_base_on_bad_fields() {
        let base = Settings::default();
        let patched = settings_from_value(
            &json!({"settings": {"holidaysLimit": -5, "hourlyRate": 42.0, "currency": "XXX"}}),
            base,
        );
        assert_eq!(patched.holidays_limit, 25.0);
        assert_eq!(patched.hourly_rate, 42.0);
        assert_eq!(patched.currency, Currency::PLN);
    }

    #[test]
    fn store_round_trip_preserves_entries() {
        let mut path = std::env::temp_dir();
        path.push("abstracker_store_roundtrip.json");
        let path = path.to_string_lossy().to_string();
        std::fs::remove_file(&path).ok();

        let store = Store::new(&path);
        let mut state = State::default();
        crate::core::guard::add_single(
            &mut state.hours,
            TimeEntry::new(
                crate::utils::date::parse_date("2025-08-18").unwrap(),
                480,
                1.0,
            ),
        )
        .unwrap();

        store.save(&Settings::default(), &state).unwrap();
        let loaded = store.load();
        assert_eq!(loaded.state.hours.len(), 1);
        assert_eq!(loaded.state.hours[0].minutes, 480);
        assert_eq!(loaded.state.hours[0].id, 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn corrupt_store_degrades_to_defaults() {
        let mut path = std::env::temp_dir();
        path.push("abstracker_store_corrupt.json");
        let path = path.to_string_lossy().to_string();
        std::fs::write(&path, "{ not json").unwrap();

        let data = Store::new(&path).load();
        assert!(data.state.hours.is_empty());
        assert_eq!(data.settings.holidays_limit, 25.0);

        std::fs::remove_file(&path).ok();
    }
}
