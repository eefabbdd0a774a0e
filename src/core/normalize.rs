//! Entry normalizer: repairs untrusted JSON arrays (imports, the store file)
//! into well-formed entry lists.
//!
//! This never errors. Records that cannot be repaired (not an object, missing
//! or unparseable date) are dropped; every other field is coerced to a usable
//! value. Ids are re-derived so the output satisfies the uniqueness invariant:
//! provided positive ids are kept, the rest are assigned sequentially above
//! the current maximum, in input order.

use crate::models::entry::{day_type_label, AbsenceEntry, Dated, TimeEntry};
use crate::models::ListKind;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde_json::Value;

/// Number coercion in the spirit of a lenient JSON reader: numbers pass
/// through, numeric strings parse, everything else is 0.
fn as_number(v: &Value) -> f64 {
    match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn as_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn field_string(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key).map(as_string).unwrap_or_default()
}

fn field_date(obj: &serde_json::Map<String, Value>, key: &str) -> Option<NaiveDate> {
    match obj.get(key) {
        Some(Value::String(s)) => parse_date(s.trim()),
        _ => None,
    }
}

/// Provided id, kept only when positive and integral.
fn field_id(obj: &serde_json::Map<String, Value>) -> u32 {
    let n = obj.get("id").map(as_number).unwrap_or(0.0);
    if n >= 1.0 && n.fract() == 0.0 && n <= u32::MAX as f64 {
        n as u32
    } else {
        0
    }
}

/// Assign fresh ids to entries that came in without a usable one.
fn repair_ids<E: Dated>(list: &mut [E]) {
    let mut max = list.iter().map(|e| e.id()).max().unwrap_or(0);
    for e in list.iter_mut() {
        if e.id() == 0 {
            max += 1;
            e.set_id(max);
        }
    }
}

pub fn normalize_absence_list(raw: &[Value]) -> Vec<AbsenceEntry> {
    let mut out = Vec::new();

    for item in raw {
        let Some(obj) = item.as_object() else { continue };
        let Some(date) = field_date(obj, "date") else { continue };

        let dv = obj.get("dayValue").map(as_number).unwrap_or(0.0);
        let day_value = if dv.is_finite() && dv != 0.0 { dv } else { 1.0 };

        let day_type = match obj.get("dayType") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => day_type_label(day_value).to_string(),
        };

        out.push(AbsenceEntry {
            id: field_id(obj),
            date,
            day_value,
            day_type,
            note: field_string(obj, "note"),
            cert: field_string(obj, "cert"),
            contact: field_string(obj, "contact"),
            child: field_string(obj, "child"),
            reason: field_string(obj, "reason"),
        });
    }

    repair_ids(&mut out);
    out
}

pub fn normalize_time_list(raw: &[Value], kind: ListKind) -> Vec<TimeEntry> {
    let mut out = Vec::new();

    for item in raw {
        let Some(obj) = item.as_object() else { continue };
        let Some(date) = field_date(obj, "date") else { continue };

        let minutes_raw = obj.get("minutes").map(as_number).unwrap_or(0.0);
        let minutes = minutes_raw.round().max(0.0) as i64;

        // Multipliers only mean something for overtime; regular hours are
        // forced back to 1, as is any multiplier below 1.
        let mult_raw = if kind == ListKind::Overtimes {
            obj.get("multiplier").map(as_number).unwrap_or(1.0)
        } else {
            1.0
        };
        let multiplier = if kind == ListKind::Overtimes && mult_raw >= 1.0 {
            mult_raw
        } else {
            1.0
        };

        out.push(TimeEntry {
            id: field_id(obj),
            date,
            minutes,
            multiplier,
            note: field_string(obj, "note"),
        });
    }

    repair_ids(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drops_non_objects_and_dateless_records() {
        let raw = vec![
            json!(null),
            json!(42),
            json!({"note": "no date"}),
            json!({"date": "not-a-date"}),
            json!({"date": "2025-03-10"}),
        ];
        let out = normalize_absence_list(&raw);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date_str(), "2025-03-10");
    }

    #[test]
    fn defaults_day_value_and_derives_label() {
        let raw = vec![
            json!({"date": "2025-03-10"}),
            json!({"date": "2025-03-11", "dayValue": 0.5}),
            json!({"date": "2025-03-12", "dayValue": "oops"}),
        ];
        let out = normalize_absence_list(&raw);
        assert_eq!(out[0].day_value, 1.0);
        assert_eq!(out[0].day_type, "Full day");
        assert_eq!(out[1].day_type, "Half day");
        assert_eq!(out[2].day_value, 1.0);
    }

    #[test]
    fn repairs_missing_ids_above_current_max() {
        let raw = vec![
            json!({"date": "2025-03-10", "id": 7}),
            json!({"date": "2025-03-11"}),
            json!({"date": "2025-03-12", "id": -3}),
        ];
        let out = normalize_absence_list(&raw);
        assert_eq!(out[0].id, 7);
        assert_eq!(out[1].id, 8);
        assert_eq!(out[2].id, 9);
    }

    #[test]
    fn time_entries_clamp_minutes_and_multiplier() {
        let raw = vec![
            json!({"date": "2025-03-10", "minutes": -20, "multiplier": 1.5}),
            json!({"date": "2025-03-11", "minutes": 90.6, "multiplier": 0.5}),
        ];
        let out = normalize_time_list(&raw, ListKind::Overtimes);
        assert_eq!(out[0].minutes, 0);
        assert_eq!(out[0].multiplier, 1.5);
        assert_eq!(out[1].minutes, 91);
        assert_eq!(out[1].multiplier, 1.0);

        // regular hours never keep a multiplier
        let hours = normalize_time_list(&raw, ListKind::Hours);
        assert_eq!(hours[0].multiplier, 1.0);
    }
}
