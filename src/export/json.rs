use crate::errors::AppResult;
use crate::models::{AbsenceEntry, Settings, State, TimeEntry};
use serde::Serialize;

/// Backup payload: the whole store plus an advisory timestamp.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportPayload<'a> {
    exported_at: String,
    version: u32,
    settings: &'a Settings,
    holidays: &'a [AbsenceEntry],
    sickness: &'a [AbsenceEntry],
    childcare: &'a [AbsenceEntry],
    overtimes: &'a [TimeEntry],
    hours: &'a [TimeEntry],
}

/// Write settings and all lists as formatted JSON.
pub fn write_json(path: &str, settings: &Settings, state: &State) -> AppResult<()> {
    let payload = ExportPayload {
        exported_at: chrono::Local::now().to_rfc3339(),
        version: state.version,
        settings,
        holidays: &state.holidays,
        sickness: &state.sickness,
        childcare: &state.childcare,
        overtimes: &state.overtimes,
        hours: &state.hours,
    };

    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(path, json)?;
    Ok(())
}
