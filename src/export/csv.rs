use crate::errors::AppResult;
use crate::models::{AbsenceEntry, TimeEntry};
use csv::Writer;

/// Write one absence list (holidays, sickness, childcare) as CSV.
pub fn write_absence_csv(path: &str, entries: &[AbsenceEntry]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id", "date", "dayValue", "dayType", "note", "cert", "contact", "child", "reason",
    ])?;

    for e in entries {
        wtr.write_record(&[
            e.id.to_string(),
            e.date_str(),
            e.day_value.to_string(),
            e.day_type.clone(),
            e.note.clone(),
            e.cert.clone(),
            e.contact.clone(),
            e.child.clone(),
            e.reason.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write one timed list (overtimes, hours) as CSV.
pub fn write_time_csv(path: &str, entries: &[TimeEntry]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["id", "date", "minutes", "multiplier", "note"])?;

    for e in entries {
        wtr.write_record(&[
            e.id.to_string(),
            e.date_str(),
            e.minutes.to_string(),
            e.multiplier.to_string(),
            e.note.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
