use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::guard::{
    add_range, add_single, check_holidays_limit, incremental_range_days,
};
use crate::errors::{AppError, AppResult};
use crate::models::{AbsenceEntry, ListKind, TimeEntry};
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::time::parse_hhmm;
use chrono::NaiveDate;

/// Text fields attached to an absence entry, list-specific semantics.
#[derive(Clone, Default)]
struct AbsenceFields {
    note: String,
    cert: String,
    contact: String,
    child: String,
    reason: String,
}

impl AbsenceFields {
    fn apply(&self, mut entry: AbsenceEntry) -> AbsenceEntry {
        entry.note = self.note.clone();
        entry.cert = self.cert.clone();
        entry.contact = self.contact.clone();
        entry.child = self.child.clone();
        entry.reason = self.reason.clone();
        entry
    }
}

fn opt(s: &Option<String>) -> String {
    s.as_deref().unwrap_or("").trim().to_string()
}

fn parse_list(code: &str) -> AppResult<ListKind> {
    ListKind::from_code(code).ok_or_else(|| AppError::InvalidList(code.to_string()))
}

fn parse_day(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Minutes and multiplier for a timed entry, with the overtime rules applied.
fn time_params(kind: ListKind, time: &Option<String>, mult: Option<f64>) -> AppResult<(i64, f64)> {
    let raw = time
        .as_ref()
        .ok_or_else(|| AppError::InvalidTime("missing --time (HH:MM)".to_string()))?;
    let minutes = parse_hhmm(raw)?;

    if kind == ListKind::Overtimes {
        if minutes <= 0 {
            return Err(AppError::InvalidTime(
                "overtime must be greater than 0".to_string(),
            ));
        }
        let m = mult.unwrap_or(1.0);
        if !m.is_finite() || m < 1.0 {
            return Err(AppError::InvalidSetting("mult", format!("{} (must be >= 1)", m)));
        }
        Ok((minutes, m))
    } else {
        // regular hours never carry a multiplier
        Ok((minutes, 1.0))
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Add {
            list,
            date,
            half,
            time,
            mult,
            note,
            cert,
            contact,
            child,
            reason,
        } => {
            let kind = parse_list(list)?;
            let day = parse_day(date)?;

            let store = Store::new(&cfg.store);
            let mut data = store.load();

            if kind.is_absence() {
                let day_value = if *half { 0.5 } else { 1.0 };

                if kind == ListKind::Holidays {
                    check_holidays_limit(
                        data.state.holiday_days_taken(),
                        day_value,
                        data.settings.holidays_limit,
                    )?;
                }

                let fields = AbsenceFields {
                    note: opt(note),
                    cert: opt(cert),
                    contact: opt(contact),
                    child: opt(child),
                    reason: opt(reason),
                };
                let entry = fields.apply(AbsenceEntry::new(day, day_value));

                let target = data
                    .state
                    .absence_list_mut(kind)
                    .ok_or_else(|| AppError::InvalidList(list.to_string()))?;
                add_single(target, entry)?;
            } else {
                let (minutes, multiplier) = time_params(kind, time, *mult)?;
                let mut entry = TimeEntry::new(day, minutes, multiplier);
                entry.note = opt(note);

                let target = data
                    .state
                    .time_list_mut(kind)
                    .ok_or_else(|| AppError::InvalidList(list.to_string()))?;
                add_single(target, entry)?;
            }

            store.save(&data.settings, &data.state)?;
            success(format!("Added {} to {}", date, kind));
            Ok(())
        }

        Commands::AddRange {
            list,
            from,
            to,
            half,
            time,
            mult,
            note,
            cert,
            contact,
            child,
            reason,
        } => {
            let kind = parse_list(list)?;
            let from_day = parse_day(from)?;
            let to_day = parse_day(to)?;

            let store = Store::new(&cfg.store);
            let mut data = store.load();

            let report = if kind.is_absence() {
                let day_value = if *half { 0.5 } else { 1.0 };

                if kind == ListKind::Holidays {
                    // only the dates not already present count towards the limit
                    let delta = incremental_range_days(
                        &data.state.holidays,
                        from_day,
                        to_day,
                        day_value,
                    );
                    check_holidays_limit(
                        data.state.holiday_days_taken(),
                        delta,
                        data.settings.holidays_limit,
                    )?;
                }

                let fields = AbsenceFields {
                    note: opt(note),
                    cert: opt(cert),
                    contact: opt(contact),
                    child: opt(child),
                    reason: opt(reason),
                };
                let target = data
                    .state
                    .absence_list_mut(kind)
                    .ok_or_else(|| AppError::InvalidList(list.to_string()))?;
                add_range(target, from_day, to_day, |d| {
                    fields.apply(AbsenceEntry::new(d, day_value))
                })?
            } else {
                let (minutes, multiplier) = time_params(kind, time, *mult)?;
                let note = opt(note);
                let target = data
                    .state
                    .time_list_mut(kind)
                    .ok_or_else(|| AppError::InvalidList(list.to_string()))?;
                add_range(target, from_day, to_day, |d| {
                    let mut e = TimeEntry::new(d, minutes, multiplier);
                    e.note = note.clone();
                    e
                })?
            };

            store.save(&data.settings, &data.state)?;
            success(format!(
                "Added: {} days. Skipped (duplicates): {}",
                report.added, report.skipped
            ));
            Ok(())
        }

        _ => Err(AppError::Other("unexpected command".into())),
    }
}
