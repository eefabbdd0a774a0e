use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::holiday_paid_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::{AbsenceEntry, ListKind, TimeEntry};
use crate::store::Store;
use crate::ui::messages::{header, info};
use crate::utils::date::fmt_date_with_weekday;
use crate::utils::formatting::{fmt_days, mins2readable};

fn print_absence(kind: ListKind, entries: &[AbsenceEntry]) {
    let mut sorted: Vec<&AbsenceEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    for e in &sorted {
        let mut line = format!(
            "ID {:>3}  {}  [{}]",
            e.id,
            fmt_date_with_weekday(e.date),
            e.day_type
        );
        if kind == ListKind::Holidays {
            line.push_str(&format!(
                "  paid {}",
                mins2readable(holiday_paid_minutes(e))
            ));
        }
        if !e.cert.is_empty() {
            line.push_str(&format!("  cert: {}", e.cert));
        }
        if !e.contact.is_empty() {
            line.push_str(&format!("  contact: {}", e.contact));
        }
        if !e.child.is_empty() {
            line.push_str(&format!("  child: {}", e.child));
        }
        if !e.reason.is_empty() {
            line.push_str(&format!("  reason: {}", e.reason));
        }
        if !e.note.is_empty() {
            line.push_str(&format!("  note: {}", e.note));
        }
        println!("{}", line);
    }
}

fn print_time(kind: ListKind, entries: &[TimeEntry]) {
    let mut sorted: Vec<&TimeEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    for e in &sorted {
        let mut line = format!(
            "ID {:>3}  {}  {}",
            e.id,
            fmt_date_with_weekday(e.date),
            mins2readable(e.minutes)
        );
        if kind == ListKind::Overtimes {
            line.push_str(&format!("  x{}", e.multiplier));
        }
        if !e.note.is_empty() {
            line.push_str(&format!("  note: {}", e.note));
        }
        println!("{}", line);
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { list } = cmd {
        let kind =
            ListKind::from_code(list).ok_or_else(|| AppError::InvalidList(list.to_string()))?;

        let store = Store::new(&cfg.store);
        let data = store.load();

        header(format!("{} ({} entries)", kind, data.state.list_len(kind)));

        if data.state.list_len(kind) == 0 {
            info("No entries. Add a day or a range.");
            return Ok(());
        }

        if kind.is_absence() {
            let entries = data
                .state
                .absence_list(kind)
                .ok_or_else(|| AppError::InvalidList(list.to_string()))?;
            print_absence(kind, entries);

            if kind == ListKind::Holidays {
                let taken = data.state.holiday_days_taken();
                let left = data.settings.holidays_limit - taken;
                println!(
                    "Taken: {} days, left: {} of {}",
                    fmt_days(taken),
                    fmt_days(left),
                    fmt_days(data.settings.holidays_limit)
                );
            } else {
                let total: f64 = entries.iter().map(|e| e.day_value).sum();
                println!("Total: {} days", fmt_days(total));
            }
        } else {
            let entries = data
                .state
                .time_list(kind)
                .ok_or_else(|| AppError::InvalidList(list.to_string()))?;
            print_time(kind, entries);
        }

        Ok(())
    } else {
        Err(AppError::Other("unexpected command".into()))
    }
}
