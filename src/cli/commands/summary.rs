use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::period::period_totals;
use crate::core::calculator::weekly::weekly_overview;
use crate::core::calculator::PeriodTotals;
use crate::errors::{AppError, AppResult};
use crate::models::Currency;
use crate::store::Store;
use crate::ui::messages::{header, info};
use crate::utils::date::{
    end_of_month, end_of_week_saturday, end_of_year, fmt_date, parse_date, start_of_month,
    start_of_week_sunday, start_of_year, today,
};
use crate::utils::formatting::{fmt_money, mins2readable};
use chrono::NaiveDate;

fn print_window(label: &str, from: NaiveDate, to: NaiveDate, t: &PeriodTotals, cur: Currency) {
    println!(
        "{:<6} {} .. {}   regular {:>8}  holidays {:>8}  overtime {:>8}   total {:>8}   pay {}",
        label,
        fmt_date(from),
        fmt_date(to),
        mins2readable(t.regular_min),
        mins2readable(t.holiday_min),
        mins2readable(t.overtime_min),
        mins2readable(t.total_minutes()),
        fmt_money(t.total_pay(), cur),
    );
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = Store::new(&cfg.store);
    let data = store.load();
    let rate = data.settings.hourly_rate;
    let cur = data.settings.currency;

    match cmd {
        Commands::Summary { date } => {
            let anchor = match date {
                Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
                None => today(),
            };

            header(format!("Summary for {}", fmt_date(anchor)));

            let windows = [
                ("Week", start_of_week_sunday(anchor), end_of_week_saturday(anchor)),
                ("Month", start_of_month(anchor), end_of_month(anchor)),
                ("Year", start_of_year(anchor), end_of_year(anchor)),
            ];
            for (label, from, to) in windows {
                let totals = period_totals(&data.state, from, to, rate);
                print_window(label, from, to, &totals, cur);
            }

            Ok(())
        }

        Commands::Weekly { count } => {
            header("Weekly overview");

            let weeks = weekly_overview(&data.state, rate);
            if weeks.is_empty() {
                info("No entries yet. Add hours, holidays or overtime first.");
                return Ok(());
            }

            for w in weeks.iter().take(*count) {
                println!(
                    "{} .. {}   regular {:>8}  holidays {:>8}  overtime {:>8}   total {:>8}   pay {}",
                    fmt_date(w.start),
                    fmt_date(w.end),
                    mins2readable(w.regular_min),
                    mins2readable(w.holiday_min),
                    mins2readable(w.overtime_min),
                    mins2readable(w.total_minutes()),
                    fmt_money(w.total_pay(), cur),
                );
            }

            Ok(())
        }

        _ => Err(AppError::Other("unexpected command".into())),
    }
}
