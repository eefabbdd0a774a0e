use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::settings::{normalize_limit, normalize_money};
use crate::models::Currency;
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::formatting::fmt_days;

/// Show or change user settings. Settings live in the store file so they
/// travel with exports.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        limit,
        rate,
        currency,
    } = cmd
    {
        let store = Store::new(&cfg.store);
        let mut data = store.load();
        let mut changed = false;

        if let Some(v) = limit {
            let normalized = normalize_limit(*v)
                .ok_or_else(|| AppError::InvalidSetting("limit", v.to_string()))?;
            data.settings.holidays_limit = normalized;
            changed = true;
        }

        if let Some(v) = rate {
            let normalized = normalize_money(*v)
                .ok_or_else(|| AppError::InvalidSetting("rate", v.to_string()))?;
            data.settings.hourly_rate = normalized;
            changed = true;
        }

        if let Some(code) = currency {
            let cur = Currency::from_code(code)
                .ok_or_else(|| AppError::InvalidCurrency(code.to_string()))?;
            data.settings.currency = cur;
            changed = true;
        }

        if changed {
            store.save(&data.settings, &data.state)?;
            success("Settings updated");
        }

        if *print_config || !changed {
            println!("Store file:      {}", cfg.store);
            println!(
                "Holidays limit:  {} days",
                fmt_days(data.settings.holidays_limit)
            );
            println!(
                "Hourly rate:     {:.2} {}",
                data.settings.hourly_rate, data.settings.currency
            );
            println!("Currency:        {}", data.settings.currency);
        }

        Ok(())
    } else {
        Err(AppError::Other("unexpected command".into()))
    }
}
