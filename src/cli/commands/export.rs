use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{write_absence_csv, write_json, write_time_csv, ExportFormat};
use crate::models::ListKind;
use crate::store::Store;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, format, list } = cmd {
        let store = Store::new(&cfg.store);
        let data = store.load();

        match format {
            ExportFormat::Json => {
                write_json(file, &data.settings, &data.state)?;
            }
            ExportFormat::Csv => {
                let code = list.as_ref().ok_or_else(|| {
                    AppError::Export("CSV export needs --list <name>".to_string())
                })?;
                let kind = ListKind::from_code(code)
                    .ok_or_else(|| AppError::InvalidList(code.to_string()))?;

                match kind {
                    ListKind::Holidays => write_absence_csv(file, &data.state.holidays)?,
                    ListKind::Sickness => write_absence_csv(file, &data.state.sickness)?,
                    ListKind::Childcare => write_absence_csv(file, &data.state.childcare)?,
                    ListKind::Overtimes => write_time_csv(file, &data.state.overtimes)?,
                    ListKind::Hours => write_time_csv(file, &data.state.hours)?,
                }
            }
        }

        success(format!("{} export completed: {}", format.as_str(), file));
        Ok(())
    } else {
        Err(AppError::Other("unexpected command".into()))
    }
}
