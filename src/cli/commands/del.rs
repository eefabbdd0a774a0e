use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::guard::delete_by_id;
use crate::errors::{AppError, AppResult};
use crate::models::{ListKind, Settings};
use crate::store::Store;
use crate::ui::messages::{success, warning};

/// Delete by id, clear one list, or reset everything.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = Store::new(&cfg.store);
    let mut data = store.load();

    match cmd {
        Commands::Del { list, id } => {
            let kind = ListKind::from_code(list)
                .ok_or_else(|| AppError::InvalidList(list.to_string()))?;

            if kind.is_absence() {
                let target = data
                    .state
                    .absence_list_mut(kind)
                    .ok_or_else(|| AppError::InvalidList(list.to_string()))?;
                delete_by_id(target, *id)?;
            } else {
                let target = data
                    .state
                    .time_list_mut(kind)
                    .ok_or_else(|| AppError::InvalidList(list.to_string()))?;
                delete_by_id(target, *id)?;
            }

            store.save(&data.settings, &data.state)?;
            success(format!("Deleted entry {} from {}", id, kind));
            Ok(())
        }

        Commands::Clear { list, yes } => {
            let kind = ListKind::from_code(list)
                .ok_or_else(|| AppError::InvalidList(list.to_string()))?;

            if !*yes {
                warning(format!(
                    "This would remove all {} entries from {}. Re-run with --yes to confirm.",
                    data.state.list_len(kind),
                    kind
                ));
                return Ok(());
            }

            data.state.clear_list(kind);
            store.save(&data.settings, &data.state)?;
            success(format!("Cleared {}", kind));
            Ok(())
        }

        Commands::Reset { yes } => {
            if !*yes {
                warning("This would remove ALL entries and settings. Re-run with --yes to confirm.");
                return Ok(());
            }

            for kind in ListKind::all() {
                data.state.clear_list(kind);
            }
            data.settings = Settings::default();
            store.save(&data.settings, &data.state)?;
            success("All data removed, settings restored to defaults");
            Ok(())
        }

        _ => Err(AppError::Other("unexpected command".into())),
    }
}
