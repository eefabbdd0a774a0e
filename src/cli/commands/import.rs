use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::read_payload;
use crate::models::ListKind;
use crate::store::Store;
use crate::ui::messages::success;

/// Import a JSON backup. The payload is fully parsed and normalized before
/// anything is written, so a failed import leaves the store untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let store = Store::new(&cfg.store);
        let data = store.load();

        let (settings, state) = read_payload(file, &data.settings)?;

        store.save(&settings, &state)?;

        let total: usize = ListKind::all().iter().map(|k| state.list_len(*k)).sum();
        success(format!("Import OK: {} entries loaded from {}", total, file));
        Ok(())
    } else {
        Err(AppError::Other("unexpected command".into()))
    }
}
