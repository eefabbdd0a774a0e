use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{Settings, State};
use crate::store::Store;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Create the config file and an empty store.
pub fn handle(cfg: &Config) -> AppResult<()> {
    cfg.save()?;

    let store = Store::new(&cfg.store);
    if Path::new(&cfg.store).exists() {
        info(format!("Store already exists: {}", cfg.store));
    } else {
        store.save(&Settings::default(), &State::default())?;
        success(format!("Created empty store: {}", cfg.store));
    }

    success(format!(
        "Configuration written to {}",
        Config::config_file().display()
    ));
    Ok(())
}
