//! abstracker library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } | Commands::AddRange { .. } => {
            cli::commands::add::handle(&cli.command, cfg)
        }
        Commands::Del { .. } | Commands::Clear { .. } | Commands::Reset { .. } => {
            cli::commands::del::handle(&cli.command, cfg)
        }
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary { .. } | Commands::Weekly { .. } => {
            cli::commands::summary::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
    }
}

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply the per-invocation store override
    let mut cfg = Config::load();
    if let Some(custom_store) = &cli.store {
        cfg.store = custom_store.clone();
    }

    dispatch(&cli, &cfg)
}
