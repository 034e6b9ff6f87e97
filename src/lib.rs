//! Blue Nine Access library root.
//! Exposes the CLI parser, the high-level run() function and the ledger,
//! retention and export engines behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(cmd, cfg),
        Commands::Settings { .. } => commands::settings::handle(cmd, cfg),
        Commands::Template { .. } => commands::template::handle(cmd, cfg),
        Commands::In { .. } => commands::sign::handle_in(cmd, cfg),
        Commands::Out { .. } => commands::sign::handle_out(cmd, cfg),
        Commands::List { .. } => commands::list::handle(cmd, cfg),
        Commands::Rename { .. } => commands::rename::handle(cmd, cfg),
        Commands::Del { .. } => commands::del::handle(cmd, cfg),
        Commands::Clear { .. } => commands::clear::handle(cmd, cfg),
        Commands::Export { .. } => commands::export::handle(cmd, cfg),
        Commands::Log { .. } => commands::log::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db wins over the config file
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
