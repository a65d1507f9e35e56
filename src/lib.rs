//! rFeelings library root.
//! Exposes the wheel geometry, the emotion taxonomy, the SQLite-backed
//! record store, the selection controller and the CLI that drives them.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod taxonomy;
pub mod ui;
pub mod utils;
pub mod wheel;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use taxonomy::Taxonomy;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Tap { .. } => commands::tap::handle(&cli.command, cfg).await,
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg).await,
        Commands::Locate { .. } => commands::locate::handle(&cli.command, cfg),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg).await,
        Commands::Show { .. } => commands::show::handle(&cli.command, cfg).await,
        Commands::Edit { .. } => commands::edit::handle(&cli.command, cfg).await,
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg).await,
        Commands::Clear { .. } => commands::clear::handle(&cli.command, cfg).await,
        Commands::Watch { .. } => commands::watch::handle(&cli.command, cfg).await,
        Commands::Names => commands::names::handle(),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
    }
}

/// `RUST_LOG` wins over the configured level.
pub fn init_logging(cfg: &Config) {
    let env = env_logger::Env::default().default_filter_or(cfg.log_level.as_str());
    // a second init (tests, embedding) is harmless
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    init_logging(&cfg);
    Taxonomy::plutchik().self_check()?;

    dispatch(&cli, &cfg).await
}
