use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EmotionStore;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with `--test`)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db = db_path.to_string_lossy().to_string();

    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }

    EmotionStore::open(&db)?;
    log::info!("Database ready at {}", db);

    success(format!("Database initialized at {}", db));
    Ok(())
}
