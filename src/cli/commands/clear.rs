use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EmotionStore;
use crate::ui::messages::{confirm, info, success};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let store = EmotionStore::open(&cfg.database)?;
        let total = store.count().await?;
        if total == 0 {
            info("Nothing to delete.");
            return Ok(());
        }

        let prompt = format!(
            "Delete ALL {} logged emotions? This action is irreversible.",
            total
        );
        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let n = store.delete_all().await?;
        success(format!("Deleted {} logged emotions.", n));
    }
    Ok(())
}
