use crate::cli::commands::require_positive_id;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EmotionStore;
use crate::ui::messages::{info, success};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        require_positive_id(*id)?;
        let store = EmotionStore::open(&cfg.database)?;

        if store.delete_by_id(*id).await? {
            success(format!("Emotion #{} has been deleted.", id));
        } else {
            info(format!("Emotion #{} does not exist, nothing deleted.", id));
        }
    }
    Ok(())
}
