use crate::cli::commands::{print_record, require_positive_id};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::EmotionStore;
use crate::taxonomy::Taxonomy;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        require_positive_id(*id)?;
        let store = EmotionStore::open(&cfg.database)?;
        let record = store.get_by_id(*id).await?.ok_or(AppError::NotFound(*id))?;
        print_record(&Taxonomy::plutchik(), &record);
    }
    Ok(())
}
