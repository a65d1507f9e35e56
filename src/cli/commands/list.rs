use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::EmotionLog;
use crate::store::EmotionStore;
use crate::taxonomy::Taxonomy;
use crate::ui::messages::info;
use crate::ui::names::english_name;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_local, format_optional};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json, limit } = cmd {
        let store = EmotionStore::open(&cfg.database)?;
        let mut records = store.load_all().await?;
        if let Some(n) = limit {
            records.truncate(*n);
        }

        if *json {
            let out = serde_json::to_string_pretty(&records)
                .map_err(|e| AppError::InvalidInput(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        if records.is_empty() {
            info("No emotions logged yet.");
            return Ok(());
        }

        print!("{}", render_table(&Taxonomy::plutchik(), &records));
    }
    Ok(())
}

pub fn render_table(taxonomy: &Taxonomy, records: &[EmotionLog]) -> String {
    let mut table = Table::new(vec![
        Column::right("ID", 6),
        Column::new("OBSERVED", 16),
        Column::new("EMOTION", 12),
        Column::new("CATEGORY", 12),
        Column::new("INTENSITY", 9),
        Column::new("EDITED", 16),
    ]);

    for ev in records {
        let name = taxonomy
            .resolve_name_key(ev.category, ev.intensity)
            .map(english_name)
            .unwrap_or("?");
        table.add_row(vec![
            ev.id.to_string(),
            format_local(ev.observed_at),
            name.to_string(),
            ev.category.to_string(),
            ev.intensity.to_string(),
            format_optional(ev.last_modified_at),
        ]);
    }

    table.render()
}
