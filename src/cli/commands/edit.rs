use crate::cli::commands::{describe, open_controller, require_positive_id};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EmotionEdit;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::{format_local, parse_optional};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, intensity, at } = cmd {
        require_positive_id(*id)?;
        let edit = EmotionEdit {
            intensity: *intensity,
            observed_at: parse_optional(at.as_ref())?,
        };

        if edit.is_empty() {
            warning("Nothing to change: pass --intensity and/or --at.");
            return Ok(());
        }

        let controller = open_controller(cfg)?;
        let record = controller.edit(*id, edit).await?;

        success(format!(
            "Updated #{} {} at {}",
            record.id,
            describe(controller.taxonomy(), &record),
            format_local(record.observed_at)
        ));
    }
    Ok(())
}
