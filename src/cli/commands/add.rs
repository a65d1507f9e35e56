use crate::cli::commands::{describe, open_controller};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{format_local, parse_optional};

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        category,
        intensity,
        at,
    } = cmd
    {
        let observed_at = parse_optional(at.as_ref())?;
        let controller = open_controller(cfg)?;

        let record = controller
            .log_emotion(*category, *intensity, observed_at)
            .await?;

        success(format!(
            "Logged #{} {} at {}",
            record.id,
            describe(controller.taxonomy(), &record),
            format_local(record.observed_at)
        ));
    }
    Ok(())
}
