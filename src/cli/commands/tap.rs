use crate::cli::commands::{describe, open_controller};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{format_local, parse_optional};
use crate::wheel::Offset;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tap { dx, dy, at } = cmd {
        let observed_at = parse_optional(at.as_ref())?;
        let controller = open_controller(cfg)?;
        let offset = Offset::new(*dx, *dy);

        let record = match observed_at {
            Some(ts) => controller.on_tap_at(offset, ts).await?,
            None => controller.on_tap(offset).await?,
        };

        success(format!(
            "Logged #{} {} at {}",
            record.id,
            describe(controller.taxonomy(), &record),
            format_local(record.observed_at)
        ));
    }
    Ok(())
}
