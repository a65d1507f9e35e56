use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::resolve_selection;
use crate::errors::AppResult;
use crate::taxonomy::Taxonomy;
use crate::ui::names::english_name;
use crate::wheel::{Offset, WheelLayout, sector_center_angle};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Locate { dx, dy } = cmd {
        cfg.validate()?;
        let layout = WheelLayout::new(cfg.wheel_radius);
        let selection = resolve_selection(&layout, &Taxonomy::plutchik(), Offset::new(*dx, *dy))?;

        println!(
            "sector {} (center {:.1}°) | ring {} | {} ({}/{})",
            selection.point.sector,
            sector_center_angle(selection.point.sector).to_degrees(),
            selection.point.ring,
            english_name(selection.name_key),
            selection.category,
            selection.intensity
        );
    }
    Ok(())
}
