pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod locate;
pub mod names;
pub mod show;
pub mod tap;
pub mod watch;

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::core::{SelectionController, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::models::EmotionLog;
use crate::store::EmotionStore;
use crate::taxonomy::Taxonomy;
use crate::ui::names::english_name;
use crate::utils::time::{format_local, format_optional};
use crate::wheel::WheelLayout;

/// Open the configured database and build the controller around it.
pub fn open_controller(cfg: &Config) -> AppResult<SelectionController> {
    cfg.validate()?;
    let store = EmotionStore::open(&cfg.database)?;
    SelectionController::new(
        store,
        WheelLayout::new(cfg.wheel_radius),
        Taxonomy::plutchik(),
        Arc::new(SystemClock),
        Duration::from_millis(cfg.live_grace_ms),
    )
}

/// "Serenity (JOY/MILD)"
pub fn describe(taxonomy: &Taxonomy, ev: &EmotionLog) -> String {
    let name = taxonomy
        .resolve_name_key(ev.category, ev.intensity)
        .map(english_name)
        .unwrap_or("?");
    format!("{} ({}/{})", name, ev.category, ev.intensity)
}

pub fn print_record(taxonomy: &Taxonomy, ev: &EmotionLog) {
    println!("#{}  {}", ev.id, describe(taxonomy, ev));
    println!("  observed : {}", format_local(ev.observed_at));
    println!("  created  : {}", format_local(ev.created_at));
    println!("  edited   : {}", format_optional(ev.last_modified_at));
}

pub fn require_positive_id(id: i64) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::InvalidInput(format!("id must be positive, got {}", id)));
    }
    Ok(())
}
