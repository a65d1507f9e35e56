//! `watch`: print the live history and accept edits on stdin.
//!
//! The live log only sees changes made through this process, so the
//! command doubles as a small console: each stdin line is applied through
//! the same controller and the table is re-rendered from the live channel.
//!
//! ```text
//! tap <dx> <dy>               log the emotion under a tap
//! add <CATEGORY> <INTENSITY>  log by name
//! del <id>                    delete one entry
//! clear                       delete everything
//! quit                        stop watching
//! ```

use crate::cli::commands::list::render_table;
use crate::cli::commands::{describe, open_controller};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SelectionController;
use crate::errors::{AppError, AppResult};
use crate::models::{EmotionCategory, IntensityLevel};
use crate::ui::messages::{error, header, info, success};
use crate::wheel::Offset;
use tokio::io::{AsyncBufReadExt, BufReader};

enum ConsoleCommand {
    Tap(Offset),
    Add(EmotionCategory, IntensityLevel),
    Del(i64),
    Clear,
    Quit,
}

fn parse_number<T: std::str::FromStr>(word: Option<&str>, what: &str) -> AppResult<T> {
    word.and_then(|w| w.parse().ok())
        .ok_or_else(|| AppError::InvalidInput(format!("expected {}", what)))
}

fn parse_line(line: &str) -> AppResult<Option<ConsoleCommand>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let cmd = match verb.to_lowercase().as_str() {
        "tap" => {
            let dx = parse_number(words.next(), "dx")?;
            let dy = parse_number(words.next(), "dy")?;
            ConsoleCommand::Tap(Offset::new(dx, dy))
        }
        "add" => {
            let category = parse_number(words.next(), "a category")?;
            let intensity = parse_number(words.next(), "an intensity")?;
            ConsoleCommand::Add(category, intensity)
        }
        "del" => ConsoleCommand::Del(parse_number(words.next(), "an id")?),
        "clear" => ConsoleCommand::Clear,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => {
            return Err(AppError::InvalidInput(format!("unknown command '{}'", other)));
        }
    };
    Ok(Some(cmd))
}

async fn apply(controller: &SelectionController, cmd: ConsoleCommand) -> AppResult<()> {
    match cmd {
        ConsoleCommand::Tap(offset) => {
            let record = controller.on_tap(offset).await?;
            success(format!(
                "Logged #{} {}",
                record.id,
                describe(controller.taxonomy(), &record)
            ));
        }
        ConsoleCommand::Add(category, intensity) => {
            let record = controller.log_emotion(category, intensity, None).await?;
            success(format!(
                "Logged #{} {}",
                record.id,
                describe(controller.taxonomy(), &record)
            ));
        }
        ConsoleCommand::Del(id) => {
            controller.delete(id).await?;
        }
        ConsoleCommand::Clear => {
            controller.clear().await?;
        }
        ConsoleCommand::Quit => {}
    }
    Ok(())
}

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { count } = cmd {
        let controller = open_controller(cfg)?;
        let mut live = controller.live_log().attach();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdin_open = true;
        let mut seen = 0usize;

        loop {
            tokio::select! {
                next = live.next() => {
                    let Some(snapshot) = next else {
                        return Ok(());
                    };
                    let records = snapshot?;

                    seen += 1;
                    header(format!("{} logged emotions", records.len()));
                    print!("{}", render_table(controller.taxonomy(), &records));

                    if count.is_some_and(|n| seen >= n) {
                        return Ok(());
                    }
                }
                // stdin is only read once the first snapshot is on screen
                line = lines.next_line(), if stdin_open && seen > 0 => {
                    match line {
                        Ok(Some(line)) => match parse_line(&line) {
                            Ok(Some(ConsoleCommand::Quit)) => return Ok(()),
                            Ok(Some(cmd)) => {
                                if let Err(e) = apply(&controller, cmd).await {
                                    if e.is_storage_failure() {
                                        return Err(e);
                                    }
                                    error(e);
                                }
                            }
                            Ok(None) => {}
                            Err(e) => error(e),
                        },
                        Ok(None) => stdin_open = false,
                        Err(e) => {
                            log::warn!("stdin closed: {}", e);
                            stdin_open = false;
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info("Stopped.");
                    return Ok(());
                }
            }
        }
    }
    Ok(())
}
