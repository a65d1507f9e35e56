#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rfeelings::models::{EmotionCategory, EmotionLog, IntensityLevel};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rfe() -> Command {
    cargo_bin_cmd!("rfeelings")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_{}_rfeelings.sqlite", name, std::process::id()));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB through the binary (schema only)
pub fn init_db(db_path: &str) {
    rfe()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn record(category: EmotionCategory, intensity: IntensityLevel, observed_at: i64) -> EmotionLog {
    EmotionLog::new(category, intensity, observed_at, observed_at)
}
