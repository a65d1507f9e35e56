//! Unified application error type.
//! Every layer (wheel, taxonomy, db, store, core, cli) returns AppError so
//! that the presentation layer has a single place to decide what to show.

use std::io;
use thiserror::Error;

use crate::models::emotion_category::EmotionCategory;
use crate::models::intensity_level::IntensityLevel;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Unrecognized value '{value}' stored in column '{column}'")]
    InvalidStoredValue { column: &'static str, value: String },

    #[error("Live log terminated: {0}")]
    SubscriptionFailed(String),

    // ---------------------------
    // Domain
    // ---------------------------
    #[error("Invalid emotion combination: {category}, {intensity}")]
    InvalidCombination {
        category: EmotionCategory,
        intensity: IntensityLevel,
    },

    #[error("No emotion log with id {0}")]
    NotFound(i64),

    #[error("Emotion table is misconfigured: {0}")]
    TaxonomyDefect(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Runtime
    // ---------------------------
    #[error("Background task error: {0}")]
    Runtime(String),
}

impl AppError {
    /// True for failures of the underlying storage (I/O, SQLite, decoding or
    /// a live log that died because of one of those).
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            AppError::Io(_)
                | AppError::Db(_)
                | AppError::InvalidStoredValue { .. }
                | AppError::SubscriptionFailed(_)
        )
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(e: tokio::task::JoinError) -> Self {
        AppError::Runtime(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
