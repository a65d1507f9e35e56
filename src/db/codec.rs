//! Enum <-> TEXT conversions for the `emotion_logs` columns.
//!
//! The stored form is the uppercase member name. Decoding is strict: an
//! unknown string is an error, never a default.

use crate::errors::{AppError, AppResult};
use crate::models::{EmotionCategory, IntensityLevel};

pub const COLUMN_CATEGORY: &str = "category";
pub const COLUMN_INTENSITY: &str = "intensity";

/// Convert enum → DB string
pub fn category_to_db(category: EmotionCategory) -> &'static str {
    match category {
        EmotionCategory::Joy => "JOY",
        EmotionCategory::Sadness => "SADNESS",
        EmotionCategory::Anger => "ANGER",
        EmotionCategory::Fear => "FEAR",
        EmotionCategory::Trust => "TRUST",
        EmotionCategory::Disgust => "DISGUST",
        EmotionCategory::Anticipation => "ANTICIPATION",
        EmotionCategory::Surprise => "SURPRISE",
    }
}

/// Convert DB string → enum
pub fn category_from_db(s: &str) -> AppResult<EmotionCategory> {
    match s {
        "JOY" => Ok(EmotionCategory::Joy),
        "SADNESS" => Ok(EmotionCategory::Sadness),
        "ANGER" => Ok(EmotionCategory::Anger),
        "FEAR" => Ok(EmotionCategory::Fear),
        "TRUST" => Ok(EmotionCategory::Trust),
        "DISGUST" => Ok(EmotionCategory::Disgust),
        "ANTICIPATION" => Ok(EmotionCategory::Anticipation),
        "SURPRISE" => Ok(EmotionCategory::Surprise),
        other => Err(AppError::InvalidStoredValue {
            column: COLUMN_CATEGORY,
            value: other.to_string(),
        }),
    }
}

pub fn intensity_to_db(intensity: IntensityLevel) -> &'static str {
    match intensity {
        IntensityLevel::Mild => "MILD",
        IntensityLevel::Moderate => "MODERATE",
        IntensityLevel::Intense => "INTENSE",
    }
}

pub fn intensity_from_db(s: &str) -> AppResult<IntensityLevel> {
    match s {
        "MILD" => Ok(IntensityLevel::Mild),
        "MODERATE" => Ok(IntensityLevel::Moderate),
        "INTENSE" => Ok(IntensityLevel::Intense),
        other => Err(AppError::InvalidStoredValue {
            column: COLUMN_INTENSITY,
            value: other.to_string(),
        }),
    }
}
