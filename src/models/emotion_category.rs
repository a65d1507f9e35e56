use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

use super::intensity_level::IntensityLevel;

/// The 8 primary emotions of Plutchik's wheel, in wheel order.
///
/// The ordinal is also the sector index: sector 0 starts at angle 0 and the
/// following sectors run in the direction of increasing angle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmotionCategory {
    Joy,          // Serenity -> Joy -> Ecstasy
    Sadness,      // Pensiveness -> Sadness -> Grief
    Anger,        // Annoyance -> Anger -> Rage
    Fear,         // Apprehension -> Fear -> Terror
    Trust,        // Acceptance -> Trust -> Admiration
    Disgust,      // Boredom -> Disgust -> Loathing
    Anticipation, // Interest -> Anticipation -> Vigilance
    Surprise,     // Distraction -> Surprise -> Amazement
}

impl EmotionCategory {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    /// Category drawn in the given wheel sector.
    pub fn from_sector(sector: usize) -> Option<Self> {
        Self::iter().nth(sector)
    }

    /// Primary emotions carry an intensity. Every current category is primary;
    /// blended emotions (LOVE, AWE, ...) would not be.
    pub fn is_primary(&self) -> bool {
        true
    }

    pub fn is_blended(&self) -> bool {
        false
    }

    /// Primary emotions require an intensity, blended ones must not have one.
    pub fn is_valid_intensity(&self, intensity: Option<IntensityLevel>) -> bool {
        if self.is_primary() {
            intensity.is_some()
        } else if self.is_blended() {
            intensity.is_none()
        } else {
            false
        }
    }
}

pub fn primary_categories() -> Vec<EmotionCategory> {
    EmotionCategory::iter().filter(|c| c.is_primary()).collect()
}

pub fn blended_categories() -> Vec<EmotionCategory> {
    EmotionCategory::iter().filter(|c| c.is_blended()).collect()
}
