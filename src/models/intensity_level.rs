use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString};

/// The three intensity levels of each primary emotion.
/// From outer ring (mild) to inner ring (intense).
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
pub enum IntensityLevel {
    Mild,     // outer ring
    Moderate, // middle ring
    Intense,  // inner ring
}

impl IntensityLevel {
    /// Intensity for a wheel ring, ring 0 being the innermost band.
    pub fn from_ring(ring: usize) -> Option<Self> {
        match ring {
            0 => Some(IntensityLevel::Intense),
            1 => Some(IntensityLevel::Moderate),
            2 => Some(IntensityLevel::Mild),
            _ => None,
        }
    }

    pub fn ring(&self) -> usize {
        match self {
            IntensityLevel::Intense => 0,
            IntensityLevel::Moderate => 1,
            IntensityLevel::Mild => 2,
        }
    }
}
