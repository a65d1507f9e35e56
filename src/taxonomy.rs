//! Mapping between (category, intensity) pairs and display-name keys.
//!
//! The table is plain data, so a missing pair is a real possibility (a
//! partial table for blended emotions, a typo in a new entry) and every
//! lookup is checked. Turning a key into text is the job of the
//! presentation layer, see `ui::names`.

use std::collections::{BTreeMap, HashSet};

use strum::{EnumCount, IntoEnumIterator};

use crate::errors::{AppError, AppResult};
use crate::models::{EmotionCategory, IntensityLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyEntry {
    pub category: EmotionCategory,
    pub intensity: IntensityLevel,
    pub key: &'static str,
}

const fn entry(
    category: EmotionCategory,
    intensity: IntensityLevel,
    key: &'static str,
) -> TaxonomyEntry {
    TaxonomyEntry {
        category,
        intensity,
        key,
    }
}

use EmotionCategory::*;
use IntensityLevel::*;

pub const PLUTCHIK_TABLE: &[TaxonomyEntry] = &[
    entry(Joy, Mild, "emotion_serenity"),
    entry(Joy, Moderate, "emotion_joy_moderate"),
    entry(Joy, Intense, "emotion_ecstasy"),
    entry(Sadness, Mild, "emotion_pensiveness"),
    entry(Sadness, Moderate, "emotion_sadness_moderate"),
    entry(Sadness, Intense, "emotion_grief"),
    entry(Anger, Mild, "emotion_annoyance"),
    entry(Anger, Moderate, "emotion_anger_moderate"),
    entry(Anger, Intense, "emotion_rage"),
    entry(Fear, Mild, "emotion_apprehension"),
    entry(Fear, Moderate, "emotion_fear_moderate"),
    entry(Fear, Intense, "emotion_terror"),
    entry(Trust, Mild, "emotion_acceptance"),
    entry(Trust, Moderate, "emotion_trust_moderate"),
    entry(Trust, Intense, "emotion_admiration"),
    entry(Disgust, Mild, "emotion_boredom"),
    entry(Disgust, Moderate, "emotion_disgust_moderate"),
    entry(Disgust, Intense, "emotion_loathing"),
    entry(Anticipation, Mild, "emotion_interest"),
    entry(Anticipation, Moderate, "emotion_anticipation_moderate"),
    entry(Anticipation, Intense, "emotion_vigilance"),
    entry(Surprise, Mild, "emotion_distraction"),
    entry(Surprise, Moderate, "emotion_surprise_moderate"),
    entry(Surprise, Intense, "emotion_amazement"),
];

#[derive(Debug, Clone)]
pub struct Taxonomy {
    keys: BTreeMap<(EmotionCategory, IntensityLevel), &'static str>,
    /// Pairs listed more than once in the source entries.
    duplicate_pairs: Vec<(EmotionCategory, IntensityLevel)>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::plutchik()
    }
}

impl Taxonomy {
    /// The full 8 x 3 Plutchik table.
    pub fn plutchik() -> Self {
        Self::from_entries(PLUTCHIK_TABLE)
    }

    /// Build a table from arbitrary entries. A pair listed twice keeps its
    /// first key and is reported by `self_check`.
    pub fn from_entries(entries: &[TaxonomyEntry]) -> Self {
        let mut keys = BTreeMap::new();
        let mut duplicate_pairs = Vec::new();

        for e in entries {
            let pair = (e.category, e.intensity);
            if keys.contains_key(&pair) {
                duplicate_pairs.push(pair);
            } else {
                keys.insert(pair, e.key);
            }
        }

        Self {
            keys,
            duplicate_pairs,
        }
    }

    pub fn resolve_name_key(
        &self,
        category: EmotionCategory,
        intensity: IntensityLevel,
    ) -> AppResult<&'static str> {
        self.keys
            .get(&(category, intensity))
            .copied()
            .ok_or(AppError::InvalidCombination {
                category,
                intensity,
            })
    }

    /// Every key of a category, by intensity. A well-formed table yields all
    /// three levels; `self_check` is where a short map is reported.
    pub fn all_keys_for_category(
        &self,
        category: EmotionCategory,
    ) -> BTreeMap<IntensityLevel, &'static str> {
        self.keys
            .iter()
            .filter(|((c, _), _)| *c == category)
            .map(|((_, i), key)| (*i, *key))
            .collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = TaxonomyEntry> + '_ {
        self.keys.iter().map(|(&(category, intensity), &key)| TaxonomyEntry {
            category,
            intensity,
            key,
        })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Startup check: no pair is listed twice, every primary category has one
    /// key per intensity level and no two pairs share a key.
    pub fn self_check(&self) -> AppResult<()> {
        if let Some((category, intensity)) = self.duplicate_pairs.first() {
            return Err(AppError::TaxonomyDefect(format!(
                "{}/{} is listed more than once",
                category, intensity
            )));
        }

        for category in EmotionCategory::iter().filter(|c| c.is_primary()) {
            let found = self.all_keys_for_category(category).len();
            if found != IntensityLevel::COUNT {
                return Err(AppError::TaxonomyDefect(format!(
                    "{} has {} intensity keys, expected {}",
                    category,
                    found,
                    IntensityLevel::COUNT
                )));
            }
        }

        let mut seen = HashSet::new();
        for entry in self.entries() {
            if !seen.insert(entry.key) {
                return Err(AppError::TaxonomyDefect(format!(
                    "key '{}' is used more than once",
                    entry.key
                )));
            }
        }

        let expected = EmotionCategory::COUNT * IntensityLevel::COUNT;
        if self.len() != expected {
            return Err(AppError::TaxonomyDefect(format!(
                "{} entries, expected {}",
                self.len(),
                expected
            )));
        }

        Ok(())
    }
}
