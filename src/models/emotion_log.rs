use super::{emotion_category::EmotionCategory, intensity_level::IntensityLevel};
use serde::Serialize;

/// Id of a record that has not been written yet.
pub const UNSET_ID: i64 = 0;

/// One logged emotion.
///
/// All timestamps are milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionLog {
    pub id: i64,                       // ⇔ emotion_logs.id (assigned by the store)
    pub category: EmotionCategory,     // ⇔ emotion_logs.category ("JOY", ...)
    pub intensity: IntensityLevel,     // ⇔ emotion_logs.intensity ("MILD", ...)
    pub observed_at: i64,              // ⇔ emotion_logs.observed_at
    pub created_at: i64,               // ⇔ emotion_logs.created_at
    pub last_modified_at: Option<i64>, // ⇔ emotion_logs.last_modified_at
}

impl EmotionLog {
    /// A fresh, not yet persisted record.
    pub fn new(
        category: EmotionCategory,
        intensity: IntensityLevel,
        observed_at: i64,
        created_at: i64,
    ) -> Self {
        Self {
            id: UNSET_ID,
            category,
            intensity,
            observed_at,
            created_at,
            last_modified_at: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id != UNSET_ID
    }

    /// Stamp an edit made at `now`. The stamp never precedes `created_at`.
    pub fn touch(&mut self, now: i64) {
        self.last_modified_at = Some(now.max(self.created_at));
    }
}
