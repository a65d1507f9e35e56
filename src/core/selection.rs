//! Turns wheel taps into validated emotion logs and owns the live history
//! handed to the presentation layer.

use std::sync::Arc;
use std::time::Duration;

use crate::core::clock::{Clock, SystemClock};
use crate::core::live::{DEFAULT_GRACE, LiveLog};
use crate::errors::{AppError, AppResult};
use crate::models::{EmotionCategory, EmotionLog, IntensityLevel};
use crate::store::EmotionStore;
use crate::taxonomy::Taxonomy;
use crate::wheel::{Offset, WheelLayout, WheelPoint};

/// What a tap resolves to before anything is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub point: WheelPoint,
    pub category: EmotionCategory,
    pub intensity: IntensityLevel,
    pub name_key: &'static str,
}

/// Changes allowed on an existing log. `None` keeps the stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmotionEdit {
    pub intensity: Option<IntensityLevel>,
    pub observed_at: Option<i64>,
}

impl EmotionEdit {
    pub fn is_empty(&self) -> bool {
        self.intensity.is_none() && self.observed_at.is_none()
    }
}

/// The pure half of a tap: wheel cell, category, intensity and name key.
pub fn resolve_selection(
    layout: &WheelLayout,
    taxonomy: &Taxonomy,
    offset: Offset,
) -> AppResult<Selection> {
    let point = layout.locate(offset);

    // sector i is category i, ring 0 is the most intense band
    let category = EmotionCategory::from_sector(point.sector).ok_or_else(|| {
        AppError::TaxonomyDefect(format!("no category for sector {}", point.sector))
    })?;
    let intensity = IntensityLevel::from_ring(point.ring).ok_or_else(|| {
        AppError::TaxonomyDefect(format!("no intensity for ring {}", point.ring))
    })?;

    let name_key = validate_pair(taxonomy, category, intensity)?;

    Ok(Selection {
        point,
        category,
        intensity,
        name_key,
    })
}

fn validate_pair(
    taxonomy: &Taxonomy,
    category: EmotionCategory,
    intensity: IntensityLevel,
) -> AppResult<&'static str> {
    if !category.is_valid_intensity(Some(intensity)) {
        return Err(AppError::InvalidCombination {
            category,
            intensity,
        });
    }
    taxonomy.resolve_name_key(category, intensity)
}

pub struct SelectionController {
    store: EmotionStore,
    layout: WheelLayout,
    taxonomy: Taxonomy,
    clock: Arc<dyn Clock>,
    live: LiveLog,
}

impl SelectionController {
    pub fn new(
        store: EmotionStore,
        layout: WheelLayout,
        taxonomy: Taxonomy,
        clock: Arc<dyn Clock>,
        grace: Duration,
    ) -> AppResult<Self> {
        let live = LiveLog::new(store.clone(), grace)?;
        Ok(Self {
            store,
            layout,
            taxonomy,
            clock,
            live,
        })
    }

    /// Full Plutchik table, wall clock and the default grace period.
    pub fn with_defaults(store: EmotionStore, layout: WheelLayout) -> AppResult<Self> {
        Self::new(
            store,
            layout,
            Taxonomy::plutchik(),
            Arc::new(SystemClock),
            DEFAULT_GRACE,
        )
    }

    /// Resolve a tap offset to a category/intensity pair known to the taxonomy.
    pub fn select(&self, offset: Offset) -> AppResult<Selection> {
        resolve_selection(&self.layout, &self.taxonomy, offset)
    }

    fn validate(
        &self,
        category: EmotionCategory,
        intensity: IntensityLevel,
    ) -> AppResult<&'static str> {
        validate_pair(&self.taxonomy, category, intensity)
    }

    /// Log the emotion under the tap, observed now.
    pub async fn on_tap(&self, offset: Offset) -> AppResult<EmotionLog> {
        let now = self.clock.now_millis();
        self.tap(offset, now, now).await
    }

    /// Log the emotion under the tap for an earlier (or later) moment.
    pub async fn on_tap_at(&self, offset: Offset, observed_at: i64) -> AppResult<EmotionLog> {
        let now = self.clock.now_millis();
        self.tap(offset, observed_at, now).await
    }

    async fn tap(&self, offset: Offset, observed_at: i64, now: i64) -> AppResult<EmotionLog> {
        let selection = self.select(offset)?;
        log::debug!(
            "Tap ({:.1}, {:.1}) -> sector {} ring {} -> {}",
            offset.dx,
            offset.dy,
            selection.point.sector,
            selection.point.ring,
            selection.name_key
        );
        self.persist(selection.category, selection.intensity, observed_at, now)
            .await
    }

    /// Log a pair chosen without the wheel (e.g. from a list).
    pub async fn log_emotion(
        &self,
        category: EmotionCategory,
        intensity: IntensityLevel,
        observed_at: Option<i64>,
    ) -> AppResult<EmotionLog> {
        self.validate(category, intensity)?;
        let now = self.clock.now_millis();
        self.persist(category, intensity, observed_at.unwrap_or(now), now)
            .await
    }

    async fn persist(
        &self,
        category: EmotionCategory,
        intensity: IntensityLevel,
        observed_at: i64,
        created_at: i64,
    ) -> AppResult<EmotionLog> {
        let record = EmotionLog::new(category, intensity, observed_at, created_at);
        let id = self.store.upsert(record.clone()).await?;
        Ok(record.with_id(id))
    }

    /// Change intensity and/or observation time of a stored log and stamp
    /// the modification time.
    pub async fn edit(&self, id: i64, edit: EmotionEdit) -> AppResult<EmotionLog> {
        let mut record = self
            .store
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))?;

        if let Some(intensity) = edit.intensity {
            record.intensity = intensity;
        }
        if let Some(observed_at) = edit.observed_at {
            record.observed_at = observed_at;
        }

        self.validate(record.category, record.intensity)?;
        record.touch(self.clock.now_millis());

        self.store.update(record.clone()).await?;
        Ok(record)
    }

    /// Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        self.store.delete_by_id(id).await
    }

    pub async fn clear(&self) -> AppResult<usize> {
        self.store.delete_all().await
    }

    pub fn live_log(&self) -> &LiveLog {
        &self.live
    }

    pub fn store(&self) -> &EmotionStore {
        &self.store
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn layout(&self) -> WheelLayout {
        self.layout
    }
}
