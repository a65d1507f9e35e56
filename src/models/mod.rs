pub mod emotion_category;
pub mod emotion_log;
pub mod intensity_level;

pub use emotion_category::EmotionCategory;
pub use emotion_log::EmotionLog;
pub use intensity_level::IntensityLevel;
