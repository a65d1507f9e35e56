//! English display names for taxonomy keys.
//!
//! Stands in for a real localization layer: unknown keys fall back to the
//! key itself so a new table entry never renders as an empty cell.

pub fn english_name(key: &str) -> &str {
    match key {
        "emotion_serenity" => "Serenity",
        "emotion_joy_moderate" => "Joy",
        "emotion_ecstasy" => "Ecstasy",
        "emotion_pensiveness" => "Pensiveness",
        "emotion_sadness_moderate" => "Sadness",
        "emotion_grief" => "Grief",
        "emotion_annoyance" => "Annoyance",
        "emotion_anger_moderate" => "Anger",
        "emotion_rage" => "Rage",
        "emotion_apprehension" => "Apprehension",
        "emotion_fear_moderate" => "Fear",
        "emotion_terror" => "Terror",
        "emotion_acceptance" => "Acceptance",
        "emotion_trust_moderate" => "Trust",
        "emotion_admiration" => "Admiration",
        "emotion_boredom" => "Boredom",
        "emotion_disgust_moderate" => "Disgust",
        "emotion_loathing" => "Loathing",
        "emotion_interest" => "Interest",
        "emotion_anticipation_moderate" => "Anticipation",
        "emotion_vigilance" => "Vigilance",
        "emotion_distraction" => "Distraction",
        "emotion_surprise_moderate" => "Surprise",
        "emotion_amazement" => "Amazement",
        other => other,
    }
}
