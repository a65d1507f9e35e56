use rfeelings::errors::AppError;
use rfeelings::models::emotion_category::{blended_categories, primary_categories};
use rfeelings::models::{EmotionCategory, IntensityLevel};
use rfeelings::taxonomy::{PLUTCHIK_TABLE, Taxonomy, TaxonomyEntry};
use rfeelings::ui::names::english_name;
use std::collections::HashSet;
use strum::IntoEnumIterator;

#[test]
fn test_every_pair_resolves_to_a_distinct_key() {
    let taxonomy = Taxonomy::plutchik();
    let mut keys = HashSet::new();

    for category in EmotionCategory::iter() {
        for intensity in IntensityLevel::iter() {
            let key = taxonomy
                .resolve_name_key(category, intensity)
                .expect("every pair is in the table");
            assert!(keys.insert(key), "duplicate key {}", key);
        }
    }

    assert_eq!(keys.len(), 24);
}

#[test]
fn test_known_keys() {
    let taxonomy = Taxonomy::plutchik();
    let cases = vec![
        (EmotionCategory::Joy, IntensityLevel::Mild, "emotion_serenity"),
        (EmotionCategory::Joy, IntensityLevel::Moderate, "emotion_joy_moderate"),
        (EmotionCategory::Joy, IntensityLevel::Intense, "emotion_ecstasy"),
        (EmotionCategory::Fear, IntensityLevel::Intense, "emotion_terror"),
        (EmotionCategory::Surprise, IntensityLevel::Mild, "emotion_distraction"),
    ];

    for (category, intensity, expected) in cases {
        assert_eq!(
            taxonomy.resolve_name_key(category, intensity).unwrap(),
            expected
        );
    }
}

#[test]
fn test_each_category_has_three_levels() {
    let taxonomy = Taxonomy::plutchik();
    for category in EmotionCategory::iter() {
        let keys = taxonomy.all_keys_for_category(category);
        assert_eq!(keys.len(), 3, "{}", category);
        for intensity in IntensityLevel::iter() {
            assert!(keys.contains_key(&intensity));
        }
    }
}

#[test]
fn test_plutchik_table_passes_self_check() {
    assert_eq!(PLUTCHIK_TABLE.len(), 24);
    Taxonomy::plutchik().self_check().unwrap();
}

#[test]
fn test_partial_table_raises_invalid_combination() {
    let partial = Taxonomy::from_entries(&PLUTCHIK_TABLE[..2]);

    let err = partial
        .resolve_name_key(EmotionCategory::Joy, IntensityLevel::Intense)
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::InvalidCombination {
            category: EmotionCategory::Joy,
            intensity: IntensityLevel::Intense
        }
    ));

    assert!(matches!(
        partial.self_check(),
        Err(AppError::TaxonomyDefect(_))
    ));
    assert_eq!(partial.all_keys_for_category(EmotionCategory::Joy).len(), 2);
}

#[test]
fn test_duplicate_keys_fail_self_check() {
    let mut entries: Vec<TaxonomyEntry> = PLUTCHIK_TABLE.to_vec();
    entries[1].key = "emotion_serenity";

    let err = Taxonomy::from_entries(&entries).self_check().unwrap_err();
    assert!(err.to_string().contains("emotion_serenity"));
}

#[test]
fn test_duplicate_pair_fails_self_check() {
    let mut entries: Vec<TaxonomyEntry> = PLUTCHIK_TABLE.to_vec();
    entries.push(TaxonomyEntry {
        category: EmotionCategory::Joy,
        intensity: IntensityLevel::Mild,
        key: "emotion_typo",
    });

    let taxonomy = Taxonomy::from_entries(&entries);
    let err = taxonomy.self_check().unwrap_err();
    assert!(matches!(err, AppError::TaxonomyDefect(_)));
    assert!(err.to_string().contains("JOY/MILD"));

    // the shipped key is not replaced by the extra entry
    assert_eq!(
        taxonomy
            .resolve_name_key(EmotionCategory::Joy, IntensityLevel::Mild)
            .unwrap(),
        "emotion_serenity"
    );
}

#[test]
fn test_category_order_and_helpers() {
    let order: Vec<String> = EmotionCategory::iter().map(|c| c.to_string()).collect();
    assert_eq!(
        order,
        vec![
            "JOY",
            "SADNESS",
            "ANGER",
            "FEAR",
            "TRUST",
            "DISGUST",
            "ANTICIPATION",
            "SURPRISE"
        ]
    );

    for (i, category) in EmotionCategory::iter().enumerate() {
        assert_eq!(EmotionCategory::from_sector(i), Some(category));
        assert_eq!(category.as_index(), i);
        assert!(category.is_primary());
        assert!(!category.is_blended());
        assert!(category.is_valid_intensity(Some(IntensityLevel::Mild)));
        assert!(!category.is_valid_intensity(None));
    }
    assert_eq!(EmotionCategory::from_sector(8), None);
    assert_eq!(primary_categories().len(), 8);
    assert!(blended_categories().is_empty());
}

#[test]
fn test_intensity_rings() {
    assert_eq!(IntensityLevel::from_ring(0), Some(IntensityLevel::Intense));
    assert_eq!(IntensityLevel::from_ring(1), Some(IntensityLevel::Moderate));
    assert_eq!(IntensityLevel::from_ring(2), Some(IntensityLevel::Mild));
    assert_eq!(IntensityLevel::from_ring(3), None);
    for level in IntensityLevel::iter() {
        assert_eq!(IntensityLevel::from_ring(level.ring()), Some(level));
    }
}

#[test]
fn test_parse_names_case_insensitive() {
    assert_eq!(
        "joy".parse::<EmotionCategory>().unwrap(),
        EmotionCategory::Joy
    );
    assert_eq!(
        "Anticipation".parse::<EmotionCategory>().unwrap(),
        EmotionCategory::Anticipation
    );
    assert_eq!(
        "intense".parse::<IntensityLevel>().unwrap(),
        IntensityLevel::Intense
    );
    assert!("love".parse::<EmotionCategory>().is_err());
}

#[test]
fn test_every_key_has_an_english_name() {
    for entry in Taxonomy::plutchik().entries() {
        assert_ne!(english_name(entry.key), entry.key, "{}", entry.key);
    }
    assert_eq!(english_name("emotion_unknown"), "emotion_unknown");
}
