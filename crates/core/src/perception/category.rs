use crate::types::MoodCategory;

/// Label sets per category, in lookup priority order.
///
/// The sets overlap (`annoyance` is both angry and frustrated, `joy` both
/// happy and excited); the first category containing a label wins.
pub const CATEGORY_LABELS: &[(MoodCategory, &[&str])] = &[
    (
        MoodCategory::Happy,
        &[
            "joy", "happiness", "love", "excitement", "optimism", "admiration", "approval",
            "gratitude", "pride", "relief",
        ],
    ),
    (
        MoodCategory::Excited,
        &["excitement", "joy", "love", "admiration", "desire", "curiosity"],
    ),
    (
        MoodCategory::Sad,
        &["sadness", "grief", "disappointment", "remorse", "embarrassment"],
    ),
    (MoodCategory::Angry, &["anger", "annoyance", "disgust"]),
    (
        MoodCategory::Frustrated,
        &["annoyance", "disappointment", "confusion", "nervousness"],
    ),
    (
        MoodCategory::Neutral,
        &["neutral", "realization", "surprise", "caring", "fear"],
    ),
];

/// Reduce a fine-grained emotion label to a mood category.
///
/// Labels that already name a category (what the keyword rules emit) map to
/// that category. Anything else unmapped is `Neutral`.
pub fn categorize(label: &str) -> MoodCategory {
    let lower = label.trim().to_lowercase();

    CATEGORY_LABELS
        .iter()
        .find(|(_, labels)| labels.contains(&lower.as_str()))
        .map(|(category, _)| *category)
        .or_else(|| MoodCategory::parse(&lower))
        .unwrap_or(MoodCategory::Neutral)
}
