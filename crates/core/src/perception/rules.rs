//! Keyword-rule emotion detection.
//!
//! Used when no model is loaded and whenever a model call fails. Labels are
//! bucket names (`happy`, `angry`, ...), not model labels.

use std::collections::BTreeMap;

use super::display::display_mood;
use crate::types::{DetectionSource, EmotionResult};

/// Buckets in tie-break order: on equal hit counts the earlier bucket wins.
pub const EMOTION_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "happy",
        &[
            "happy", "great", "awesome", "amazing", "fantastic", "wonderful", "excellent", "love",
            "excited", "thrilled", "joy", "pleased",
        ],
    ),
    (
        "angry",
        &[
            "angry", "furious", "mad", "rage", "hate", "terrible", "awful", "disgusting",
            "outraged", "livid",
        ],
    ),
    (
        "sad",
        &[
            "sad", "depressed", "disappointed", "upset", "hurt", "crying", "miserable",
            "heartbroken", "devastated",
        ],
    ),
    (
        "frustrated",
        &[
            "frustrated", "annoyed", "irritated", "bothered", "stuck", "confused", "overwhelmed",
            "stressed",
        ],
    ),
    (
        "excited",
        &["excited", "thrilled", "eager", "enthusiastic", "pumped", "stoked", "psyched"],
    ),
    ("neutral", &["okay", "fine", "alright", "normal", "average"]),
];

/// Confidence reported when no keyword matches.
pub const NO_MATCH_CONFIDENCE: f64 = 50.0;

/// Number of distinct bucket keywords contained in `lower`.
fn hits(lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lower.contains(*k)).count()
}

/// Classify `text` by keyword hits.
pub fn classify(text: &str) -> EmotionResult {
    let lower = text.to_lowercase();

    let counts: Vec<(&str, usize)> = EMOTION_KEYWORDS
        .iter()
        .map(|(bucket, keywords)| (*bucket, hits(&lower, keywords)))
        .filter(|(_, n)| *n > 0)
        .collect();

    let mut best: Option<(&str, usize)> = None;
    for &(bucket, n) in &counts {
        if best.is_none_or(|(_, prev)| n > prev) {
            best = Some((bucket, n));
        }
    }

    let (label, confidence) = match best {
        Some((bucket, n)) => (bucket, ((n * 20) as f64).min(100.0)),
        None => ("neutral", NO_MATCH_CONFIDENCE),
    };

    let raw_scores: BTreeMap<String, f64> = counts
        .iter()
        .map(|(bucket, n)| ((*bucket).to_owned(), (*n * 10) as f64))
        .collect();

    EmotionResult {
        label: label.to_owned(),
        display_mood: display_mood(label),
        confidence,
        raw_scores,
        source: DetectionSource::Rules,
    }
}
