use crate::types::Intensity;

/// Intensifiers, matched as substrings of the lower-cased text.
pub const INTENSIFIERS: &[&str] = &[
    "!!",
    "!!!",
    "absolutely",
    "extremely",
    "really",
    "very",
    "so",
    "totally",
    "completely",
    "utterly",
];

/// Upper-case share of characters above which a message is high intensity.
const CAPS_THRESHOLD: f64 = 0.3;

/// Upper-case characters / total characters (0 for empty text).
pub fn caps_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / total as f64
}

/// Number of intensifiers present in `text`.
pub fn intensifier_score(text: &str) -> usize {
    let lower = text.to_lowercase();
    INTENSIFIERS.iter().filter(|w| lower.contains(*w)).count()
}

/// Score emotional intensity from caps, intensifiers and exclamation marks.
pub fn analyze_intensity(text: &str) -> Intensity {
    let score = intensifier_score(text);

    if caps_ratio(text) > CAPS_THRESHOLD || score >= 2 {
        Intensity::High
    } else if score >= 1 || text.contains('!') {
        Intensity::Medium
    } else {
        Intensity::Low
    }
}
