use serde::{Deserialize, Serialize};

use crate::types::EmotionResult;

/// Display moods that need immediate attention.
pub const NEGATIVE_MOODS: &[&str] = &[
    "angry",
    "sad",
    "disappointed",
    "fearful",
    "frustrated",
    "upset",
    "annoyed",
    "unhappy",
    "rude",
    "agitated",
    "depressed",
    "anxious",
];

/// Escalation signal shown next to a classified message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngagementAlert {
    /// Customer looks upset; `mood` is the bare display word.
    Urgent { mood: String },
    /// Anything else is an engagement opportunity.
    Positive { mood: String },
}

impl EngagementAlert {
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::Urgent { .. })
    }
}

/// Display mood with emoji and punctuation removed, lower-cased.
fn bare_mood(display: &str) -> String {
    display
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_owned()
}

/// Classify a detection result as urgent or positive from its display mood.
pub fn engagement_alert(result: &EmotionResult) -> EngagementAlert {
    let mood = bare_mood(&result.display_mood);
    if NEGATIVE_MOODS.contains(&mood.as_str()) {
        EngagementAlert::Urgent { mood }
    } else {
        EngagementAlert::Positive { mood: result.display_mood.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perception::display::display_mood;

    fn result(label: &str) -> EmotionResult {
        EmotionResult {
            display_mood: display_mood(label),
            ..EmotionResult::empty_input()
        }
    }

    #[test]
    fn strips_emoji() {
        assert_eq!(bare_mood("😠 Angry"), "angry");
        assert_eq!(bare_mood("❤️ Loving"), "loving");
    }

    #[test]
    fn negative_moods_are_urgent() {
        assert_eq!(
            engagement_alert(&result("anger")),
            EngagementAlert::Urgent { mood: "angry".into() }
        );
        assert!(engagement_alert(&result("disappointment")).is_urgent());
        assert!(engagement_alert(&result("fear")).is_urgent());
        assert!(engagement_alert(&result("annoyance")).is_urgent());
        // rule labels render as "🧠 Sad"
        assert!(engagement_alert(&result("sad")).is_urgent());
    }

    #[test]
    fn other_moods_are_positive() {
        assert_eq!(
            engagement_alert(&result("joy")),
            EngagementAlert::Positive { mood: "😊 Happy".into() }
        );
        assert!(!engagement_alert(&EmotionResult::empty_input()).is_urgent());
        // "Grieving" and "Nervous" are not on the list
        assert!(!engagement_alert(&result("grief")).is_urgent());
    }
}
