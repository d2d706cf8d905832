use crate::types::{Intensity, MoodCategory, ReplyContext};

/// Base replies: one row per mood, columns high / medium / low.
pub const RESPONSES: &[(MoodCategory, [&str; 3])] = &[
    (
        MoodCategory::Angry,
        [
            "I completely understand your frustration, and I sincerely apologize for this experience. Let me personally ensure we resolve this for you right away.",
            "I understand your frustration and want to help resolve this issue for you.",
            "I apologize for any inconvenience. Let me help you with this.",
        ],
    ),
    (
        MoodCategory::Frustrated,
        [
            "I can see this has been really challenging for you. Let's work together to find a solution that works.",
            "I understand this has been frustrating. Let me help you through this step by step.",
            "I can see this might be confusing. Let me clarify this for you.",
        ],
    ),
    (
        MoodCategory::Happy,
        [
            "I absolutely love your enthusiasm! I'm thrilled to help you with this.",
            "That's wonderful to hear! I'm excited to assist you today.",
            "Great to hear from you! How can I help you today?",
        ],
    ),
    (
        MoodCategory::Excited,
        [
            "Your excitement is contagious! I'm just as excited to help you achieve your goals.",
            "I love your energy! Let's explore how we can help you.",
            "That's great to hear! What can I help you with today?",
        ],
    ),
    (
        MoodCategory::Sad,
        [
            "I'm really sorry to hear you're going through this. I'm here to support you in any way I can.",
            "I'm sorry to hear that. Let me see how I can help improve this situation.",
            "I understand this might be disappointing. How can I assist you?",
        ],
    ),
    (
        MoodCategory::Neutral,
        [
            "Thank you for reaching out. I'm here to help with whatever you need.",
            "Thanks for your message. How can I assist you today?",
            "Hello! How can I help you today?",
        ],
    ),
];

/// Follow-up sentence appended for each context.
pub const FOLLOW_UPS: &[(ReplyContext, &str)] = &[
    (
        ReplyContext::Pricing,
        "Would you like to discuss our pricing options and find something that fits your budget?",
    ),
    (
        ReplyContext::Support,
        "What specific issue are you experiencing? I'm here to help resolve it.",
    ),
    (
        ReplyContext::Product,
        "What particular aspect of our product/service interests you most?",
    ),
    (
        ReplyContext::Greeting,
        "What brings you here today? I'm ready to assist!",
    ),
    (ReplyContext::General, "What can I help you with today?"),
];

/// Row of the response matrix for `mood`.
fn row(mood: MoodCategory) -> &'static [&'static str; 3] {
    RESPONSES
        .iter()
        .find(|(m, _)| *m == mood)
        .map(|(_, row)| row)
        .unwrap_or(&NEUTRAL_ROW)
}

const NEUTRAL_ROW: [&str; 3] = RESPONSES[5].1;

fn column(intensity: Intensity) -> usize {
    match intensity {
        Intensity::High => 0,
        Intensity::Medium => 1,
        Intensity::Low => 2,
    }
}

/// Base reply for a mood and intensity.
pub fn base_reply(mood: MoodCategory, intensity: Intensity) -> &'static str {
    row(mood)[column(intensity)]
}

/// Base reply from loosely-typed labels: unknown mood → neutral row,
/// unknown intensity → medium column.
pub fn base_reply_for_labels(mood: &str, intensity: &str) -> &'static str {
    let mood = MoodCategory::parse(mood).unwrap_or(MoodCategory::Neutral);
    let intensity = Intensity::parse(intensity).unwrap_or(Intensity::Medium);
    base_reply(mood, intensity)
}

/// Follow-up sentence for a context.
pub fn follow_up(context: ReplyContext) -> &'static str {
    FOLLOW_UPS
        .iter()
        .find(|(c, _)| *c == context)
        .map(|(_, text)| *text)
        .unwrap_or("How can I assist you further?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_covers_every_mood_and_intensity() {
        for mood in MoodCategory::ALL {
            assert!(RESPONSES.iter().any(|(m, _)| *m == mood), "missing row for {mood}");
            for intensity in Intensity::ALL {
                assert!(!base_reply(mood, intensity).is_empty());
            }
        }
    }

    #[test]
    fn neutral_row_constant_is_neutral() {
        assert_eq!(NEUTRAL_ROW, *row(MoodCategory::Neutral));
    }

    #[test]
    fn lookup() {
        assert_eq!(
            base_reply(MoodCategory::Angry, Intensity::Low),
            "I apologize for any inconvenience. Let me help you with this."
        );
        assert_eq!(
            base_reply(MoodCategory::Neutral, Intensity::Medium),
            "Thanks for your message. How can I assist you today?"
        );
    }

    #[test]
    fn label_fallbacks() {
        assert_eq!(
            base_reply_for_labels("elated", "high"),
            base_reply(MoodCategory::Neutral, Intensity::High)
        );
        assert_eq!(
            base_reply_for_labels("sad", "extreme"),
            base_reply(MoodCategory::Sad, Intensity::Medium)
        );
    }

    #[test]
    fn every_context_has_a_follow_up() {
        for ctx in [
            ReplyContext::Pricing,
            ReplyContext::Support,
            ReplyContext::Product,
            ReplyContext::Greeting,
            ReplyContext::General,
        ] {
            assert!(FOLLOW_UPS.iter().any(|(c, _)| *c == ctx), "missing {}", ctx.as_str());
        }
    }
}
