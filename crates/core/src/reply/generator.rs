use super::context::detect_context;
use super::templates::{base_reply, base_reply_for_labels, follow_up};
use crate::types::{Intensity, MoodCategory};

/// Reply for empty or whitespace-only input, regardless of mood.
pub const EMPTY_INPUT_REPLY: &str =
    "I'd be happy to help! Could you please share more details about what you're looking for?";

/// Compose a reply: base sentence for (mood, intensity) + context follow-up.
pub fn generate_reply(text: &str, mood: MoodCategory, intensity: Intensity) -> String {
    if text.trim().is_empty() {
        return EMPTY_INPUT_REPLY.to_owned();
    }
    compose(text, base_reply(mood, intensity))
}

/// Same as [`generate_reply`] for labels arriving as strings from a
/// collaborator; unknown values take the documented fallbacks.
pub fn generate_reply_raw(text: &str, mood: &str, intensity: &str) -> String {
    if text.trim().is_empty() {
        return EMPTY_INPUT_REPLY.to_owned();
    }
    compose(text, base_reply_for_labels(mood, intensity))
}

fn compose(text: &str, base: &str) -> String {
    let context = detect_context(text);
    format!("{base} {}", follow_up(context))
}
