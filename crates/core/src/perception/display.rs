/// Fine-grained emotion label → display form.
pub const DISPLAY_MOODS: &[(&str, &str)] = &[
    ("joy", "😊 Happy"),
    ("happiness", "😊 Happy"),
    ("sadness", "😢 Sad"),
    ("anger", "😠 Angry"),
    ("fear", "😨 Fearful"),
    ("surprise", "😲 Surprised"),
    ("disgust", "🤢 Disgusted"),
    ("love", "❤️ Loving"),
    ("excitement", "🤩 Excited"),
    ("optimism", "🌟 Optimistic"),
    ("annoyance", "😤 Annoyed"),
    ("disappointment", "😞 Disappointed"),
    ("neutral", "😐 Neutral"),
    ("admiration", "👏 Admiring"),
    ("approval", "👍 Approving"),
    ("caring", "🤗 Caring"),
    ("confusion", "😕 Confused"),
    ("curiosity", "🤔 Curious"),
    ("desire", "😍 Interested"),
    ("embarrassment", "😳 Embarrassed"),
    ("gratitude", "🙏 Grateful"),
    ("grief", "😭 Grieving"),
    ("nervousness", "😰 Nervous"),
    ("pride", "😤 Proud"),
    ("realization", "💡 Realizing"),
    ("relief", "😌 Relieved"),
    ("remorse", "😔 Remorseful"),
];

/// Display form of a label; unknown labels become `"🧠 {Label}"`.
pub fn display_mood(label: &str) -> String {
    DISPLAY_MOODS
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, display)| (*display).to_owned())
        .unwrap_or_else(|| format!("🧠 {}", capitalize(label)))
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(display_mood("joy"), "😊 Happy");
        assert_eq!(display_mood("anger"), "😠 Angry");
        assert_eq!(display_mood("neutral"), "😐 Neutral");
        assert_eq!(display_mood("remorse"), "😔 Remorseful");
    }

    #[test]
    fn unknown_label_is_capitalized() {
        assert_eq!(display_mood("happy"), "🧠 Happy");
        assert_eq!(display_mood("bOREDOM"), "🧠 Boredom");
        assert_eq!(display_mood(""), "🧠 ");
    }

    #[test]
    fn table_has_no_duplicate_labels() {
        let mut labels: Vec<_> = DISPLAY_MOODS.iter().map(|(l, _)| *l).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), DISPLAY_MOODS.len());
    }
}
