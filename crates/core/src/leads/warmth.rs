use crate::types::{Intensity, LeadWarmth, MoodCategory};

/// Map mood and intensity to a warmth tier.
///
/// Rules are evaluated in order and the first match wins, so a happy message
/// at medium intensity is hot even though it also satisfies the warm rule.
pub fn score_warmth(mood: MoodCategory, intensity: Intensity) -> LeadWarmth {
    use Intensity::{High, Low, Medium};
    use MoodCategory::{Angry, Excited, Frustrated, Happy, Neutral, Sad};

    if matches!(mood, Excited | Happy) && matches!(intensity, Medium | High) {
        LeadWarmth::Hot
    } else if matches!(mood, Happy | Neutral) && matches!(intensity, Medium | Low) {
        LeadWarmth::Warm
    } else if matches!(mood, Sad | Frustrated | Angry) {
        LeadWarmth::Cold
    } else {
        LeadWarmth::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Intensity::*;
    use MoodCategory::*;

    #[test]
    fn happy_medium_resolves_to_hot() {
        assert_eq!(score_warmth(Happy, Medium), LeadWarmth::Hot);
    }

    #[test]
    fn full_table() {
        let expected = [
            (Happy, High, LeadWarmth::Hot),
            (Happy, Medium, LeadWarmth::Hot),
            (Happy, Low, LeadWarmth::Warm),
            (Excited, High, LeadWarmth::Hot),
            (Excited, Medium, LeadWarmth::Hot),
            (Excited, Low, LeadWarmth::Medium),
            (Neutral, High, LeadWarmth::Medium),
            (Neutral, Medium, LeadWarmth::Warm),
            (Neutral, Low, LeadWarmth::Warm),
            (Sad, High, LeadWarmth::Cold),
            (Sad, Medium, LeadWarmth::Cold),
            (Sad, Low, LeadWarmth::Cold),
            (Frustrated, High, LeadWarmth::Cold),
            (Frustrated, Medium, LeadWarmth::Cold),
            (Frustrated, Low, LeadWarmth::Cold),
            (Angry, High, LeadWarmth::Cold),
            (Angry, Medium, LeadWarmth::Cold),
            (Angry, Low, LeadWarmth::Cold),
        ];
        assert_eq!(expected.len(), MoodCategory::ALL.len() * Intensity::ALL.len());
        for (mood, intensity, warmth) in expected {
            assert_eq!(score_warmth(mood, intensity), warmth, "{mood}/{intensity}");
        }
    }
}
