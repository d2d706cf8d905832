use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Which strategy produced an [`EmotionResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionSource {
    /// Scores came from a classification model.
    Model,
    /// Keyword rules (no model, or the model call failed).
    Rules,
    /// Empty input; nothing was classified.
    Empty,
}

/// Outcome of emotion detection for one message.
///
/// Model and rule results are only comparable by `label`: under rules,
/// `confidence` is `min(hits * 20, 100)` and `raw_scores` are `hits * 10`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    /// Lower-cased fine-grained emotion name.
    pub label: String,
    /// Emoji-prefixed display form of `label`.
    pub display_mood: String,
    /// 0–100, two decimals.
    pub confidence: f64,
    /// Label → score on the same 0–100 scale.
    pub raw_scores: BTreeMap<String, f64>,
    pub source: DetectionSource,
}

impl EmotionResult {
    /// Fixed result for empty or whitespace-only input.
    pub fn empty_input() -> Self {
        Self {
            label: "neutral".into(),
            display_mood: "😐 Neutral".into(),
            confidence: 0.0,
            raw_scores: BTreeMap::new(),
            source: DetectionSource::Empty,
        }
    }
}

// ── Categorical outputs ────────────────────────────────────────

/// Coarse mood bucket used for reply selection and lead scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodCategory {
    Happy,
    Excited,
    Sad,
    Angry,
    Frustrated,
    Neutral,
}

impl MoodCategory {
    pub const ALL: [Self; 6] = [
        Self::Happy,
        Self::Excited,
        Self::Sad,
        Self::Angry,
        Self::Frustrated,
        Self::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Excited => "excited",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Frustrated => "frustrated",
            Self::Neutral => "neutral",
        }
    }

    /// Case-insensitive parse of a category name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength of the emotion, from surface features only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|i| i.as_str() == s)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Topical bucket of a message, picks the reply follow-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyContext {
    Pricing,
    Support,
    Product,
    Greeting,
    General,
}

impl ReplyContext {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pricing => "pricing",
            Self::Support => "support",
            Self::Product => "product",
            Self::Greeting => "greeting",
            Self::General => "general",
        }
    }
}

/// How sales-ready a message looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadWarmth {
    Hot,
    Warm,
    Cold,
    Medium,
}

impl LeadWarmth {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Warm => "warm",
            Self::Cold => "cold",
            Self::Medium => "medium",
        }
    }

    /// Dashboard label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hot => "🔥 Hot",
            Self::Warm => "🟠 Warm",
            Self::Cold => "❄️ Cold",
            Self::Medium => "🟡 Medium",
        }
    }
}

impl fmt::Display for LeadWarmth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Composed record ────────────────────────────────────────────

/// Everything derived from one customer message, ready for a collaborator
/// to persist or render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub emotion: EmotionResult,
    pub category: MoodCategory,
    pub intensity: Intensity,
    pub reply: String,
    pub warmth: LeadWarmth,
    pub summary: String,
    pub next_action: String,
}
