//! Emotion classification strategies.
//!
//! [`ModelClassifier`] wraps a loaded [`EmotionModel`]; [`RuleClassifier`]
//! wraps the keyword rules. Both answer the same [`EmotionClassifier`] call so
//! the detector can swap one for the other without branching on strategy.

use std::collections::BTreeMap;
use std::time::Duration;

use moodline_model::provider::{EmotionModel, LabelScore, ModelError, ModelFuture};

use super::display::display_mood;
use super::rules;
use crate::types::{DetectionSource, EmotionResult};

/// A strategy that turns non-empty text into an [`EmotionResult`].
pub trait EmotionClassifier: Send + Sync {
    fn name(&self) -> &str;

    fn classify<'a>(&'a self, text: &'a str) -> ModelFuture<'a, EmotionResult>;
}

/// Keyword rules. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl EmotionClassifier for RuleClassifier {
    fn name(&self) -> &str {
        "rules"
    }

    fn classify<'a>(&'a self, text: &'a str) -> ModelFuture<'a, EmotionResult> {
        let result = rules::classify(text);
        Box::pin(async move { Ok(result) })
    }
}

/// Model-backed classification with a per-call inference timeout.
pub struct ModelClassifier {
    model: Box<dyn EmotionModel>,
    timeout: Duration,
}

impl ModelClassifier {
    pub fn new(model: Box<dyn EmotionModel>, timeout: Duration) -> Self {
        Self { model, timeout }
    }
}

impl EmotionClassifier for ModelClassifier {
    fn name(&self) -> &str {
        self.model.id()
    }

    fn classify<'a>(&'a self, text: &'a str) -> ModelFuture<'a, EmotionResult> {
        Box::pin(async move {
            let scores = tokio::time::timeout(self.timeout, self.model.classify(text))
                .await
                .map_err(|_| ModelError::Timeout(self.timeout.as_millis() as u64))??;
            from_scores(&scores)
        })
    }
}

/// Round to two decimals.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Build a result from model probabilities (0–1).
///
/// The top label wins; on equal scores the one listed first. Scores are
/// rescaled to 0–100 and rounded to two decimals.
pub fn from_scores(scores: &[LabelScore]) -> Result<EmotionResult, ModelError> {
    let mut top: Option<&LabelScore> = None;
    for s in scores {
        if s.score.is_nan() {
            continue;
        }
        if top.is_none_or(|t| s.score > t.score) {
            top = Some(s);
        }
    }
    let top = top.ok_or_else(|| ModelError::InvalidResponse("no scored labels".into()))?;

    let label = top.label.to_lowercase();
    let raw_scores: BTreeMap<String, f64> = scores
        .iter()
        .map(|s| (s.label.clone(), round2(s.score * 100.0)))
        .collect();

    Ok(EmotionResult {
        display_mood: display_mood(&label),
        confidence: round2(top.score * 100.0),
        raw_scores,
        label,
        source: DetectionSource::Model,
    })
}
