use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// One label and its probability, as produced by a text-classification model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    /// Probability in `0.0..=1.0`.
    pub score: f64,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self { label: label.into(), score }
    }
}

/// Error type for model loading and inference.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model unavailable: {0}")]
    Unavailable(String),
    #[error("rate limited")]
    RateLimited,
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("timed out after {0}ms")]
    Timeout(u64),
}

/// Boxed future returned by model operations.
pub type ModelFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ModelError>> + Send + 'a>>;

/// A loaded emotion-classification model.
///
/// `classify` returns a score for every label the model supports.
pub trait EmotionModel: Send + Sync {
    fn id(&self) -> &str;

    fn classify<'a>(&'a self, text: &'a str) -> ModelFuture<'a, Vec<LabelScore>>;
}

/// Loads a model by identifier (hub id, local path, ...).
pub trait ModelSource: Send + Sync {
    fn load<'a>(&'a self, model_id: &'a str) -> ModelFuture<'a, Box<dyn EmotionModel>>;
}

/// Try each candidate in priority order and return the first model that loads.
/// Each attempt is bounded by `load_timeout`. Returns `None` when every
/// candidate fails.
pub async fn select_model(
    source: &dyn ModelSource,
    candidates: &[String],
    load_timeout: Duration,
) -> Option<Box<dyn EmotionModel>> {
    for model_id in candidates {
        match tokio::time::timeout(load_timeout, source.load(model_id)).await {
            Ok(Ok(model)) => {
                tracing::info!(model = %model_id, "emotion model loaded");
                return Some(model);
            }
            Ok(Err(e)) => {
                tracing::warn!(model = %model_id, error = %e, "failed to load emotion model");
            }
            Err(_) => {
                tracing::warn!(
                    model = %model_id,
                    timeout_ms = load_timeout.as_millis() as u64,
                    "emotion model load timed out"
                );
            }
        }
    }
    None
}

/// Mock model for testing — returns fixed scores, an error, or sleeps first.
#[derive(Debug, Clone)]
pub struct MockModel {
    pub id: String,
    pub scores: Vec<LabelScore>,
    pub failure: Option<String>,
    pub delay: Option<Duration>,
}

impl MockModel {
    pub fn new(id: impl Into<String>, scores: Vec<LabelScore>) -> Self {
        Self { id: id.into(), scores, failure: None, delay: None }
    }

    /// A model whose every inference call fails with `RequestFailed`.
    pub fn failing(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { id: id.into(), scores: vec![], failure: Some(reason.into()), delay: None }
    }

    /// Sleep for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl EmotionModel for MockModel {
    fn id(&self) -> &str {
        &self.id
    }

    fn classify<'a>(&'a self, _text: &'a str) -> ModelFuture<'a, Vec<LabelScore>> {
        Box::pin(async move {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            match &self.failure {
                Some(reason) => Err(ModelError::RequestFailed(reason.clone())),
                None => Ok(self.scores.clone()),
            }
        })
    }
}

/// Mock source — serves the registered models, reports the rest unavailable.
#[derive(Debug, Default, Clone)]
pub struct MockSource {
    models: HashMap<String, MockModel>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: MockModel) -> Self {
        self.models.insert(model.id.clone(), model);
        self
    }
}

impl ModelSource for MockSource {
    fn load<'a>(&'a self, model_id: &'a str) -> ModelFuture<'a, Box<dyn EmotionModel>> {
        let found = self.models.get(model_id).cloned();
        Box::pin(async move {
            found
                .map(|m| Box::new(m) as Box<dyn EmotionModel>)
                .ok_or_else(|| ModelError::Unavailable(model_id.to_owned()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn mock_model_returns_scores() {
        let model = MockModel::new("m", vec![LabelScore::new("joy", 0.9)]);
        let scores = model.classify("hi").await.unwrap();
        assert_eq!(scores, vec![LabelScore::new("joy", 0.9)]);
    }

    #[tokio::test]
    async fn failing_model_errors() {
        let model = MockModel::failing("m", "boom");
        let err = model.classify("hi").await.unwrap_err();
        assert!(matches!(err, ModelError::RequestFailed(ref r) if r == "boom"));
    }

    #[tokio::test]
    async fn select_skips_unavailable_candidates() {
        let source = MockSource::new().with_model(MockModel::new("second", vec![]));
        let model = select_model(&source, &ids(&["first", "second"]), Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(model.id(), "second");
    }

    #[tokio::test]
    async fn select_prefers_earlier_candidate() {
        let source = MockSource::new()
            .with_model(MockModel::new("a", vec![]))
            .with_model(MockModel::new("b", vec![]));
        let model = select_model(&source, &ids(&["a", "b"]), Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(model.id(), "a");
    }

    #[tokio::test]
    async fn select_returns_none_when_nothing_loads() {
        let source = MockSource::new();
        let model = select_model(&source, &ids(&["a", "b"]), Duration::from_secs(1)).await;
        assert!(model.is_none());
    }
}
