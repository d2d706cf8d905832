use moodline_model::provider::{self as model, ModelSource};

use super::classifier::{EmotionClassifier, ModelClassifier, RuleClassifier};
use super::rules;
use crate::config::MoodCfg;
use crate::types::EmotionResult;

/// Emotion detector — model-backed when a model loaded at startup, keyword
/// rules otherwise. A failing model call falls back to rules for that call
/// only; `detect` itself never fails.
pub struct MoodDetector {
    active: Box<dyn EmotionClassifier>,
    fallback: Box<dyn EmotionClassifier>,
    uses_model: bool,
}

impl MoodDetector {
    /// Detector that only uses keyword rules.
    pub fn rule_based() -> Self {
        Self {
            active: Box::new(RuleClassifier),
            fallback: Box::new(RuleClassifier),
            uses_model: false,
        }
    }

    /// Detector with an explicit primary strategy.
    pub fn with_classifier(classifier: Box<dyn EmotionClassifier>) -> Self {
        Self {
            active: classifier,
            fallback: Box::new(RuleClassifier),
            uses_model: true,
        }
    }

    /// Replace the strategy used when the active one fails.
    pub fn with_fallback(mut self, fallback: Box<dyn EmotionClassifier>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Pick the first loadable model from `cfg.model_candidates`.
    /// No source, or no candidate loading, leaves the detector on rules for
    /// its whole lifetime.
    pub async fn initialize(source: Option<&dyn ModelSource>, cfg: &MoodCfg) -> Self {
        let Some(source) = source else {
            tracing::warn!("no emotion model source configured, using rule-based detection");
            return Self::rule_based();
        };

        match model::select_model(source, &cfg.model_candidates, cfg.load_timeout()).await {
            Some(m) => Self::with_classifier(Box::new(ModelClassifier::new(m, cfg.inference_timeout()))),
            None => {
                tracing::warn!(
                    candidates = cfg.model_candidates.len(),
                    "no emotion model could be loaded, using rule-based detection"
                );
                Self::rule_based()
            }
        }
    }

    /// True if a model strategy is active.
    pub fn uses_model(&self) -> bool {
        self.uses_model
    }

    /// Name of the active strategy (model id or `"rules"`).
    pub fn strategy(&self) -> &str {
        self.active.name()
    }

    /// Detect the emotion of `text`.
    pub async fn detect(&self, text: &str) -> EmotionResult {
        let text = text.trim();
        if text.is_empty() {
            return EmotionResult::empty_input();
        }

        let err = match self.active.classify(text).await {
            Ok(result) => return result,
            Err(e) => e,
        };
        tracing::warn!(
            strategy = self.active.name(),
            fallback = self.fallback.name(),
            error = %err,
            "emotion classification failed, falling back"
        );

        match self.fallback.classify(text).await {
            Ok(result) => result,
            Err(e) => {
                // keyword rules are infallible
                tracing::warn!(strategy = self.fallback.name(), error = %e, "fallback failed too");
                rules::classify(text)
            }
        }
    }
}

impl Default for MoodDetector {
    fn default() -> Self {
        Self::rule_based()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DetectionSource;
    use moodline_model::provider::{LabelScore, MockModel, MockSource, ModelError, ModelFuture};
    use std::time::Duration;

    fn joy_model(id: &str) -> MockModel {
        MockModel::new(id, vec![LabelScore::new("joy", 0.9), LabelScore::new("anger", 0.1)])
    }

    fn cfg(candidates: &[&str]) -> MoodCfg {
        MoodCfg {
            model_candidates: candidates.iter().map(|s| s.to_string()).collect(),
            ..MoodCfg::default()
        }
    }

    #[tokio::test]
    async fn empty_input_skips_strategies() {
        let detector = MoodDetector::with_classifier(Box::new(ModelClassifier::new(
            Box::new(MockModel::failing("m", "never called")),
            Duration::from_secs(1),
        )));
        assert_eq!(detector.detect("").await, EmotionResult::empty_input());
        assert_eq!(detector.detect("   \n\t").await, EmotionResult::empty_input());
    }

    #[tokio::test]
    async fn model_result_used_when_loaded() {
        let source = MockSource::new().with_model(joy_model("primary"));
        let detector = MoodDetector::initialize(Some(&source), &cfg(&["primary"])).await;
        assert!(detector.uses_model());
        assert_eq!(detector.strategy(), "primary");

        let r = detector.detect("I hate this").await;
        assert_eq!(r.label, "joy");
        assert_eq!(r.source, DetectionSource::Model);
    }

    #[tokio::test]
    async fn falls_back_per_call_on_model_error() {
        let detector = MoodDetector::with_classifier(Box::new(ModelClassifier::new(
            Box::new(MockModel::failing("broken", "cuda oom")),
            Duration::from_secs(1),
        )));
        let r = detector.detect("I hate this").await;
        assert_eq!(r.label, "angry");
        assert_eq!(r.source, DetectionSource::Rules);
        // still configured with the model
        assert!(detector.uses_model());
    }

    #[tokio::test]
    async fn no_loadable_model_means_rules() {
        let source = MockSource::new();
        let detector = MoodDetector::initialize(Some(&source), &cfg(&["a", "b"])).await;
        assert!(!detector.uses_model());
        assert_eq!(detector.strategy(), "rules");
        assert_eq!(detector.detect("so sad").await.source, DetectionSource::Rules);
    }

    #[tokio::test]
    async fn no_source_means_rules() {
        let detector = MoodDetector::initialize(None, &MoodCfg::default()).await;
        assert!(!detector.uses_model());
    }

    #[tokio::test]
    async fn slow_model_falls_back_to_rules() {
        let source = MockSource::new()
            .with_model(joy_model("slow").with_delay(Duration::from_millis(200)));
        let config = MoodCfg {
            inference_timeout_ms: 10,
            ..cfg(&["slow"])
        };
        let detector = MoodDetector::initialize(Some(&source), &config).await;
        let r = detector.detect("I'm furious").await;
        assert_eq!(r.label, "angry");
        assert_eq!(r.source, DetectionSource::Rules);
    }

    struct FixedClassifier(&'static str);

    impl EmotionClassifier for FixedClassifier {
        fn name(&self) -> &str {
            "fixed"
        }

        fn classify<'a>(&'a self, _text: &'a str) -> ModelFuture<'a, EmotionResult> {
            let label = self.0;
            Box::pin(async move {
                Ok(EmotionResult {
                    label: label.to_owned(),
                    display_mood: label.to_owned(),
                    confidence: 1.0,
                    raw_scores: Default::default(),
                    source: DetectionSource::Rules,
                })
            })
        }
    }

    struct DownClassifier;

    impl EmotionClassifier for DownClassifier {
        fn name(&self) -> &str {
            "down"
        }

        fn classify<'a>(&'a self, _text: &'a str) -> ModelFuture<'a, EmotionResult> {
            Box::pin(async { Err(ModelError::Unavailable("down".into())) })
        }
    }

    #[tokio::test]
    async fn fallback_runs_through_configured_strategy() {
        let detector = MoodDetector::with_classifier(Box::new(DownClassifier))
            .with_fallback(Box::new(FixedClassifier("calm")));
        assert_eq!(detector.strategy(), "down");
        assert_eq!(detector.detect("I hate this").await.label, "calm");
    }

    #[tokio::test]
    async fn failing_fallback_still_yields_rules() {
        let detector = MoodDetector::with_classifier(Box::new(DownClassifier))
            .with_fallback(Box::new(DownClassifier));
        let r = detector.detect("I hate this").await;
        assert_eq!(r.label, "angry");
        assert_eq!(r.source, DetectionSource::Rules);
    }

    #[tokio::test]
    async fn rule_based_classifies_through_rule_strategy() {
        let detector = MoodDetector::rule_based();
        assert_eq!(detector.strategy(), "rules");
        let r = detector.detect("so sad").await;
        assert_eq!(r, rules::classify("so sad"));
    }

    #[tokio::test]
    async fn rule_detection_is_deterministic() {
        let detector = MoodDetector::rule_based();
        let text = "Honestly this is fine, just okay";
        assert_eq!(detector.detect(text).await, detector.detect(text).await);
    }
}
