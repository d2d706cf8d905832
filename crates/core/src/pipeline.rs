//! One message in, one composed [`LeadRecord`] out.

use chrono::Utc;
use uuid::Uuid;

use crate::leads::{score_warmth, suggest_next_action, summarize, LeadSink};
use crate::perception::{analyze_intensity, categorize, MoodDetector};
use crate::reply::generate_reply;
use crate::types::LeadRecord;

/// Runs detect → categorize → intensity → reply → lead scoring.
pub struct Pipeline {
    detector: MoodDetector,
}

impl Pipeline {
    pub fn new(detector: MoodDetector) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &MoodDetector {
        &self.detector
    }

    /// Analyze one message. Never fails.
    pub async fn analyze(&self, text: &str) -> LeadRecord {
        let emotion = self.detector.detect(text).await;
        let category = categorize(&emotion.label);
        let intensity = analyze_intensity(text);
        let reply = generate_reply(text, category, intensity);
        let warmth = score_warmth(category, intensity);
        let summary = summarize(text);
        let next_action = suggest_next_action(&summary).to_owned();

        tracing::debug!(
            label = %emotion.label,
            source = ?emotion.source,
            %category,
            %intensity,
            %warmth,
            "message analyzed"
        );

        LeadRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            message: text.to_owned(),
            emotion,
            category,
            intensity,
            reply,
            warmth,
            summary,
            next_action,
        }
    }

    /// Analyze and hand the record to `sink`. A sink failure is logged; the
    /// record is returned either way.
    pub async fn analyze_and_record(&self, text: &str, sink: &dyn LeadSink) -> LeadRecord {
        let record = self.analyze(text).await;
        if let Err(e) = sink.record(&record) {
            tracing::warn!(record = %record.id, error = %e, "failed to store lead record");
        }
        record
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(MoodDetector::rule_based())
    }
}
