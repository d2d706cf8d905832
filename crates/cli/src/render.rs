use moodline_core::config::MoodCfg;
use moodline_core::leads::{engagement_alert, EngagementAlert, RevenueSummary};
use moodline_core::types::LeadRecord;

/// Human-readable block for one analyzed message.
pub fn record(r: &LeadRecord) -> String {
    let alert = match engagement_alert(&r.emotion) {
        EngagementAlert::Urgent { mood } => {
            format!("URGENT: customer appears {mood}, immediate attention required")
        }
        EngagementAlert::Positive { mood } => {
            format!("Positive signal: customer seems {mood}")
        }
    };

    format!(
        "Mood: {} ({}% confidence, {})\n\
         Category: {} | Intensity: {}\n\
         {alert}\n\
         Reply: {}\n\
         Lead: {} | {} | Next: {}",
        r.emotion.display_mood,
        r.emotion.confidence,
        source_name(r),
        r.category,
        r.intensity,
        r.reply,
        r.warmth.label(),
        r.summary,
        r.next_action,
    )
}

fn source_name(r: &LeadRecord) -> &'static str {
    use moodline_core::types::DetectionSource;
    match r.emotion.source {
        DetectionSource::Model => "model",
        DetectionSource::Rules => "rules",
        DetectionSource::Empty => "empty",
    }
}

/// Session revenue block for `/stats`.
pub fn stats(s: &RevenueSummary) -> String {
    format!(
        "Leads: {} hot, {} warm, {} cold\n\
         Projected revenue: {}\n\
         {}",
        s.hot_count,
        s.warm_count,
        s.cold_count,
        s.projected_revenue,
        s.recommendation(),
    )
}

/// Effective settings for `/config`, one `key = value  # description` per line.
pub fn config(cfg: &MoodCfg) -> String {
    cfg.to_entries()
        .into_iter()
        .map(|(key, value, description)| format!("{key} = {value}  # {description}"))
        .collect::<Vec<_>>()
        .join("\n")
}
