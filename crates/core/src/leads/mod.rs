//! Lead scoring — warmth tiers, intent summaries, next actions and the
//! aggregate revenue view collaborators build dashboards from.

pub mod alert;
pub mod revenue;
pub mod sink;
pub mod summary;
pub mod warmth;

pub use alert::{engagement_alert, EngagementAlert};
pub use revenue::{estimate_revenue, RevenueSummary};
pub use sink::{LeadSink, MemorySink, SinkError};
pub use summary::{suggest_next_action, summarize};
pub use warmth::score_warmth;
