use serde::{Deserialize, Serialize};

use crate::config::RevenueCfg;
use crate::types::LeadWarmth;

/// Per-lead revenue estimate for a single record.
pub fn estimate_revenue(warmth: LeadWarmth) -> u64 {
    match warmth {
        LeadWarmth::Hot => 20_000,
        LeadWarmth::Warm => 10_000,
        LeadWarmth::Cold => 2_000,
        LeadWarmth::Medium => 0,
    }
}

/// Lead counts and revenue over a set of records.
///
/// Only hot and warm leads carry revenue; every other tier counts as cold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSummary {
    pub hot_count: u64,
    pub warm_count: u64,
    pub cold_count: u64,
    pub total_revenue: u64,
    pub projected_revenue: u64,
}

impl RevenueSummary {
    pub fn from_warmths<I>(warmths: I, cfg: &RevenueCfg) -> Self
    where
        I: IntoIterator<Item = LeadWarmth>,
    {
        let mut s = Self::default();
        for w in warmths {
            match w {
                LeadWarmth::Hot => s.hot_count += 1,
                LeadWarmth::Warm => s.warm_count += 1,
                LeadWarmth::Cold | LeadWarmth::Medium => s.cold_count += 1,
            }
        }
        s.total_revenue = s.hot_count * cfg.hot_value + s.warm_count * cfg.warm_value;
        s.projected_revenue = s.total_revenue;
        s
    }

    pub fn total_leads(&self) -> u64 {
        self.hot_count + self.warm_count + self.cold_count
    }

    /// Priority suggestion for the sales team.
    pub fn recommendation(&self) -> String {
        if self.hot_count > 0 {
            format!(
                "Priority action: Close {} hot {} immediately for maximum revenue impact.",
                self.hot_count,
                plural_leads(self.hot_count)
            )
        } else if self.warm_count > 0 {
            format!(
                "Focus on converting {} warm {} to hot leads.",
                self.warm_count,
                plural_leads(self.warm_count)
            )
        } else {
            "Generate new leads through targeted marketing campaigns.".to_owned()
        }
    }
}

fn plural_leads(n: u64) -> &'static str {
    if n == 1 { "lead" } else { "leads" }
}
