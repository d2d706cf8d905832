use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Environment variable prefix read by [`MoodCfg::from_env`].
pub const ENV_PREFIX: &str = "MOODLINE_";

/// Model identifiers tried in order at startup.
pub const DEFAULT_MODEL_CANDIDATES: &[&str] = &[
    "j-hartmann/emotion-english-distilroberta-base",
    "cardiffnlp/twitter-roberta-base-emotion-multilabel-latest",
    "microsoft/DialoGPT-medium",
];

/// Revenue attributed per lead in the aggregate summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueCfg {
    pub hot_value: u64,
    pub warm_value: u64,
}

impl Default for RevenueCfg {
    fn default() -> Self {
        Self { hot_value: 10_000, warm_value: 5_000 }
    }
}

/// Classifier and reporting parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodCfg {
    // model selection
    pub model_candidates: Vec<String>,
    pub load_timeout_ms: u64,
    pub inference_timeout_ms: u64,

    // reporting
    pub revenue: RevenueCfg,
}

impl Default for MoodCfg {
    fn default() -> Self {
        Self {
            model_candidates: DEFAULT_MODEL_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            load_timeout_ms: 5_000,
            inference_timeout_ms: 3_000,
            revenue: RevenueCfg::default(),
        }
    }
}

impl MoodCfg {
    /// Read `MOODLINE_*` variables; anything missing or unparsable keeps its default.
    pub fn from_env() -> Self {
        let map: HashMap<String, String> = std::env::vars()
            .filter_map(|(k, v)| {
                k.strip_prefix(ENV_PREFIX).map(|key| (key.to_lowercase(), v))
            })
            .collect();
        Self::from_map(&map)
    }

    /// Build from a key/value map, falling back to defaults per key.
    pub fn from_map(m: &HashMap<String, String>) -> Self {
        let d = Self::default();
        let model_candidates = m
            .get("model_candidates")
            .map(|v| split_list(v))
            .filter(|list| !list.is_empty())
            .unwrap_or(d.model_candidates);
        Self {
            model_candidates,
            load_timeout_ms: get_or(m, "load_timeout_ms", d.load_timeout_ms),
            inference_timeout_ms: get_or(m, "inference_timeout_ms", d.inference_timeout_ms),
            revenue: RevenueCfg {
                hot_value: get_or(m, "hot_value", d.revenue.hot_value),
                warm_value: get_or(m, "warm_value", d.revenue.warm_value),
            },
        }
    }

    /// `(key, value, description)` rows using the same keys [`Self::from_map`] reads.
    pub fn to_entries(&self) -> Vec<(&str, String, &str)> {
        vec![
            ("model_candidates", self.model_candidates.join(","), "Emotion models tried in order"),
            ("load_timeout_ms", self.load_timeout_ms.to_string(), "Per-candidate model load timeout ms"),
            ("inference_timeout_ms", self.inference_timeout_ms.to_string(), "Per-call inference timeout ms"),
            ("hot_value", self.revenue.hot_value.to_string(), "Revenue per hot lead"),
            ("warm_value", self.revenue.warm_value.to_string(), "Revenue per warm lead"),
        ]
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }

    pub fn inference_timeout(&self) -> Duration {
        Duration::from_millis(self.inference_timeout_ms)
    }
}

fn split_list(v: &str) -> Vec<String> {
    v.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

fn get_or<T: std::str::FromStr>(map: &HashMap<String, String>, key: &str, default: T) -> T {
    map.get(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = MoodCfg::default();
        assert_eq!(cfg.model_candidates.len(), 3);
        assert_eq!(cfg.model_candidates[0], "j-hartmann/emotion-english-distilroberta-base");
        assert_eq!(cfg.revenue.hot_value, 10_000);
        assert_eq!(cfg.revenue.warm_value, 5_000);
    }

    #[test]
    fn from_map_overrides_and_falls_back() {
        let mut m = HashMap::new();
        m.insert("inference_timeout_ms".to_string(), "750".to_string());
        m.insert("hot_value".to_string(), "not-a-number".to_string());
        m.insert("model_candidates".to_string(), " a/b , c/d ,".to_string());
        let cfg = MoodCfg::from_map(&m);
        assert_eq!(cfg.inference_timeout_ms, 750);
        assert_eq!(cfg.revenue.hot_value, 10_000);
        assert_eq!(cfg.model_candidates, vec!["a/b".to_string(), "c/d".to_string()]);
        assert_eq!(cfg.load_timeout_ms, 5_000);
    }

    #[test]
    fn empty_candidate_list_keeps_defaults() {
        let mut m = HashMap::new();
        m.insert("model_candidates".to_string(), " , ".to_string());
        let cfg = MoodCfg::from_map(&m);
        assert_eq!(cfg.model_candidates, MoodCfg::default().model_candidates);
    }

    #[test]
    fn entries_round_trip_through_map() {
        let cfg = MoodCfg {
            inference_timeout_ms: 42,
            ..MoodCfg::default()
        };
        let map: HashMap<String, String> = cfg
            .to_entries()
            .into_iter()
            .map(|(k, v, _)| (k.to_string(), v))
            .collect();
        assert_eq!(MoodCfg::from_map(&map), cfg);
    }
}
