use std::env;
use std::time::Duration;

use crate::demo_feed::DEMO_VIEWER;
use crate::model::UserId;
use crate::state::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `None` runs signed out.
    pub viewer: Option<UserId>,
    pub summary_refresh: Duration,
    pub contract_refresh: Duration,
    pub demo_seed: Option<u64>,
    pub start_tab: Tab,
}

impl AppConfig {
    /// Reads the environment; call after dotenv files are loaded.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, `None` meaning unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let viewer = match lookup("VIEWER_ID") {
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(UserId::new(raw.trim())),
            None => Some(UserId::new(DEMO_VIEWER)),
        };
        let summary_refresh = secs_setting(lookup("SUMMARY_POLL_SECS"), 60, 10);
        let contract_refresh = secs_setting(lookup("CONTRACT_POLL_SECS"), 120, 30);
        let demo_seed = lookup("DEMO_SEED").and_then(|val| val.trim().parse::<u64>().ok());
        let start_tab = match lookup("START_TAB").map(|v| v.trim().to_lowercase()).as_deref() {
            Some("live") => Tab::Live,
            _ => Tab::Career,
        };
        Self {
            viewer,
            summary_refresh,
            contract_refresh,
            demo_seed,
            start_tab,
        }
    }
}

fn secs_setting(raw: Option<String>, default: u64, min: u64) -> Duration {
    let secs = raw
        .and_then(|val| val.trim().parse::<u64>().ok())
        .unwrap_or(default)
        .max(min);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_sign_in_the_demo_user() {
        let cfg = config(&[]);
        assert_eq!(cfg.viewer, Some(UserId::new(DEMO_VIEWER)));
        assert_eq!(cfg.summary_refresh, Duration::from_secs(60));
        assert_eq!(cfg.contract_refresh, Duration::from_secs(120));
        assert_eq!(cfg.demo_seed, None);
        assert_eq!(cfg.start_tab, Tab::Career);
    }

    #[test]
    fn empty_viewer_runs_signed_out() {
        assert_eq!(config(&[("VIEWER_ID", "  ")]).viewer, None);
        assert_eq!(
            config(&[("VIEWER_ID", " acc-0042 ")]).viewer,
            Some(UserId::new("acc-0042"))
        );
    }

    #[test]
    fn poll_intervals_have_floors() {
        let cfg = config(&[("SUMMARY_POLL_SECS", "3"), ("CONTRACT_POLL_SECS", "5")]);
        assert_eq!(cfg.summary_refresh, Duration::from_secs(10));
        assert_eq!(cfg.contract_refresh, Duration::from_secs(30));

        let cfg = config(&[("SUMMARY_POLL_SECS", "90"), ("CONTRACT_POLL_SECS", "junk")]);
        assert_eq!(cfg.summary_refresh, Duration::from_secs(90));
        assert_eq!(cfg.contract_refresh, Duration::from_secs(120));
    }

    #[test]
    fn start_tab_and_seed() {
        let cfg = config(&[("START_TAB", "Live"), ("DEMO_SEED", "7")]);
        assert_eq!(cfg.start_tab, Tab::Live);
        assert_eq!(cfg.demo_seed, Some(7));
        assert_eq!(config(&[("START_TAB", "missions")]).start_tab, Tab::Career);
    }
}
