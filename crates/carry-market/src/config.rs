//! Gateway configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Gateway configuration.
///
/// Endpoint paths (`/mep`, `/arg_notes`, `/arg_bonds`) are fixed relative to
/// `base_url`. Defaults match the production feed; `from_env` applies the
/// `API_TIMEOUT` and `DEFAULT_MEP_RATE` environment overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the upstream feed
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Reference rate substituted when the live rate is unavailable
    #[serde(default = "default_fallback_rate")]
    pub fallback_rate: f64,

    /// User-Agent header; the feed rejects bare client defaults
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://data912.com/live".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_fallback_rate() -> f64 {
    1200.0
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            fallback_rate: default_fallback_rate(),
            user_agent: default_user_agent(),
        }
    }
}

impl GatewayConfig {
    /// Default configuration with `API_TIMEOUT` and `DEFAULT_MEP_RATE`
    /// environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(timeout) = env_parse::<u64>("API_TIMEOUT") {
            config.timeout_secs = timeout;
        }
        if let Some(rate) = env_parse::<f64>("DEFAULT_MEP_RATE") {
            config.fallback_rate = rate;
        }
        config
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reference-rate endpoint.
    pub fn rate_url(&self) -> String {
        format!("{}/mep", self.base_url.trim_end_matches('/'))
    }

    /// Notes (Lecap) endpoint.
    pub fn notes_url(&self) -> String {
        format!("{}/arg_notes", self.base_url.trim_end_matches('/'))
    }

    /// Bonds endpoint.
    pub fn bonds_url(&self) -> String {
        format!("{}/arg_bonds", self.base_url.trim_end_matches('/'))
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_derive_from_base_url() {
        let config = GatewayConfig { base_url: "http://127.0.0.1:9/".to_string(), ..Default::default() };
        assert_eq!(config.rate_url(), "http://127.0.0.1:9/mep");
        assert_eq!(config.notes_url(), "http://127.0.0.1:9/arg_notes");
        assert_eq!(config.bonds_url(), "http://127.0.0.1:9/arg_bonds");
    }

    #[test]
    fn defaults_match_production_feed() {
        let config = GatewayConfig::default();
        assert_eq!(config.rate_url(), "https://data912.com/live/mep");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.fallback_rate, 1200.0);
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let config: GatewayConfig = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.base_url, default_base_url());
    }
}
