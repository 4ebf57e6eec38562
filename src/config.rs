use serde::{Deserialize, Serialize};

/// Desktop browser identity used for regular page requests that carry no
/// user agent of their own. API requests use their own fixed identity.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36";

/// Settings for the transport and the engine bootstrap.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,
    /// Pre-accept the upstream consent interstitial at engine bootstrap.
    #[serde(default = "default_consent_accepted")]
    pub consent_accepted: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
            consent_accepted: default_consent_accepted(),
        }
    }
}

impl ServiceConfig {
    /// Load settings from a TOML file. Missing fields fall back to the
    /// built-in defaults.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    30
}

fn default_read_timeout_secs() -> u64 {
    60
}

fn default_consent_accepted() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_transport_contract() {
        let config = ServiceConfig::default();
        assert_eq!(config.connect_timeout_secs, 30);
        assert_eq!(config.read_timeout_secs, 60);
        assert!(config.consent_accepted);
        assert!(config.user_agent.contains("Chrome/121"));
    }

    #[test]
    fn partial_toml_falls_back_per_field() {
        let config: ServiceConfig = toml::from_str("read_timeout_secs = 90").unwrap();
        assert_eq!(config.read_timeout_secs, 90);
        assert_eq!(config.connect_timeout_secs, 30);
        assert!(config.consent_accepted);
    }
}
