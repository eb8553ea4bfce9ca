use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.vultr.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the provider's REST API.
#[derive(Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

fn default_user_agent() -> String {
    format!("vcloud/{}", env!("CARGO_PKG_VERSION"))
}

/// Load API configuration from environment variables
pub fn load_api_config() -> Result<ApiConfig> {
    load_api_config_from(|key| env::var(key).ok())
}

// Both the tool-specific and the provider-wide variable names are accepted.
fn lookup_pair<F>(lookup: &F, primary_key: &str, secondary_key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    non_blank(primary_key).or_else(|| non_blank(secondary_key))
}

fn load_api_config_from<F>(lookup: F) -> Result<ApiConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key =
        lookup_pair(&lookup, "VCLOUD_API_KEY", "VULTR_API_KEY").ok_or(Error::MissingApiKey)?;

    let mut config = ApiConfig::new(api_key.trim());

    if let Some(endpoint) = lookup_pair(&lookup, "VCLOUD_API_ENDPOINT", "VULTR_API_ENDPOINT") {
        config.endpoint = endpoint;
    }

    if let Some(raw) = lookup("VCLOUD_TIMEOUT") {
        let secs = raw.trim().parse::<u64>().map_err(|_| Error::InvalidEnvVar {
            key: "VCLOUD_TIMEOUT".to_string(),
            value: raw.clone(),
        })?;
        config.timeout = Duration::from_secs(secs);
    }

    Ok(config)
}
