//! Server configuration from environment variables

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Allowed CORS origin
    pub client_url: String,
    /// Narrative generation is disabled when unset
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub geocoder_url: String,
    pub geocoder_user_agent: String,
    pub http_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            client_url: DEFAULT_CLIENT_URL.to_string(),
            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            geocoder_user_agent: default_user_agent(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid PORT '{}': {}", v, e))?,
            None => defaults.port,
        };

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(
                v.parse::<u64>()
                    .map_err(|e| anyhow::anyhow!("Invalid HTTP_TIMEOUT_SECS '{}': {}", v, e))?,
            ),
            None => defaults.http_timeout,
        };

        Ok(Self {
            port,
            client_url: get("CLIENT_URL").unwrap_or(defaults.client_url),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            geocoder_url: get("GEOCODER_URL").unwrap_or(defaults.geocoder_url),
            geocoder_user_agent: get("GEOCODER_USER_AGENT").unwrap_or(defaults.geocoder_user_agent),
            http_timeout,
        })
    }
}

fn default_user_agent() -> String {
    format!("heat-advisor/{}", env!("CARGO_PKG_VERSION"))
}
