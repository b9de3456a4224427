//! Host configuration parsed from environment variables.

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error("invalid JARVIS_API_URL (expected http:// or https://): {0}")]
    InvalidApiUrl(String),

    /// The proxy's HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the backend that serves `/api/n8n/*` and `/api/vision/*`.
    /// `None` leaves the proxy routes answering 502.
    pub api_base_url: Option<String>,
    pub timeouts: ApiTimeouts,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `JARVIS_API_URL`: backend base URL, trailing `/` trimmed
    /// - `JARVIS_API_TIMEOUT_SECS`: default 30
    /// - `JARVIS_API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `JARVIS_API_URL` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` or `JARVIS_API_URL` is malformed.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base_url = match var("JARVIS_API_URL").map(|raw| raw.trim().to_owned()) {
            None => None,
            Some(raw) if raw.is_empty() => None,
            Some(raw) => {
                if !(raw.starts_with("http://") || raw.starts_with("https://")) {
                    return Err(ConfigError::InvalidApiUrl(raw));
                }
                Some(raw.trim_end_matches('/').to_owned())
            }
        };

        let timeouts = ApiTimeouts {
            request_secs: parse_u64(var("JARVIS_API_TIMEOUT_SECS"), DEFAULT_API_TIMEOUT_SECS),
            connect_secs: parse_u64(var("JARVIS_API_CONNECT_TIMEOUT_SECS"), DEFAULT_API_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, api_base_url, timeouts })
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
