// ============================================================================
// CONFIG - Environment based settings for the TMDB suite
// ============================================================================

use std::fmt;

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.themoviedb.org/4";
pub const DEFAULT_WEB_URL: &str = "https://www.themoviedb.org";

pub const ENV_API_URL: &str = "TMDB_API_URL";
pub const ENV_WEB_URL: &str = "TMDB_WEB_URL";
pub const ENV_USERNAME: &str = "TMDB_USERNAME";
pub const ENV_PASSWORD: &str = "TMDB_PASSWORD";
pub const ENV_READ_ACCESS_TOKEN: &str = "TMDB_READ_ACCESS_TOKEN";

/// Settings for one test run.
///
/// `api_url` is the v4 API host, `web_url` the website that serves the login
/// form and the token approval page.
#[derive(Clone)]
pub struct Config {
    pub api_url: String,
    pub web_url: String,
    pub username: String,
    pub password: String,
    pub read_access_token: String,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| -> Result<String, ConfigError> {
            match lookup(var) {
                None => Err(ConfigError::MissingVar(var)),
                Some(v) if v.trim().is_empty() => Err(ConfigError::EmptyVar(var)),
                Some(v) => Ok(v),
            }
        };
        let base_url = |var: &'static str, default: &str| -> Result<String, ConfigError> {
            let value = lookup(var)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string());
            Url::parse(&value).map_err(|_| ConfigError::InvalidUrl {
                var,
                value: value.clone(),
            })?;
            Ok(value.trim_end_matches('/').to_string())
        };

        Ok(Self {
            api_url: base_url(ENV_API_URL, DEFAULT_API_URL)?,
            web_url: base_url(ENV_WEB_URL, DEFAULT_WEB_URL)?,
            username: required(ENV_USERNAME)?,
            password: required(ENV_PASSWORD)?,
            read_access_token: required(ENV_READ_ACCESS_TOKEN)?,
        })
    }

    pub fn api(&self, path: &str) -> String {
        join_url(&self.api_url, path)
    }

    pub fn web(&self, path: &str) -> String {
        join_url(&self.web_url, path)
    }
}

// Absolute URLs pass through untouched
pub(crate) fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("web_url", &self.web_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("read_access_token", &"<redacted>")
            .finish()
    }
}
