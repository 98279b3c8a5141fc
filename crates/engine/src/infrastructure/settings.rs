//! Environment-driven settings.
//!
//! Everything is read once at startup. Lookups go through a closure so tests
//! can supply variables without touching the process environment.

use std::time::Duration;

/// Required: GraphQL endpoint of the CMS.
pub const CMS_GRAPHQL_URL: &str = "CMS_GRAPHQL_URL";
/// Optional: bearer token for the CMS.
pub const CMS_TOKEN: &str = "CMS_TOKEN";
/// Optional: request timeout in seconds. Unset leaves the transport default.
pub const CMS_TIMEOUT_SECS: &str = "CMS_TIMEOUT_SECS";
/// Optional: cap applied to list queries (range: 1-1000).
pub const STORY_LIST_LIMIT: &str = "STORY_LIST_LIMIT";

const LIST_LIMIT_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

/// Errors that prevent the engine from starting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// All engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub cms: CmsClientConfig,
    pub stories: StoryListSettings,
    pub server: ServerSettings,
}

/// Connection settings for the CMS client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsClientConfig {
    pub endpoint: String,
    pub token: Option<String>,
    pub timeout: Option<Duration>,
}

/// Tuning for list queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryListSettings {
    /// `None` leaves the CMS default page size in effect.
    pub list_limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        Ok(Self {
            cms: CmsClientConfig::from_lookup(&lookup)?,
            stories: StoryListSettings::from_lookup(&lookup),
            server: ServerSettings::from_lookup(&lookup),
        })
    }
}

impl CmsClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: None,
            timeout: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let endpoint = non_empty(lookup(CMS_GRAPHQL_URL))
            .ok_or(SettingsError::Missing(CMS_GRAPHQL_URL))?;
        let token = non_empty(lookup(CMS_TOKEN));
        let timeout = match non_empty(lookup(CMS_TIMEOUT_SECS)) {
            Some(val) => {
                let secs = val.parse::<u64>().map_err(|_| SettingsError::Invalid {
                    name: CMS_TIMEOUT_SECS,
                    value: val.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            endpoint,
            token,
            timeout,
        })
    }
}

impl StoryListSettings {
    /// Invalid limits are logged and ignored rather than failing startup.
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let Some(val) = non_empty(lookup(STORY_LIST_LIMIT)) else {
            return Self::default();
        };

        match val.parse::<u32>() {
            Ok(limit) if LIST_LIMIT_RANGE.contains(&limit) => {
                tracing::info!(limit, "Applied STORY_LIST_LIMIT environment variable");
                Self {
                    list_limit: Some(limit),
                }
            }
            Ok(limit) => {
                tracing::warn!(limit, "STORY_LIST_LIMIT out of range [1, 1000], ignoring");
                Self::default()
            }
            Err(_) => {
                tracing::warn!(val = %val, "STORY_LIST_LIMIT is not a valid u32, ignoring");
                Self::default()
            }
        }
    }
}

impl ServerSettings {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let host = non_empty(lookup("SERVER_HOST")).unwrap_or(defaults.host);
        let port = non_empty(lookup("SERVER_PORT"))
            .or_else(|| non_empty(lookup("PORT")))
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        Self { host, port }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
