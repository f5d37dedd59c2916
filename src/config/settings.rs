//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
}

/// Backend endpoints and HTTP client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Events and participants service
    pub events_base_url: String,
    /// Groups and group members service
    pub groups_base_url: String,
    /// Recommendation backend
    pub feed_base_url: String,
    /// Interaction (detail view / purchase) sink of the recommendation backend
    pub interactions_base_url: String,
    /// Client-level timeout; unset means requests never time out here
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

/// Authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    pub id_token: Option<String>,
}

/// Recommendation feed configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    pub default_count: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_file("config")
    }

    /// Load settings from the given file (extension optional) layered over
    /// defaults and `YALLANOW__*` environment variables
    pub fn from_file(name: &str) -> Result<Self, config::ConfigError> {
        let defaults = config::Config::try_from(&Settings::default())?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix("YALLANOW").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::YallaNowError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                events_base_url: "http://localhost:8080/events".to_string(),
                groups_base_url: "http://localhost:8081/groups".to_string(),
                feed_base_url: "http://localhost:8082/recommendations".to_string(),
                interactions_base_url: "http://localhost:8082/interactions".to_string(),
                timeout_seconds: None,
                user_agent: "YallaNow-Client/1.0".to_string(),
            },
            auth: AuthConfig::default(),
            feed: FeedConfig { default_count: 10 },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
