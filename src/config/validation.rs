//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use crate::utils::errors::{YallaNowError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_feed_config(&settings.feed)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend endpoints and client options
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    validate_base_url("Events", &config.events_base_url)?;
    validate_base_url("Groups", &config.groups_base_url)?;
    validate_base_url("Feed", &config.feed_base_url)?;
    validate_base_url("Interactions", &config.interactions_base_url)?;

    if config.timeout_seconds == Some(0) {
        return Err(YallaNowError::Config(
            "API timeout must be greater than 0 when set".to_string()
        ));
    }

    if config.user_agent.is_empty() {
        return Err(YallaNowError::Config(
            "User agent is required".to_string()
        ));
    }

    Ok(())
}

fn validate_base_url(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(YallaNowError::Config(format!("{} base URL is required", name)));
    }

    let url = Url::parse(value)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(YallaNowError::Config(format!(
            "{} base URL must use http or https, got: {}",
            name,
            url.scheme()
        )));
    }

    Ok(())
}

/// Validate recommendation feed configuration
fn validate_feed_config(config: &super::FeedConfig) -> Result<()> {
    if config.default_count == 0 {
        return Err(YallaNowError::Config(
            "Feed default count must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(YallaNowError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(YallaNowError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
