// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.
//!
//! The FatSecret consumer key/secret are required: without them no request
//! can be signed, so startup fails immediately rather than at call time.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// FatSecret OAuth 1.0a consumer key
    pub consumer_key: String,
    /// FatSecret OAuth 1.0a consumer secret
    pub consumer_secret: String,
    /// Public base URL of this service (used to build the OAuth callback)
    pub app_url: String,
    /// Frontend URL for post-auth redirects
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let app_url = env::var("APP_URL").map_err(|_| ConfigError::Missing("APP_URL"))?;

        Ok(Self {
            consumer_key: env::var("FATSECRET_CONSUMER_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FATSECRET_CONSUMER_KEY"))?,
            consumer_secret: env::var("FATSECRET_CONSUMER_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FATSECRET_CONSUMER_SECRET"))?,
            frontend_url: env::var("FRONTEND_URL").unwrap_or_else(|_| app_url.clone()),
            app_url,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
        })
    }

    /// Default config for tests only.
    pub fn test_default() -> Self {
        Self {
            consumer_key: "test_consumer_key".to_string(),
            consumer_secret: "test_consumer_secret".to_string(),
            app_url: "http://localhost:8080".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
