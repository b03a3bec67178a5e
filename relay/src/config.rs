use serde::Deserialize;
use std::env;
use thiserror::Error;

use crate::llm::DEFAULT_API_URL;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ANTHROPIC_API_KEY is not set")]
    MissingApiKey,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the Messages API.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    pub api_key: Option<String>,
    /// Full endpoint URL, including the `/v1/messages` path.
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or("PORT", 8000),
            },
            upstream: UpstreamConfig {
                api_key: env::var("ANTHROPIC_API_KEY").ok(),
                api_url: env::var("ANTHROPIC_API_URL")
                    .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Rejects configurations the relay cannot serve a single request with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.upstream.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::MissingApiKey),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
