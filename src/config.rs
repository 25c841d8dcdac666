//! Service configuration
//!
//! Loaded from a JSON file. Every field has a default and a missing file
//! means "all defaults", so a bare `contest-vote serve` works out of the box.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Duration;
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::auth::JwtConfig;
use crate::http_server::HttpServerConfig;

/// Environment variable overriding the token signing secret
pub const SECRET_ENV: &str = "SECRET_KEY";

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the JSON documents
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub http: HttpServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

/// Token settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Signing secret; `SECRET_KEY` takes precedence
    #[serde(default)]
    pub jwt_secret: Option<String>,

    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,

    #[serde(default = "default_issuer")]
    pub issuer: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_token_ttl_days() -> i64 {
    7
}

fn default_issuer() -> String {
    "contest-vote".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: default_token_ttl_days(),
            issuer: default_issuer(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            http: HttpServerConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults if it is absent
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.auth.token_ttl_days <= 0 {
            return Err(ConfigError::Invalid(
                "auth.token_ttl_days must be > 0".to_string(),
            ));
        }

        if self.http.port == 0 {
            return Err(ConfigError::Invalid("http.port must be > 0".to_string()));
        }

        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("data_dir must not be empty".to_string()));
        }

        Ok(())
    }

    /// Signing secret: environment, then config, then a random one.
    ///
    /// A random secret invalidates every token on restart.
    pub fn resolve_secret(&self) -> String {
        if let Ok(secret) = env::var(SECRET_ENV) {
            if !secret.is_empty() {
                return secret;
            }
        }

        if let Some(secret) = self.auth.jwt_secret.as_ref().filter(|s| !s.is_empty()) {
            return secret.clone();
        }

        warn!(
            "no {} or auth.jwt_secret configured, using a random secret; tokens will not survive a restart",
            SECRET_ENV
        );
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(48)
            .map(char::from)
            .collect()
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.resolve_secret(),
            access_token_ttl: Duration::days(self.auth.token_ttl_days),
            issuer: self.auth.issuer.clone(),
            audience: self.auth.issuer.clone(),
        }
    }
}
