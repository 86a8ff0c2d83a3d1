use std::{env, fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{ConfigError, TOKEN_SECRET_ENV};

pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Startup settings for the identity core and storage backend.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Signing secret for session tokens. The environment override takes
    /// precedence; see [`Config::resolved_secret`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_secret: Option<String>,
    #[serde(default = "Config::default_token_ttl_hours")]
    pub token_ttl_hours: i64,
    /// Snapshot file for the JSON storage backend. Defaults to
    /// `spendbook.json` under the base directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_secret: None,
            token_ttl_hours: Self::default_token_ttl_hours(),
            data_file: None,
        }
    }
}

impl Config {
    pub fn default_token_ttl_hours() -> i64 {
        DEFAULT_TOKEN_TTL_HOURS
    }

    /// Resolves the signing secret, preferring the environment variable
    /// over the value stored in the config file.
    pub fn resolved_secret(&self) -> Result<String, ConfigError> {
        if let Ok(secret) = env::var(TOKEN_SECRET_ENV) {
            if !secret.is_empty() {
                return Ok(secret);
            }
        }
        self.token_secret
            .clone()
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingSecret)
    }
}

// Keeps the signing secret out of log output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token_secret", &self.token_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_hours", &self.token_ttl_hours)
            .field("data_file", &self.data_file)
            .finish()
    }
}
