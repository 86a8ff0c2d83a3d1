use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("no data directory available for this platform")]
    NoDataDir,

    #[error("no token signing secret configured")]
    MissingSecret,
}
