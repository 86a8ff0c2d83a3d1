//! spendbook-config
//!
//! Process-wide startup configuration: token signing secret, token TTL,
//! and storage location. Read once at startup and never mutated.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;

/// Environment variable that overrides the configured signing secret so
/// it never has to live on disk.
pub const TOKEN_SECRET_ENV: &str = "SPENDBOOK_TOKEN_SECRET";
