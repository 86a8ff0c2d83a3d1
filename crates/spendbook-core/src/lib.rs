//! spendbook-core
//!
//! Identity and authorization core for the expense manager: credential
//! registration and login, ownership enforcement, owner-scoped expense
//! operations, and summary aggregation. Persistence is delegated to
//! injected storage collaborators; transport concerns stay outside.

pub mod access;
pub mod auth_service;
pub mod error;
pub mod expense_service;
pub mod storage;
pub mod summary;

pub use access::{authorize, ensure_owner, Access};
pub use auth_service::AuthService;
pub use error::{CoreError, CoreResult};
pub use expense_service::ExpenseService;
pub use summary::summarize;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("spendbook_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

#[cfg(test)]
mod test_store;
