//! spendbook-auth
//!
//! Credential hashing and session token primitives. No storage and no
//! request handling; the core services wire these into their flows.

pub mod password;
pub mod token;

pub use password::{hash_password, verify_password, PasswordError};
pub use token::{Claims, TokenError, TokenService, DEFAULT_TTL_HOURS};
