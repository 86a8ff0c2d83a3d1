//! Registration and login orchestration over the credential store.

use spendbook_auth::{hash_password, verify_password, TokenService};
use spendbook_domain::Account;

use crate::{storage::AccountStore, CoreError};

/// Stateless authentication flows; every call carries its collaborators.
pub struct AuthService;

impl AuthService {
    /// Registers a new account and returns a session token for it.
    ///
    /// Performs exactly one storage write; a duplicate identity leaves
    /// the store untouched.
    pub fn register(
        store: &dyn AccountStore,
        tokens: &TokenService,
        email: &str,
        password: &str,
    ) -> Result<String, CoreError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CoreError::Validation("email must not be empty".into()));
        }
        if password.is_empty() {
            return Err(CoreError::Validation("password must not be empty".into()));
        }
        if store.find_account_by_email(email)?.is_some() {
            return Err(CoreError::DuplicateIdentity);
        }
        let hash = hash_password(password).map_err(|_| CoreError::Hashing)?;
        let account = Account::new(email, hash);
        store.save_account(&account)?;
        tracing::info!(account = %account.id, "account registered");
        Ok(tokens.issue(email)?)
    }

    /// Authenticates an existing account and returns a fresh session token.
    ///
    /// Unknown email and wrong password yield the identical error so the
    /// caller cannot probe which accounts exist. Performs no writes.
    pub fn login(
        store: &dyn AccountStore,
        tokens: &TokenService,
        email: &str,
        password: &str,
    ) -> Result<String, CoreError> {
        let Some(account) = store.find_account_by_email(email.trim())? else {
            return Err(CoreError::InvalidCredentials);
        };
        if !verify_password(password, &account.password_hash) {
            tracing::info!(account = %account.id, "login rejected");
            return Err(CoreError::InvalidCredentials);
        }
        Ok(tokens.issue(&account.email)?)
    }
}
