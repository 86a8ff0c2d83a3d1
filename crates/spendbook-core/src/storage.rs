//! Contracts the core requires from its persistence collaborator.

use uuid::Uuid;

use spendbook_domain::{Account, DateRange, Expense};

use crate::CoreError;

/// Account persistence as seen by the authentication core.
pub trait AccountStore: Send + Sync {
    /// Looks up an account by its exact email (case-sensitive as stored).
    fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, CoreError>;
    fn save_account(&self, account: &Account) -> Result<(), CoreError>;
}

/// Expense persistence, queried by owner and date.
///
/// Implementations must keep a single record's find-then-save sequence
/// atomic with respect to that record under concurrent callers; the core
/// performs no locking of its own.
pub trait ExpenseStore: Send + Sync {
    fn find_expense(&self, id: Uuid) -> Result<Option<Expense>, CoreError>;
    fn find_expenses_by_owner(&self, owner: Uuid) -> Result<Vec<Expense>, CoreError>;
    fn find_expenses_in_range(
        &self,
        owner: Uuid,
        range: &DateRange,
    ) -> Result<Vec<Expense>, CoreError>;
    fn save_expense(&self, expense: &Expense) -> Result<(), CoreError>;
    fn delete_expense(&self, id: Uuid) -> Result<(), CoreError>;
}
