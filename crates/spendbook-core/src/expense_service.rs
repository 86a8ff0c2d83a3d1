//! Owner-scoped expense operations.
//!
//! Single-record operations fetch first, then run the ownership guard;
//! listing and creation scope the storage query to the caller instead.

use uuid::Uuid;

use spendbook_domain::{DateRange, Expense, ExpenseDraft, Summary};

use crate::{access, storage::ExpenseStore, summary, CoreError};

pub struct ExpenseService;

impl ExpenseService {
    /// Records a new expense owned by the caller.
    pub fn create(
        store: &dyn ExpenseStore,
        caller: Uuid,
        draft: ExpenseDraft,
    ) -> Result<Expense, CoreError> {
        validate_draft(&draft)?;
        let expense = Expense::new(caller, draft);
        store.save_expense(&expense)?;
        tracing::debug!(expense = %expense.id, "expense recorded");
        Ok(expense)
    }

    /// Fetches a single expense, enforcing ownership before returning it.
    pub fn get(store: &dyn ExpenseStore, caller: Uuid, id: Uuid) -> Result<Expense, CoreError> {
        let expense = store
            .find_expense(id)?
            .ok_or(CoreError::ExpenseNotFound(id))?;
        access::ensure_owner(caller, expense.owner)?;
        Ok(expense)
    }

    /// Overwrites the caller-settable fields of an owned expense.
    ///
    /// Id and owner never change.
    pub fn update(
        store: &dyn ExpenseStore,
        caller: Uuid,
        id: Uuid,
        draft: ExpenseDraft,
    ) -> Result<Expense, CoreError> {
        validate_draft(&draft)?;
        let mut expense = Self::get(store, caller, id)?;
        expense.apply(draft);
        store.save_expense(&expense)?;
        Ok(expense)
    }

    /// Deletes an owned expense.
    pub fn delete(store: &dyn ExpenseStore, caller: Uuid, id: Uuid) -> Result<(), CoreError> {
        let expense = Self::get(store, caller, id)?;
        store.delete_expense(expense.id)?;
        tracing::debug!(expense = %id, "expense deleted");
        Ok(())
    }

    /// Lists every expense owned by the caller.
    pub fn list(store: &dyn ExpenseStore, caller: Uuid) -> Result<Vec<Expense>, CoreError> {
        store.find_expenses_by_owner(caller)
    }

    /// Lists the caller's expenses within an inclusive date range.
    pub fn list_range(
        store: &dyn ExpenseStore,
        caller: Uuid,
        range: &DateRange,
    ) -> Result<Vec<Expense>, CoreError> {
        store.find_expenses_in_range(caller, range)
    }

    /// Aggregates the caller's expenses within the range.
    pub fn summary(
        store: &dyn ExpenseStore,
        caller: Uuid,
        range: &DateRange,
    ) -> Result<Summary, CoreError> {
        let expenses = store.find_expenses_in_range(caller, range)?;
        Ok(summary::summarize(&expenses))
    }
}

fn validate_draft(draft: &ExpenseDraft) -> Result<(), CoreError> {
    if draft.title.trim().is_empty() {
        return Err(CoreError::Validation("expense title must not be empty".into()));
    }
    if !draft.amount.is_finite() || draft.amount < 0.0 {
        return Err(CoreError::Validation(
            "expense amount must be a non-negative number".into(),
        ));
    }
    Ok(())
}
