//! In-memory store backing the service tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use uuid::Uuid;

use spendbook_domain::{Account, DateRange, Expense};

use crate::{
    storage::{AccountStore, ExpenseStore},
    CoreError,
};

#[derive(Default)]
pub struct MemoryStore {
    accounts: Mutex<Vec<Account>>,
    expenses: Mutex<Vec<Expense>>,
    account_writes: AtomicUsize,
}

impl MemoryStore {
    pub fn account_by_email(&self, email: &str) -> Option<Account> {
        self.accounts
            .lock()
            .unwrap()
            .iter()
            .find(|account| account.email == email)
            .cloned()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().unwrap().len()
    }

    pub fn account_writes(&self) -> usize {
        self.account_writes.load(Ordering::SeqCst)
    }
}

impl AccountStore for MemoryStore {
    fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, CoreError> {
        Ok(self.account_by_email(email))
    }

    fn save_account(&self, account: &Account) -> Result<(), CoreError> {
        self.account_writes.fetch_add(1, Ordering::SeqCst);
        let mut accounts = self.accounts.lock().unwrap();
        if let Some(existing) = accounts.iter_mut().find(|a| a.id == account.id) {
            *existing = account.clone();
        } else {
            accounts.push(account.clone());
        }
        Ok(())
    }
}

impl ExpenseStore for MemoryStore {
    fn find_expense(&self, id: Uuid) -> Result<Option<Expense>, CoreError> {
        Ok(self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .find(|expense| expense.id == id)
            .cloned())
    }

    fn find_expenses_by_owner(&self, owner: Uuid) -> Result<Vec<Expense>, CoreError> {
        let mut rows: Vec<Expense> = self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|expense| expense.owner == owner)
            .cloned()
            .collect();
        rows.sort_by_key(|expense| expense.date);
        Ok(rows)
    }

    fn find_expenses_in_range(
        &self,
        owner: Uuid,
        range: &DateRange,
    ) -> Result<Vec<Expense>, CoreError> {
        let mut rows: Vec<Expense> = self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|expense| expense.owner == owner && range.contains(expense.date))
            .cloned()
            .collect();
        rows.sort_by_key(|expense| expense.date);
        Ok(rows)
    }

    fn save_expense(&self, expense: &Expense) -> Result<(), CoreError> {
        let mut expenses = self.expenses.lock().unwrap();
        if let Some(existing) = expenses.iter_mut().find(|e| e.id == expense.id) {
            *existing = expense.clone();
        } else {
            expenses.push(expense.clone());
        }
        Ok(())
    }

    fn delete_expense(&self, id: Uuid) -> Result<(), CoreError> {
        self.expenses.lock().unwrap().retain(|expense| expense.id != id);
        Ok(())
    }
}
