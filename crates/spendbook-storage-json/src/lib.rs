//! Filesystem-backed JSON persistence for accounts and expenses.
//!
//! A single snapshot file holds every record. All mutations run under one
//! write lock and rewrite the snapshot atomically (tmp file + rename),
//! which keeps any find-then-save sequence on a record atomic with
//! respect to concurrent callers.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use spendbook_core::{
    storage::{AccountStore, ExpenseStore},
    CoreError,
};
use spendbook_domain::{Account, DateRange, Expense};

const TMP_SUFFIX: &str = "tmp";

/// On-disk snapshot of every stored record.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    accounts: Vec<Account>,
    expenses: Vec<Expense>,
}

/// Single-file JSON storage implementing both store contracts.
pub struct JsonStorage {
    path: PathBuf,
    state: RwLock<Snapshot>,
}

impl JsonStorage {
    /// Opens the snapshot at `path`, starting empty when the file does
    /// not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let state = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))?
        } else {
            Snapshot::default()
        };
        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Snapshot>, CoreError> {
        self.state
            .read()
            .map_err(|_| CoreError::Storage("storage lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Snapshot>, CoreError> {
        self.state
            .write()
            .map_err(|_| CoreError::Storage("storage lock poisoned".into()))
    }

    fn persist(&self, snapshot: &Snapshot) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl AccountStore for JsonStorage {
    fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, CoreError> {
        let state = self.read()?;
        Ok(state
            .accounts
            .iter()
            .find(|account| account.email == email)
            .cloned())
    }

    fn save_account(&self, account: &Account) -> Result<(), CoreError> {
        let mut state = self.write()?;
        if let Some(existing) = state.accounts.iter_mut().find(|a| a.id == account.id) {
            *existing = account.clone();
        } else {
            state.accounts.push(account.clone());
        }
        self.persist(&state)
    }
}

impl ExpenseStore for JsonStorage {
    fn find_expense(&self, id: Uuid) -> Result<Option<Expense>, CoreError> {
        let state = self.read()?;
        Ok(state
            .expenses
            .iter()
            .find(|expense| expense.id == id)
            .cloned())
    }

    fn find_expenses_by_owner(&self, owner: Uuid) -> Result<Vec<Expense>, CoreError> {
        let state = self.read()?;
        let mut rows: Vec<Expense> = state
            .expenses
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
        let state = self.read()?;
        let mut rows: Vec<Expense> = state
            .expenses
            .iter()
            .filter(|expense| expense.owner == owner && range.contains(expense.date))
            .cloned()
            .collect();
        rows.sort_by_key(|expense| expense.date);
        Ok(rows)
    }

    fn save_expense(&self, expense: &Expense) -> Result<(), CoreError> {
        let mut state = self.write()?;
        if let Some(existing) = state.expenses.iter_mut().find(|e| e.id == expense.id) {
            *existing = expense.clone();
        } else {
            state.expenses.push(expense.clone());
        }
        self.persist(&state)
    }

    fn delete_expense(&self, id: Uuid) -> Result<(), CoreError> {
        let mut state = self.write()?;
        state.expenses.retain(|expense| expense.id != id);
        self.persist(&state)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
