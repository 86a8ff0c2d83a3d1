use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single spending entry owned by exactly one account.
///
/// The owning account is fixed at creation; no transfer-of-ownership
/// operation exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub owner: Uuid,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The caller-settable fields of an expense, shared by create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseDraft {
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            amount,
            date,
        }
    }
}

impl Expense {
    /// Creates a new expense owned by `owner`.
    pub fn new(owner: Uuid, draft: ExpenseDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            title: draft.title,
            category: draft.category,
            amount: draft.amount,
            date: draft.date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the caller-settable fields, keeping id and owner.
    pub fn apply(&mut self, draft: ExpenseDraft) {
        self.title = draft.title;
        self.category = draft.category;
        self.amount = draft.amount;
        self.date = draft.date;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
