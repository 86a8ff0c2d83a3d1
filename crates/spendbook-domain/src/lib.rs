//! spendbook-domain
//!
//! Pure domain models (Account, Expense, DateRange, Summary).
//! No I/O, no storage, no transport. Only data types and validation.

pub mod account;
pub mod expense;
pub mod range;
pub mod summary;

pub use account::*;
pub use expense::*;
pub use range::*;
pub use summary::*;
