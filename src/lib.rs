//! hfinance - balances for a plain-text, dot-separated chart of accounts.
//!
//! Input is a series of blank-line separated transaction blocks:
//!
//! ```text
//! 1/1/2024: groceries
//!   income: -500
//!   expenses.food: 500
//! ```
//!
//! Each block must sum to zero and blocks must be in date order. Posting to
//! `expenses.food` also adds to `expenses`.

pub mod accounts;
pub mod config;
pub mod date;
pub mod error;
pub mod processor;
pub mod transaction;
mod util;

pub use accounts::{get_parent_account, Accounts};
pub use config::DateRange;
pub use date::{Date, DateField, DateFieldError};
pub use error::LedgerError;
pub use processor::{process_hfinance_file, Report};
pub use transaction::{process_transaction, Posting, Transaction};
