use thiserror::Error;

use crate::date::Date;

/// Conditions that abort a run. No balances are reported once one occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("invalid amount: '{0}'")]
    InvalidAmount(String),

    #[error("transaction '{description}' on {date} does not add to 0, but instead {total}")]
    Unbalanced {
        date: Date,
        description: String,
        total: i128,
    },

    #[error("dates not chronological: {date} comes after {previous}")]
    NotChronological { previous: Date, date: Date },

    #[error("balance of account '{0}' overflowed")]
    BalanceOverflow(String),
}

pub type Result<T, E = LedgerError> = std::result::Result<T, E>;
