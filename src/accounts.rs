use std::collections::BTreeMap;
use std::fmt;

use crate::error::{LedgerError, Result};

/// Transforms `expenses.misc.rent` into `expenses.misc`. Top-level accounts
/// have the empty string as parent.
pub fn get_parent_account(account: &str) -> &str {
    match account.rfind('.') {
        Some(index) => &account[..index],
        None => "",
    }
}

/// `account` followed by each of its ancestors, nearest first.
pub fn ancestry(account: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(Some(account), |current: &&str| {
        Some(get_parent_account(*current))
    })
    .take_while(|path| !path.is_empty())
}

/// Running balances keyed by full account path, kept in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accounts {
    balances: BTreeMap<String, i64>,
}

impl Accounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `account` and every ancestor of it, creating missing
    /// entries at zero.
    pub fn post(&mut self, account: &str, amount: i64) -> Result<()> {
        for path in ancestry(account) {
            self.add(path, amount)?;
        }
        Ok(())
    }

    fn add(&mut self, account: &str, amount: i64) -> Result<()> {
        let balance = self.balances.entry(account.to_string()).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::BalanceOverflow(account.to_string()))?;
        Ok(())
    }

    pub fn balance(&self, account: &str) -> Option<i64> {
        self.balances.get(account).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.balances
            .iter()
            .map(|(account, balance)| (account.as_str(), *balance))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

/// One `account: balance` line per account.
impl fmt::Display for Accounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (account, balance) in self.iter() {
            writeln!(f, "{}: {}", account, balance)?;
        }
        Ok(())
    }
}
