use tracing::trace;

use crate::{
    accounts::Accounts,
    date::{Date, DateFieldError},
    error::{LedgerError, Result},
    util::{complete, signed, split_char},
};

/// The header line of a block: `d/m/y: description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction<'a> {
    pub date: Date,
    pub description: &'a str,
}

impl<'a> Transaction<'a> {
    /// Splits the header once on `:`. Date diagnostics are passed back to the
    /// caller rather than failing the header.
    pub fn parse(header: &'a str) -> (Transaction<'a>, Vec<DateFieldError>) {
        let (date_str, description) = split_char(header, ':');
        let (date, errors) = Date::parse(date_str);
        (
            Transaction {
                date,
                description: description.trim(),
            },
            errors,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting<'a> {
    pub account: &'a str,
    pub amount: i64,
}

/// `account.path: amount`, split on the first `:`.
pub fn posting(line: &str) -> Result<Posting<'_>> {
    let (account, amount_str) = split_char(line, ':');
    let amount_str = amount_str.trim();
    let amount = complete(amount_str, signed)
        .ok_or_else(|| LedgerError::InvalidAmount(amount_str.to_string()))?;
    Ok(Posting {
        account: account.trim(),
        amount,
    })
}

/// Every non-blank line of a transaction body as a posting.
pub fn postings(body: &str) -> Result<Vec<Posting<'_>>> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(posting)
        .collect()
}

/// Checks that the postings in `body` sum to zero, then folds each of them
/// into `accounts` with roll-up. Nothing is posted if the check fails.
pub fn process_transaction(
    accounts: &mut Accounts,
    transaction: &Transaction<'_>,
    body: &str,
) -> Result<()> {
    let postings = postings(body)?;

    let total: i128 = postings.iter().map(|p| i128::from(p.amount)).sum();
    if total != 0 {
        return Err(LedgerError::Unbalanced {
            date: transaction.date,
            description: transaction.description.to_string(),
            total,
        });
    }

    for Posting { account, amount } in postings {
        trace!(account, amount, "posting");
        accounts.post(account, amount)?;
    }
    Ok(())
}
