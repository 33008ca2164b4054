use tracing::{debug, warn};

use crate::{
    accounts::Accounts,
    config::DateRange,
    date::Date,
    error::{LedgerError, Result},
    transaction::{process_transaction, Transaction},
    util::split_char,
};

/// Outcome of a complete pass over the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub accounts: Accounts,
    /// Transactions folded into `accounts`.
    pub processed: usize,
    /// Transactions dated before the start of the range.
    pub skipped: usize,
    /// Whether a transaction past the end of the range stopped the pass.
    pub cut_off: bool,
}

/// Transaction blocks separated by a blank line, trimmed. Blocks that are
/// empty after trimming are dropped.
pub fn blocks(input: &str) -> impl Iterator<Item = &str> {
    input
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
}

/// Runs the whole ledger through the pipeline. Any error discards every
/// balance accumulated so far.
pub fn process_hfinance_file(input: &str, range: &DateRange) -> Result<Report> {
    let mut report = Report::default();
    let mut last_date = Date::MIN;

    for block in blocks(input) {
        let (header, body) = split_char(block, '\n');
        let (transaction, errors) = Transaction::parse(header);
        for error in errors {
            warn!("{}", error);
        }
        if transaction.date.to_calendar_date().is_none() {
            warn!(date = %transaction.date, "date does not exist in the calendar");
        }

        if transaction.date < last_date {
            return Err(LedgerError::NotChronological {
                previous: last_date,
                date: transaction.date,
            });
        }
        last_date = transaction.date;

        if transaction.date < range.start {
            debug!(date = %transaction.date, description = transaction.description, "skipped");
            report.skipped += 1;
            continue;
        }
        if transaction.date > range.end {
            debug!(date = %transaction.date, end = %range.end, "past end of range");
            report.cut_off = true;
            break;
        }

        debug!(date = %transaction.date, description = transaction.description, "processing");
        process_transaction(&mut report.accounts, &transaction, body)?;
        report.processed += 1;
    }

    Ok(report)
}
