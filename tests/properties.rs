//! Property-based tests for the ledger pipeline.
//!
//! Run with: cargo test --test properties

use hfinance::{
    accounts::ancestry, process_hfinance_file, Accounts, Date, DateRange, LedgerError,
};
use proptest::prelude::*;

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_segment() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn arb_account() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..5).prop_map(|segments| segments.join("."))
}

fn arb_amount() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000i64
}

fn arb_date() -> impl Strategy<Value = Date> {
    (1u32..29u32, 1u32..13u32, 2000u32..2030u32).prop_map(|(d, m, y)| Date::new(d, m, y))
}

/// Postings that sum to zero: each amount is offset by a final balancing line.
fn arb_balanced_postings() -> impl Strategy<Value = Vec<(String, i64)>> {
    (
        prop::collection::vec((arb_account(), arb_amount()), 1..6),
        arb_account(),
    )
        .prop_map(|(mut postings, balancing)| {
            let total: i64 = postings.iter().map(|(_, amount)| amount).sum();
            postings.push((balancing, -total));
            postings
        })
}

fn block(date: Date, postings: &[(String, i64)]) -> String {
    let mut text = format!("{}: generated\n", date);
    for (account, amount) in postings {
        text.push_str(&format!("  {}: {}\n", account, amount));
    }
    text
}

/// Parses report lines back into `(account, balance)` pairs.
fn reparse(report: &str) -> Vec<(String, i64)> {
    report
        .lines()
        .map(|line| {
            let (account, balance) = line.rsplit_once(": ").unwrap();
            (account.to_string(), balance.parse().unwrap())
        })
        .collect()
}

// ============================================================================
// Roll-up
// ============================================================================

proptest! {
    #[test]
    fn prop_rollup_reaches_every_ancestor(account in arb_account(), amount in arb_amount()) {
        let mut accounts = Accounts::new();
        accounts.post(&account, amount).unwrap();
        for path in ancestry(&account) {
            prop_assert_eq!(Some(amount), accounts.balance(path));
        }
        prop_assert_eq!(ancestry(&account).count(), accounts.len());
    }

    #[test]
    fn prop_parent_is_sum_of_children(postings in arb_balanced_postings()) {
        let mut accounts = Accounts::new();
        for (account, amount) in &postings {
            accounts.post(account, *amount).unwrap();
        }
        for (account, balance) in accounts.iter() {
            let expected: i64 = postings
                .iter()
                .filter(|(posted, _)| ancestry(posted).any(|path| path == account))
                .map(|(_, amount)| amount)
                .sum();
            prop_assert_eq!(expected, balance);
        }
    }
}

// ============================================================================
// Transactions
// ============================================================================

proptest! {
    #[test]
    fn prop_balanced_blocks_succeed(date in arb_date(), postings in arb_balanced_postings()) {
        let input = block(date, &postings);
        let report = process_hfinance_file(&input, &DateRange::default()).unwrap();
        prop_assert_eq!(1, report.processed);
    }

    #[test]
    fn prop_unbalanced_blocks_fail(
        date in arb_date(),
        postings in arb_balanced_postings(),
        skew in prop_oneof![-1_000i64..0, 1i64..1_000],
    ) {
        let mut postings = postings;
        postings[0].1 += skew;
        let input = block(date, &postings);
        let result = process_hfinance_file(&input, &DateRange::default());
        let is_unbalanced = matches!(
            result,
            Err(LedgerError::Unbalanced { total, .. }) if total == i128::from(skew)
        );
        prop_assert!(is_unbalanced);
    }

    #[test]
    fn prop_report_round_trips(
        dates in prop::collection::vec(arb_date(), 1..5),
        postings in prop::collection::vec(arb_balanced_postings(), 5),
    ) {
        let mut dates = dates;
        dates.sort();
        let input: Vec<String> = dates
            .iter()
            .zip(&postings)
            .map(|(date, postings)| block(*date, postings))
            .collect();
        let report = process_hfinance_file(&input.join("\n"), &DateRange::default()).unwrap();

        let printed = report.accounts.to_string();
        let balances: Vec<(String, i64)> = report
            .accounts
            .iter()
            .map(|(account, balance)| (account.to_string(), balance))
            .collect();
        prop_assert_eq!(balances, reparse(&printed));
    }
}

// ============================================================================
// Ordering and range
// ============================================================================

proptest! {
    #[test]
    fn prop_out_of_order_fails(a in arb_date(), b in arb_date()) {
        prop_assume!(a != b);
        let (early, late) = if a < b { (a, b) } else { (b, a) };
        let input = format!("{}: later\n  x: 0\n\n{}: earlier\n  x: 0\n", late, early);
        let result = process_hfinance_file(&input, &DateRange::default());
        prop_assert_eq!(
            Err(LedgerError::NotChronological { previous: late, date: early }),
            result
        );
    }

    #[test]
    fn prop_range_is_inclusive(date in arb_date(), amount in arb_amount()) {
        let postings = vec![("assets".to_string(), amount), ("income".to_string(), -amount)];
        let input = block(date, &postings);

        let exact = DateRange::new(Some(date), Some(date));
        let report = process_hfinance_file(&input, &exact).unwrap();
        prop_assert_eq!(Some(amount), report.accounts.balance("assets"));

        let after = Date::new(date.day + 1, date.month, date.year);
        let report = process_hfinance_file(&input, &DateRange::new(Some(after), None)).unwrap();
        prop_assert!(report.accounts.is_empty());
        prop_assert_eq!(1, report.skipped);

        let before = Date::new(date.day - 1, date.month, date.year);
        let report = process_hfinance_file(&input, &DateRange::new(None, Some(before))).unwrap();
        prop_assert!(report.accounts.is_empty());
        prop_assert!(report.cut_off);
    }
}
