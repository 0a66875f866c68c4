//! The twelve-step ledger recurrence.
//!
//! Interest is accumulated separately and joins the principal only in the
//! year-end grand total; a month's closing balance never includes its own
//! interest. That matches the historical paper ledgers this engine
//! reconciles against, and is a domain assumption to revisit if the engine
//! is repurposed for a compounding account standard.

use super::{LedgerRun, MonthResult, MonthTransaction, RoundingPolicy};

/// Months in one financial year (April through the following March).
pub const MONTHS_PER_YEAR: usize = 12;

/// Annual-percent to one-month-fraction divisor: `/100` for percent,
/// `/12` for the month.
const ANNUAL_PERCENT_DIVISOR: f64 = 1200.0;

/// Computes the full-year ledger from an opening balance and twelve months
/// of transactions under one rounding policy.
///
/// Pure and stateless: no I/O, no shared state, each invocation is
/// independently safe to run in parallel. Inputs are taken as-is; the only
/// defensive rule is flooring the lowest balance at zero. A closing balance
/// may legitimately go negative and propagates unfloored into the next
/// month's opening balance.
pub fn run(
    opening_balance: f64,
    months: &[MonthTransaction; MONTHS_PER_YEAR],
    policy: RoundingPolicy,
) -> LedgerRun {
    let mut current_balance = opening_balance;
    let mut total_interest = 0.0;
    let mut rows = Vec::with_capacity(MONTHS_PER_YEAR);

    for txn in months {
        // Interest base: only pre-15th inflows count, floored at zero.
        let lowest_raw =
            current_balance + txn.deposit_before_15 + txn.pflr_before_15 - txn.withdrawal;
        let lowest_balance = lowest_raw.max(0.0);

        let raw_interest = lowest_balance * txn.rate / ANNUAL_PERCENT_DIVISOR;
        let interest = policy.apply(raw_interest);

        let closing_balance = current_balance
            + txn.deposit_before_15
            + txn.deposit_after_15
            + txn.pflr_before_15
            + txn.pflr_after_15
            - txn.withdrawal;

        rows.push(MonthResult {
            opening_balance: current_balance,
            deposit_before_15: txn.deposit_before_15,
            pflr_before_15: txn.pflr_before_15,
            pflr_after_15: txn.pflr_after_15,
            deposit_after_15: txn.deposit_after_15,
            withdrawal: txn.withdrawal,
            lowest_balance,
            rate: txn.rate,
            interest,
            closing_balance,
        });

        current_balance = closing_balance;
        total_interest += interest;
    }

    LedgerRun {
        rows,
        total_interest,
        final_principal: current_balance,
    }
}
