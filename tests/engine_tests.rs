use pf_ledger::input::{seed, YearInput};
use pf_ledger::ledger::{run, MonthTransaction, RoundingPolicy, MONTHS_PER_YEAR};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn zero_year(rate: f64) -> [MonthTransaction; MONTHS_PER_YEAR] {
    [MonthTransaction::empty(rate); MONTHS_PER_YEAR]
}

#[test]
fn zero_activity_year_earns_nothing() {
    let result = run(0.0, &zero_year(7.1), RoundingPolicy::Round);

    assert_eq!(result.rows.len(), 12);
    for row in &result.rows {
        assert_eq!(row.lowest_balance, 0.0);
        assert_eq!(row.interest, 0.0);
    }
    assert_eq!(result.total_interest, 0.0);
    assert_eq!(result.final_principal, 0.0);
    assert_eq!(result.grand_total(), 0.0);
}

#[test]
fn single_deposit_with_round_policy() {
    let mut months = zero_year(12.0);
    months[0] = MonthTransaction::empty(12.0).with_deposit_before_15(2750.0);

    let result = run(1000.0, &months, RoundingPolicy::Round);
    let first = &result.rows[0];

    assert_eq!(first.opening_balance, 1000.0);
    assert_eq!(first.lowest_balance, 3750.0);
    assert_eq!(first.interest, 37.50);
    assert_eq!(first.closing_balance, 3750.0);
}

#[test]
fn withdrawal_exceeding_balance_floors_lowest_but_not_closing() {
    let mut months = zero_year(12.0);
    months[0] = MonthTransaction::empty(12.0).with_withdrawal(500.0);

    let result = run(100.0, &months, RoundingPolicy::Round);
    let first = &result.rows[0];

    // Lowest-balance raw of -400 is floored to zero for interest purposes.
    assert_eq!(first.lowest_balance, 0.0);
    assert_eq!(first.interest, 0.0);
    // The closing balance keeps the deficit and propagates it forward.
    assert_eq!(first.closing_balance, -400.0);
    assert_eq!(result.rows[1].opening_balance, -400.0);
    assert_eq!(result.rows[1].lowest_balance, 0.0);
    assert_eq!(result.final_principal, -400.0);
}

#[test]
fn opening_balances_chain_from_closing_balances() {
    let input = seed::reference_1997(12.0);
    let result = input.compute().expect("seed has 12 months");

    assert_eq!(result.rows[0].opening_balance, input.opening_balance);
    for pair in result.rows.windows(2) {
        assert_eq!(pair[1].opening_balance, pair[0].closing_balance);
    }
}

#[test]
fn totals_are_sums_of_row_values() {
    let input = seed::reference_1997(12.0);
    let result = input.compute().expect("seed has 12 months");

    let summed: f64 = result.rows.iter().map(|row| row.interest).sum();
    assert_eq!(result.total_interest, summed);
    assert_eq!(
        result.grand_total(),
        result.final_principal + result.total_interest
    );
}

#[test]
fn lowest_balance_never_negative_under_hostile_input() {
    let mut months = zero_year(-50.0);
    for month in &mut months {
        month.withdrawal = 1_000_000.0;
        month.deposit_before_15 = -5_000.0;
    }

    let result = run(-123.45, &months, RoundingPolicy::Truncate);
    for row in &result.rows {
        assert!(row.lowest_balance >= 0.0);
        assert_eq!(row.interest, 0.0);
    }
}

#[test]
fn interest_is_not_compounded_into_closing_balance() {
    let mut months = zero_year(12.0);
    months[0] = MonthTransaction::empty(12.0).with_deposit_before_15(2750.0);

    let result = run(1000.0, &months, RoundingPolicy::Round);

    // Closing balance excludes the month's own interest; the 37.50 from
    // month one joins the principal only in the grand total.
    assert_eq!(result.rows[0].closing_balance, 3750.0);
    assert_eq!(result.final_principal, 3750.0);
    assert_close(result.total_interest, 37.50 * 12.0);
    assert_close(result.grand_total(), 3750.0 + 450.0);
}

#[test]
fn reference_1997_preset_reproduces_the_paper_ledger() {
    let input = seed::reference_1997(12.0);
    let result = input.compute().expect("seed has 12 months");

    // September: arrear lifts the closing balance by 6000 while the lowest
    // balance rises only by the pre-15th 3000.
    let september = &result.rows[5];
    assert_eq!(september.closing_balance - september.opening_balance, 6000.0);
    assert_eq!(
        september.lowest_balance - september.opening_balance,
        3000.0
    );

    // October: the ghost PFLR never moves the balance.
    let october = &result.rows[6];
    assert_eq!(october.closing_balance, october.opening_balance);
    assert_eq!(october.interest, 2076.51);

    // January: the withdrawal bites both figures.
    let january = &result.rows[9];
    assert_eq!(january.lowest_balance, 188_085.40);
    assert_eq!(january.interest, 1880.85);

    assert_eq!(result.rows[0].interest, 1896.51);
    assert_close(result.total_interest, 23_869.14);
    assert_eq!(result.final_principal, 193_285.40);
    assert_close(result.grand_total(), 217_154.54);
}

#[test]
fn rounding_policy_is_applied_per_month() {
    // Lowest balance of 220254.90 at 12% gives raw interest 2202.549, where
    // the two policies diverge by a cent.
    let months = zero_year(12.0);

    let rounded = run(220_254.90, &months, RoundingPolicy::Round);
    let truncated = run(220_254.90, &months, RoundingPolicy::Truncate);

    assert_eq!(rounded.rows[0].interest, 2202.55);
    assert_eq!(truncated.rows[0].interest, 2202.54);
}

#[test]
fn compute_rejects_wrong_month_count() {
    let mut input = YearInput::blank(1997, 0.0, 12.0);
    input.months.truncate(7);

    let err = input.compute().expect_err("7 months must fail");
    assert!(err.to_string().contains("got 7"));
}
