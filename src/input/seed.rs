//! Caller-side seed data. These presets reproduce specific historical paper
//! ledgers; none of the overrides live in the engine.

use crate::ledger::MonthTransaction;

use super::YearInput;

/// Month indices in financial-year order, 0 = April.
const SEPTEMBER: usize = 5;
const OCTOBER: usize = 6;
const JANUARY: usize = 9;
const FEBRUARY: usize = 10;

/// The 1997-98 reference year, reconciled against the original paper ledger:
///
/// - April deposits 2400 + 250 PFLR; May through December 2750 + 250, except
///   October which the paper ledger shows but never applies (zeroed here).
/// - September carries a 3000 arrear as a post-15th deposit, so its closing
///   balance jumps by 6000 while the lowest balance rises only by 3000.
/// - January drops to 2350 + 250 with a 28166 withdrawal; February and March
///   stay at 2350 + 250.
pub fn reference_1997(rate: f64) -> YearInput {
    let mut input = YearInput::blank(1997, 187_001.40, rate);

    for (index, month) in input.months.iter_mut().enumerate() {
        if index == OCTOBER {
            continue;
        }
        let deposit = match index {
            0 => 2400.0,
            i if i >= FEBRUARY => 2350.0,
            JANUARY => 2350.0,
            _ => 2750.0,
        };
        *month = MonthTransaction::empty(rate)
            .with_deposit_before_15(deposit)
            .with_pflr_before_15(250.0);
    }

    input.months[SEPTEMBER] = input.months[SEPTEMBER].with_deposit_after_15(3000.0);
    input.months[JANUARY] = input.months[JANUARY].with_withdrawal(28_166.0);

    input
}
