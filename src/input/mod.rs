//! Input Provider boundary: the serializable year model handed to the
//! engine, plus seed presets for demo and reference-matching data.

pub mod seed;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::ledger::{self, FinancialYear, LedgerRun, MonthTransaction, RoundingPolicy, MONTHS_PER_YEAR};

/// A full year of ledger input as supplied by a caller or loaded from disk.
///
/// The engine itself takes a fixed-size array; this model carries a `Vec` so
/// files with the wrong shape surface a structured error instead of a panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearInput {
    pub start_year: i32,
    pub opening_balance: f64,
    #[serde(default)]
    pub rounding: RoundingPolicy,
    pub months: Vec<MonthTransaction>,
}

impl YearInput {
    /// A zero-activity year at the given flat annual rate.
    pub fn blank(start_year: i32, opening_balance: f64, rate: f64) -> Self {
        Self {
            start_year,
            opening_balance,
            rounding: RoundingPolicy::default(),
            months: vec![MonthTransaction::empty(rate); MONTHS_PER_YEAR],
        }
    }

    pub fn financial_year(&self) -> FinancialYear {
        FinancialYear::new(self.start_year)
    }

    /// Overwrites every month's rate with one flat annual rate.
    pub fn apply_rate_to_all(&mut self, rate: f64) {
        for month in &mut self.months {
            month.rate = rate;
        }
    }

    /// Enforces the exactly-twelve contract at the boundary.
    pub fn months_exact(&self) -> Result<[MonthTransaction; MONTHS_PER_YEAR], LedgerError> {
        let slice: &[MonthTransaction] = &self.months;
        <[MonthTransaction; MONTHS_PER_YEAR]>::try_from(slice)
            .map_err(|_| LedgerError::MonthCount(self.months.len()))
    }

    /// Runs the engine over this input.
    pub fn compute(&self) -> Result<LedgerRun, LedgerError> {
        let months = self.months_exact()?;
        tracing::debug!(
            start_year = self.start_year,
            policy = ?self.rounding,
            "computing ledger year"
        );
        Ok(ledger::run(self.opening_balance, &months, self.rounding))
    }
}
