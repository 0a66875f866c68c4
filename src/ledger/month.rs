use serde::{Deserialize, Serialize};

/// One calendar month of ledger activity, split around the 15th.
///
/// Amounts are not sign-validated; negative values pass through the
/// arithmetic unchanged. `rate` is an annual percentage applying to this
/// month only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthTransaction {
    #[serde(default)]
    pub deposit_before_15: f64,
    #[serde(default)]
    pub pflr_before_15: f64,
    #[serde(default)]
    pub pflr_after_15: f64,
    #[serde(default)]
    pub deposit_after_15: f64,
    #[serde(default)]
    pub withdrawal: f64,
    pub rate: f64,
}

impl MonthTransaction {
    /// A month with no activity at the given annual rate.
    pub fn empty(rate: f64) -> Self {
        Self {
            deposit_before_15: 0.0,
            pflr_before_15: 0.0,
            pflr_after_15: 0.0,
            deposit_after_15: 0.0,
            withdrawal: 0.0,
            rate,
        }
    }

    pub fn with_deposit_before_15(mut self, amount: f64) -> Self {
        self.deposit_before_15 = amount;
        self
    }

    pub fn with_pflr_before_15(mut self, amount: f64) -> Self {
        self.pflr_before_15 = amount;
        self
    }

    pub fn with_pflr_after_15(mut self, amount: f64) -> Self {
        self.pflr_after_15 = amount;
        self
    }

    pub fn with_deposit_after_15(mut self, amount: f64) -> Self {
        self.deposit_after_15 = amount;
        self
    }

    pub fn with_withdrawal(mut self, amount: f64) -> Self {
        self.withdrawal = amount;
        self
    }
}

/// Computed row for one month, carrying input echoes for display.
#[derive(Debug, Clone, Serialize)]
pub struct MonthResult {
    pub opening_balance: f64,
    pub deposit_before_15: f64,
    pub pflr_before_15: f64,
    pub pflr_after_15: f64,
    pub deposit_after_15: f64,
    pub withdrawal: f64,
    /// Interest base: opening plus pre-15th inflows minus withdrawals,
    /// floored at zero.
    pub lowest_balance: f64,
    pub rate: f64,
    pub interest: f64,
    pub closing_balance: f64,
}

/// Whole-year output: twelve rows plus the accumulated totals.
#[derive(Debug, Clone, Serialize)]
pub struct LedgerRun {
    pub rows: Vec<MonthResult>,
    pub total_interest: f64,
    pub final_principal: f64,
}

impl LedgerRun {
    /// Final principal plus the year's interest, added only at year end.
    pub fn grand_total(&self) -> f64 {
        self.final_principal + self.total_interest
    }
}
