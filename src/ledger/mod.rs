//! Ledger domain models and the single-year computation engine.

pub mod engine;
pub mod fiscal_year;
pub mod month;
pub mod rounding;

pub use engine::{run, MONTHS_PER_YEAR};
pub use fiscal_year::FinancialYear;
pub use month::{LedgerRun, MonthResult, MonthTransaction};
pub use rounding::RoundingPolicy;
