use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::MONTHS_PER_YEAR;

/// Calendar month names in financial-year order, April first.
const FY_MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
    "January",
    "February",
    "March",
];

/// An April-anchored accounting year: April of `start_year` through March of
/// `start_year + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialYear {
    pub start_year: i32,
}

impl FinancialYear {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// Calendar year for the month at `index` (0 = April). January through
    /// March fall in the following calendar year.
    pub fn calendar_year(&self, index: usize) -> i32 {
        if index < 9 {
            self.start_year
        } else {
            self.start_year + 1
        }
    }

    /// First day of the month at `index`, useful for date-keyed consumers.
    pub fn month_start(&self, index: usize) -> Option<NaiveDate> {
        let month = (index as u32 + 3) % 12 + 1;
        NaiveDate::from_ymd_opt(self.calendar_year(index), month, 1)
    }

    /// Display label like `September '97`; the two-digit year rolls with the
    /// calendar year, not the start year.
    pub fn label(&self, index: usize) -> String {
        let year = self.calendar_year(index).rem_euclid(100);
        format!("{} '{:02}", FY_MONTH_NAMES[index], year)
    }

    /// All twelve labels in ledger order.
    pub fn labels(&self) -> Vec<String> {
        (0..MONTHS_PER_YEAR).map(|i| self.label(i)).collect()
    }

    /// Header form like `1997-1998`.
    pub fn span_label(&self) -> String {
        format!("{}-{}", self.start_year, self.start_year + 1)
    }
}
