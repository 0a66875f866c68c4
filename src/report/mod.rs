//! Statement assembly and rendering for a computed ledger year.

pub mod document;
pub mod table;

use crate::currency::{format_amount, format_rate, LocaleConfig};
use crate::ledger::{FinancialYear, LedgerRun, MonthResult};

use table::{Table, TableColumn};

pub use document::DocumentLayout;

/// Display-ready statement: one formatted row per month plus year totals.
#[derive(Debug, Clone)]
pub struct Statement {
    pub fiscal_year: FinancialYear,
    pub rows: Vec<Vec<String>>,
    pub total_interest: f64,
    pub final_principal: f64,
    pub grand_total: f64,
    locale: LocaleConfig,
}

impl Statement {
    /// Formats every engine row under the given locale, labelling months
    /// from the fiscal year.
    pub fn from_run(fiscal_year: FinancialYear, run: &LedgerRun, locale: LocaleConfig) -> Self {
        let rows = run
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| format_row(&fiscal_year, index, row, &locale))
            .collect();

        Self {
            fiscal_year,
            rows,
            total_interest: run.total_interest,
            final_principal: run.final_principal,
            grand_total: run.grand_total(),
            locale,
        }
    }

    /// Statement column set, month label left-aligned and every monetary
    /// column right-aligned.
    pub fn columns() -> Vec<TableColumn> {
        let mut columns = vec![TableColumn::left("Month", 12)];
        for header in [
            "Opening Balance",
            "Dep (<15th)",
            "PFLR (<15th)",
            "PFLR (>15th)",
            "Dep (>15th)",
            "Withdrawal",
            "Lowest Balance",
            "Rate (%)",
            "Interest",
            "Closing Balance",
        ] {
            columns.push(TableColumn::right(header, 8));
        }
        columns
    }

    pub fn to_table(&self) -> Table {
        Table {
            columns: Self::columns(),
            rows: self.rows.clone(),
            show_headers: true,
            padding: 1,
        }
    }

    pub fn render_table(&self) -> String {
        self.to_table().render()
    }

    /// Trailing summary: total interest, closing principal, grand total.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!(
                "Total Interest:    {}",
                format_amount(&self.locale, self.total_interest)
            ),
            format!(
                "Closing Principal: {}",
                format_amount(&self.locale, self.final_principal)
            ),
            format!(
                "Grand Total:       {}",
                format_amount(&self.locale, self.grand_total)
            ),
        ]
    }
}

fn format_row(
    fiscal_year: &FinancialYear,
    index: usize,
    row: &MonthResult,
    locale: &LocaleConfig,
) -> Vec<String> {
    vec![
        fiscal_year.label(index),
        format_amount(locale, row.opening_balance),
        format_amount(locale, row.deposit_before_15),
        format_amount(locale, row.pflr_before_15),
        format_amount(locale, row.pflr_after_15),
        format_amount(locale, row.deposit_after_15),
        format_amount(locale, row.withdrawal),
        format_amount(locale, row.lowest_balance),
        format_rate(row.rate),
        format_amount(locale, row.interest),
        format_amount(locale, row.closing_balance),
    ]
}
