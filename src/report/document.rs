//! Paginated printable statement: a fixed title header and column header on
//! every page, one row per month, summary block on the last page.

use super::Statement;
use super::table::Table;

const TITLE: &str = "PF Ledger Statement";

/// Page shape for the printable export. The wide row layout assumes a
/// landscape orientation.
#[derive(Debug, Clone, Copy)]
pub struct DocumentLayout {
    pub rows_per_page: usize,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self { rows_per_page: 6 }
    }
}

/// Renders the statement as a paginated plain-text document.
pub fn render(statement: &Statement, layout: DocumentLayout) -> String {
    let rows_per_page = layout.rows_per_page.max(1);
    let table = statement.to_table();
    let widths = table.compute_widths();
    let page_count = statement.rows.len().div_ceil(rows_per_page).max(1);

    let mut out = String::new();
    for (page_index, chunk) in statement.rows.chunks(rows_per_page).enumerate() {
        if page_index > 0 {
            out.push('\n');
        }
        push_page_header(&mut out, statement, page_index + 1, page_count);
        push_rows(&mut out, &table, &widths, chunk);

        if page_index + 1 == page_count {
            out.push('\n');
            for line in statement.summary_lines() {
                out.push('\n');
                out.push_str(&line);
            }
        }
        out.push('\n');
    }
    out
}

fn push_page_header(out: &mut String, statement: &Statement, page: usize, pages: usize) {
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&format!(
        "Financial Year: {}    Page {} of {}\n\n",
        statement.fiscal_year.span_label(),
        page,
        pages
    ));
}

fn push_rows(out: &mut String, table: &Table, widths: &[usize], chunk: &[Vec<String>]) {
    let header: Vec<String> = table.columns.iter().map(|c| c.header.clone()).collect();
    out.push_str(&table.render_row(&header, widths));
    out.push('\n');
    out.push_str(&super::table::horizontal_rule(widths, table.padding));
    for row in chunk {
        out.push('\n');
        out.push_str(&table.render_row(row, widths));
    }
}
