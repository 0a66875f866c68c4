//! Monetary display formatting for statement cells and summary lines.

use serde::{Deserialize, Serialize};

/// Separator preferences for rendered amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub currency_prefix: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency_prefix: "₹ ".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

/// Formats a number to `precision` decimals with locale separators applied.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

/// Two-decimal monetary value with the locale's currency prefix. Negative
/// amounts keep their sign after the prefix.
pub fn format_amount(locale: &LocaleConfig, amount: f64) -> String {
    format!(
        "{}{}",
        locale.currency_prefix,
        format_number(locale, amount, 2)
    )
}

/// Rate column: two decimals, no prefix, no grouping.
pub fn format_rate(rate: f64) -> String {
    format!("{:.2}", rate)
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
