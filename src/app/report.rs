use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{PercentageChanges, Quote, Report, ReportRow, quote::field_label};

/// Quote rows that get a currency prefix, counted by position.
const CURRENCY_ROWS: usize = 4;

const TABLE_STYLE: &str = "border-collapse: collapse; width: 100%;";
const ROW_STYLE: &str = "border: 1px solid #ddd;";
const CELL_STYLE: &str = "border: 1px solid #ddd; padding: 8px; text-align: center;";

/// Quote rows come first, labelled by field name without the API's ordinal
/// prefix (`1. open` becomes `Open`), followed by one row per change window.
pub fn build_report(quote: &Quote, title: &str, changes: &PercentageChanges) -> Report {
    let mut rows: Vec<ReportRow> = quote
        .without_volume()
        .into_iter()
        .enumerate()
        .map(|(i, (key, value))| {
            let value = if i < CURRENCY_ROWS {
                format_currency(&value)
            } else {
                value
            };
            ReportRow::new(field_label(&key), value)
        })
        .collect();

    rows.extend(
        changes
            .iter()
            .map(|(window, value)| ReportRow::new(window.to_string(), value.clone())),
    );

    Report::new(title.to_string(), rows)
}

pub fn render_report(quote: &Quote, title: &str, changes: &PercentageChanges) -> String {
    render_html(&build_report(quote, title, changes))
}

pub fn render_html(report: &Report) -> String {
    let mut html = format!(
        "<h1>{}</h1><br><table style=\"{}\">\n<thead>\n",
        escape_html(report.title()),
        TABLE_STYLE
    );
    html.push_str(&render_row("th", "Stat", "Value"));
    html.push_str("</thead>\n<tbody>\n");
    for row in report.rows() {
        html.push_str(&render_row("td", row.label(), row.value()));
    }
    html.push_str("</tbody>\n</table>");

    html
}

/// `"101.2300"` -> `"$101.23"`. Non-numeric values pass through.
pub fn format_currency(value: &str) -> String {
    match Decimal::from_str(value.trim()) {
        Ok(amount) => format!("${:.2}", amount.round_dp(2)),
        Err(_) => value.to_string(),
    }
}

fn render_row(cell: &str, label: &str, value: &str) -> String {
    format!(
        "<tr style=\"{row}\"><{cell} style=\"{style}\">{}</{cell}><{cell} style=\"{style}\">{}</{cell}></tr>\n",
        escape_html(label),
        escape_html(value),
        row = ROW_STYLE,
        cell = cell,
        style = CELL_STYLE,
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
