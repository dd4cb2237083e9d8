use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strum::IntoEnumIterator;

use crate::{
    error::ReportError,
    models::{ChangeWindow, ClosingPriceSeries, PercentageChanges},
};

pub fn compute_changes(closes: &ClosingPriceSeries) -> Result<PercentageChanges, ReportError> {
    let required = ChangeWindow::required_closes();
    if closes.len() < required {
        return Err(ReportError::InsufficientHistory {
            found: closes.len(),
            required,
        });
    }

    let current = close_at(closes, 0)?;
    let entries = ChangeWindow::iter()
        .map(|window| {
            let reference = close_at(closes, window.offset())?;
            let change = percentage_change(current, reference)?;
            Ok((window, format_percentage(change)))
        })
        .collect::<Result<Vec<_>, ReportError>>()?;

    Ok(PercentageChanges::new(entries))
}

/// `(current - reference) / reference * 100`
pub fn percentage_change(current: Decimal, reference: Decimal) -> Result<Decimal, ReportError> {
    let ratio = current
        .checked_sub(reference)
        .and_then(|delta| delta.checked_div(reference))
        .ok_or_else(|| {
            ReportError::UnexpectedData(format!("Cannot divide by reference close {}", reference))
        })?;

    ratio.checked_mul(dec!(100)).ok_or_else(|| {
        ReportError::UnexpectedData(format!(
            "Change from reference close {} is out of range",
            reference
        ))
    })
}

pub fn format_percentage(change: Decimal) -> String {
    format!("{:.2}%", change.round_dp(2))
}

fn close_at(closes: &ClosingPriceSeries, offset: usize) -> Result<Decimal, ReportError> {
    closes
        .get(offset)
        .map(|price| *price.close())
        .ok_or(ReportError::InsufficientHistory {
            found: closes.len(),
            required: offset + 1,
        })
}
