use std::str::FromStr;

use chrono::NaiveDate;
use derive_getters::Getters;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    error::ReportError,
    models::{ClosingPrice, Quote},
};

pub const TIME_SERIES_KEY: &str = "Time Series (Daily)";
pub const CLOSE_FIELD: &str = "4. close";

/// Keys Alpha Vantage uses instead of a payload when it refuses a request.
pub const MESSAGE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

#[derive(Debug, Deserialize, Getters)]
pub struct AvMetaDataDto {
    #[serde(rename = "1. Information")]
    information: Option<String>,
    #[serde(rename = "2. Symbol")]
    symbol: String,
    #[serde(rename = "3. Last Refreshed")]
    last_refreshed: Option<String>,
    #[serde(rename = "4. Output Size")]
    output_size: Option<String>,
    #[serde(rename = "5. Time Zone")]
    time_zone: Option<String>,
}

#[derive(Debug, Deserialize, Getters)]
pub struct AvTimeSeriesDailyDto {
    #[serde(rename = "Meta Data")]
    meta_data: Option<AvMetaDataDto>,
    #[serde(rename = "Time Series (Daily)")]
    time_series: Map<String, Value>,
}

impl AvTimeSeriesDailyDto {
    /// Entries with parsed dates, in document order.
    pub fn entries(&self) -> Result<Vec<(NaiveDate, &Map<String, Value>)>, ReportError> {
        self.time_series
            .iter()
            .map(|(date, stats)| {
                let date = parse_date(date)?;
                let stats = stats.as_object().ok_or_else(|| {
                    ReportError::UnexpectedData(format!("Stats for {} are not an object", date))
                })?;
                Ok((date, stats))
            })
            .collect()
    }

    pub fn to_latest_quote(&self, symbol: &str) -> Result<Quote, ReportError> {
        let (date, stats) = self
            .entries()?
            .into_iter()
            .max_by_key(|(date, _)| *date)
            .ok_or_else(|| {
                ReportError::UnexpectedData(format!("'{}' is empty", TIME_SERIES_KEY))
            })?;

        let fields = stats
            .iter()
            .map(|(key, value)| (key.clone(), value_to_string(value)))
            .collect();

        let symbol = self
            .meta_data
            .as_ref()
            .map(|meta| meta.symbol.clone())
            .unwrap_or_else(|| symbol.to_string());

        Ok(Quote::new(symbol, date, fields))
    }

    pub fn to_closes_since(&self, since: NaiveDate) -> Result<Vec<ClosingPrice>, ReportError> {
        self.entries()?
            .into_iter()
            .filter(|(date, _)| *date >= since)
            .map(|(date, stats)| {
                let close = stats.get(CLOSE_FIELD).ok_or_else(|| {
                    ReportError::UnexpectedData(format!("Missing '{}' for {}", CLOSE_FIELD, date))
                })?;
                Ok(ClosingPrice::new(
                    date,
                    parse_decimal(&value_to_string(close), CLOSE_FIELD)?,
                ))
            })
            .collect()
    }
}

/// Returns the API's own message when the body carries one instead of data.
pub fn api_message(data: &Value) -> Option<String> {
    MESSAGE_KEYS.iter().find_map(|key| {
        data.get(*key)
            .map(|message| format!("{}: {}", key, value_to_string(message)))
    })
}

pub fn parse_date(field: &str) -> Result<NaiveDate, ReportError> {
    NaiveDate::parse_from_str(field, "%Y-%m-%d")
        .map_err(|e| ReportError::UnexpectedData(format!("Failed to parse date '{}': {}", field, e)))
}

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal, ReportError> {
    Decimal::from_str(field).map_err(|e| {
        ReportError::UnexpectedData(format!("Failed to parse {} '{}': {}", field_name, field, e))
    })
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
