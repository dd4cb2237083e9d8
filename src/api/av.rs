use chrono::NaiveDate;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::{
    av_dto::{AvTimeSeriesDailyDto, TIME_SERIES_KEY, api_message},
    utils::{make_request, parse_response_object},
};
use crate::{
    error::ReportError,
    models::{ClosingPriceSeries, Quote},
};

pub const BASE_URL: &str = "https://www.alphavantage.co";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum OutputSize {
    Compact,
    Full,
}

#[derive(Clone, Debug)]
pub struct AvApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AvApi {
    pub fn with_base_url(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    async fn get_daily_series(
        &self,
        symbol: &str,
        output_size: OutputSize,
    ) -> Result<(StatusCode, String), ReportError> {
        let mut params = vec![
            ("function", "TIME_SERIES_DAILY"),
            ("symbol", symbol),
            ("apikey", self.api_key.as_str()),
        ];
        if output_size == OutputSize::Full {
            params.push(("outputsize", "full"));
        }
        make_request(&self.client, &self.base_url, "query", &params).await
    }

    /// Stats for the most recent trading day in the compact daily series.
    pub async fn fetch_latest_quote(&self, symbol: &str) -> Result<Quote, ReportError> {
        let (status, text) = self.get_daily_series(symbol, OutputSize::Compact).await?;
        if !status.is_success() {
            return Err(ReportError::Http(format!("Request failed: {}", status)));
        }

        let quote = decode_series(&text, symbol)?.to_latest_quote(symbol)?;
        info!("Latest quote for {} is from {}", quote.symbol(), quote.date());

        Ok(quote)
    }

    /// Closes on or after `since`, newest first, from the full daily series.
    pub async fn fetch_historical_closes(
        &self,
        symbol: &str,
        since: NaiveDate,
    ) -> Result<ClosingPriceSeries, ReportError> {
        let (status, text) = self.get_daily_series(symbol, OutputSize::Full).await?;
        if status != StatusCode::OK {
            return Err(ReportError::HistoricalFetch {
                status: status.as_u16(),
            });
        }

        let closes = decode_series(&text, symbol)?.to_closes_since(since)?;
        let series = ClosingPriceSeries::from_unordered(closes);
        debug!("{} closes for {} since {}", series.len(), symbol, since);

        Ok(series)
    }
}

fn decode_series(text: &str, symbol: &str) -> Result<AvTimeSeriesDailyDto, ReportError> {
    let data = serde_json::from_str::<Value>(text)?;

    if data.get(TIME_SERIES_KEY).is_none() {
        return Err(ReportError::UnexpectedData(api_message(&data).unwrap_or_else(
            || format!("Failed to find '{}' in the response", TIME_SERIES_KEY),
        )));
    }

    parse_response_object::<AvTimeSeriesDailyDto>(
        data,
        &format!("Unexpected daily series for symbol {}", symbol),
    )
}
