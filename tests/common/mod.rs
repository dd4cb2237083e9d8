#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use httpmock::{
    Method::{GET, POST},
    Mock, MockServer,
};
use reqwest::Client;
use serde_json::{Map, json};
use stock_report_mailer::{
    api::{AvApi, MandrillApi},
    app::{ReportPipeline, RunSettings},
    models::EmailEnvelope,
};

pub const SYMBOL: &str = "XEQT.TO";
pub const AV_KEY: &str = "av-test-key";
pub const MANDRILL_KEY: &str = "md-test-key";

pub fn latest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
}

/// Daily series JSON with one entry every `step_days`, newest first.
pub fn daily_series(latest: NaiveDate, step_days: u64, closes: &[f64]) -> String {
    let mut series = Map::new();
    for (i, close) in closes.iter().enumerate() {
        let date = latest - Days::new(i as u64 * step_days);
        series.insert(
            date.format("%Y-%m-%d").to_string(),
            json!({
                "1. open": format!("{:.4}", close - 0.5),
                "2. high": format!("{:.4}", close + 1.0),
                "3. low": format!("{:.4}", close - 1.0),
                "4. close": format!("{:.4}", close),
                "5. volume": "1000"
            }),
        );
    }
    json!({
        "Meta Data": {"2. Symbol": SYMBOL},
        "Time Series (Daily)": series
    })
    .to_string()
}

/// 300 trading days at 100 with the latest close at 110.
pub fn rising_closes() -> Vec<f64> {
    let mut closes = vec![100.0; 300];
    closes[0] = 110.0;
    closes
}

pub fn mock_latest<'a>(server: &'a MockServer, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY")
            .query_param("symbol", SYMBOL)
            .query_param("apikey", AV_KEY)
            .query_param_missing("outputsize");
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_history<'a>(server: &'a MockServer, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY")
            .query_param("symbol", SYMBOL)
            .query_param("apikey", AV_KEY)
            .query_param("outputsize", "full");
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_send(server: &'_ MockServer, status: u16, body: serde_json::Value) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST).path("/api/1.0/messages/send.json");
        then.status(status)
            .header("content-type", "application/json")
            .body(body.to_string());
    })
}

pub fn av_api(server: &MockServer) -> AvApi {
    AvApi::with_base_url(Client::new(), server.base_url(), AV_KEY.to_string())
}

pub fn mandrill_api(server: &MockServer) -> MandrillApi {
    MandrillApi::with_base_url(Client::new(), server.base_url(), MANDRILL_KEY.to_string())
}

pub fn envelope() -> EmailEnvelope {
    EmailEnvelope::new(
        String::from("reports@example.com"),
        vec![String::from("me@example.com")],
        String::from("Stock Data"),
    )
}

pub fn pipeline(server: &MockServer, dry_run: bool) -> ReportPipeline {
    ReportPipeline::new(
        av_api(server),
        mandrill_api(server),
        RunSettings::new(SYMBOL.to_string(), SYMBOL.to_string(), 365, dry_run, envelope()),
    )
}
