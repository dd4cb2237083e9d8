use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ReportError;

const REDACTED_PARAMS: [&str; 2] = ["apikey", "key"];

pub async fn make_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    params: &[(&str, &str)],
) -> Result<(StatusCode, String), ReportError> {
    let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint);
    debug!("GET {} {:?}", url, redact(params));

    let res = client.get(&url).query(params).send().await?;
    let status = res.status();
    let text = res.text().await?;

    Ok((status, text))
}

pub async fn post_json<B>(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    body: &B,
) -> Result<(StatusCode, String), ReportError>
where
    B: serde::Serialize,
{
    let url = format!("{}/{}", base_url.trim_end_matches('/'), endpoint);
    debug!("POST {}", url);

    let res = client.post(&url).json(body).send().await?;
    let status = res.status();
    let text = res.text().await?;

    Ok((status, text))
}

pub fn parse_response_object<T>(data: Value, error_msg: &str) -> Result<T, ReportError>
where
    T: DeserializeOwned,
{
    match data {
        Value::Object(obj) => serde_json::from_value(Value::Object(obj))
            .map_err(|e| ReportError::UnexpectedData(format!("{}: {}", error_msg, e))),
        _ => Err(ReportError::UnexpectedData(
            "Unexpected API response format: not an object".to_string(),
        )),
    }
}

pub fn parse_response_array<T>(data: Value, error_msg: &str) -> Result<Vec<T>, ReportError>
where
    T: DeserializeOwned,
{
    match data {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| ReportError::UnexpectedData(format!("{}: {}", error_msg, e))),
        _ => Err(ReportError::UnexpectedData(
            "Unexpected API response format: not an array".to_string(),
        )),
    }
}

fn redact<'a>(params: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    params
        .iter()
        .map(|&(name, value)| {
            if REDACTED_PARAMS.contains(&name) {
                (name, "***")
            } else {
                (name, value)
            }
        })
        .collect()
}
