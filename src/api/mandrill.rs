use log::{info, warn};
use reqwest::Client;
use serde_json::Value;

use super::{
    mandrill_dto::{
        MandrillErrorDto, MandrillMessageDto, MandrillRecipientDto, MandrillSendRequestDto,
        MandrillSendResultDto,
    },
    utils::{parse_response_array, parse_response_object, post_json},
};
use crate::{error::ReportError, models::EmailEnvelope};

pub const BASE_URL: &str = "https://mandrillapp.com";
const SEND_ENDPOINT: &str = "api/1.0/messages/send.json";

#[derive(Clone, Debug)]
pub struct MandrillApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl MandrillApi {
    pub fn with_base_url(client: Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub async fn send_email(
        &self,
        envelope: &EmailEnvelope,
        html_content: &str,
    ) -> Result<Vec<MandrillSendResultDto>, ReportError> {
        let message = build_message(envelope, html_content);
        let request = MandrillSendRequestDto::new(&self.api_key, message);

        let (status, text) = post_json(&self.client, &self.base_url, SEND_ENDPOINT, &request).await?;
        let data = serde_json::from_str::<Value>(&text).map_err(|e| {
            ReportError::Mail(format!("Unreadable response ({}): {}", status, e))
        })?;

        if !status.is_success() || data.get("status").and_then(Value::as_str) == Some("error") {
            return Err(ReportError::Mail(describe_error(data, status.as_u16())));
        }

        let results =
            parse_response_array::<MandrillSendResultDto>(data, "Unexpected Mandrill send result")?;

        for result in &results {
            if result.is_delivered() {
                info!("Email to {} {}", result.email(), result.status());
            } else {
                warn!(
                    "Email to {} {} ({})",
                    result.email(),
                    result.status(),
                    result.reject_reason().as_deref().unwrap_or("no reason given")
                );
            }
        }

        Ok(results)
    }
}

/// Wraps the report fragment in the centered container used for every email.
pub fn build_message(envelope: &EmailEnvelope, html_content: &str) -> MandrillMessageDto {
    MandrillMessageDto::new(
        envelope.from_email().clone(),
        envelope
            .to()
            .iter()
            .map(|email| MandrillRecipientDto::to(email))
            .collect(),
        envelope.subject().clone(),
        format!(
            "<div style=\"font-family: Arial, sans-serif; text-align: center;\">{}</div>",
            html_content
        ),
    )
}

fn describe_error(data: Value, status: u16) -> String {
    match parse_response_object::<MandrillErrorDto>(data, "Unexpected Mandrill error") {
        Ok(error) => format!("{} - {}", error.name(), error.message()),
        Err(_) => format!("Request failed with status {}", status),
    }
}
