use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, new)]
pub struct MandrillSendRequestDto<'a> {
    key: &'a str,
    message: MandrillMessageDto,
}

#[derive(Clone, Debug, Getters, Serialize, new)]
pub struct MandrillMessageDto {
    from_email: String,
    to: Vec<MandrillRecipientDto>,
    subject: String,
    html: String,
}

#[derive(Clone, Debug, Getters, Serialize, new)]
pub struct MandrillRecipientDto {
    email: String,
    #[serde(rename = "type")]
    recipient_type: String,
}

impl MandrillRecipientDto {
    pub fn to(email: &str) -> Self {
        Self::new(email.to_string(), String::from("to"))
    }
}

/// One entry per recipient in a successful send response.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, new)]
pub struct MandrillSendResultDto {
    email: String,
    status: String,
    #[serde(rename = "_id")]
    id: Option<String>,
    reject_reason: Option<String>,
}

impl MandrillSendResultDto {
    pub fn is_delivered(&self) -> bool {
        matches!(self.status.as_str(), "sent" | "queued" | "scheduled")
    }
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct MandrillErrorDto {
    status: String,
    code: Option<i64>,
    name: String,
    message: String,
}
