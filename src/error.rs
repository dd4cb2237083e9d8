use thiserror::Error;

/// Every way a report run can stop early.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Transport failure, or a non-2xx status on the latest-quote request.
    #[error("HTTP error occurred: {0}")]
    Http(String),

    /// The response parsed but did not have the expected shape.
    #[error("An error occurred: {0}")]
    UnexpectedData(String),

    #[error(
        "Not enough data to calculate percentage changes for the last 1 year ({found} closes, need {required})"
    )]
    InsufficientHistory { found: usize, required: usize },

    #[error("Failed to fetch historical data from Alpha Vantage. Status code: {status}")]
    HistoricalFetch { status: u16 },

    /// Mandrill refused the message.
    #[error("A mandrill error occurred: {0}")]
    Mail(String),
}

impl From<reqwest::Error> for ReportError {
    fn from(e: reqwest::Error) -> Self {
        ReportError::Http(e.without_url().to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::UnexpectedData(format!("json parse error: {e}"))
    }
}
