use anyhow::{Result, ensure};
use clap::Parser;
use derive_getters::Getters;
use reqwest::Client;

use crate::{
    api::{AvApi, MandrillApi, av, mandrill},
    app::{ReportPipeline, RunSettings},
    models::EmailEnvelope,
};

pub const DEFAULT_SYMBOL: &str = "XEQT.TO";

/// Emails a daily price and performance report for one ticker.
#[derive(Clone, Debug, Getters, Parser)]
#[command(version, about)]
pub struct Config {
    /// Ticker to report on
    #[arg(long, env = "REPORT_SYMBOL", default_value = DEFAULT_SYMBOL)]
    symbol: String,

    /// Report heading, defaults to the symbol
    #[arg(long, env = "REPORT_TITLE")]
    title: Option<String>,

    #[arg(long, env = "ALPHA_VANTAGE_API_KEY", hide_env_values = true)]
    av_api_key: String,

    #[arg(long, env = "MANDRILL_API_KEY", hide_env_values = true)]
    mandrill_api_key: String,

    #[arg(long, env = "REPORT_FROM_EMAIL")]
    from_email: String,

    /// Recipient address; repeat or comma-separate for several
    #[arg(long = "to-email", env = "REPORT_TO_EMAIL", value_delimiter = ',', required = true)]
    to_emails: Vec<String>,

    #[arg(long, env = "REPORT_SUBJECT", default_value = "Stock Data")]
    subject: String,

    /// Calendar days of history to request
    #[arg(long, env = "REPORT_LOOKBACK_DAYS", default_value_t = 365)]
    lookback_days: u64,

    #[arg(long, env = "ALPHA_VANTAGE_BASE_URL", default_value = av::BASE_URL)]
    av_base_url: String,

    #[arg(long, env = "MANDRILL_BASE_URL", default_value = mandrill::BASE_URL)]
    mandrill_base_url: String,

    /// Print the report HTML instead of emailing it
    #[arg(long)]
    dry_run: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.symbol.trim().is_empty(), "Symbol must not be empty");
        ensure!(!self.av_api_key.trim().is_empty(), "Missing Alpha Vantage API key");
        ensure!(!self.mandrill_api_key.trim().is_empty(), "Missing Mandrill API key");
        ensure!(
            self.from_email.contains('@'),
            "Invalid sender address '{}'",
            self.from_email
        );
        for email in &self.to_emails {
            ensure!(email.contains('@'), "Invalid recipient address '{}'", email);
        }
        ensure!(self.lookback_days > 0, "Lookback must be at least one day");
        Ok(())
    }

    pub fn report_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.symbol)
    }

    pub fn envelope(&self) -> EmailEnvelope {
        EmailEnvelope::new(
            self.from_email.clone(),
            self.to_emails.iter().map(|email| email.trim().to_string()).collect(),
            self.subject.clone(),
        )
    }

    pub fn run_settings(&self) -> RunSettings {
        RunSettings::new(
            self.symbol.clone(),
            self.report_title().to_string(),
            self.lookback_days,
            self.dry_run,
            self.envelope(),
        )
    }

    pub fn pipeline(&self) -> ReportPipeline {
        let client = Client::new();
        ReportPipeline::new(
            AvApi::with_base_url(
                client.clone(),
                self.av_base_url.clone(),
                self.av_api_key.clone(),
            ),
            MandrillApi::with_base_url(
                client,
                self.mandrill_base_url.clone(),
                self.mandrill_api_key.clone(),
            ),
            self.run_settings(),
        )
    }
}
