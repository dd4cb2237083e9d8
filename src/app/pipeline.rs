use chrono::{Days, NaiveDate};
use derive_getters::Getters;
use derive_new::new;
use log::info;

use crate::{
    api::{AvApi, MandrillApi, mandrill_dto::MandrillSendResultDto},
    app::{calc::compute_changes, report::render_report},
    error::ReportError,
    models::EmailEnvelope,
};

#[derive(Clone, Debug, Getters, new)]
pub struct RunSettings {
    symbol: String,
    title: String,
    lookback_days: u64,
    dry_run: bool,
    envelope: EmailEnvelope,
}

#[derive(Debug)]
pub enum RunOutcome {
    Sent(Vec<MandrillSendResultDto>),
    /// Rendered but not sent.
    DryRun(String),
}

pub struct ReportPipeline {
    av: AvApi,
    mailer: MandrillApi,
    settings: RunSettings,
}

impl ReportPipeline {
    pub fn new(av: AvApi, mailer: MandrillApi, settings: RunSettings) -> Self {
        Self {
            av,
            mailer,
            settings,
        }
    }

    /// Fetch, compute, render and send. Stops at the first failure; nothing
    /// is sent unless every earlier stage succeeded.
    pub async fn run(&self, today: NaiveDate) -> Result<RunOutcome, ReportError> {
        let symbol = self.settings.symbol();

        let quote = self.av.fetch_latest_quote(symbol).await?;

        let since = since_date(today, self.settings.lookback_days);
        let closes = self.av.fetch_historical_closes(symbol, since).await?;
        info!("Fetched {} closes for {} since {}", closes.len(), symbol, since);

        let changes = compute_changes(&closes)?;
        let html = render_report(&quote, self.settings.title(), &changes);

        if self.settings.dry_run {
            return Ok(RunOutcome::DryRun(html));
        }

        let results = self
            .mailer
            .send_email(self.settings.envelope(), &html)
            .await?;
        info!("Email sent successfully!");

        Ok(RunOutcome::Sent(results))
    }
}

pub fn since_date(today: NaiveDate, lookback_days: u64) -> NaiveDate {
    today
        .checked_sub_days(Days::new(lookback_days))
        .unwrap_or(NaiveDate::MIN)
}
