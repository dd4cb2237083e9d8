use chrono::Local;
use clap::Parser;
use dotenv::dotenv;
use log::{error, info};

use stock_report_mailer::{app::RunOutcome, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::parse();
    config.validate()?;

    let pipeline = config.pipeline();
    let today = Local::now().date_naive();

    // Failures end the run but are not reported through the exit code.
    match pipeline.run(today).await {
        Ok(RunOutcome::Sent(results)) => {
            info!(
                "Report for {} delivered to {} recipient(s)",
                config.symbol(),
                results.len()
            );
        }
        Ok(RunOutcome::DryRun(html)) => println!("{}", html),
        Err(e) => error!("{}", e),
    }

    Ok(())
}
