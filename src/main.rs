//! BTC indicator dashboard entry point.

use std::io;

use tracing::info;

use btc_dash::config::Config;
use btc_dash::error::DashError;
use btc_dash::market::IndexClient;
use btc_dash::render::Dashboard;
use btc_dash::{logging, signals};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().map_err(DashError::Config)?;
    config.validate().map_err(DashError::InvalidConfig)?;

    let _log_path = logging::init(&config)?;

    let client = IndexClient::new(&config);
    let mut dashboard = Dashboard::new(io::stdout());

    dashboard.enter()?;

    let result = run(&config, &client, &mut dashboard).await;

    // Unconditional terminal restore; the Drop guard only covers the
    // paths that never reach here.
    dashboard.exit()?;

    match result {
        Ok(()) => {
            println!("Exiting dashboard...");
            Ok(())
        }
        Err(e) => {
            println!("Something unexpected happened: {e}");
            Err(e)
        }
    }
}

/// Fetch, evaluate, render, sleep; repeats until interrupted.
///
/// Ctrl-C is raced against both the fetch phase and the sleep, so the
/// loop can be broken at any point of a cycle. Fetch failures are not
/// retried within a cycle; they surface as absent values until the next
/// one.
async fn run(
    config: &Config,
    client: &IndexClient,
    dashboard: &mut Dashboard<io::Stdout>,
) -> anyhow::Result<()> {
    info!(refresh_secs = config.refresh_seconds, "starting dashboard loop");

    loop {
        dashboard.status_fetching()?;

        let snapshot = tokio::select! {
            snapshot = client.snapshot() => snapshot,
            _ = tokio::signal::ctrl_c() => return Ok(()),
        };

        let report = signals::evaluate(&snapshot);
        dashboard.draw(&snapshot, &report)?;

        tokio::select! {
            _ = tokio::time::sleep(config.refresh_interval()) => {}
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }

        dashboard.erase_block(report.line_count())?;
    }
}
