//! Fixture scout entry point.
//!
//! Reads `teams.txt`, looks up each team's upcoming fixtures on the
//! results site, writes `fixtures_flashscore.csv` and prints one line
//! with the row count. Diagnostics go to stderr through `tracing`.

use anyhow::Result;
use tracing::info;

use fixture_scout::config::AppConfig;
use fixture_scout::data::flashscore::HttpPageFetcher;
use fixture_scout::engine::dates::SystemClock;
use fixture_scout::engine::runner::FixtureRunner;
use fixture_scout::storage::{table, teams};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cfg = AppConfig::default();
    let teams = teams::load_teams(&cfg.teams_file)?;

    let fetcher = HttpPageFetcher::new(cfg.fetch.clone())?;
    let clock = SystemClock;
    let runner = FixtureRunner::new(&cfg, &fetcher, &clock)?;

    let report = runner.run(&teams).await;
    let rows = table::write_fixtures(&cfg.output_file, &report.fixtures)?;

    info!(
        path = %cfg.output_file,
        rows,
        failed_teams = report.summary.teams_failed,
        skipped_rows = report.summary.total_skipped(),
        "Fixtures saved"
    );
    println!("Saved {} with {rows} rows", cfg.output_file);

    Ok(())
}

/// Initialise the `tracing` subscriber on stderr.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fixture_scout=warn"));

    let json_logging = std::env::var("FIXTURE_SCOUT_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
