//! Run orchestration.
//!
//! Teams are processed one at a time: build the search URL, fetch,
//! parse, extract, append. A failed fetch or a bad row never stops the
//! run; both are counted in the `RunSummary`.

use anyhow::Result;
use tracing::{debug, info, warn};

use super::dates::Clock;
use super::extractor::extract_fixtures;
use super::query::build_search_url;
use crate::config::AppConfig;
use crate::data::page::PageParser;
use crate::data::PageFetcher;
use crate::types::{FixtureRecord, RunSummary, TeamEntry};

/// Everything one run produced.
#[derive(Debug, Default)]
pub struct RunReport {
    pub fixtures: Vec<FixtureRecord>,
    pub summary: RunSummary,
}

pub struct FixtureRunner<'a> {
    fetcher: &'a dyn PageFetcher,
    clock: &'a dyn Clock,
    parser: PageParser,
    search_url: String,
    cap: usize,
}

impl<'a> FixtureRunner<'a> {
    pub fn new(cfg: &AppConfig, fetcher: &'a dyn PageFetcher, clock: &'a dyn Clock) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            fetcher,
            clock,
            parser: PageParser::new()?,
            search_url: cfg.search_url.clone(),
            cap: cfg.max_fixtures_per_team,
        })
    }

    /// Process every team in order and collect their fixtures.
    pub async fn run(&self, teams: &[TeamEntry]) -> RunReport {
        let mut report = RunReport::default();
        report.summary.teams_total = teams.len();

        info!(teams = teams.len(), fetcher = self.fetcher.name(), "Starting fixture run");

        for team in teams {
            let url = build_search_url(&self.search_url, &team.clean_name, team.is_women);

            let html = match self.fetcher.fetch(&url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!(team = %team.clean_name, url = %url, error = %e, "Fetch failed, skipping team");
                    report.summary.record_failure();
                    continue;
                }
            };

            let blocks = self.parser.parse(&html);
            if blocks.is_empty() {
                debug!(team = %team.clean_name, "No match rows on page");
            }

            let outcome = extract_fixtures(team, &blocks, self.clock, self.cap);
            info!(
                team = %team.clean_name,
                gender = %team.gender(),
                rows = outcome.rows_total,
                skipped = outcome.skipped.len(),
                fixtures = outcome.fixtures.len(),
                "Team processed"
            );

            report.summary.record_team(&outcome);
            report.fixtures.extend(outcome.fixtures);
        }

        info!(summary = %report.summary, "Fixture run complete");
        report
    }
}
