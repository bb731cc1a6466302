//! Run parameters.
//!
//! Fixed constants; there is no configuration file. Tests build variants
//! with struct update syntax and `validate` them.

use std::time::Duration;

use crate::types::ScoutError;

/// Search endpoint; the escaped query text is appended as-is.
pub const SEARCH_URL: &str = "https://www.flashscore.com/search/?q=";

pub const TEAMS_FILE: &str = "teams.txt";
pub const OUTPUT_FILE: &str = "fixtures_flashscore.csv";

/// Upcoming fixtures kept per team.
pub const MAX_FIXTURES_PER_TEAM: usize = 2;

const FETCH_TIMEOUT_SECS: u64 = 60;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub search_url: String,
    pub teams_file: String,
    pub output_file: String,
    pub max_fixtures_per_team: usize,
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Pause after each request, spacing out consecutive requests to the
    /// site. It does not affect page content.
    pub request_pause_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_url: SEARCH_URL.to_string(),
            teams_file: TEAMS_FILE.to_string(),
            output_file: OUTPUT_FILE.to_string(),
            max_fixtures_per_team: MAX_FIXTURES_PER_TEAM,
            fetch: FetchConfig::default(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: FETCH_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
            request_pause_ms: 0,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn request_pause(&self) -> Duration {
        Duration::from_millis(self.request_pause_ms)
    }
}

impl AppConfig {
    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ScoutError> {
        if self.search_url.trim().is_empty() {
            return Err(ScoutError::Config("search_url is empty".into()));
        }
        if self.max_fixtures_per_team == 0 {
            return Err(ScoutError::Config("max_fixtures_per_team must be at least 1".into()));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ScoutError::Config("fetch.timeout_secs must be at least 1".into()));
        }
        Ok(())
    }
}
