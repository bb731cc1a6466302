//! Shared types for the fixture scout.
//!
//! These types form the data model passed between the loader, the
//! fetch/parse layer, the extractor and the table writer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

/// Which side of the game a team plays in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Men => write!(f, "Men"),
            Gender::Women => write!(f, "Women"),
        }
    }
}

/// One line of the team list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEntry {
    /// The line as read (trimmed).
    pub raw: String,
    /// True when the raw line carried the women's marker.
    pub is_women: bool,
    /// Marker stripped, trimmed. Used for searching and for matching rows.
    pub clean_name: String,
}

impl TeamEntry {
    pub fn gender(&self) -> Gender {
        if self.is_women {
            Gender::Women
        } else {
            Gender::Men
        }
    }
}

// ---------------------------------------------------------------------------
// Page fragments
// ---------------------------------------------------------------------------

/// One match row lifted out of a results page.
///
/// Every field is optional: the source markup is not under our control and
/// any sub-element may be missing. Text is whitespace-collapsed and trimmed;
/// empty text is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchBlock {
    /// Kickoff time ("18:30") for upcoming games, score/status otherwise.
    pub time: Option<String>,
    pub home: Option<String>,
    pub away: Option<String>,
    /// Text of the nearest date header preceding this row in the document.
    pub date_header: Option<String>,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// A single upcoming fixture, one row of the output table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureRecord {
    pub team: String,
    pub opponent: String,
    /// ISO date when the header could be resolved, the raw header text when
    /// it could not, empty when no header was ever seen.
    pub date: String,
    pub kickoff: String,
    pub gender: Gender,
}

impl FixtureRecord {
    /// Column order of the output table.
    pub const HEADERS: [&'static str; 5] = ["Team", "Opponent", "Date", "Kickoff", "Gender"];

    pub fn to_row(&self) -> [String; 5] {
        [
            self.team.clone(),
            self.opponent.clone(),
            self.date.clone(),
            self.kickoff.clone(),
            self.gender.to_string(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Why a match row produced no fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SkipReason {
    /// No kickoff/status text at all.
    MissingTime,
    /// Status text is a score or "FT", not an "HH:MM" kickoff.
    Finished,
    /// Home or away participant missing.
    MissingParticipant,
    /// Neither participant matches the queried team.
    OtherTeams,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::MissingTime => "missing time",
            SkipReason::Finished => "finished",
            SkipReason::MissingParticipant => "missing participant",
            SkipReason::OtherTeams => "other teams",
        };
        write!(f, "{s}")
    }
}

/// Result of running the extractor over one team's page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamOutcome {
    pub fixtures: Vec<FixtureRecord>,
    /// Index of the skipped row and the reason.
    pub skipped: Vec<(usize, SkipReason)>,
    /// Rows looked at before the cap stopped the scan.
    pub rows_examined: usize,
    /// Rows found on the page.
    pub rows_total: usize,
}

/// Aggregate counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub teams_total: usize,
    pub teams_failed: usize,
    pub teams_without_fixtures: usize,
    pub rows_seen: usize,
    pub rows_skipped: BTreeMap<SkipReason, usize>,
    pub fixtures: usize,
}

impl RunSummary {
    /// Fold one team's outcome into the totals.
    pub fn record_team(&mut self, outcome: &TeamOutcome) {
        self.rows_seen += outcome.rows_examined;
        for (_, reason) in &outcome.skipped {
            *self.rows_skipped.entry(*reason).or_insert(0) += 1;
        }
        if outcome.fixtures.is_empty() {
            self.teams_without_fixtures += 1;
        }
        self.fixtures += outcome.fixtures.len();
    }

    pub fn record_failure(&mut self) {
        self.teams_failed += 1;
    }

    pub fn total_skipped(&self) -> usize {
        self.rows_skipped.values().sum()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "teams={} failed={} empty={} rows_seen={} rows_skipped={} fixtures={}",
            self.teams_total,
            self.teams_failed,
            self.teams_without_fixtures,
            self.rows_seen,
            self.total_skipped(),
            self.fixtures,
        )
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    #[error("Fetch failed ({url}): {message}")]
    Fetch { url: String, message: String },

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
