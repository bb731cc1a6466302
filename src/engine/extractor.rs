//! Upcoming-fixture extraction.
//!
//! Walks one team's match rows in page order and keeps the first
//! `cap` rows that are upcoming and involve the team. Rows that do not
//! qualify are reported with a reason instead of being dropped silently.

use tracing::debug;

use super::dates::{normalize_date, Clock};
use crate::types::{FixtureRecord, MatchBlock, SkipReason, TeamEntry, TeamOutcome};

/// Which side of a row the queried team is on.
fn resolve_opponent(team: &str, home: &str, away: &str) -> Option<String> {
    let team = team.to_lowercase();
    if home.to_lowercase().contains(&team) {
        Some(away.to_string())
    } else if away.to_lowercase().contains(&team) {
        Some(home.to_string())
    } else {
        None
    }
}

/// Decide what a single row yields: a fixture (date filled in by caller)
/// or a skip reason.
fn classify(team: &TeamEntry, block: &MatchBlock) -> Result<(String, String), SkipReason> {
    let time = block.time.as_deref().ok_or(SkipReason::MissingTime)?;
    // Finished games show a score or status here, never "HH:MM".
    if !time.contains(':') {
        return Err(SkipReason::Finished);
    }

    let (home, away) = match (block.home.as_deref(), block.away.as_deref()) {
        (Some(h), Some(a)) => (h, a),
        _ => return Err(SkipReason::MissingParticipant),
    };

    let opponent =
        resolve_opponent(&team.clean_name, home, away).ok_or(SkipReason::OtherTeams)?;
    Ok((opponent, time.to_string()))
}

/// Extract at most `cap` upcoming fixtures for `team` from its page rows.
pub fn extract_fixtures(
    team: &TeamEntry,
    blocks: &[MatchBlock],
    clock: &dyn Clock,
    cap: usize,
) -> TeamOutcome {
    let mut outcome = TeamOutcome { rows_total: blocks.len(), ..TeamOutcome::default() };
    let mut current_date = String::new();

    for (idx, block) in blocks.iter().enumerate() {
        if outcome.fixtures.len() >= cap {
            break;
        }
        outcome.rows_examined += 1;

        // Headers group several rows; the cursor carries forward.
        if let Some(header) = block.date_header.as_deref() {
            current_date = normalize_date(header, clock);
        }

        match classify(team, block) {
            Ok((opponent, kickoff)) => outcome.fixtures.push(FixtureRecord {
                team: team.clean_name.clone(),
                opponent,
                date: current_date.clone(),
                kickoff,
                gender: team.gender(),
            }),
            Err(reason) => {
                debug!(team = %team.clean_name, row = idx, %reason, "Row skipped");
                outcome.skipped.push((idx, reason));
            }
        }
    }

    outcome
}
