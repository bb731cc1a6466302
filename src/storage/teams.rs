//! Team list loading.
//!
//! One team per line. A `(W)` anywhere on the line marks a women's team;
//! the marker is removed from the name used for searching.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

use crate::types::TeamEntry;

pub const WOMEN_MARKER: &str = "(W)";

/// Classify a single non-empty line.
pub fn parse_team_line(line: &str) -> TeamEntry {
    let raw = line.trim();
    TeamEntry {
        raw: raw.to_string(),
        is_women: raw.contains(WOMEN_MARKER),
        clean_name: raw.replace(WOMEN_MARKER, "").trim().to_string(),
    }
}

/// Parse a whole team list. Blank lines are ignored, order is kept and
/// duplicates are not removed.
pub fn parse_teams(text: &str) -> Vec<TeamEntry> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(parse_team_line)
        .filter(|entry| {
            // A bare marker would match every row on the page.
            if entry.clean_name.is_empty() {
                warn!(raw = %entry.raw, "Team line has no name, ignoring");
                false
            } else {
                true
            }
        })
        .collect()
}

/// Load the team list from disk.
/// A missing file is an empty list, so the run still writes its table.
pub fn load_teams(path: &str) -> Result<Vec<TeamEntry>> {
    if !Path::new(path).exists() {
        warn!(path, "Team list not found, continuing with no teams");
        return Ok(Vec::new());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read team list from {path}"))?;
    let teams = parse_teams(&text);

    info!(path, count = teams.len(), "Team list loaded");
    Ok(teams)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
