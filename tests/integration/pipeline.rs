//! End-to-end runs through `FixtureRunner` and the table writer.

use chrono::NaiveDate;

use fixture_scout::config::AppConfig;
use fixture_scout::engine::dates::FixedClock;
use fixture_scout::engine::runner::{FixtureRunner, RunReport};
use fixture_scout::storage::{table, teams};
use fixture_scout::types::{Gender, SkipReason};

use crate::mock_fetcher::{header, match_row, page, MockFetcher};

const ARSENAL_URL: &str = "https://www.flashscore.com/search/?q=Arsenal";
const ARSENAL_W_URL: &str = "https://www.flashscore.com/search/?q=Arsenal%20women";

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap())
}

async fn run(fetcher: &MockFetcher, team_list: &str) -> RunReport {
    let clock = clock();
    let cfg = AppConfig::default();
    let runner = FixtureRunner::new(&cfg, fetcher, &clock).unwrap();
    runner.run(&teams::parse_teams(team_list)).await
}

fn temp_path(ext: &str) -> String {
    let mut p = std::env::temp_dir();
    p.push(format!("fixture_scout_it_{}.{ext}", uuid::Uuid::new_v4()));
    p.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_finished_match_dropped_upcoming_kept() {
    let fetcher = MockFetcher::new().with_page(
        ARSENAL_URL,
        &page(&[
            match_row("2 - 0", "Arsenal", "Spurs"),
            match_row("18:30", "Arsenal", "Chelsea"),
        ]),
    );

    let report = run(&fetcher, "Arsenal\nArsenal (W)\n").await;

    assert_eq!(fetcher.requests(), [ARSENAL_URL, ARSENAL_W_URL]);
    assert_eq!(report.fixtures.len(), 1);
    assert_eq!(
        table::to_csv_string(&report.fixtures),
        "Team,Opponent,Date,Kickoff,Gender\nArsenal,Chelsea,,18:30,Men\n"
    );
    assert_eq!(report.summary.teams_total, 2);
    assert_eq!(report.summary.teams_without_fixtures, 1);
    assert_eq!(report.summary.rows_skipped.get(&SkipReason::Finished), Some(&1));
}

#[tokio::test]
async fn test_empty_team_list_writes_header_only() {
    let fetcher = MockFetcher::new();
    let report = run(&fetcher, "").await;
    assert!(fetcher.requests().is_empty());

    let path = temp_path("csv");
    let rows = table::write_fixtures(&path, &report.fixtures).unwrap();
    assert_eq!(rows, 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Team,Opponent,Date,Kickoff,Gender\n");
    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn test_failed_team_does_not_stop_run() {
    let fetcher = MockFetcher::new().with_failure(ARSENAL_URL).with_page(
        ARSENAL_W_URL,
        &page(&[header("TODAY"), match_row("12:30", "Chelsea W", "Arsenal W")]),
    );

    let report = run(&fetcher, "Arsenal\nArsenal (W)\n").await;

    assert_eq!(report.summary.teams_failed, 1);
    assert_eq!(report.fixtures.len(), 1);
    let f = &report.fixtures[0];
    assert_eq!(f.team, "Arsenal");
    assert_eq!(f.opponent, "Chelsea W");
    assert_eq!(f.date, "2026-10-18");
    assert_eq!(f.gender, Gender::Women);
}

#[tokio::test]
async fn test_at_most_two_per_team() {
    let fetcher = MockFetcher::new().with_page(
        ARSENAL_URL,
        &page(&[
            header("TOMORROW"),
            match_row("15:00", "Arsenal", "Wolves"),
            header("12/01/2027"),
            match_row("17:30", "Everton", "Arsenal"),
            match_row("20:00", "Arsenal", "Leeds"),
        ]),
    );

    let report = run(&fetcher, "Arsenal\n").await;

    assert_eq!(report.fixtures.len(), 2);
    assert_eq!(report.fixtures[0].opponent, "Wolves");
    assert_eq!(report.fixtures[0].date, "2026-10-19");
    assert_eq!(report.fixtures[1].opponent, "Everton");
    assert_eq!(report.fixtures[1].date, "2027-01-12");
}

#[tokio::test]
async fn test_search_false_positives_ignored() {
    let fetcher = MockFetcher::new().with_page(
        ARSENAL_URL,
        &page(&[
            match_row("15:00", "Liverpool", "Chelsea"),
            match_row("17:30", "Liverpool", "Arsenal"),
        ]),
    );

    let report = run(&fetcher, "Arsenal\n").await;

    assert_eq!(report.fixtures.len(), 1);
    assert_eq!(report.fixtures[0].opponent, "Liverpool");
    assert_eq!(report.summary.rows_skipped.get(&SkipReason::OtherTeams), Some(&1));
}

#[tokio::test]
async fn test_output_keeps_team_order() {
    let fetcher = MockFetcher::new()
        .with_page(
            "https://www.flashscore.com/search/?q=Chelsea",
            &page(&[match_row("19:00", "Chelsea", "Fulham")]),
        )
        .with_page(ARSENAL_URL, &page(&[match_row("20:00", "Arsenal", "Spurs")]));

    let report = run(&fetcher, "Chelsea\nArsenal\n").await;
    let teams: Vec<_> = report.fixtures.iter().map(|f| f.team.as_str()).collect();
    assert_eq!(teams, ["Chelsea", "Arsenal"]);
}

#[tokio::test]
async fn test_team_list_from_file() {
    let path = temp_path("txt");
    std::fs::write(&path, "Arsenal\n\nArsenal (W)\n").unwrap();
    let entries = teams::load_teams(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let fetcher = MockFetcher::new();
    let clock = clock();
    let runner = FixtureRunner::new(&AppConfig::default(), &fetcher, &clock).unwrap();
    let report = runner.run(&entries).await;

    assert_eq!(fetcher.requests().len(), 2);
    assert!(report.fixtures.is_empty());
    assert_eq!(report.summary.teams_without_fixtures, 2);
}

#[tokio::test]
async fn test_inline_markup_in_cells_still_matches_team() {
    let row = r#"<div class="event__match">
                   <div class="event__time">18:<span>30</span></div>
                   <div class="event__participant--home"><b>Arsen</b>al</div>
                   <div class="event__participant--away">Chelsea</div>
                 </div>"#;
    let fetcher = MockFetcher::new().with_page(ARSENAL_URL, &page(&[row.to_string()]));

    let report = run(&fetcher, "Arsenal\n").await;

    assert_eq!(report.fixtures.len(), 1);
    assert_eq!(report.fixtures[0].opponent, "Chelsea");
    assert_eq!(report.fixtures[0].kickoff, "18:30");
    assert!(report.summary.rows_skipped.is_empty());
}
