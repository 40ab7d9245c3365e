use chrono::NaiveDate;

use drillboard::aggregate::aggregate;
use drillboard::history::{Age, age_on, build_history};
use drillboard::normalize::PerformanceEntry;

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn entry(player: &str, drill: &str, day: &str, score: f64) -> PerformanceEntry {
    PerformanceEntry {
        date: date(day),
        player: player.to_string(),
        dob: date("2012-03-15"),
        team: "4.D".to_string(),
        drill: drill.to_string(),
        score,
        units: "Jumps".to_string(),
        notes: String::new(),
    }
}

#[test]
fn rank_collapses_duplicate_scores() {
    // Drill scores [100, 90, 90, 80]: both 90s rank 2, the 80 ranks 3.
    let entries = vec![
        entry("Ben", "Springseil", "2024-05-01", 100.0),
        entry("Emil", "Springseil", "2024-05-01", 90.0),
        entry("Tim", "Springseil", "2024-05-01", 90.0),
        entry("Tim", "Springseil", "2024-04-24", 80.0),
    ];

    let view = build_history(&entries, "Tim", date("2024-06-01"));
    assert_eq!(view.total, 2);
    let ranks: Vec<usize> = view.history.iter().map(|r| r.rank).collect();
    // Date descending: the 90 from May 1st first, then the 80.
    assert_eq!(ranks, [2, 3]);
}

#[test]
fn rank_is_computed_against_all_players_of_the_drill() {
    let entries = vec![
        entry("Ben", "Prellwand", "2024-05-01", 60.0),
        entry("Emil", "Prellwand", "2024-05-01", 40.0),
    ];

    // Emil only has one entry, but Ben's 60 pushes it to rank 2.
    let view = build_history(&entries, "Emil", date("2024-06-01"));
    assert_eq!(view.history[0].rank, 2);
}

#[test]
fn history_is_sorted_most_recent_first() {
    let entries = vec![
        entry("Ben", "Springseil", "2024-04-01", 80.0),
        entry("Ben", "Jonglieren", "2024-05-20", 30.0),
        entry("Ben", "Springseil", "2024-05-01", 90.0),
    ];

    let view = build_history(&entries, "Ben", date("2024-06-01"));
    let dates: Vec<NaiveDate> = view.history.iter().map(|r| r.entry.date).collect();
    assert_eq!(
        dates,
        [date("2024-05-20"), date("2024-05-01"), date("2024-04-01")]
    );
}

#[test]
fn series_are_chronological_per_drill() {
    let entries = vec![
        entry("Ben", "Springseil", "2024-05-08", 95.0),
        entry("Ben", "Springseil", "2024-04-24", 80.0),
        entry("Ben", "Jonglieren", "2024-05-01", 25.0),
    ];

    let view = build_history(&entries, "Ben", date("2024-06-01"));
    assert_eq!(view.series.len(), 2);
    let springseil = &view.series["Springseil"];
    assert_eq!(
        springseil,
        &vec![(date("2024-04-24"), 80.0), (date("2024-05-08"), 95.0)]
    );
}

#[test]
fn player_without_entries_has_no_age_or_history() {
    let entries = vec![entry("Ben", "Springseil", "2024-05-01", 80.0)];

    let view = build_history(&entries, "Emil", date("2024-06-01"));
    assert!(view.history.is_empty());
    assert_eq!(view.age, None);
    assert_eq!(view.total, 0);
}

#[test]
fn age_uses_completed_months() {
    let dob = date("2012-03-15");
    assert_eq!(age_on(dob, date("2024-03-14")), Age { years: 11, months: 11 });
    assert_eq!(age_on(dob, date("2024-03-15")), Age { years: 12, months: 0 });
    // One day short of a full month past the birthday still counts 0 months.
    assert_eq!(age_on(dob, date("2024-04-14")), Age { years: 12, months: 0 });
    assert_eq!(age_on(dob, date("2024-04-15")), Age { years: 12, months: 1 });
}

#[test]
fn age_is_taken_from_the_entries_dob() {
    let entries = vec![entry("Ben", "Springseil", "2024-05-01", 80.0)];

    let view = build_history(&entries, "Ben", date("2024-05-01"));
    assert_eq!(view.age, Some(Age { years: 12, months: 1 }));
}

#[test]
fn two_results_rank_and_average_consistently() {
    // End to end: two records for one player on one drill, scores 50 and 70.
    let entries = vec![
        entry("Ben", "Yo-Yo IR1", "2024-05-01", 50.0),
        entry("Ben", "Yo-Yo IR1", "2024-05-08", 70.0),
    ];

    let view = build_history(&entries, "Ben", date("2024-06-01"));
    assert_eq!(view.history[0].entry.score, 70.0);
    assert_eq!(view.history[0].rank, 1);
    assert_eq!(view.history[1].entry.score, 50.0);
    assert_eq!(view.history[1].rank, 2);

    let boards = aggregate(&entries);
    assert_eq!(boards["Yo-Yo IR1"][0].average, 60.00);
}
