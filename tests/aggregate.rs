use chrono::NaiveDate;

use drillboard::aggregate::{aggregate, round2};
use drillboard::normalize::PerformanceEntry;

fn entry(player: &str, drill: &str, date: &str, score: f64) -> PerformanceEntry {
    PerformanceEntry {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        player: player.to_string(),
        dob: NaiveDate::from_ymd_opt(2012, 3, 15).unwrap(),
        team: "4.D".to_string(),
        drill: drill.to_string(),
        score,
        units: "Jumps".to_string(),
        notes: String::new(),
    }
}

#[test]
fn average_is_the_rounded_arithmetic_mean() {
    let entries = vec![
        entry("Ben", "Springseil", "2024-05-01", 1.0),
        entry("Emil", "Springseil", "2024-05-01", 2.0),
        entry("Tim", "Springseil", "2024-05-01", 2.0),
    ];

    let boards = aggregate(&entries);
    let rows = &boards["Springseil"];
    assert!(rows.iter().all(|row| row.average == 1.67));
}

#[test]
fn rows_are_sorted_by_score_descending_and_stable_on_ties() {
    let entries = vec![
        entry("Ben", "Prellwand", "2024-05-01", 30.0),
        entry("Emil", "Prellwand", "2024-05-01", 45.0),
        entry("Tim", "Prellwand", "2024-05-01", 30.0),
    ];

    let boards = aggregate(&entries);
    let players: Vec<&str> = boards["Prellwand"]
        .iter()
        .map(|row| row.player.as_str())
        .collect();
    // Ben entered before Tim, equal scores keep that order.
    assert_eq!(players, ["Emil", "Ben", "Tim"]);
}

#[test]
fn drills_iterate_in_lexicographic_order() {
    let entries = vec![
        entry("Ben", "Springseil", "2024-05-01", 100.0),
        entry("Ben", "Jonglieren", "2024-05-01", 20.0),
        entry("Ben", "Prellwand", "2024-05-01", 40.0),
    ];

    let boards = aggregate(&entries);
    let drills: Vec<&str> = boards.keys().map(String::as_str).collect();
    assert_eq!(drills, ["Jonglieren", "Prellwand", "Springseil"]);
}

#[test]
fn single_drill_average_matches_known_mean() {
    let entries = vec![
        entry("Ben", "Yo-Yo IR1", "2024-05-01", 50.0),
        entry("Ben", "Yo-Yo IR1", "2024-05-08", 70.0),
    ];

    let boards = aggregate(&entries);
    let rows = &boards["Yo-Yo IR1"];
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].average, 60.00);
    assert_eq!(rows[0].score, 70.0);
    assert_eq!(rows[1].score, 50.0);
}

#[test]
fn empty_input_produces_no_boards() {
    let boards = aggregate(&[]);
    assert!(boards.is_empty());
}

#[test]
fn round2_is_half_away_from_zero() {
    // Binary-exact halves, so the rule is what decides, not representation.
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(-0.125), -0.13);
    assert_eq!(round2(2.375), 2.38);
}
