use chrono::NaiveDate;
use serde_json::{Value, json};

use drillboard::normalize::{RawRecord, normalize};
use drillboard::roster::Roster;

fn team_roster() -> Roster {
    let mut roster = Roster::new();
    roster.insert(
        "Ben",
        "Ben Winkler",
        NaiveDate::from_ymd_opt(2012, 3, 15).unwrap(),
    );
    roster.insert(
        "Emil",
        "Emil Hartmann",
        NaiveDate::from_ymd_opt(2012, 7, 2).unwrap(),
    );
    roster
}

fn record(date: &str, player: &str, score: Value) -> RawRecord {
    RawRecord(vec![
        json!(date),
        json!(player),
        json!("4.D"),
        json!("Springseil"),
        score,
        json!("Jumps"),
        json!(""),
    ])
}

#[test]
fn unknown_player_records_are_dropped() {
    let roster = team_roster();
    let raw = vec![
        record("2024-05-01", "Ben", json!(120)),
        record("2024-05-01", "Zlatan", json!(300)),
    ];

    let entries = normalize(&raw, &roster);
    assert_eq!(entries.len(), 1);
    assert!(entries.iter().all(|e| roster.contains(&e.player)));
}

#[test]
fn numeric_string_scores_coerce() {
    let roster = team_roster();
    let raw = vec![record("2024-05-01", "Ben", json!("117.5"))];

    let entries = normalize(&raw, &roster);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].score, 117.5);
}

#[test]
fn non_numeric_scores_are_dropped() {
    let roster = team_roster();
    let raw = vec![
        record("2024-05-01", "Ben", json!("DNF")),
        record("2024-05-01", "Emil", json!(80)),
    ];

    let entries = normalize(&raw, &roster);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].player, "Emil");
}

#[test]
fn unparseable_dates_are_dropped() {
    let roster = team_roster();
    let raw = vec![
        record("yesterday", "Ben", json!(120)),
        record("2024-05-01", "Ben", json!(120)),
    ];

    let entries = normalize(&raw, &roster);
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].date,
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    );
}

#[test]
fn mixed_primitive_fields_coerce_to_text() {
    let roster = team_roster();
    // Team arrived as a number, notes missing entirely.
    let raw = vec![RawRecord(vec![
        json!("2024-05-01"),
        json!("Ben"),
        json!(4),
        json!("Jonglieren"),
        json!(33),
        json!("Reps"),
    ])];

    let entries = normalize(&raw, &roster);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].team, "4");
    assert_eq!(entries[0].notes, "");
}

#[test]
fn output_preserves_input_order() {
    let roster = team_roster();
    let raw = vec![
        record("2024-05-03", "Emil", json!(90)),
        record("2024-05-01", "Ben", json!(120)),
        record("2024-05-02", "Ben", json!(110)),
    ];

    let entries = normalize(&raw, &roster);
    let players: Vec<&str> = entries.iter().map(|e| e.player.as_str()).collect();
    assert_eq!(players, ["Emil", "Ben", "Ben"]);
}

#[test]
fn dob_is_copied_from_the_roster_at_normalization_time() {
    let roster = team_roster();
    let raw = vec![record("2024-05-01", "Ben", json!(120))];

    let entries = normalize(&raw, &roster);
    assert_eq!(
        entries[0].dob,
        NaiveDate::from_ymd_opt(2012, 3, 15).unwrap()
    );
}
