use serde_json::json;

use drillboard::submit::{
    DEFAULT_TEAM, EntryDraft, ValidationError, units_for_drill, validate,
};

fn full_draft() -> EntryDraft {
    EntryDraft {
        date: "2024-05-01".to_string(),
        player: "Ben".to_string(),
        drill: "Yo-Yo IR1".to_string(),
        score: "1240".to_string(),
        notes: String::new(),
    }
}

#[test]
fn missing_score_is_rejected() {
    let draft = EntryDraft {
        score: String::new(),
        ..full_draft()
    };
    assert_eq!(validate(&draft), Err(ValidationError::MissingField("score")));
}

#[test]
fn missing_player_is_rejected() {
    let draft = EntryDraft {
        player: "  ".to_string(),
        ..full_draft()
    };
    assert_eq!(validate(&draft), Err(ValidationError::MissingField("player")));
}

#[test]
fn non_numeric_score_is_rejected() {
    let draft = EntryDraft {
        score: "fast".to_string(),
        ..full_draft()
    };
    assert!(matches!(validate(&draft), Err(ValidationError::BadScore(_))));
}

#[test]
fn malformed_date_is_rejected() {
    let draft = EntryDraft {
        date: "01.05.2024".to_string(),
        ..full_draft()
    };
    assert!(matches!(validate(&draft), Err(ValidationError::BadDate(_))));
}

#[test]
fn unit_label_is_derived_from_the_drill() {
    let record = validate(&full_draft()).unwrap();
    assert_eq!(record.0[5], json!("Distance"));

    let springseil = EntryDraft {
        drill: "Springseil".to_string(),
        ..full_draft()
    };
    assert_eq!(validate(&springseil).unwrap().0[5], json!("Jumps"));
}

#[test]
fn unknown_drill_falls_back_to_sentinel_units() {
    assert_eq!(units_for_drill("Marathon"), "N/A");
}

#[test]
fn team_is_defaulted_not_user_entered() {
    let record = validate(&full_draft()).unwrap();
    assert_eq!(record.0[2], json!(DEFAULT_TEAM));
}

#[test]
fn record_is_shaped_as_the_seven_field_tuple() {
    let record = validate(&full_draft()).unwrap();
    assert_eq!(record.0.len(), 7);
    assert_eq!(record.0[0], json!("2024-05-01"));
    assert_eq!(record.0[1], json!("Ben"));
    assert_eq!(record.0[3], json!("Yo-Yo IR1"));
    // Score is numeric on the wire even though the form holds text.
    assert_eq!(record.0[4], json!(1240.0));
    assert_eq!(record.0[6], json!(""));
}
