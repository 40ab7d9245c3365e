use std::fmt;

use serde_json::json;

use crate::normalize::{RawRecord, parse_date};

/// Every record is logged against the same team; the form has no team field.
pub const DEFAULT_TEAM: &str = "4.D";

/// The closed set of selectable drills, in form order.
pub const DRILLS: [&str; 4] = ["Yo-Yo IR1", "Springseil", "Prellwand", "Jonglieren"];

pub const FALLBACK_UNITS: &str = "N/A";

/// Unit label for a drill. Derived, never user-entered.
pub fn units_for_drill(drill: &str) -> &'static str {
    match drill {
        "Yo-Yo IR1" => "Distance",
        "Springseil" => "Jumps",
        "Prellwand" => "Hits",
        "Jonglieren" => "Reps",
        _ => FALLBACK_UNITS,
    }
}

/// What the result form holds before validation. Score and date stay text
/// until `validate` shapes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: String,
    pub player: String,
    pub drill: String,
    pub score: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    BadScore(String),
    BadDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "missing field: {field}"),
            ValidationError::BadScore(raw) => write!(f, "score is not a number: {raw}"),
            ValidationError::BadDate(raw) => write!(f, "date is not YYYY-MM-DD: {raw}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a draft and shape it into a store-ready raw record. Does not
/// write anywhere itself; persistence failures are the provider's concern and
/// are reported separately from validation errors.
pub fn validate(draft: &EntryDraft) -> Result<RawRecord, ValidationError> {
    let required: [(&'static str, &str); 4] = [
        ("player", &draft.player),
        ("drill", &draft.drill),
        ("score", &draft.score),
        ("date", &draft.date),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    let score: f64 = draft
        .score
        .trim()
        .parse()
        .ok()
        .filter(|s: &f64| s.is_finite())
        .ok_or_else(|| ValidationError::BadScore(draft.score.clone()))?;
    let date = parse_date(&draft.date).ok_or_else(|| ValidationError::BadDate(draft.date.clone()))?;

    Ok(RawRecord(vec![
        json!(date.format("%Y-%m-%d").to_string()),
        json!(draft.player.trim()),
        json!(DEFAULT_TEAM),
        json!(draft.drill.trim()),
        json!(score),
        json!(units_for_drill(draft.drill.trim())),
        json!(draft.notes.trim()),
    ]))
}
