use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::roster::Roster;

/// A record as it sits in the store: a positional tuple
/// `[date, playerKey, team, drill, score, units, notes]` whose fields may
/// arrive as strings or numbers. No ordering guarantee across a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub Vec<Value>);

impl RawRecord {
    pub fn date(&self) -> Option<&Value> {
        self.0.first()
    }

    pub fn player(&self) -> Option<&Value> {
        self.0.get(1)
    }
}

/// A normalized performance record. Every entry's player key resolves in the
/// roster; the date of birth is copied over at normalization time and never
/// re-resolved. The whole set is rebuilt from scratch on every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceEntry {
    pub date: NaiveDate,
    pub player: String,
    pub dob: NaiveDate,
    pub team: String,
    pub drill: String,
    pub score: f64,
    pub units: String,
    pub notes: String,
}

/// Convert a raw snapshot into typed entries. Pure: output order matches
/// input order, consumers impose their own sorts. Records are dropped when
/// the player key is not in the roster, the score is not a finite number, or
/// the date does not parse — none of these surface as errors, they are
/// treated as noise in the store.
pub fn normalize(raw: &[RawRecord], roster: &Roster) -> Vec<PerformanceEntry> {
    raw.iter()
        .filter_map(|record| normalize_one(record, roster))
        .collect()
}

fn normalize_one(record: &RawRecord, roster: &Roster) -> Option<PerformanceEntry> {
    let fields = &record.0;
    let player = coerce_text(fields.get(1));
    let profile = roster.get(&player)?;
    let date = parse_date(&coerce_text(fields.first()))?;
    let score = coerce_number(fields.get(4)).filter(|s| s.is_finite())?;
    Some(PerformanceEntry {
        date,
        player,
        dob: profile.dob,
        team: coerce_text(fields.get(2)),
        drill: coerce_text(fields.get(3)),
        score,
        units: coerce_text(fields.get(5)),
        notes: coerce_text(fields.get(6)),
    })
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
