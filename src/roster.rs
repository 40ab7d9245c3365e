use std::collections::HashMap;
use std::env;
use std::fs;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde_json::Value;

/// Profile for one roster member. The player key (the map key in [`Roster`])
/// is what raw records reference; the full name is display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub full_name: String,
    pub dob: NaiveDate,
}

/// Immutable directory of known players, constructed once at startup and
/// passed into every component that needs it. The single source of truth for
/// "is this a known player": records that don't resolve here are dropped.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: HashMap<String, PlayerProfile>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            players: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: &str, full_name: &str, dob: NaiveDate) {
        self.players.insert(
            key.to_string(),
            PlayerProfile {
                full_name: full_name.to_string(),
                dob,
            },
        );
    }

    pub fn get(&self, key: &str) -> Option<&PlayerProfile> {
        self.players.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.players.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Player keys in lexicographic order, used for selector menus.
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.players.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// The roster the team actually runs with. Overridable via `DRILL_ROSTER`.
    pub fn builtin() -> Self {
        const PLAYERS: &[(&str, &str, &str)] = &[
            ("Ben", "Ben Winkler", "2012-03-15"),
            ("Emil", "Emil Hartmann", "2012-07-02"),
            ("Jonas", "Jonas Brandt", "2011-11-23"),
            ("Luca", "Luca Moser", "2012-01-30"),
            ("Mateo", "Mateo Vidal", "2012-09-08"),
            ("Niklas", "Niklas Thaler", "2011-12-17"),
            ("Noah", "Noah Steiner", "2012-05-21"),
            ("Paul", "Paul Gruber", "2013-02-11"),
            ("Tim", "Tim Berger", "2012-10-04"),
        ];

        let mut roster = Self::new();
        for (key, full_name, dob) in PLAYERS {
            // Dates are compile-time constants, parse cannot fail.
            if let Ok(dob) = NaiveDate::parse_from_str(dob, "%Y-%m-%d") {
                roster.insert(key, full_name, dob);
            }
        }
        roster
    }

    /// Load the roster from the JSON file named by `DRILL_ROSTER`, falling
    /// back to the built-in roster when the variable is unset. File format:
    /// an array of `[key, full_name, "YYYY-MM-DD"]` rows.
    pub fn from_env() -> Result<Self> {
        let Some(path) = env::var("DRILL_ROSTER").ok().filter(|p| !p.trim().is_empty()) else {
            return Ok(Self::builtin());
        };
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("read roster file {path}"))?;
        Self::from_json(&raw).with_context(|| format!("parse roster file {path}"))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let rows: Vec<Vec<Value>> = serde_json::from_str(raw).context("roster is not a JSON array")?;
        let mut roster = Self::new();
        for row in &rows {
            let (Some(key), Some(full_name), Some(dob)) = (
                row.first().and_then(Value::as_str),
                row.get(1).and_then(Value::as_str),
                row.get(2).and_then(Value::as_str),
            ) else {
                bail!("roster row is not [key, full_name, dob]: {row:?}");
            };
            let dob = NaiveDate::parse_from_str(dob, "%Y-%m-%d")
                .with_context(|| format!("roster dob for {key}"))?;
            roster.insert(key, full_name, dob);
        }
        if roster.is_empty() {
            bail!("roster file contains no players");
        }
        Ok(roster)
    }
}
