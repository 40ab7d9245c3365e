use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};

use crate::normalize::PerformanceEntry;

/// Age in whole years plus completed months (0-11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: i32,
    pub months: u32,
}

/// A player's entry annotated with its rank inside the drill's distinct-score
/// ordering (all players, duplicate scores collapse to one position).
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub entry: PerformanceEntry,
    pub rank: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PlayerHistory {
    /// Date-descending, most recent first.
    pub history: Vec<RankedEntry>,
    /// None when the player has no entries, even if the roster knows the dob.
    pub age: Option<Age>,
    pub total: usize,
    /// Per drill, date-ascending (date, score) pairs for charting.
    pub series: BTreeMap<String, Vec<(NaiveDate, f64)>>,
}

/// Build the per-player view: ranked, date-descending history plus per-drill
/// time-series. Ranks are computed against all entries of each drill, not
/// just the selected player's. `today` is injected so the age is testable.
pub fn build_history(
    entries: &[PerformanceEntry],
    player_key: &str,
    today: NaiveDate,
) -> PlayerHistory {
    let mine: Vec<&PerformanceEntry> = entries
        .iter()
        .filter(|entry| entry.player == player_key)
        .collect();
    if mine.is_empty() {
        return PlayerHistory::default();
    }

    let distinct = distinct_scores_by_drill(entries);
    let mut history: Vec<RankedEntry> = mine
        .iter()
        .map(|entry| RankedEntry {
            entry: (*entry).clone(),
            rank: rank_in(distinct.get(entry.drill.as_str()), entry.score),
        })
        .collect();
    history.sort_by(|a, b| b.entry.date.cmp(&a.entry.date));

    let mut series: BTreeMap<String, Vec<(NaiveDate, f64)>> = BTreeMap::new();
    for entry in &mine {
        series
            .entry(entry.drill.clone())
            .or_default()
            .push((entry.date, entry.score));
    }
    for points in series.values_mut() {
        points.sort_by_key(|(date, _)| *date);
    }

    // All of the player's entries carry the same dob, copied from one roster
    // record at normalization time.
    let age = mine.first().map(|entry| age_on(entry.dob, today));

    PlayerHistory {
        total: history.len(),
        history,
        age,
        series,
    }
}

/// Completed-months age: total elapsed months, minus one when the evaluation
/// day-of-month has not yet reached the birth day-of-month.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> Age {
    let mut months =
        (today.year() - dob.year()) * 12 + today.month() as i32 - dob.month() as i32;
    if today.day() < dob.day() {
        months -= 1;
    }
    let months = months.max(0);
    Age {
        years: months / 12,
        months: (months % 12) as u32,
    }
}

fn distinct_scores_by_drill(entries: &[PerformanceEntry]) -> HashMap<&str, Vec<f64>> {
    let mut scores: HashMap<&str, Vec<f64>> = HashMap::new();
    for entry in entries {
        scores.entry(entry.drill.as_str()).or_default().push(entry.score);
    }
    for list in scores.values_mut() {
        list.sort_by(|a, b| b.total_cmp(a));
        list.dedup();
    }
    scores
}

fn rank_in(distinct_desc: Option<&Vec<f64>>, score: f64) -> usize {
    distinct_desc
        .and_then(|scores| scores.iter().position(|s| *s == score))
        .map(|pos| pos + 1)
        .unwrap_or(0)
}
