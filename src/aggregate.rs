use std::collections::BTreeMap;

use crate::normalize::PerformanceEntry;

/// One leaderboard line. `average` is the drill-wide mean, repeated on every
/// row of the drill so each row can be rendered against the same reference.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub player: String,
    pub score: f64,
    pub units: String,
    pub average: f64,
}

/// Group entries by drill and rank each partition by score descending
/// (stable, so equal scores keep their input order). The BTreeMap keys give
/// the lexicographic drill iteration order the dashboard displays.
pub fn aggregate(entries: &[PerformanceEntry]) -> BTreeMap<String, Vec<LeaderboardRow>> {
    let mut partitions: BTreeMap<String, Vec<&PerformanceEntry>> = BTreeMap::new();
    for entry in entries {
        partitions.entry(entry.drill.clone()).or_default().push(entry);
    }

    let mut boards = BTreeMap::new();
    for (drill, partition) in partitions {
        if partition.is_empty() {
            continue;
        }
        let total: f64 = partition.iter().map(|e| e.score).sum();
        let average = round2(total / partition.len() as f64);

        let mut rows: Vec<LeaderboardRow> = partition
            .iter()
            .map(|entry| LeaderboardRow {
                player: entry.player.clone(),
                score: entry.score,
                units: entry.units.clone(),
                average,
            })
            .collect();
        rows.sort_by(|a, b| b.score.total_cmp(&a.score));
        boards.insert(drill, rows);
    }
    boards
}

/// Round to 2 decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
