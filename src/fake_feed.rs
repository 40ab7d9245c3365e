use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};
use rand::Rng;
use serde_json::json;

use crate::normalize::RawRecord;
use crate::roster::Roster;
use crate::state::{Delta, ProviderCommand};
use crate::submit::{DEFAULT_TEAM, DRILLS, units_for_drill};
use crate::summarize;

/// In-process stand-in for the record store, used when `DRILL_DB_URL` is
/// unset. Appends land in a local vec and come back through the same
/// full-snapshot delta path the real provider uses, so the UI behaves
/// identically (no optimistic updates).
pub fn spawn_fake_provider(tx: Sender<Delta>, cmd_rx: Receiver<ProviderCommand>) {
    thread::spawn(move || {
        let mut records = seed_records(&Roster::builtin());
        let _ = tx.send(Delta::Log(
            "[INFO] DRILL_DB_URL not set, running on demo data".to_string(),
        ));
        if tx.send(Delta::SetRecords(records.clone())).is_err() {
            return;
        }

        loop {
            match cmd_rx.recv_timeout(Duration::from_millis(400)) {
                Ok(ProviderCommand::Append(record)) => {
                    records.push(record);
                    if tx.send(Delta::AppendDone).is_err() {
                        return;
                    }
                    if tx.send(Delta::SetRecords(records.clone())).is_err() {
                        return;
                    }
                }
                Ok(ProviderCommand::Summarize { entries, mode }) => {
                    let delta = match summarize::summarize(&entries, mode) {
                        Ok(text) => Delta::SummaryReady(text),
                        Err(err) => Delta::SummaryFailed(format!("{err:#}")),
                    };
                    if tx.send(delta).is_err() {
                        return;
                    }
                }
                Ok(ProviderCommand::RefreshNow) => {
                    if tx.send(Delta::SetRecords(records.clone())).is_err() {
                        return;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return,
            }
        }
    });
}

/// Plausible drill results for every roster player over the last few training
/// sessions. Also used by the real provider to seed an empty store.
pub fn seed_records(roster: &Roster) -> Vec<RawRecord> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();
    let sessions: Vec<String> = [21, 14, 7]
        .into_iter()
        .map(|days| (today - ChronoDuration::days(days)).format("%Y-%m-%d").to_string())
        .collect();

    let mut records = Vec::new();
    for player in roster.sorted_keys() {
        for drill in DRILLS {
            for session in &sessions {
                // Not every player ran every drill every session.
                if rng.gen_bool(0.35) {
                    continue;
                }
                records.push(RawRecord(vec![
                    json!(session),
                    json!(player),
                    json!(DEFAULT_TEAM),
                    json!(drill),
                    json!(sample_score(drill, &mut rng)),
                    json!(units_for_drill(drill)),
                    json!(""),
                ]));
            }
        }
    }
    records
}

fn sample_score(drill: &str, rng: &mut impl Rng) -> f64 {
    match drill {
        // Yo-Yo IR1 distance comes in 40m shuttles.
        "Yo-Yo IR1" => f64::from(rng.gen_range(11..=37) * 40),
        "Springseil" => f64::from(rng.gen_range(40..=180)),
        "Prellwand" => f64::from(rng.gen_range(15..=60)),
        "Jonglieren" => f64::from(rng.gen_range(5..=80)),
        _ => f64::from(rng.gen_range(1..=100)),
    }
}
