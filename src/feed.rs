use std::env;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use reqwest::StatusCode;
use serde_json::Value;

use crate::http_client::http_client;
use crate::normalize::RawRecord;
use crate::state::{Delta, ProviderCommand};
use crate::summarize;

const ENTRIES_PATH: &str = "performance_entries.json";

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub poll_interval: Duration,
}

impl StoreConfig {
    /// None when `DRILL_DB_URL` is unset; the caller falls back to the demo
    /// provider in that case.
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("DRILL_DB_URL")
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())?;
        let poll_secs = env::var("DRILL_POLL_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(15)
            .max(5);
        Some(Self {
            base_url,
            poll_interval: Duration::from_secs(poll_secs),
        })
    }

    fn entries_url(&self) -> String {
        format!("{}/{ENTRIES_PATH}", self.base_url)
    }
}

/// A store failure the provider must react to differently depending on kind:
/// permission problems are terminal for the session, anything else is logged
/// and retried on the next poll.
#[derive(Debug)]
enum StoreError {
    PermissionDenied(String),
    Other(anyhow::Error),
}

/// Spawn the store subscription thread. It polls the store for full
/// snapshots, pushes them as deltas, and serves append/summarize commands.
/// The thread exits when the delta channel disconnects, which is how the UI
/// releases the subscription on teardown.
pub fn spawn_store_provider(
    config: StoreConfig,
    seed: Vec<RawRecord>,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) {
    thread::spawn(move || run(config, seed, tx, cmd_rx));
}

fn run(
    config: StoreConfig,
    seed: Vec<RawRecord>,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) {
    let mut last_snapshot: Option<Vec<RawRecord>> = None;

    match connect_and_seed(&config, &seed) {
        Ok(records) => {
            last_snapshot = Some(records.clone());
            if tx.send(Delta::SetRecords(records)).is_err() {
                return;
            }
        }
        Err(StoreError::PermissionDenied(detail)) => {
            // Terminal: nothing more to poll until the store rules change.
            let _ = tx.send(Delta::PermissionDenied(detail));
            return;
        }
        Err(StoreError::Other(err)) => {
            let _ = tx.send(Delta::Log(format!("[WARN] Store connect error: {err:#}")));
        }
    }

    let mut last_poll = Instant::now();
    loop {
        let mut poll_now = false;
        match cmd_rx.recv_timeout(Duration::from_millis(400)) {
            Ok(ProviderCommand::Append(record)) => {
                let delta = match append_record(&config, &record) {
                    Ok(()) => Delta::AppendDone,
                    Err(err) => Delta::AppendFailed(format!("{err:#}")),
                };
                if tx.send(delta).is_err() {
                    return;
                }
                // Pick the new record up on the spot rather than waiting a
                // full poll interval.
                poll_now = true;
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
            Ok(ProviderCommand::RefreshNow) => poll_now = true,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return,
        }

        if poll_now || last_poll.elapsed() >= config.poll_interval {
            last_poll = Instant::now();
            match fetch_snapshot(&config) {
                Ok(records) => {
                    let records = records.unwrap_or_default();
                    if last_snapshot.as_ref() != Some(&records) {
                        last_snapshot = Some(records.clone());
                        if tx.send(Delta::SetRecords(records)).is_err() {
                            return;
                        }
                    }
                }
                Err(StoreError::PermissionDenied(detail)) => {
                    let _ = tx.send(Delta::PermissionDenied(detail));
                    return;
                }
                Err(StoreError::Other(err)) => {
                    if tx
                        .send(Delta::Log(format!("[WARN] Store poll error: {err:#}")))
                        .is_err()
                    {
                        return;
                    }
                }
            }
        }
    }
}

/// Initial connect: fetch the snapshot and, when the store is empty, write
/// the seed records and fetch again.
fn connect_and_seed(
    config: &StoreConfig,
    seed: &[RawRecord],
) -> Result<Vec<RawRecord>, StoreError> {
    match fetch_snapshot(config)? {
        Some(records) => Ok(records),
        None => {
            for record in seed {
                append_record(config, record).map_err(classify)?;
            }
            Ok(fetch_snapshot(config)?.unwrap_or_default())
        }
    }
}

/// GET the full record set. `Ok(None)` means the store path is empty (the
/// endpoint returns literal `null`).
fn fetch_snapshot(config: &StoreConfig) -> Result<Option<Vec<RawRecord>>, StoreError> {
    let client = http_client().map_err(StoreError::Other)?;
    let response = client
        .get(config.entries_url())
        .send()
        .context("fetch performance entries")
        .map_err(StoreError::Other)?;
    let status = response.status();
    let body = response
        .text()
        .context("read performance entries")
        .map_err(StoreError::Other)?;

    if is_permission_denied(status, &body) {
        return Err(StoreError::PermissionDenied(body));
    }
    if !status.is_success() {
        return Err(StoreError::Other(anyhow!("store returned {status}")));
    }

    let value: Value = serde_json::from_str(&body)
        .context("parse performance entries")
        .map_err(StoreError::Other)?;
    match value {
        Value::Null => Ok(None),
        // The store keys pushed records by id; the values are the tuples.
        // Ordering is whatever the object iteration yields, which is fine:
        // snapshots carry no ordering guarantee.
        Value::Object(map) => Ok(Some(
            map.into_values()
                .filter_map(as_record_tuple)
                .collect::<Vec<_>>(),
        )),
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(as_record_tuple)
                .collect::<Vec<_>>(),
        )),
        other => Err(StoreError::Other(anyhow!(
            "unexpected store payload: {other}"
        ))),
    }
}

fn as_record_tuple(value: Value) -> Option<RawRecord> {
    match value {
        Value::Array(fields) => Some(RawRecord(fields)),
        _ => None,
    }
}

fn append_record(config: &StoreConfig, record: &RawRecord) -> Result<()> {
    let client = http_client()?;
    let response = client
        .post(config.entries_url())
        .json(&record.0)
        .send()
        .context("append performance entry")?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        if is_permission_denied(status, &body) {
            return Err(anyhow!("store write refused: permission denied"));
        }
        return Err(anyhow!("store write returned {status}"));
    }
    Ok(())
}

fn is_permission_denied(status: StatusCode, body: &str) -> bool {
    status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || (!status.is_success() && body.to_ascii_lowercase().contains("permission denied"))
}

fn classify(err: anyhow::Error) -> StoreError {
    if format!("{err:#}").to_ascii_lowercase().contains("permission denied") {
        StoreError::PermissionDenied(format!("{err:#}"))
    } else {
        StoreError::Other(err)
    }
}
