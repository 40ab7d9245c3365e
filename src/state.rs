use std::collections::{BTreeMap, VecDeque};

use chrono::NaiveDate;

use crate::aggregate::{LeaderboardRow, aggregate};
use crate::normalize::{PerformanceEntry, RawRecord, normalize};
use crate::roster::Roster;
use crate::submit::DRILLS;
use crate::summarize::SummaryMode;

const MAX_LOG_LINES: usize = 200;

/// The three top-level screens. A closed set; keys 1/2/3 switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Player,
    AddResult,
}

/// Session phase. `PermissionError` is terminal: the store refused us during
/// connect/seed, the takeover screen stays up until the user fixes the store
/// rules and restarts. Later snapshots are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    PermissionError(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryState {
    Idle,
    Loading,
    Done(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNotice {
    Saved(String),
    Error(String),
}

/// Focusable fields of the result form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Player,
    Drill,
    Score,
    Date,
    Notes,
}

pub const FORM_FIELDS: [FormField; 5] = [
    FormField::Player,
    FormField::Drill,
    FormField::Score,
    FormField::Date,
    FormField::Notes,
];

#[derive(Debug, Clone)]
pub struct FormState {
    pub player_idx: usize,
    pub drill_idx: usize,
    pub score: String,
    pub date: String,
    pub notes: String,
    pub focus: usize,
    pub saving: bool,
    pub notice: Option<FormNotice>,
    default_date: String,
}

impl FormState {
    pub fn new(today: NaiveDate) -> Self {
        let date = today.format("%Y-%m-%d").to_string();
        Self {
            player_idx: 0,
            drill_idx: 0,
            score: String::new(),
            date: date.clone(),
            notes: String::new(),
            focus: 0,
            saving: false,
            notice: None,
            default_date: date,
        }
    }

    pub fn focused(&self) -> FormField {
        FORM_FIELDS[self.focus % FORM_FIELDS.len()]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FORM_FIELDS.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FORM_FIELDS.len() - 1) % FORM_FIELDS.len();
    }

    /// On a confirmed write: clear the measured values, keep player and drill
    /// so a coach can log a whole session quickly.
    pub fn reset_after_save(&mut self) {
        self.score.clear();
        self.notes.clear();
        self.date = self.default_date.clone();
    }
}

/// Everything the UI reads. The normalized entry set has exactly one writer,
/// `apply_delta`, which replaces it wholesale per snapshot; leaderboards are
/// re-derived only at that point (memoization by snapshot identity).
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub phase: Phase,
    pub roster: Roster,
    pub player_keys: Vec<String>,
    pub entries: Vec<PerformanceEntry>,
    pub leaderboards: BTreeMap<String, Vec<LeaderboardRow>>,
    pub selected_player: usize,
    pub selected_drill: usize,
    pub fullscreen_drill: bool,
    pub thinking_mode: bool,
    pub summary: SummaryState,
    pub summary_scroll: u16,
    pub form: FormState,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl AppState {
    pub fn new(roster: Roster, today: NaiveDate) -> Self {
        let player_keys = roster.sorted_keys();
        Self {
            screen: Screen::Dashboard,
            phase: Phase::Loading,
            roster,
            player_keys,
            entries: Vec::new(),
            leaderboards: BTreeMap::new(),
            selected_player: 0,
            selected_drill: 0,
            fullscreen_drill: false,
            thinking_mode: false,
            summary: SummaryState::Idle,
            summary_scroll: 0,
            form: FormState::new(today),
            logs: VecDeque::with_capacity(MAX_LOG_LINES),
            help_overlay: false,
        }
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        if self.logs.len() >= MAX_LOG_LINES {
            self.logs.pop_front();
        }
        self.logs.push_back(line.into());
    }

    pub fn selected_player_key(&self) -> Option<&str> {
        self.player_keys
            .get(self.selected_player)
            .map(String::as_str)
    }

    pub fn select_next_player(&mut self) {
        if !self.player_keys.is_empty() {
            self.selected_player = (self.selected_player + 1) % self.player_keys.len();
        }
    }

    pub fn select_prev_player(&mut self) {
        if !self.player_keys.is_empty() {
            self.selected_player =
                (self.selected_player + self.player_keys.len() - 1) % self.player_keys.len();
        }
    }

    pub fn select_next_drill(&mut self) {
        if !self.leaderboards.is_empty() {
            self.selected_drill = (self.selected_drill + 1) % self.leaderboards.len();
        }
    }

    pub fn select_prev_drill(&mut self) {
        if !self.leaderboards.is_empty() {
            self.selected_drill =
                (self.selected_drill + self.leaderboards.len() - 1) % self.leaderboards.len();
        }
    }

    pub fn selected_drill_name(&self) -> Option<&str> {
        self.leaderboards
            .keys()
            .nth(self.selected_drill)
            .map(String::as_str)
    }

    pub fn form_player_key(&self) -> Option<&str> {
        if self.player_keys.is_empty() {
            return None;
        }
        self.player_keys
            .get(self.form.player_idx % self.player_keys.len())
            .map(String::as_str)
    }

    pub fn form_drill(&self) -> &'static str {
        DRILLS[self.form.drill_idx % DRILLS.len()]
    }

    /// Start a summary request if none is in flight. Returns the mode to
    /// request, or None when a request is already running (blocked, not
    /// queued).
    pub fn begin_summary(&mut self) -> Option<SummaryMode> {
        if self.summary == SummaryState::Loading {
            return None;
        }
        self.summary = SummaryState::Loading;
        self.summary_scroll = 0;
        Some(if self.thinking_mode {
            SummaryMode::Thorough
        } else {
            SummaryMode::Fast
        })
    }
}

/// Messages from the provider thread to the UI.
#[derive(Debug, Clone)]
pub enum Delta {
    /// Full snapshot of the store, replacing whatever was held before.
    SetRecords(Vec<RawRecord>),
    /// The store refused access during connect/seed. Terminal.
    PermissionDenied(String),
    SummaryReady(String),
    SummaryFailed(String),
    AppendDone,
    AppendFailed(String),
    Log(String),
}

/// Requests from the UI to the provider thread.
#[derive(Debug, Clone)]
pub enum ProviderCommand {
    Append(RawRecord),
    Summarize {
        entries: Vec<PerformanceEntry>,
        mode: SummaryMode,
    },
    RefreshNow,
}

/// The single writer of the normalized snapshot. Replacement is one
/// assignment; readers never see a half-replaced set.
pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetRecords(records) => {
            if matches!(state.phase, Phase::PermissionError(_)) {
                return;
            }
            let entries = normalize(&records, &state.roster);
            state.leaderboards = aggregate(&entries);
            if state.selected_drill >= state.leaderboards.len() {
                state.selected_drill = 0;
            }
            state.entries = entries;
            state.phase = Phase::Ready;
        }
        Delta::PermissionDenied(detail) => {
            state.phase = Phase::PermissionError(detail);
        }
        Delta::SummaryReady(text) => {
            state.summary = SummaryState::Done(text);
        }
        Delta::SummaryFailed(message) => {
            state.summary = SummaryState::Failed(message);
        }
        Delta::AppendDone => {
            state.form.saving = false;
            state.form.notice = Some(FormNotice::Saved("Result saved".to_string()));
            state.form.reset_after_save();
        }
        Delta::AppendFailed(message) => {
            // Keep the draft so the coach can retry.
            state.form.saving = false;
            state.form.notice = Some(FormNotice::Error(format!("Save failed: {message}")));
        }
        Delta::Log(line) => state.push_log(line),
    }
}
