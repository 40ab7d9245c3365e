use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Sparkline, Wrap};

use drillboard::aggregate::LeaderboardRow;
use drillboard::fake_feed;
use drillboard::feed::{self, StoreConfig};
use drillboard::history::{PlayerHistory, build_history};
use drillboard::roster::Roster;
use drillboard::state::{
    AppState, Delta, FormField, FormNotice, Phase, ProviderCommand, Screen, SummaryState,
    apply_delta,
};
use drillboard::submit::{DRILLS, EntryDraft, units_for_drill, validate};

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: mpsc::Sender<ProviderCommand>,
}

impl App {
    fn new(roster: Roster, cmd_tx: mpsc::Sender<ProviderCommand>) -> Self {
        Self {
            state: AppState::new(roster, Local::now().date_naive()),
            should_quit: false,
            cmd_tx,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.help_overlay {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
                self.state.help_overlay = false;
            }
            return;
        }

        // Permission errors are terminal for the session: only quitting is
        // left.
        if matches!(self.state.phase, Phase::PermissionError(_)) {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                self.should_quit = true;
            }
            return;
        }

        if self.state.screen == Screen::AddResult {
            self.on_form_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.screen = Screen::Dashboard,
            KeyCode::Char('2') => self.state.screen = Screen::Player,
            KeyCode::Char('3') => self.state.screen = Screen::AddResult,
            KeyCode::Char('?') => self.state.help_overlay = true,
            KeyCode::Char('r') => {
                if self.cmd_tx.send(ProviderCommand::RefreshNow).is_ok() {
                    self.state.push_log("[INFO] Refresh requested");
                }
            }
            _ => match self.state.screen {
                Screen::Dashboard => self.on_dashboard_key(key),
                Screen::Player => self.on_player_key(key),
                Screen::AddResult => {}
            },
        }
    }

    fn on_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('a') => self.request_summary(),
            KeyCode::Char('t') => self.state.thinking_mode = !self.state.thinking_mode,
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next_drill(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev_drill(),
            KeyCode::Char('f') | KeyCode::Enter => {
                if !self.state.leaderboards.is_empty() {
                    self.state.fullscreen_drill = !self.state.fullscreen_drill;
                }
            }
            KeyCode::Esc => self.state.fullscreen_drill = false,
            KeyCode::PageDown => {
                self.state.summary_scroll = self.state.summary_scroll.saturating_add(3);
            }
            KeyCode::PageUp => {
                self.state.summary_scroll = self.state.summary_scroll.saturating_sub(3);
            }
            _ => {}
        }
    }

    fn on_player_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next_player(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev_player(),
            _ => {}
        }
    }

    fn on_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.screen = Screen::Dashboard,
            KeyCode::Tab | KeyCode::Down => self.state.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.focus_prev(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match self.state.form.focused() {
                    FormField::Player => {
                        let len = self.state.player_keys.len().max(1);
                        let idx = &mut self.state.form.player_idx;
                        *idx = if forward { (*idx + 1) % len } else { (*idx + len - 1) % len };
                    }
                    FormField::Drill => {
                        let len = DRILLS.len();
                        let idx = &mut self.state.form.drill_idx;
                        *idx = if forward { (*idx + 1) % len } else { (*idx + len - 1) % len };
                    }
                    _ => {}
                }
            }
            KeyCode::Backspace => {
                match self.state.form.focused() {
                    FormField::Score => {
                        self.state.form.score.pop();
                    }
                    FormField::Date => {
                        self.state.form.date.pop();
                    }
                    FormField::Notes => {
                        self.state.form.notes.pop();
                    }
                    _ => {}
                }
            }
            KeyCode::Char(c) => match self.state.form.focused() {
                FormField::Score => {
                    if c.is_ascii_digit() || c == '.' || c == '-' {
                        self.state.form.score.push(c);
                    }
                }
                FormField::Date => {
                    if c.is_ascii_digit() || c == '-' {
                        self.state.form.date.push(c);
                    }
                }
                FormField::Notes => self.state.form.notes.push(c),
                _ => {}
            },
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        if self.state.form.saving {
            return;
        }
        let draft = EntryDraft {
            date: self.state.form.date.clone(),
            player: self
                .state
                .form_player_key()
                .unwrap_or_default()
                .to_string(),
            drill: self.state.form_drill().to_string(),
            score: self.state.form.score.clone(),
            notes: self.state.form.notes.clone(),
        };
        match validate(&draft) {
            Ok(record) => {
                self.state.form.saving = true;
                self.state.form.notice = None;
                if self.cmd_tx.send(ProviderCommand::Append(record)).is_err() {
                    self.state.form.saving = false;
                    self.state.form.notice =
                        Some(FormNotice::Error("Save failed: store unavailable".to_string()));
                }
            }
            Err(err) => {
                self.state.form.notice = Some(FormNotice::Error(err.to_string()));
            }
        }
    }

    fn request_summary(&mut self) {
        let Some(mode) = self.state.begin_summary() else {
            self.state.push_log("[INFO] Summary request already running");
            return;
        };
        let entries = self.state.entries.clone();
        if self
            .cmd_tx
            .send(ProviderCommand::Summarize { entries, mode })
            .is_err()
        {
            self.state.summary = SummaryState::Failed("Summarizer unavailable".to_string());
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let roster = Roster::from_env()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    match StoreConfig::from_env() {
        Some(config) => {
            feed::spawn_store_provider(config, fake_feed::seed_records(&roster), tx, cmd_rx)
        }
        None => fake_feed::spawn_fake_provider(tx, cmd_rx),
    }

    let mut app = App::new(roster, cmd_tx);
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match &app.state.phase {
        Phase::PermissionError(detail) => render_permission_takeover(frame, chunks[1], detail),
        Phase::Loading => {
            let loading = Paragraph::new("Connecting to the record store...")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(loading, chunks[1]);
        }
        Phase::Ready => match app.state.screen {
            Screen::Dashboard => render_dashboard(frame, chunks[1], &app.state),
            Screen::Player => render_player(frame, chunks[1], &app.state),
            Screen::AddResult => render_add_result(frame, chunks[1], &app.state),
        },
    }

    let footer =
        Paragraph::new(footer_text(&app.state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let screen = match state.screen {
        Screen::Dashboard => "DRILL DASHBOARD",
        Screen::Player => "PLAYER DEEP DIVE",
        Screen::AddResult => "ADD RESULT",
    };
    let phase = match state.phase {
        Phase::Loading => "LOADING",
        Phase::Ready => "READY",
        Phase::PermissionError(_) => "PERMISSION ERROR",
    };
    let ai = if state.thinking_mode { "THOROUGH" } else { "FAST" };
    format!("DRILLBOARD | Team 4.D | {screen} | {phase} | AI: {ai}")
}

fn footer_text(state: &AppState) -> String {
    let hints = match state.screen {
        Screen::Dashboard => {
            "1/2/3 Views | j/k Drill | f Fullscreen | a Summary | t AI mode | PgUp/PgDn Scroll | r Refresh | ? Help | q Quit"
        }
        Screen::Player => "1/2/3 Views | j/k Player | r Refresh | ? Help | q Quit",
        Screen::AddResult => "Tab Next field | \u{2190}/\u{2192} Change option | Enter Save | Esc Back",
    };
    let last_log = state.logs.back().map(String::as_str).unwrap_or("");
    format!("{last_log}\n{hints}")
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.fullscreen_drill {
        if let Some(drill) = state.selected_drill_name() {
            if let Some(rows) = state.leaderboards.get(drill) {
                render_drill_chart(frame, area, drill, rows, true);
                return;
            }
        }
    }

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(1)])
        .split(area);

    render_summary_card(frame, sections[0], state);
    render_leaderboards(frame, sections[1], state);
}

fn render_summary_card(frame: &mut Frame, area: Rect, state: &AppState) {
    let (text, style) = match &state.summary {
        SummaryState::Idle => (
            "Press 'a' for an AI summary of the team's performance.".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        SummaryState::Loading => ("Analyzing...".to_string(), Style::default().fg(Color::Yellow)),
        SummaryState::Done(text) => (text.clone(), Style::default()),
        SummaryState::Failed(message) => (message.clone(), Style::default().fg(Color::Red)),
    };
    let card = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((state.summary_scroll, 0))
        .block(
            Block::default()
                .title("Performance Analysis")
                .borders(Borders::ALL),
        );
    frame.render_widget(card, area);
}

fn render_leaderboards(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.leaderboards.is_empty() {
        let empty =
            Paragraph::new("No entries yet").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let drills: Vec<(&String, &Vec<LeaderboardRow>)> = state.leaderboards.iter().collect();
    let rows = drills.len().div_ceil(2);
    let row_constraints: Vec<Constraint> = (0..rows)
        .map(|_| Constraint::Ratio(1, rows as u32))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row_idx, row_area) in row_areas.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);
        for col_idx in 0..2 {
            let idx = row_idx * 2 + col_idx;
            let Some((drill, board)) = drills.get(idx) else {
                continue;
            };
            render_drill_chart(frame, cols[col_idx], drill, board, idx == state.selected_drill);
        }
    }
}

fn render_drill_chart(
    frame: &mut Frame,
    area: Rect,
    drill: &str,
    board: &[LeaderboardRow],
    selected: bool,
) {
    let average = board.first().map(|row| row.average).unwrap_or(0.0);
    let units = board
        .first()
        .map(|row| row.units.as_str())
        .filter(|u| !u.is_empty())
        .map(|u| format!(" {u}"))
        .unwrap_or_default();
    let title = format!("{drill} | avg {average:.2}{units}");
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let max = board
        .iter()
        .map(|row| row.score)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let bars: Vec<Bar> = board
        .iter()
        .map(|row| {
            let above_avg = row.score >= row.average;
            let style = if above_avg {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            Bar::default()
                .label(Line::from(row.player.clone()))
                .value(row.score.max(0.0).round() as u64)
                .text_value(fmt_score(row.score))
                .style(style)
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(1)
        .max(max.round() as u64);
    frame.render_widget(chart, area);
}

fn render_player(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(player_key) = state.selected_player_key() else {
        let empty = Paragraph::new("Roster is empty").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    };
    let player_key = player_key.to_string();
    let full_name = state
        .roster
        .get(&player_key)
        .map(|p| p.full_name.clone())
        .unwrap_or_else(|| player_key.clone());
    let view = build_history(&state.entries, &player_key, Local::now().date_naive());

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let selector = Paragraph::new(format!("Player: < {full_name} >   (j/k to change)"))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(selector, sections[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(sections[1]);
    let age = view
        .age
        .map(|a| format!("{}y {}m", a.years, a.months))
        .unwrap_or_else(|| "N/A".to_string());
    let age_card =
        Paragraph::new(age).block(Block::default().title("Age").borders(Borders::ALL));
    frame.render_widget(age_card, cards[0]);
    let entries_card = Paragraph::new(view.total.to_string())
        .block(Block::default().title("Entries").borders(Borders::ALL));
    frame.render_widget(entries_card, cards[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(32)])
        .split(sections[2]);

    render_history_table(frame, body[0], &view);
    render_player_series(frame, body[1], &view);
}

fn render_history_table(frame: &mut Frame, area: Rect, view: &PlayerHistory) {
    let mut lines = vec![format!(
        "{:<12} {:<14} {:>5} {:>10}",
        "Date", "Drill", "Rank", "Score"
    )];
    for ranked in &view.history {
        let entry = &ranked.entry;
        lines.push(format!(
            "{:<12} {:<14} {:>5} {:>10}",
            entry.date.format("%Y-%m-%d"),
            entry.drill,
            format!("#{}", ranked.rank),
            format!("{} {}", fmt_score(entry.score), entry.units),
        ));
    }
    if view.history.is_empty() {
        lines.push("No data available for the selected player".to_string());
    }
    let table = Paragraph::new(lines.join("\n"))
        .block(Block::default().title("History").borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn render_player_series(frame: &mut Frame, area: Rect, view: &PlayerHistory) {
    let block = Block::default().title("Trend").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if view.series.is_empty() || inner.height == 0 {
        return;
    }

    let per_drill = (inner.height / view.series.len().max(1) as u16).max(2);
    let constraints: Vec<Constraint> = view
        .series
        .iter()
        .map(|_| Constraint::Length(per_drill))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (slot, (drill, points)) in slots.iter().zip(view.series.iter()) {
        if slot.height < 2 {
            continue;
        }
        let label_area = Rect { height: 1, ..*slot };
        let spark_area = Rect {
            y: slot.y + 1,
            height: slot.height - 1,
            ..*slot
        };
        let label = Paragraph::new(drill.as_str()).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(label, label_area);
        let data: Vec<u64> = points
            .iter()
            .map(|(_, score)| score.max(0.0).round() as u64)
            .collect();
        let spark = Sparkline::default()
            .data(&data)
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(spark, spark_area);
    }
}

fn render_add_result(frame: &mut Frame, area: Rect, state: &AppState) {
    let form_width = area.width.min(60);
    let form_area = Rect {
        x: area.x + (area.width - form_width) / 2,
        width: form_width,
        ..area
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(form_area);

    let player = state
        .form_player_key()
        .map(|key| {
            state
                .roster
                .get(key)
                .map(|p| p.full_name.clone())
                .unwrap_or_else(|| key.to_string())
        })
        .unwrap_or_else(|| "-".to_string());
    let drill = state.form_drill();
    let score_title = format!("Score ({})", units_for_drill(drill));

    render_form_field(
        frame,
        sections[0],
        "Player",
        &format!("< {player} >"),
        state.form.focused() == FormField::Player,
    );
    render_form_field(
        frame,
        sections[1],
        "Drill",
        &format!("< {drill} >"),
        state.form.focused() == FormField::Drill,
    );
    render_form_field(
        frame,
        sections[2],
        &score_title,
        &state.form.score,
        state.form.focused() == FormField::Score,
    );
    render_form_field(
        frame,
        sections[3],
        "Date",
        &state.form.date,
        state.form.focused() == FormField::Date,
    );
    render_form_field(
        frame,
        sections[4],
        "Notes",
        &state.form.notes,
        state.form.focused() == FormField::Notes,
    );

    let notice = if state.form.saving {
        Some(("Saving...".to_string(), Style::default().fg(Color::Yellow)))
    } else {
        state.form.notice.as_ref().map(|notice| match notice {
            FormNotice::Saved(text) => (text.clone(), Style::default().fg(Color::Green)),
            FormNotice::Error(text) => (text.clone(), Style::default().fg(Color::Red)),
        })
    };
    if let Some((text, style)) = notice {
        let message = Paragraph::new(text).style(style);
        frame.render_widget(message, sections[5]);
    }
}

fn render_form_field(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let shown = if focused && !value.starts_with('<') {
        format!("{value}\u{2588}")
    } else {
        value.to_string()
    };
    let field = Paragraph::new(shown).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(field, area);
}

fn render_permission_takeover(frame: &mut Frame, area: Rect, detail: &str) {
    let popup = centered_rect(70, 60, area);
    frame.render_widget(Clear, popup);

    let detail_line: String = detail.replace('\n', " ").chars().take(120).collect();
    let text = [
        "PERMISSION DENIED",
        "",
        "The record store refused access while connecting or seeding.",
        "",
        "To fix it:",
        "  1. Open the realtime database rules for this project.",
        "  2. Allow read/write on /performance_entries.",
        "  3. Restart drillboard.",
        "",
        &format!("Store said: {detail_line}"),
        "",
        "q / Esc quit",
    ]
    .join("\n");

    let takeover = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Store Error").borders(Borders::ALL));
    frame.render_widget(takeover, popup);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Drillboard - Help",
        "",
        "Global:",
        "  1            Drill dashboard",
        "  2            Player deep dive",
        "  3            Add result",
        "  r            Refresh snapshot",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Dashboard:",
        "  j/k          Select drill",
        "  f / Enter    Fullscreen chart",
        "  a            AI summary",
        "  t            Toggle thinking mode",
        "  PgUp/PgDn    Scroll summary",
        "",
        "Add result:",
        "  Tab          Next field",
        "  \u{2190}/\u{2192}          Change player/drill",
        "  Enter        Save",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

fn fmt_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}
