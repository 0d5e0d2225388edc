use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph};

use valorant_companion::assets::{AssetCatalog, tier_name};
use valorant_companion::bookmarks::CellSubscriptions;
use valorant_companion::config::AppConfig;
use valorant_companion::demo_feed::DemoClient;
use valorant_companion::load::LoadManager;
use valorant_companion::logging;
use valorant_companion::match_view::PaletteColor;
use valorant_companion::mission::{ContractEntry, MissionRow, ProgressIndicator};
use valorant_companion::model::UserId;
use valorant_companion::provider::spawn_provider;
use valorant_companion::scoreboard::{self, FontWeight, kda_summary};
use valorant_companion::state::{
    AppState, CareerScreen, Delta, ProviderCommand, Tab, apply_delta,
};

const LOOKUP_REFRESH: Duration = Duration::from_secs(30);

struct App {
    state: AppState,
    config: AppConfig,
    loads: LoadManager,
    cells: CellSubscriptions,
    should_quit: bool,
}

impl App {
    fn new(config: AppConfig, cmd_tx: Option<mpsc::Sender<ProviderCommand>>) -> Self {
        let mut state = AppState::new(config.viewer.clone(), AssetCatalog::demo());
        state.tab = config.start_tab;
        Self {
            state,
            config,
            loads: LoadManager::new(cmd_tx),
            cells: CellSubscriptions::default(),
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Char('1') => self.state.tab = Tab::Career,
            KeyCode::Char('2') => self.state.tab = Tab::Live,
            KeyCode::Tab => {
                self.state.tab = match self.state.tab {
                    Tab::Career => Tab::Live,
                    Tab::Live => Tab::Career,
                }
            }
            _ if !self.state.is_signed_in() => {}
            _ => match self.state.tab {
                Tab::Career => self.on_career_key(key),
                Tab::Live => self.on_live_key(key),
            },
        }
    }

    fn on_career_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Esc | KeyCode::Backspace => self.state.back(),
            _ => match self.state.career_screen().clone() {
                CareerScreen::Bookmarks => self.on_bookmarks_key(key),
                CareerScreen::MatchList { user_id } => match key.code {
                    KeyCode::Enter | KeyCode::Char('d') => {
                        if let Some(match_id) = self.state.selected_match_id() {
                            self.state.open_match(match_id.clone());
                            if self.state.match_view().is_none() {
                                self.loads.load(
                                    &mut self.state,
                                    ProviderCommand::FetchMatchDetails { match_id },
                                    true,
                                );
                            }
                        }
                    }
                    KeyCode::Char('b') => self.state.toggle_bookmark(&user_id),
                    KeyCode::Char('r') => {
                        self.loads.load(
                            &mut self.state,
                            ProviderCommand::FetchMatchHistory { user_id },
                            true,
                        );
                    }
                    _ => {}
                },
                CareerScreen::MatchDetails { .. } => self.on_match_key(key),
            },
        }
    }

    fn on_bookmarks_key(&mut self, key: KeyEvent) {
        let Some(user_id) = self.state.selected_user() else {
            return;
        };
        match key.code {
            KeyCode::Enter | KeyCode::Char('d') => {
                self.state.open_match_list(user_id.clone());
                self.loads.load(
                    &mut self.state,
                    ProviderCommand::FetchMatchHistory { user_id },
                    true,
                );
            }
            KeyCode::Char('x') => self.state.toggle_bookmark(&user_id),
            _ => {}
        }
    }

    fn on_match_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.state.toggle_selected_highlight(),
            KeyCode::Char('p') => {
                let Some(player) = self.state.selected_player() else {
                    return;
                };
                let is_myself = self
                    .state
                    .match_view()
                    .is_some_and(|view| view.is_myself(&player));
                if !is_myself {
                    self.state.open_match_list(player.clone());
                    self.loads.load(
                        &mut self.state,
                        ProviderCommand::FetchMatchHistory { user_id: player },
                        true,
                    );
                }
            }
            KeyCode::Char('b') => {
                if let Some(player) = self.state.selected_player() {
                    self.state.toggle_bookmark(&player);
                }
            }
            KeyCode::Char('r') => self.update_ranks(),
            _ => {}
        }
    }

    fn on_live_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('r') {
            if let Some(user_id) = self.state.viewer.clone() {
                self.loads.load(
                    &mut self.state,
                    ProviderCommand::FetchContractDetails { user_id },
                    true,
                );
            }
        }
    }

    fn update_ranks(&mut self) {
        let Some(view) = self.state.match_view() else {
            return;
        };
        let targets = scoreboard::rank_refresh_targets(view);
        let total = targets.len();
        let sent = targets
            .into_iter()
            .filter(|user_id| {
                self.loads.load(
                    &mut self.state,
                    ProviderCommand::FetchCareerSummary {
                        user_id: user_id.clone(),
                    },
                    false,
                )
            })
            .count();
        self.state
            .push_log(format!("[INFO] Updating ranks ({sent}/{total} requests sent)"));
    }

    /// Keeps subscriptions in step with the visible screen and issues due refreshes.
    fn maybe_refresh(&mut self) -> bool {
        let Some(viewer) = self.state.viewer.clone() else {
            return false;
        };

        let on_bookmarks = self.state.tab == Tab::Career
            && *self.state.career_screen() == CareerScreen::Bookmarks;
        let wanted = if on_bookmarks {
            self.state.listed_users()
        } else {
            Vec::new()
        };
        let state = &mut self.state;
        let resubscribed = self.cells.sync(
            &wanted,
            &mut state.users,
            &mut state.identities,
            &mut state.summaries,
        );
        let changed = self.cells.drain_changes() || resubscribed;

        for user_id in self.cells.user_ids().to_vec() {
            if self.state.users.get(&user_id).is_none() {
                self.loads.load_if_stale(
                    &mut self.state,
                    ProviderCommand::FetchUser {
                        user_id: user_id.clone(),
                    },
                    LOOKUP_REFRESH,
                );
            }
            if self.state.identities.get(&user_id).is_none() {
                self.loads.load_if_stale(
                    &mut self.state,
                    ProviderCommand::FetchIdentity { user_id },
                    LOOKUP_REFRESH,
                );
            }
        }
        for user_id in self.state.summaries.auto_update_keys() {
            self.loads.load_if_stale(
                &mut self.state,
                ProviderCommand::FetchCareerSummary { user_id },
                self.config.summary_refresh,
            );
        }

        match self.state.tab {
            Tab::Live => {
                self.loads.load_if_stale(
                    &mut self.state,
                    ProviderCommand::FetchContractDetails { user_id: viewer },
                    self.config.contract_refresh,
                );
            }
            Tab::Career => match self.state.career_screen().clone() {
                CareerScreen::Bookmarks => {}
                CareerScreen::MatchList { user_id } => {
                    if !self.state.histories.contains_key(&user_id) {
                        self.loads.load_if_stale(
                            &mut self.state,
                            ProviderCommand::FetchMatchHistory {
                                user_id: user_id.clone(),
                            },
                            LOOKUP_REFRESH,
                        );
                    }
                    let missing: Vec<_> = self
                        .state
                        .match_list_rows(&user_id)
                        .into_iter()
                        .filter(|row| !self.state.match_details.contains_key(&row.match_id))
                        .map(|row| row.match_id)
                        .collect();
                    for match_id in missing {
                        self.loads.load_if_stale(
                            &mut self.state,
                            ProviderCommand::FetchMatchDetails { match_id },
                            LOOKUP_REFRESH,
                        );
                    }
                }
                CareerScreen::MatchDetails { match_id } => {
                    if !self.state.match_details.contains_key(&match_id) {
                        self.loads.load_if_stale(
                            &mut self.state,
                            ProviderCommand::FetchMatchDetails { match_id },
                            LOOKUP_REFRESH,
                        );
                    }
                }
            },
        }
        changed
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let log_path = match logging::init() {
        Ok(path) => path,
        Err(err) => {
            eprintln!("logging disabled: {err:#}");
            None
        }
    };
    let config = AppConfig::from_env();
    tracing::info!(viewer = ?config.viewer, log = ?log_path, "starting");

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    if let Some(viewer) = config.viewer.as_ref() {
        spawn_provider(DemoClient::new(config.demo_seed, viewer), tx, cmd_rx);
    }
    let cmd_tx = config.viewer.as_ref().map(|_| cmd_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(config, cmd_tx);
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "ui loop failed");
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
    let mut dirty = true;

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
            dirty = true;
        }

        dirty |= app.maybe_refresh();

        if dirty || last_tick.elapsed() >= tick_rate {
            terminal.draw(|f| ui(f, app))?;
            dirty = false;
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                    dirty = true;
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
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    if !app.state.is_signed_in() {
        let placeholder = Paragraph::new("Not signed in!")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, chunks[1]);
    } else {
        match app.state.tab {
            Tab::Career => match app.state.career_screen() {
                CareerScreen::Bookmarks => render_bookmarks(frame, chunks[1], &app.state),
                CareerScreen::MatchList { user_id } => {
                    render_match_list(frame, chunks[1], &app.state, user_id)
                }
                CareerScreen::MatchDetails { .. } => {
                    render_scoreboard(frame, chunks[1], &app.state)
                }
            },
            Tab::Live => render_live(frame, chunks[1], &app.state),
        }
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state)).style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let tab = match state.tab {
        Tab::Career => "CAREER",
        Tab::Live => "LIVE",
    };
    let screen = match (state.tab, state.career_screen()) {
        (Tab::Live, _) => "Missions",
        (Tab::Career, CareerScreen::Bookmarks) => "Bookmarks",
        (Tab::Career, CareerScreen::MatchList { .. }) => "Match History",
        (Tab::Career, CareerScreen::MatchDetails { .. }) => "Scoreboard",
    };
    format!(" VALORANT COMPANION | {tab} | {screen}")
}

fn footer_text(state: &AppState) -> &'static str {
    match (state.tab, state.career_screen()) {
        (Tab::Live, _) => "Tab Career | r Reload | ? Help | q Quit",
        (Tab::Career, CareerScreen::Bookmarks) => {
            "Tab Live | j/k Move | Enter Matches | x Unbookmark | ? Help | q Quit"
        }
        (Tab::Career, CareerScreen::MatchList { .. }) => {
            "Esc Back | j/k Move | Enter Details | b Bookmark | r Reload | q Quit"
        }
        (Tab::Career, CareerScreen::MatchDetails { .. }) => {
            "Esc Back | j/k Move | Enter Highlight | p Profile | b Bookmark | r Update Ranks | q Quit"
        }
    }
}

fn palette(color: PaletteColor) -> Color {
    match color {
        PaletteColor::Myself => Color::Yellow,
        PaletteColor::Blue => Color::Cyan,
        PaletteColor::Red => Color::LightRed,
    }
}

fn selected_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    }
}

fn render_bookmarks(frame: &mut Frame, area: Rect, state: &AppState) {
    let cells = state.user_cells();
    let block = Block::default().title("Players").borders(Borders::ALL);
    if cells.is_empty() {
        frame.render_widget(Paragraph::new("No bookmarks yet").block(block), area);
        return;
    }

    let lines: Vec<Line> = cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let base = selected_style(idx == state.selected);
            let mut spans = vec![Span::styled(
                format!("{:<28}", cell.title()),
                base.add_modifier(Modifier::BOLD),
            )];
            spans.push(Span::styled(
                format!("{:<12}", cell.level_label().unwrap_or_default()),
                base,
            ));
            spans.push(Span::styled(format!("{:<14}", cell.rank_label()), base));
            if Some(&cell.user_id) == state.viewer.as_ref() {
                spans.push(Span::styled("(you)", base.fg(Color::Yellow)));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_match_list(frame: &mut Frame, area: Rect, state: &AppState, user_id: &UserId) {
    let title = state
        .users
        .get(user_id)
        .map(|u| format!("Matches: {} #{}", u.game_name, u.tag_line))
        .unwrap_or_else(|| "Matches".to_string());
    let block = Block::default().title(title).borders(Borders::ALL);

    if !state.histories.contains_key(user_id) {
        frame.render_widget(Paragraph::new("Loading match history…").block(block), area);
        return;
    }
    let rows = state.match_list_rows(user_id);
    if rows.is_empty() {
        frame.render_widget(Paragraph::new("No matches").block(block), area);
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{:<17} {:<8} {:>6} {:<14} {:>7} {}",
            "Started", "Map", "Score", "K / D / A", "RR", "Rank"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (idx, row) in rows.iter().enumerate() {
        let score = row.score.map(|s| s.to_string()).unwrap_or_else(|| "…".to_string());
        let kda = row.kda.clone().unwrap_or_else(|| "…".to_string());
        let rr_style = match row.rating_change {
            Some(change) if change > 0 => Style::default().fg(Color::Green),
            Some(change) if change < 0 => Style::default().fg(Color::LightRed),
            _ => Style::default(),
        };
        let base = selected_style(idx == state.selected);
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "{:<17} {:<8} {:>6} {:<14} ",
                    row.started, row.map_name, score, kda
                ),
                base,
            ),
            Span::styled(format!("{:>7} ", row.rating_label()), base.patch(rr_style)),
            Span::styled(row.tier_after.unwrap_or("").to_string(), base),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_scoreboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(view) = state.match_view() else {
        let block = Block::default().title("Scoreboard").borders(Borders::ALL);
        frame.render_widget(Paragraph::new("Loading match details…").block(block), area);
        return;
    };

    let title = format!(
        "{} | {}",
        state.assets.map_name(&view.details().info.map_id),
        view.details().info.queue_id.as_deref().unwrap_or("custom")
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    let rows = scoreboard::build_rows(view, |id| state.summaries.get(id).cloned());
    let show_parties = !view.parties().is_empty();

    let mut header = format!(
        "{:<10} {:<24} {:<12} {:>6}  {:<14}",
        "Agent", "Player", "Rank", "Score", "K / D / A"
    );
    if show_parties {
        header.push_str(" Party");
    }
    let mut lines = vec![Line::from(Span::styled(
        header,
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for (idx, row) in rows.iter().enumerate() {
        let base = selected_style(idx == state.selected);
        let color = palette(row.color);
        let faded = Style::default().fg(Color::DarkGray);

        let icon_style = if row.icon_faded { base.patch(faded) } else { base.fg(color) };
        let name_style = match row.name_weight {
            FontWeight::Semibold => base.fg(color).add_modifier(Modifier::BOLD),
            FontWeight::Medium => base.fg(color),
            FontWeight::Regular => base.fg(color).add_modifier(Modifier::DIM),
        };
        let profile = if row.can_open_profile { "" } else { " •" };
        let rank = row.rank_tier.map(tier_name).unwrap_or("—");
        let name = format!("{}{profile}", row.player.game_name);

        let mut spans = vec![
            Span::styled(
                format!("{:<10} ", state.assets.agent_name(row.player.agent_id.as_ref())),
                icon_style,
            ),
            Span::styled(format!("{name:<24} "), name_style),
            Span::styled(
                format!(
                    "{:<12} {:>6}  {:<14}",
                    rank,
                    row.player.stats.score,
                    kda_summary(&row.player.stats)
                ),
                base,
            ),
        ];
        if let Some(party) = &row.party {
            let mut style = if party.faded { base.patch(faded) } else { base };
            if party.emphasized {
                style = style.add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {}", party.label), style));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_live(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(area);

    let block = Block::default().title("Missions").borders(Borders::ALL);
    let inner = block.inner(sections[0]);
    frame.render_widget(block, sections[0]);

    if state.contract.is_none() {
        frame.render_widget(
            Paragraph::new("Missions not loaded!").alignment(Alignment::Center),
            inner,
        );
    } else {
        const ENTRY_HEIGHT: u16 = 3;
        for (idx, entry) in state.contract_entries().iter().enumerate() {
            let y = inner.y + idx as u16 * ENTRY_HEIGHT;
            if y + ENTRY_HEIGHT > inner.y + inner.height {
                break;
            }
            let entry_area = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: ENTRY_HEIGHT,
            };
            match entry {
                ContractEntry::Mission(row) => render_mission(frame, entry_area, row),
                ContractEntry::Unknown(_) => frame.render_widget(
                    Paragraph::new("Unknown mission!").style(Style::default().fg(Color::DarkGray)),
                    entry_area,
                ),
                ContractEntry::Corrupt(err) => frame.render_widget(
                    Paragraph::new(format!("Corrupt mission data: {err}"))
                        .style(Style::default().fg(Color::LightRed)),
                    entry_area,
                ),
            }
        }
    }

    let live_game = Paragraph::new("Coming soon!")
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title("Live Game").borders(Borders::ALL));
    frame.render_widget(live_game, sections[1]);
}

fn render_mission(frame: &mut Frame, area: Rect, row: &MissionRow) {
    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(lines[0]);

    let name_style = if row.is_complete {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new(row.name.as_str()).style(name_style), cols[0]);

    let trailing = if row.is_complete {
        Paragraph::new("✓").style(Style::default().fg(Color::Green))
    } else {
        Paragraph::new(row.xp_label()).style(Style::default().fg(Color::Gray))
    };
    frame.render_widget(trailing.alignment(Alignment::Right), cols[1]);

    match row.indicator {
        ProgressIndicator::InProgress { .. } => {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
                .ratio(row.indicator.fraction().clamp(0.0, 1.0))
                .label(row.indicator.label().unwrap_or_default());
            frame.render_widget(gauge, lines[1]);
        }
        ProgressIndicator::Complete => {
            let bar = "─".repeat(lines[1].width as usize);
            frame.render_widget(
                Paragraph::new(bar).style(Style::default().fg(Color::Green)),
                lines[1],
            );
        }
        ProgressIndicator::NotStarted => {
            let bar = "─".repeat(lines[1].width as usize);
            frame.render_widget(
                Paragraph::new(bar).style(Style::default().fg(Color::DarkGray)),
                lines[1],
            );
        }
    }
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No alerts yet".to_string();
    }
    let start = state.logs.len().saturating_sub(3);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Valorant Companion - Help",
        "",
        "Global:",
        "  1 / 2 / Tab  Career / Live",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Career:",
        "  j/k or ↑/↓   Move",
        "  Enter        Open / highlight player",
        "  Esc          Back",
        "  b / x        Bookmark / remove bookmark",
        "  p            Open player's matches",
        "  r            Update ranks / reload",
        "",
        "Live:",
        "  r            Reload missions",
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
