//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `Typing`: the player edits the input line and submits with ENTER
//! - `Alert`: a rejection is shown in a popup until any key dismisses it

use crate::engine::RoundView;
use crate::game_state::{GameInterface, UserAction};
use crate::outcome::{Outcome, RejectReason};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ALERT_WIDTH: u16 = 50;
const ALERT_HEIGHT: u16 = 7;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const SCORE_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TuiState {
    Typing,
    Alert { title: String, message: String },
}

/// Everything the renderer needs, borrowed from the interface.
struct RenderContext<'a> {
    root: &'a str,
    history: &'a [String],
    score: u32,
    input: &'a str,
    state: &'a TuiState,
    status: &'a str,
}

/// Main TUI interface component.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    root: String,
    history: Vec<String>,
    score: u32,
    input: String,
    state: TuiState,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            root: String::new(),
            history: Vec::new(),
            score: 0,
            input: String::new(),
            state: TuiState::Typing,
            status: String::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            root: &self.root,
            history: &self.history,
            score: self.score,
            input: &self.input,
            state: &self.state,
            status: &self.status,
        };
        self.terminal.draw(|f| render(f, &ctx))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn sync_round(&mut self, round: &RoundView<'_>) {
        self.root = round.root.to_string();
        self.history = round.history.to_vec();
        self.score = round.score;
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        debug_log!(
            "handle_input() - code={:?}, modifiers={:?}, state={:?}",
            key.code,
            key.modifiers,
            self.state
        );
        if matches!(self.state, TuiState::Alert { .. }) {
            self.state = TuiState::Typing;
            return Ok(None);
        }
        Ok(self.handle_typing_input(key))
    }

    fn handle_typing_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let has_modifier =
            key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Some(UserAction::Exit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(UserAction::Exit);
            }
            KeyCode::Tab => return Some(UserAction::NewWord),
            KeyCode::Enter => return Some(UserAction::Submit(self.input.clone())),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c)
                if !has_modifier
                    && !c.is_control()
                    && self.input.chars().count() < MAX_INPUT_LENGTH =>
            {
                self.input.push(c);
            }
            _ => {}
        }
        None
    }
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, round: &RoundView<'_>) {
        self.sync_round(round);
        self.input.clear();
        self.state = TuiState::Typing;
        self.status = "New root word - make as many words as you can".to_string();
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_outcome(&mut self, outcome: Outcome, round: &RoundView<'_>) {
        self.sync_round(round);
        match outcome {
            Outcome::Accepted => {
                self.input.clear();
                if let Some(word) = round.history.first() {
                    self.status = format!("Accepted: {word}");
                }
            }
            Outcome::Rejected(reason) if reason.is_silent() => {}
            Outcome::Rejected(reason) => {
                self.state = alert_for(reason);
                self.status = reason.title().to_string();
            }
        }
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn alert_for(reason: RejectReason) -> TuiState {
    TuiState::Alert {
        title: reason.title().to_string(),
        message: reason.message().to_string(),
    }
}

fn render(f: &mut Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Input
            Constraint::Min(3),    // History
            Constraint::Length(3), // Score + status
            Constraint::Length(3), // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0], ctx.root);
    render_input(f, chunks[1], ctx.input);
    render_history(f, chunks[2], ctx.history);
    render_status(f, chunks[3], ctx.score, ctx.status);
    render_instructions(f, chunks[4], ctx.state);

    if let TuiState::Alert { title, message } = ctx.state {
        render_alert(f, title, message);
    }
}

fn render_title(f: &mut Frame, area: Rect, root: &str) {
    let title = Paragraph::new(root.to_uppercase())
        .style(HEADER_STYLE)
        .alignment(Alignment::Center)
        .block(Block::default().title("Root word").borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_input(f: &mut Frame, area: Rect, input: &str) {
    let line = Line::from(vec![Span::raw(input), Span::styled("_", HEADER_STYLE)]);
    let paragraph =
        Paragraph::new(line).block(Block::default().title("Enter your word").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, area: Rect, history: &[String]) {
    let items: Vec<ListItem> = history
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("({}) ", word.chars().count()), SUCCESS_STYLE),
                Span::raw(word.as_str()),
            ]))
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(format!("Words ({})", history.len()))
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, area: Rect, score: u32, status: &str) {
    let line = Line::from(vec![
        Span::styled(format!("Score: {score}"), SCORE_STYLE),
        Span::raw("  "),
        Span::raw(status),
    ]);
    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
    let text = match state {
        TuiState::Typing => "ENTER: Submit | TAB: Other word | ESC: Quit",
        TuiState::Alert { .. } => "Press any key to continue",
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_alert(f: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(f.area(), ALERT_WIDTH, ALERT_HEIGHT);
    let lines = vec![
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", HEADER_STYLE)),
    ];
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(title, ERROR_STYLE))
                .borders(Borders::ALL),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
