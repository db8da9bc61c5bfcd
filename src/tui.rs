//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringWord` → (rejected submission) `ShowingAlert` → any key → `EnteringWord`
//! - Accepted submissions and new root words keep the UI in `EnteringWord`

use crate::game_state::{GameInterface, SessionView, UserAction};
use crate::rules::Rejection;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const ROOT_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);

#[derive(Debug)]
enum TuiState {
    EnteringWord,
    /// A rejection is on screen until the next keypress.
    ShowingAlert { title: String, message: String },
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    root_word: &'a str,
    score: usize,
    used_words: &'a [String],
    current_input: &'a str,
    state: &'a TuiState,
    status: &'a str,
}

/// Everything the screen shows, kept apart from the terminal so key handling
/// and session updates can run without a TTY.
#[derive(Debug)]
struct TuiModel {
    root_word: String,
    score: usize,
    used_words: Vec<String>,
    current_input: String,
    state: TuiState,
    status: String,
}

impl TuiModel {
    fn new() -> Self {
        Self {
            root_word: String::new(),
            score: 0,
            used_words: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringWord,
            status: "Ready to start".to_string(),
        }
    }

    fn sync_view(&mut self, view: &SessionView) {
        self.root_word = view.root_word.to_string();
        self.score = view.score;
        self.used_words = view.used_words.to_vec();
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        match &self.state {
            TuiState::EnteringWord => self.handle_word_input(key),
            TuiState::ShowingAlert { .. } => self.handle_alert_input(key),
        }
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);
        let max_len = self.root_word.chars().count();

        match key.code {
            KeyCode::Char('n' | 'N') if has_ctrl => {
                info_log!("handle_word_input() - Change word requested");
                return Some(UserAction::ChangeWord);
            }
            KeyCode::F(2) => {
                info_log!("handle_word_input() - Change word requested");
                return Some(UserAction::ChangeWord);
            }
            KeyCode::Char(_) if has_ctrl || has_alt => {
                debug_log!("handle_word_input() - Ignoring modified key: {:?}", key.modifiers);
            }
            KeyCode::Char(c) if c.is_alphabetic() => {
                if self.current_input.chars().count() < max_len {
                    self.current_input.extend(c.to_lowercase());
                } else {
                    self.status = format!("Words can be at most {max_len} letters");
                }
            }
            KeyCode::Char(' ') => {}
            KeyCode::Char(c) => {
                self.status = format!("Only letters are allowed! ('{c}' is not a letter)");
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter => {
                // Input stays in the field until the session accepts it
                info_log!("handle_word_input() - Submitting '{}'", self.current_input);
                return Some(UserAction::Submit(self.current_input.clone()));
            }
            KeyCode::Esc => {
                info_log!("handle_word_input() - ESC pressed, returning Exit");
                return Some(UserAction::Exit);
            }
            _ => {
                debug_log!("handle_word_input() - Ignoring key: {:?}", key.code);
            }
        }
        None
    }

    fn handle_alert_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.code == KeyCode::Esc {
            Some(UserAction::Exit)
        } else {
            self.state = TuiState::EnteringWord;
            self.status = "Fix your word or try another".to_string();
            None
        }
    }

    fn new_game(&mut self, view: &SessionView) {
        self.sync_view(view);
        self.current_input.clear();
        self.state = TuiState::EnteringWord;
        self.status = format!("New word: {}", view.root_word);
    }

    fn accepted(&mut self, view: &SessionView, word: &str, points: usize) {
        self.sync_view(view);
        self.current_input.clear();
        self.status = format!("'{word}' accepted, +{points} points");
    }

    fn rejected(&mut self, rejection: Rejection, root_word: &str) {
        self.state = TuiState::ShowingAlert {
            title: rejection.title().to_string(),
            message: rejection.message(root_word),
        };
    }
}

/// Full-screen terminal front end.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    model: TuiModel,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            model: TuiModel::new(),
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
        let model = &self.model;
        let ctx = RenderContext {
            root_word: &model.root_word,
            score: model.score,
            used_words: &model.used_words,
            current_input: &model.current_input,
            state: &model.state,
            status: &model.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Root word and score
                Constraint::Length(3), // Input
                Constraint::Min(5),    // Used words
                Constraint::Length(4), // Alert or status
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_root(f, chunks[1], ctx.root_word, ctx.score);
        Self::render_input(f, chunks[2], ctx.current_input, ctx.root_word);
        Self::render_used_words(f, chunks[3], ctx.used_words);
        Self::render_status(f, chunks[4], ctx.state, ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("SCRAMBLE GAME")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_root(f: &mut Frame, area: Rect, root_word: &str, score: usize) {
        let lines = vec![
            Line::from(vec![
                Span::raw("Your word is: "),
                Span::styled(root_word.to_string(), ROOT_STYLE),
            ]),
            Line::from(format!("Score: {score}")),
        ];
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str, root_word: &str) {
        let max = root_word.chars().count();
        let paragraph = Paragraph::new(format!("> {current_input}_"))
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .title(format!("Enter your word ({}/{max})", current_input.chars().count()))
                    .borders(Borders::ALL),
            );
        f.render_widget(paragraph, area);
    }

    fn render_used_words(f: &mut Frame, area: Rect, used_words: &[String]) {
        let items: Vec<ListItem> = used_words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", word.chars().count()), BADGE_STYLE),
                    Span::raw(" "),
                    Span::raw(word.clone()),
                ]))
            })
            .collect();
        let list = List::new(items).block(
            Block::default()
                .title(format!("Your words ({})", used_words.len()))
                .borders(Borders::ALL),
        );
        f.render_widget(list, area);
    }

    fn render_status(f: &mut Frame, area: Rect, state: &TuiState, status: &str) {
        let (title, lines) = match state {
            TuiState::ShowingAlert { title, message } => (
                "Alert",
                vec![
                    Line::from(Span::styled(title.clone(), ERROR_STYLE)),
                    Line::from(Span::styled(message.clone(), MESSAGE_STYLE)),
                ],
            ),
            TuiState::EnteringWord => {
                let status_text = if status.is_empty() { "Ready" } else { status };
                ("Status", vec![Line::from(Span::styled(status_text.to_string(), SUCCESS_STYLE))])
            }
        };
        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringWord => {
                "Type a word | ENTER: Submit | CTRL-N/F2: Change word | ESC: Quit"
            }
            TuiState::ShowingAlert { .. } => "Press any key to continue | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        // Mouse, focus, paste and resize events are not used
        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Replacement and control characters show up from escape sequences when alt-tabbing
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        Ok(self.model.handle_key(key))
    }
}

impl GameInterface for TuiInterface {
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

    fn display_new_game(&mut self, view: &SessionView) {
        self.model.new_game(view);
        self.draw_or_log();
    }

    fn display_accepted(&mut self, view: &SessionView, word: &str, points: usize) {
        self.model.accepted(view, word, points);
        self.draw_or_log();
    }

    fn display_rejection(&mut self, rejection: Rejection, root_word: &str) {
        self.model.rejected(rejection, root_word);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.model.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
