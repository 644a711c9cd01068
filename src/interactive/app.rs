//! TUI application state and logic

use crate::core::{
    Frame, GameConfig, GameSession, GuessError, GuessSource, Outcome, PlayerInput, RenderSink,
    run_game,
};
use crate::wordlists::{WordListStore, select_target};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Longest line the input box accepts, unless the word itself is longer
const MAX_INPUT: usize = 32;

/// Application state drawn by the renderer
#[derive(Debug, Clone)]
pub struct ViewState {
    pub config: GameConfig,
    pub frame: Option<Frame>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// What a key press asks the application to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Submit(String),
    Interrupt,
    NewGame,
    Quit,
}

impl ViewState {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            frame: None,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Guess the {} letter word in {} tries.",
                    config.word_length, config.total_guesses
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
        }
    }

    /// Apply a key press to the input state
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        let ctrl_c =
            key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);

        match self.input_mode {
            InputMode::Guessing => match key.code {
                _ if ctrl_c => KeyAction::Interrupt,
                KeyCode::Esc => KeyAction::Interrupt,
                KeyCode::Enter => KeyAction::Submit(std::mem::take(&mut self.input_buffer)),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                    KeyAction::None
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    if self.input_buffer.chars().count() < self.input_limit() {
                        self.input_buffer.push(c);
                    }
                    KeyAction::None
                }
                _ => KeyAction::None,
            },
            InputMode::GameOver => match key.code {
                _ if ctrl_c => KeyAction::Quit,
                KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
                KeyCode::Char('n') => KeyAction::NewGame,
                _ => KeyAction::None,
            },
        }
    }

    /// Characters the input box holds; always room for a full word
    #[must_use]
    pub fn input_limit(&self) -> usize {
        MAX_INPUT.max(self.config.word_length)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn record_outcome(&mut self, frame: &Frame) {
        self.stats.total_games += 1;
        if frame.outcome == Outcome::Won {
            self.stats.games_won += 1;
        }

        if let Some(verdict) = frame.verdict() {
            let style = if frame.outcome == Outcome::Won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            self.add_message(&verdict, style);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }
}

/// TUI frontend: owns the terminal and the view it draws
pub struct App<B: Backend> {
    terminal: Terminal<B>,
    pub view: ViewState,
}

impl<B: Backend> App<B> {
    pub fn new(terminal: Terminal<B>, config: GameConfig) -> Self {
        Self {
            terminal,
            view: ViewState::new(config),
        }
    }

    #[must_use]
    pub const fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Redraw the whole screen
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the backend fails.
    pub fn draw(&mut self) -> io::Result<()> {
        let view = &self.view;
        self.terminal.draw(|f| super::rendering::ui(f, view))?;
        Ok(())
    }

    /// Reset the input for a fresh game
    pub fn start_game(&mut self) {
        self.view.input_buffer.clear();
        self.view.input_mode = InputMode::Guessing;
        if self.view.stats.total_games > 0 {
            self.view.add_message("New game started!", MessageStyle::Info);
        }
    }

    /// Wait on the game-over screen; `true` if the player wants another game
    ///
    /// # Errors
    ///
    /// Returns an I/O error if drawing or reading events fails.
    pub fn await_next_game(&mut self) -> io::Result<bool> {
        loop {
            self.draw()?;
            let Some(key) = next_key_press()? else {
                continue;
            };
            match self.view.handle_key(key) {
                KeyAction::NewGame => return Ok(true),
                KeyAction::Quit => return Ok(false),
                _ => {}
            }
        }
    }
}

impl<B: Backend> GuessSource for App<B> {
    fn next_input(&mut self) -> io::Result<PlayerInput> {
        loop {
            self.draw()?;
            let Some(key) = next_key_press()? else {
                continue;
            };
            match self.view.handle_key(key) {
                KeyAction::Submit(line) => return Ok(PlayerInput::Guess(line)),
                KeyAction::Interrupt => return Ok(PlayerInput::Interrupt),
                _ => {}
            }
        }
    }
}

impl<B: Backend> RenderSink for App<B> {
    fn render_turn(&mut self, frame: &Frame) -> io::Result<()> {
        self.view.frame = Some(frame.clone());
        self.view.input_mode = InputMode::Guessing;
        self.draw()
    }

    fn reject(&mut self, error: &GuessError) -> io::Result<()> {
        self.view.add_message(&error.to_string(), MessageStyle::Error);
        self.draw()
    }

    fn render_game_over(&mut self, frame: &Frame) -> io::Result<()> {
        self.view.frame = Some(frame.clone());
        self.view.input_mode = InputMode::GameOver;
        self.view.record_outcome(frame);
        self.draw()
    }
}

/// Block for the next key press, skipping releases and non-key events
fn next_key_press() -> io::Result<Option<KeyEvent>> {
    match event::read()? {
        // Only process key press events (fixes Windows double-input bug)
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if the word list has no
/// candidates, or if there's an I/O error during rendering or event handling.
pub fn run_tui(store: &WordListStore, config: GameConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let mut app = App::new(terminal, config);

    // Run app
    let res = run_app(&mut app, store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(app.terminal.backend_mut(), LeaveAlternateScreen)?;
    app.terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(app: &mut App<B>, store: &WordListStore) -> Result<()> {
    let mut rng = rand::rng();

    loop {
        let target = select_target(store, &mut rng)?;
        let mut session = GameSession::new(target, app.view.config)?;
        app.start_game();

        run_game(&mut session, app)?;
        info!(
            games = app.view.stats.total_games,
            won = app.view.stats.games_won,
            "tui game over"
        );

        if !app.await_next_game()? {
            return Ok(());
        }
    }
}
