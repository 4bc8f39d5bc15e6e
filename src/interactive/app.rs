//! TUI application state and logic

use crate::core::{PlayerId, WORD_LENGTH, Word};
use crate::engine::{GameScore, LetterStates};
use crate::game::{Game, GameError, GameStatus, open_local_game};
use crate::wordlists::WordBank;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long an invalid-word notice stays on screen
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

const TICK_RATE: Duration = Duration::from_millis(200);

/// Application state
pub struct App<'a> {
    pub bank: &'a WordBank,
    pub game: Game,
    /// Roster index of the player at the keyboard
    pub active: usize,
    pub input: String,
    pub notice: Option<Notice>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    rng: StdRng,
}

/// Which screen the app shows, derived from the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Playing,
    RoundOver,
    Summary,
}

/// A short-lived warning shown over the input line
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Start a hot-seat game for `names` with the first round underway
    ///
    /// # Errors
    ///
    /// Returns an error if the names are rejected or the bank has no targets.
    pub fn new(bank: &'a WordBank, names: &[String], seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = open_local_game(names, &mut rng)?;
        let target = bank
            .random_target(&mut rng)
            .context("word list has no targets")?;
        game.start(target)?;

        let mut app = Self {
            bank,
            game,
            active: 0,
            input: String::new(),
            notice: None,
            messages: Vec::new(),
            should_quit: false,
            rng,
        };
        app.add_message(
            "Round 1 started. Tab switches player, Enter submits.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match self.game.status() {
            GameStatus::Finished => Screen::Summary,
            _ if self.game.is_round_finished().unwrap_or(false) => Screen::RoundOver,
            _ => Screen::Playing,
        }
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&PlayerId> {
        self.game.players().get(self.active).map(|p| &p.id)
    }

    /// Guesses of a player in the current round
    #[must_use]
    pub fn guesses_of(&self, id: &PlayerId) -> &[Word] {
        self.game
            .current_round()
            .and_then(|r| r.guesses_of(id))
            .unwrap_or_default()
    }

    /// Keyboard hints for the active player only
    #[must_use]
    pub fn keyboard(&self) -> LetterStates {
        match (self.active_id(), self.game.current_round()) {
            (Some(id), Some(round)) => LetterStates::from_guesses(self.guesses_of(id), round.target()),
            _ => LetterStates::default(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<GameScore> {
        self.game.summary().ok()
    }

    fn is_terminal(&self, index: usize) -> bool {
        self.game
            .players()
            .get(index)
            .and_then(|p| self.game.progress_of(&p.id).ok())
            .is_none_or(|progress| progress.terminal)
    }

    /// Move to the next player who still has guesses, wrapping around
    pub fn switch_player(&mut self) {
        let count = self.game.players().len();
        if let Some(next) = (1..=count)
            .map(|step| (self.active + step) % count)
            .find(|&i| !self.is_terminal(i))
        {
            if next != self.active {
                self.input.clear();
            }
            self.active = next;
        }
    }

    /// Show a notice that disappears after [`NOTICE_DURATION`]
    pub fn notify(&mut self, text: impl Into<String>, now: Instant) {
        self.notice = Some(Notice {
            text: text.into(),
            expires_at: now + NOTICE_DURATION,
        });
    }

    /// Drop an expired notice
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.notice = None;
        }
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

    /// Submit the input as the active player's guess
    pub fn submit(&mut self, now: Instant) {
        let Some(id) = self.active_id().cloned() else {
            return;
        };
        if self.input.len() < WORD_LENGTH {
            self.notify("Not enough letters", now);
            return;
        }

        match self.game.submit_guess(&id, &self.input, self.bank) {
            Ok(outcome) => {
                self.input.clear();
                self.notice = None;
                let name = self.display_name(&id);
                if outcome.progress.won {
                    self.add_message(
                        &format!("{name} solved it in {}!", outcome.guess_number),
                        MessageStyle::Success,
                    );
                } else if outcome.progress.terminal {
                    self.add_message(&format!("{name} is out of guesses"), MessageStyle::Error);
                }
                if outcome.progress.terminal {
                    self.switch_player();
                }
                if self.screen() == Screen::RoundOver {
                    self.add_message(
                        "Round over! Press 'n' for next round or 'e' to end the game.",
                        MessageStyle::Info,
                    );
                }
            }
            Err(e @ (GameError::NotInWordList(_) | GameError::InvalidWord(_))) => {
                self.notify(e.to_string(), now);
            }
            Err(e) => {
                debug!(error = %e, "Guess rejected");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn display_name(&self, id: &PlayerId) -> String {
        self.game
            .player(id)
            .map_or_else(|| id.to_string(), |p| p.display_name().to_string())
    }

    /// Begin the next round with a fresh target
    pub fn next_round(&mut self) {
        let Some(target) = self.bank.random_target(&mut self.rng) else {
            self.add_message("Word list has no targets", MessageStyle::Error);
            return;
        };
        match self.game.next_round(target) {
            Ok(()) => {
                self.active = 0;
                self.input.clear();
                self.add_message(
                    &format!("Round {} started", self.game.round_number()),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn end_game(&mut self) {
        if let Err(e) = self.game.finish() {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.screen(), key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Esc) | (Screen::Summary, KeyCode::Char('q') | KeyCode::Enter) => {
                self.should_quit = true;
            }
            (Screen::RoundOver, KeyCode::Char('n')) => self.next_round(),
            (Screen::RoundOver, KeyCode::Char('e')) => self.end_game(),
            (Screen::Playing, KeyCode::Tab) => self.switch_player(),
            (Screen::Playing, KeyCode::Backspace) if ctrl => self.input.clear(),
            (Screen::Playing, KeyCode::Backspace) => {
                self.input.pop();
            }
            (Screen::Playing, KeyCode::Enter) => self.submit(now),
            (Screen::Playing, KeyCode::Char(c)) => {
                if self.input.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                    self.input.push(c.to_ascii_lowercase());
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// Returns the game in whatever state it reached.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Game> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<Game> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.game)
}
