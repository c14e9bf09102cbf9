//! TUI application state and logic

use crate::commands::ShellConfig;
use crate::core::{GameState, Guess};
use crate::engine::{GameStatus, GuessOutcome, apply_guess, new_game, status, validate_guess};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Application state
pub struct App {
    pub config: ShellConfig,
    pub state: GameState,
    pub status: GameStatus,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Save this game was resumed from, removed once it is finished
    pub loaded_from: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    SaveName,
    Finished,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl App {
    #[must_use]
    pub fn new(config: ShellConfig, state: GameState, loaded_from: Option<String>) -> Self {
        let mut app = Self {
            config,
            status: status(&state),
            state,
            input_mode: InputMode::Guess,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            loaded_from,
        };

        app.add_message(
            "Guess a letter or the whole word. Ctrl-S saves, Esc quits.",
            MessageStyle::Info,
        );
        if app.status.is_terminal() {
            app.finish();
        }
        app
    }

    /// Validate and apply the guess in the input buffer
    pub fn submit_guess(&mut self) {
        let guess = Guess::new(&self.input_buffer);
        self.input_buffer.clear();

        if let Err(e) = validate_guess(&self.state, &guess) {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        match apply_guess(&mut self.state, &guess) {
            GuessOutcome::Revealed { positions } => self.add_message(
                &format!(
                    "{guess} appears {positions} {}",
                    if positions == 1 { "time" } else { "times" }
                ),
                MessageStyle::Success,
            ),
            GuessOutcome::Solved => {}
            GuessOutcome::Miss => self.add_message(
                &format!("No {guess}. {} lives left", self.state.lives_left()),
                MessageStyle::Error,
            ),
        }

        self.status = status(&self.state);
        if self.status.is_terminal() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.input_mode = InputMode::Finished;
        self.stats.total_games += 1;

        if self.status == GameStatus::Won {
            self.stats.games_won += 1;
            self.add_message(
                &format!(
                    "🎉 You won in {} tries! Press 'n' for a new game or 'q' to quit.",
                    self.state.previous_guesses().len()
                ),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!(
                    "The code was {}. Press 'n' for a new game or 'q' to quit.",
                    self.state.code()
                ),
                MessageStyle::Error,
            );
        }

        if let Some(name) = self.loaded_from.take()
            && let Err(e) = self.config.store.remove(&name)
        {
            warn!(name = %name, error = %e, "could not remove finished save");
        }
    }

    pub fn begin_save(&mut self) {
        self.input_mode = InputMode::SaveName;
        self.input_buffer.clear();
        self.add_message("Name this save and press Enter (Esc to cancel)", MessageStyle::Info);
    }

    /// Store the game under the name in the input buffer
    ///
    /// Name problems keep the prompt open; other storage failures propagate.
    ///
    /// # Errors
    ///
    /// Returns an error if the save store is unavailable.
    pub fn submit_save_name(&mut self) -> Result<()> {
        let name = std::mem::take(&mut self.input_buffer);

        match self.config.store.save(&name, &self.state) {
            Ok(saved) => {
                self.status = GameStatus::Saved;
                self.add_message(&format!("Game saved as '{saved}'"), MessageStyle::Success);
                self.should_quit = true;
                Ok(())
            }
            Err(e) if e.is_name_problem() => {
                self.add_message(&format!("{e}. Pick another name."), MessageStyle::Error);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn cancel_save(&mut self) {
        self.input_mode = InputMode::Guess;
        self.input_buffer.clear();
        self.add_message("Save cancelled", MessageStyle::Info);
    }

    /// Replace the finished game with a fresh one
    ///
    /// # Errors
    ///
    /// Returns an error if no code can be drawn.
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.state = new_game(&self.config.words, rng).context("could not draw a code")?;
        self.status = GameStatus::InProgress;
        self.input_mode = InputMode::Guess;
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
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

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if saving or drawing a new code fails.
    pub fn handle_key<R: Rng + ?Sized>(&mut self, key: KeyEvent, rng: &mut R) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(rng)?,
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.begin_save();
                }
                KeyCode::Char(c) if c.is_alphabetic() => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::SaveName => match key.code {
                KeyCode::Esc => self.cancel_save(),
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_save_name()?,
                _ => {}
            },
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, or if the game itself
/// fails (storage or word list errors).
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let app = res?;
    if app.status == GameStatus::Saved {
        println!("Game saved to {}", app.config.store.dir().display());
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    let mut rng = rand::rng();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key, &mut rng)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
