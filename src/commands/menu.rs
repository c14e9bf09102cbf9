//! Console menu shell
//!
//! Text-based game loop: new game, load game, exit. Works over any reader and
//! writer so it can be driven by a script as easily as by a terminal.

use super::saves::load_all;
use crate::core::{GameState, Guess, GuessError};
use crate::engine::{GameStatus, Player, new_game, play};
use crate::output::{write_loss, write_saved, write_saves, write_turn, write_win};
use crate::storage::SaveStore;
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Resolved settings shared by the shells
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub words: WordList,
    pub store: SaveStore,
}

/// A [`Player`] reading from `input` and rendering to `output`
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a prompt and read one trimmed line
    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Player for Console<R, W> {
    fn show(&mut self, state: &GameState) -> io::Result<()> {
        write_turn(&mut self.output, state)
    }

    fn wants_to_save(&mut self) -> io::Result<bool> {
        let answer = self.prompt("Would you like to stop here and save the game? (y/N)")?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }

    fn next_guess(&mut self) -> io::Result<String> {
        self.prompt("Enter your guess")
    }

    fn rejected(&mut self, _guess: &Guess, error: &GuessError) -> io::Result<()> {
        writeln!(self.output, "{}", format!("✗ {error}").red())
    }
}

/// Run the 3-option menu until the player exits or input ends
///
/// # Errors
///
/// Returns an error if the word list or save storage fails, or on an output
/// error. End of input is a normal exit.
pub fn run_menu<R, W, G>(config: &ShellConfig, console: &mut Console<R, W>, rng: &mut G) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        match menu_round(config, console, rng) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if is_end_of_input(&e) => {
                debug!("input closed");
                break;
            }
            Err(e) => return Err(e),
        }
    }

    writeln!(console.output, "\n👋 Thanks for playing!")?;
    Ok(())
}

/// One pass through the menu; `false` means exit
fn menu_round<R, W, G>(config: &ShellConfig, console: &mut Console<R, W>, rng: &mut G) -> Result<bool>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(console.output, "\nWould you like to:")?;
    writeln!(console.output, "  1. Play a new game")?;
    writeln!(console.output, "  2. Load an existing game")?;
    writeln!(console.output, "  3. Exit")?;

    match console.prompt("Choice")?.as_str() {
        "1" => {
            let state = new_game(&config.words, rng).context("could not draw a code")?;
            play_session(config, console, state, None)?;
        }
        "2" => {
            if let Some((name, state)) = choose_save(config, console)? {
                play_session(config, console, state, Some(&name))?;
            }
        }
        "3" | "q" | "quit" | "exit" => return Ok(false),
        _ => writeln!(console.output, "Please choose 1, 2 or 3.")?,
    }
    Ok(true)
}

/// Resume a named save directly, skipping the menu
///
/// # Errors
///
/// Returns an error if the save cannot be loaded or on I/O failure.
pub fn resume<R: BufRead, W: Write>(
    config: &ShellConfig,
    console: &mut Console<R, W>,
    name: &str,
) -> Result<()> {
    let state = config
        .store
        .load(name)
        .with_context(|| format!("could not load save {name:?}"))?;
    play_session(config, console, state, Some(name))
}

/// Play a game to its end and handle the outcome
///
/// A finished game that came from a save has that save removed.
fn play_session<R: BufRead, W: Write>(
    config: &ShellConfig,
    console: &mut Console<R, W>,
    mut state: GameState,
    loaded_from: Option<&str>,
) -> Result<()> {
    let status = play(&mut state, console)?;

    match status {
        GameStatus::Won => write_win(&mut console.output, &state)?,
        GameStatus::Lost => write_loss(&mut console.output, &state)?,
        GameStatus::Saved => {
            save_with_fresh_name(config, console, &state)?;
            return Ok(());
        }
        GameStatus::InProgress => return Ok(()),
    }

    if let Some(name) = loaded_from {
        config.store.remove(name)?;
    }
    Ok(())
}

/// Ask for a save name until one is accepted
fn save_with_fresh_name<R: BufRead, W: Write>(
    config: &ShellConfig,
    console: &mut Console<R, W>,
    state: &GameState,
) -> Result<()> {
    loop {
        let name = console.prompt("Name this save")?;
        match config.store.save(&name, state) {
            Ok(saved) => {
                write_saved(&mut console.output, &saved)?;
                return Ok(());
            }
            Err(e) if e.is_name_problem() => {
                writeln!(
                    console.output,
                    "{}",
                    format!("✗ {e}. Please pick another name.").red()
                )?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// List saves and let the player pick one by number or name
fn choose_save<R: BufRead, W: Write>(
    config: &ShellConfig,
    console: &mut Console<R, W>,
) -> Result<Option<(String, GameState)>> {
    let mut saves = load_all(&config.store)?;
    if saves.is_empty() {
        writeln!(console.output, "No saved games.")?;
        return Ok(None);
    }

    writeln!(console.output, "\nSaved games:")?;
    write_saves(&mut console.output, &saves)?;

    loop {
        let choice = console.prompt("Pick a save by number or name (blank to cancel)")?;
        if choice.is_empty() {
            return Ok(None);
        }

        let index = match choice.parse::<usize>() {
            Ok(n) if (1..=saves.len()).contains(&n) => Some(n - 1),
            _ => saves.iter().position(|(name, _)| *name == choice),
        };

        match index {
            Some(i) => return Ok(Some(saves.swap_remove(i))),
            None => writeln!(console.output, "No such save.")?,
        }
    }
}

fn is_end_of_input(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}
