//! Turn loop and game lifecycle

use super::rules::{GuessOutcome, apply_guess, is_win, validate_guess};
use crate::core::{GameState, Guess, GuessError};
use crate::wordlists::{WordList, WordListError, generate_code};
use rand::Rng;
use std::io;
use tracing::{debug, info};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
    /// The player paused; the shell persists the state
    Saved,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// The human (or script) on the other side of the game
///
/// The engine never touches the console itself; shells implement this trait
/// to render the state and supply input.
pub trait Player {
    /// Render the state before a round
    ///
    /// # Errors
    ///
    /// Returns an error if output fails.
    fn show(&mut self, state: &GameState) -> io::Result<()>;

    /// Asked once per round, before the guess
    ///
    /// # Errors
    ///
    /// Returns an error if input fails.
    fn wants_to_save(&mut self) -> io::Result<bool>;

    /// Supply raw guess text
    ///
    /// # Errors
    ///
    /// Returns an error if input fails or ends.
    fn next_guess(&mut self) -> io::Result<String>;

    /// Called when a guess is refused, just before asking again
    ///
    /// # Errors
    ///
    /// Returns an error if output fails.
    fn rejected(&mut self, _guess: &Guess, _error: &GuessError) -> io::Result<()> {
        Ok(())
    }
}

/// Start a game with a freshly drawn code
///
/// # Errors
///
/// Propagates failures from the word source.
pub fn new_game<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Result<GameState, WordListError> {
    let code = generate_code(words, rng)?;
    info!(len = code.len(), "new game");
    Ok(GameState::new(code))
}

/// Status derived from the state alone (never `Saved`)
#[must_use]
pub fn status(state: &GameState) -> GameStatus {
    if is_win(state) {
        GameStatus::Won
    } else if state.lives_left() == 0 {
        GameStatus::Lost
    } else {
        GameStatus::InProgress
    }
}

/// Ask for guesses until one is valid, then apply it
///
/// # Errors
///
/// Returns an error if the player's I/O fails.
pub fn play_turn<P: Player + ?Sized>(
    state: &mut GameState,
    player: &mut P,
) -> io::Result<GuessOutcome> {
    let guess = loop {
        let guess = Guess::new(player.next_guess()?);
        match validate_guess(state, &guess) {
            Ok(()) => break guess,
            Err(e) => {
                debug!(guess = guess.text(), error = %e, "guess refused");
                player.rejected(&guess, &e)?;
            }
        }
    };

    Ok(apply_guess(state, &guess))
}

/// Run rounds until the game is won, lost, or the player saves
///
/// # Errors
///
/// Returns an error if the player's I/O fails.
pub fn play<P: Player + ?Sized>(state: &mut GameState, player: &mut P) -> io::Result<GameStatus> {
    loop {
        let current = status(state);
        if current.is_terminal() {
            info!(status = ?current, guesses = state.previous_guesses().len(), "game over");
            return Ok(current);
        }

        player.show(state)?;
        if player.wants_to_save()? {
            info!(lives_left = state.lives_left(), "game paused");
            return Ok(GameStatus::Saved);
        }

        play_turn(state, player)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, MAX_LIVES};
    use std::collections::VecDeque;

    /// Plays from a fixed script of inputs; `"save"` answers yes to saving
    #[derive(Default)]
    struct ScriptedPlayer {
        inputs: VecDeque<&'static str>,
        shown: Vec<String>,
        rejections: Vec<GuessError>,
    }

    impl ScriptedPlayer {
        fn new(inputs: &[&'static str]) -> Self {
            Self {
                inputs: inputs.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl Player for ScriptedPlayer {
        fn show(&mut self, state: &GameState) -> io::Result<()> {
            self.shown.push(state.clue().compact());
            Ok(())
        }

        fn wants_to_save(&mut self) -> io::Result<bool> {
            if self.inputs.front() == Some(&"save") {
                self.inputs.pop_front();
                return Ok(true);
            }
            Ok(false)
        }

        fn next_guess(&mut self) -> io::Result<String> {
            self.inputs
                .pop_front()
                .map(str::to_string)
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
        }

        fn rejected(&mut self, _guess: &Guess, error: &GuessError) -> io::Result<()> {
            self.rejections.push(error.clone());
            Ok(())
        }
    }

    #[test]
    fn hello_is_won_with_seven_lives() {
        let mut state = GameState::new(Code::new("HELLO"));
        let mut player = ScriptedPlayer::new(&["z", "l", "hello"]);

        let result = play(&mut state, &mut player).unwrap();

        assert_eq!(result, GameStatus::Won);
        assert_eq!(state.lives_left(), 7);
        assert_eq!(player.shown, vec!["_____", "_____", "__LL_"]);
        assert_eq!(state.previous_guesses(), &["Z", "L", "HELLO"]);
    }

    #[test]
    fn eight_misses_lose_the_game() {
        let mut state = GameState::new(Code::new("ABCDE"));
        let mut player = ScriptedPlayer::new(&["f", "g", "h", "i", "j", "k", "l", "m"]);

        let result = play(&mut state, &mut player).unwrap();

        assert_eq!(result, GameStatus::Lost);
        assert_eq!(state.lives_left(), 0);
        assert!(!is_win(&state));
        assert_eq!(state.clue().compact(), "_____");
        assert!(player.inputs.is_empty());
    }

    #[test]
    fn invalid_guesses_are_reprompted() {
        let mut state = GameState::new(Code::new("HELLO"));
        let mut player = ScriptedPlayer::new(&["he", "h", "H", "hello"]);

        let result = play(&mut state, &mut player).unwrap();

        assert_eq!(result, GameStatus::Won);
        assert_eq!(
            player.rejections,
            vec![
                GuessError::WrongLength {
                    expected: 5,
                    actual: 2
                },
                GuessError::Repeated("H".to_string()),
            ]
        );
        assert_eq!(state.previous_guesses(), &["H", "HELLO"]);
        assert_eq!(state.lives_left(), MAX_LIVES);
    }

    #[test]
    fn saving_stops_before_the_guess() {
        let mut state = GameState::new(Code::new("HELLO"));
        let mut player = ScriptedPlayer::new(&["e", "save", "x"]);

        let result = play(&mut state, &mut player).unwrap();

        assert_eq!(result, GameStatus::Saved);
        assert_eq!(state.clue().compact(), "_E___");
        assert_eq!(player.inputs, vec!["x"]);
    }

    #[test]
    fn finished_game_returns_immediately() {
        let mut state = GameState::new(Code::new("HELLO"));
        apply_guess(&mut state, &Guess::new("hello"));
        let mut player = ScriptedPlayer::new(&[]);

        assert_eq!(play(&mut state, &mut player).unwrap(), GameStatus::Won);
        assert!(player.shown.is_empty());
    }

    #[test]
    fn input_failure_propagates() {
        let mut state = GameState::new(Code::new("HELLO"));
        let mut player = ScriptedPlayer::new(&[]);

        let err = play(&mut state, &mut player).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn play_turn_applies_one_guess() {
        let mut state = GameState::new(Code::new("BANANA"));
        let mut player = ScriptedPlayer::new(&["n"]);

        let outcome = play_turn(&mut state, &mut player).unwrap();
        assert_eq!(outcome, GuessOutcome::Revealed { positions: 2 });
        assert_eq!(status(&state), GameStatus::InProgress);
    }

    #[test]
    fn new_game_starts_fresh() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let state = new_game(&WordList::Embedded, &mut rng).unwrap();

        assert_eq!(state.lives_left(), MAX_LIVES);
        assert_eq!(state.clue().hidden_count(), state.code().len());
        assert!(state.previous_guesses().is_empty());
    }
}
