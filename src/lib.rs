//! Hangman
//!
//! A terminal word-guessing game with save and resume.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Code, GameState, Guess};
//! use hangman::engine::{apply_guess, is_win};
//!
//! let mut state = GameState::new(Code::new("hello"));
//! apply_guess(&mut state, &Guess::new("l"));
//! assert_eq!(state.clue().to_string(), "_ _ L L _");
//!
//! apply_guess(&mut state, &Guess::new("hello"));
//! assert!(is_win(&state));
//! ```

// Core domain types
pub mod core;

// Guess rules and the turn loop
pub mod engine;

// Word lists and code generation
pub mod wordlists;

// Save codec and save directory
pub mod storage;

// Console shell
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostics
pub mod logging;
