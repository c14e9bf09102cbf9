//! Full-screen terminal interface
//!
//! A ratatui front end over the same engine and save store as the console menu.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
