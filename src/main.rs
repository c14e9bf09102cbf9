//! Hangman - CLI
//!
//! Console menu by default, with a full-screen TUI and direct save commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{Console, ShellConfig, load_all, resume, run_menu},
    engine::new_game,
    interactive::{App, run_tui},
    logging,
    output::write_saves,
    storage::SaveStore,
    wordlists::WordList,
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the code one letter at a time before you run out of lives",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Directory holding saved games
    #[arg(
        short = 'd',
        long,
        global = true,
        env = "HANGMAN_SAVE_DIR",
        default_value = "saves"
    )]
    save_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Console menu: new game, load game, exit (default)
    Menu,

    /// Full-screen terminal interface
    Play {
        /// Resume this save instead of starting a new game
        #[arg(short, long)]
        load: Option<String>,
    },

    /// Resume a saved game in the console
    Load {
        /// Name of the save
        name: String,
    },

    /// List saved games
    Saves,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let config = ShellConfig {
        words: WordList::from_arg(&cli.wordlist),
        store: SaveStore::new(cli.save_dir),
    };

    // Default to the menu if no command given
    let command = cli.command.unwrap_or(Commands::Menu);

    match command {
        Commands::Menu => run_menu_command(&config),
        Commands::Play { load } => run_play_command(config, load),
        Commands::Load { name } => run_load_command(&config, &name),
        Commands::Saves => run_saves_command(&config),
    }
}

fn run_menu_command(config: &ShellConfig) -> Result<()> {
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    run_menu(config, &mut console, &mut rand::rng())
}

fn run_load_command(config: &ShellConfig, name: &str) -> Result<()> {
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    resume(config, &mut console, name)
}

fn run_saves_command(config: &ShellConfig) -> Result<()> {
    let saves = load_all(&config.store)
        .with_context(|| format!("could not read saves in {}", config.store.dir().display()))?;
    write_saves(&mut io::stdout(), &saves)?;
    Ok(())
}

fn run_play_command(config: ShellConfig, load: Option<String>) -> Result<()> {
    let state = match &load {
        Some(name) => config
            .store
            .load(name)
            .with_context(|| format!("could not load save {name:?}"))?,
        None => new_game(&config.words, &mut rand::rng()).context("could not draw a code")?,
    };

    run_tui(App::new(config, state, load))
}
