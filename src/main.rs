//! Wurdel - CLI
//!
//! Terminal word-guessing game with a full-screen TUI and a simple line mode,
//! plus a tool that prepares word lists from arbitrary text.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wurdel::{
    commands::{run_prepare, run_simple},
    core::{DEFAULT_TOTAL_GUESSES, DEFAULT_WORD_LENGTH, GameConfig},
    interactive::run_tui,
    output::{BoardPrinter, StyleGuide, print_prepare_summary},
    wordlists::WordListStore,
};

#[derive(Parser)]
#[command(
    name = "wurdel",
    about = "Guess the secret word, one letter-coded attempt at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of letters in the secret word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Number of attempts per game
    #[arg(short = 'g', long, global = true, default_value_t = DEFAULT_TOTAL_GUESSES)]
    guesses: usize,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, colored output)
    Simple,

    /// Build a word list from any text file
    Prepare {
        /// Text file to extract words from
        input: PathBuf,

        /// Where to write the word list
        #[arg(short, long, default_value = "wordlist.txt")]
        output: PathBuf,
    },
}

/// Which frontend plays the game
#[derive(Clone, Copy)]
enum Frontend {
    Tui,
    Line,
}

fn main() -> Result<ExitCode> {
    let mut cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_game_command(&cli, Frontend::Tui),
        Commands::Simple => run_game_command(&cli, Frontend::Line),
        Commands::Prepare { input, output } => run_prepare_command(&input, &output),
    }
}

/// Logs go to `--log-file` when given (the TUI owns the screen), else stderr
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.with_writer(Arc::new(file)).with_ansi(false).init();
    } else {
        builder.with_writer(io::stderr).init();
    }

    Ok(())
}

/// Load the word list for the configured length
///
/// Uses the embedded list unless a file is given; a missing file is fatal.
fn load_word_list(path: Option<&Path>, word_length: usize) -> Result<WordListStore> {
    match path {
        Some(path) => Ok(WordListStore::from_file(path, word_length)?),
        None => Ok(WordListStore::embedded(word_length)),
    }
}

fn run_game_command(cli: &Cli, frontend: Frontend) -> Result<ExitCode> {
    let config = GameConfig::new(cli.length, cli.guesses)?;
    let store = load_word_list(cli.wordlist.as_deref(), config.word_length)?;
    let style = StyleGuide::default();

    if let Err(err) = store.ensure_candidates() {
        warn!(word_length = config.word_length, "no candidate words");
        BoardPrinter::new(io::stdout(), style).print_warning(&err.to_string())?;
        return Ok(ExitCode::FAILURE);
    }

    info!(
        word_length = config.word_length,
        total_guesses = config.total_guesses,
        candidates = store.len(),
        "starting game"
    );

    match frontend {
        Frontend::Tui => run_tui(&store, config)?,
        Frontend::Line => run_simple(&store, config, style)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn run_prepare_command(input: &Path, output: &Path) -> Result<ExitCode> {
    let summary = run_prepare(input, output)?;
    print_prepare_summary(&summary);
    Ok(ExitCode::SUCCESS)
}
