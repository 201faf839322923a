//! LEX∞INFINITE - CLI
//!
//! Timed word guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use lexinfinite::{
    commands::{clear_stats, print_score, run_simple, score_words, show_stats},
    config::{RoundConfig, Settings},
    game::Session,
    interactive::{App, run_tui},
    scores::{FileStore, KeyValueStore, MemoryStore, ScoreLog},
    wordlists::loader,
};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "lexinfinite",
    about = "Timed, endlessly replayable five-letter word game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the score history
    #[arg(short = 'd', long, global = true, env = "LEXINFINITE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true, env = "LEXINFINITE_WORDS")]
    words: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, env = "LEXINFINITE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Show the score history and summary
    Stats,

    /// Delete the stored score history
    ClearStats,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

/// Route `log` output to `log_file` when given, stderr otherwise
///
/// `RUST_LOG` overrides the default `warn` filter.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_output)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new(cli.data_dir, cli.words, cli.log_file);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it always logs to a file
    let log_file = match command {
        Commands::Play => Some(settings.tui_log_file()),
        _ => settings.log_file.clone(),
    };
    init_logging(log_file.as_deref())?;

    match FileStore::open(&settings.data_dir) {
        Ok(store) => run(command, &settings, store),
        Err(e) => {
            log::warn!("{e}; scores will not be saved");
            eprintln!("Warning: {e}; scores will not be saved");
            run(command, &settings, MemoryStore::new())
        }
    }
}

fn run<S: KeyValueStore>(command: Commands, settings: &Settings, store: S) -> Result<()> {
    match command {
        Commands::Play => {
            let session = start_session(settings, store)?;
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = start_session(settings, store)?;
            run_simple(&mut session)
        }
        Commands::Stats => {
            show_stats(&ScoreLog::load(store));
            Ok(())
        }
        Commands::ClearStats => {
            let mut scores = ScoreLog::load(store);
            let removed = clear_stats(&mut scores).context("Failed to clear score history")?;
            println!("Cleared {removed} stored rounds");
            Ok(())
        }
        Commands::Score { guess, target } => {
            let result = score_words(&guess, &target).context("Invalid word")?;
            print_score(&result);
            Ok(())
        }
    }
}

fn start_session<S: KeyValueStore>(settings: &Settings, store: S) -> Result<Session<S>> {
    let dictionary =
        loader::load(settings.words.as_deref()).context("Failed to load word list")?;
    Session::new(dictionary, ScoreLog::load(store), RoundConfig::default())
        .context("Failed to start a round")
}
