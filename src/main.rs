//! Lenape Word Game - CLI
//!
//! Word guessing game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lenape_word_game::{
    commands::{check_guess, run_simple, sorted_entries, summarize},
    logging::{LogTarget, init_logging},
    output::{print_check_result, print_vocabulary},
    preferences::{FileStore, MemoryStore, PreferenceStore, Preferences, system_prefers_dark},
    vocabulary::{ENTRIES, RandomWordProvider, WordEntry, entries_from_slice, load_from_file},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lenape_word_game",
    about = "Guess Lenape words in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a `word|definition` file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filter with LENAPE_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line by line, no TUI)
    Simple,

    /// Classify a guess against a target word
    Check {
        /// The target word or phrase
        target: String,

        /// The guess to classify
        guess: String,
    },

    /// List the vocabulary
    Words,
}

/// Load the vocabulary based on the -w flag
fn load_vocabulary(wordlist: &str) -> Result<Vec<WordEntry>> {
    match wordlist {
        "embedded" => Ok(entries_from_slice(ENTRIES)),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}")),
    }
}

fn provider(entries: Vec<WordEntry>, seed: Option<u64>) -> RandomWordProvider {
    match seed {
        Some(seed) => RandomWordProvider::seeded(entries, seed),
        None => RandomWordProvider::new(entries),
    }
}

fn load_preferences() -> Preferences {
    let store: Box<dyn PreferenceStore> = match FileStore::in_config_dir() {
        Some(store) => {
            tracing::debug!(path = %store.path().display(), "preference file");
            Box::new(store)
        }
        None => {
            tracing::warn!("no config directory, theme choice will not be saved");
            Box::new(MemoryStore::default())
        }
    };
    Preferences::init(store, system_prefers_dark())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let full_screen = matches!(command, Commands::Play);
    init_logging(LogTarget::for_mode(cli.log_file, full_screen))?;

    match command {
        Commands::Play => run_play_command(&cli.wordlist, cli.seed),
        Commands::Simple => run_simple_command(&cli.wordlist, cli.seed),
        Commands::Check { target, guess } => run_check_command(&target, &guess),
        Commands::Words => run_words_command(&cli.wordlist),
    }
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let result = check_guess(target, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_words_command(wordlist: &str) -> Result<()> {
    let entries = load_vocabulary(wordlist)?;
    print_vocabulary(&summarize(&entries), &sorted_entries(&entries));
    Ok(())
}

fn run_simple_command(wordlist: &str, seed: Option<u64>) -> Result<()> {
    let entries = load_vocabulary(wordlist)?;
    tracing::info!(words = entries.len(), "vocabulary loaded");
    let mut provider = provider(entries, seed);
    run_simple(&mut provider).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(wordlist: &str, seed: Option<u64>) -> Result<()> {
    use lenape_word_game::interactive::{App, run_tui};

    let entries = load_vocabulary(wordlist)?;
    tracing::info!(words = entries.len(), "vocabulary loaded");
    let app = App::new(provider(entries, seed), load_preferences());
    run_tui(app)
}
