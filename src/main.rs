//! hangman - A word-guessing game for the terminal
//!
//! Guess the secret word one letter at a time before the figure on the
//! gallows is complete. Games can be saved mid-round and resumed later by
//! name.
//!
//! # Features
//!
//! - **Six-miss rounds**: every wrong guess draws one more body part
//! - **Save and resume**: type 'save' at any prompt, load by name next start
//! - **Custom word lists**: play from any file of words, one per line
//!
//! # Quick Start
//!
//! ```text
//! hangman                  # Play with the built-in word list
//! hangman -w words.txt     # Play from a custom word list
//! hangman -d ~/my-saves    # Keep saved games somewhere else
//! ```

mod config;
mod console;
mod game;
mod session;
mod store;
mod words;

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;
use crate::console::Console;
use crate::game::Hangman;
use crate::session::Session;
use crate::store::SaveStore;
use crate::words::WordList;

/// Command line options
#[derive(Default)]
struct Args {
    /// Word list file override
    words_file: Option<PathBuf>,
    /// Save directory override
    save_dir: Option<PathBuf>,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    eprintln!("hangman {}", VERSION);
}

fn print_help() {
    eprintln!("hangman {} - A word-guessing game for the terminal", VERSION);
    eprintln!();
    eprintln!("Usage: hangman [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -w, --words <FILE>    Word list file, one word per line");
    eprintln!("  -d, --saves <DIR>     Directory for saved games");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("During play:");
    eprintln!("  Guess one letter per turn; six wrong guesses lose the round.");
    eprintln!("  Type 'save' at any prompt to save and exit. On the next start,");
    eprintln!("  type the saved game's name to resume it.");
    eprintln!();
    eprintln!("Configuration: ~/.hangman/config.toml");
    eprintln!("Saved games:   ~/.hangman/saved_games (default)");
}

fn parse_args() -> Result<Args, String> {
    let argv: Vec<String> = env::args().collect();
    let mut args = Args::default();
    let mut i = 1;

    while i < argv.len() {
        match argv[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-w" | "--words" => {
                i += 1;
                if i >= argv.len() {
                    return Err("Missing word list argument".to_string());
                }
                args.words_file = Some(PathBuf::from(&argv[i]));
            }
            "-d" | "--saves" => {
                i += 1;
                if i >= argv.len() {
                    return Err("Missing save directory argument".to_string());
                }
                args.save_dir = Some(PathBuf::from(&argv[i]));
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
        i += 1;
    }

    Ok(args)
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    // Initialize logging to file
    let log_path = config::data_dir()
        .map(|dir| dir.join("hangman.log"))
        .unwrap_or_else(|| PathBuf::from("hangman.log"));

    // Open log file (append mode)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    info!("hangman {} starting", VERSION);

    // Merge settings: command line args override the config file
    let config = Config::load();
    let words_file = args.words_file.or(config.words_file);
    let save_dir = args
        .save_dir
        .or(config.save_dir)
        .unwrap_or_else(config::default_save_dir);

    let words = match words_file {
        Some(path) => WordList::from_file(&path)
            .with_context(|| format!("unusable word list {}", path.display()))?,
        None => WordList::builtin(),
    };
    info!("Word list ready ({} words)", words.len());

    let session = Session::new(
        Hangman::new(&words),
        Console::attach(),
        SaveStore::new(save_dir),
    );
    session.run()
}
