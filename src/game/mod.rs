//! Game engines and the contract the session runner drives them through.
//!
//! This module provides:
//!
//! - **gallows**: Bounded failure counter with progressive ASCII rendering
//! - **hangman**: The word-guessing engine
//!
//! # Architecture
//!
//! ```text
//! Session<G: Game>
//! └── Hangman (implements Game)
//!     └── Gallows (damage counter + figure art)
//! ```
//!
//! The session runner never looks past the [`Game`] trait; any game
//! implementing it can be played, saved and resumed.

pub mod gallows;
pub mod hangman;

pub use gallows::{Gallows, MAX_DAMAGE};
pub use hangman::Hangman;

use std::io::{self, Write};

use thiserror::Error;

/// Snapshot encode/decode errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Failed to encode snapshot: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("Failed to decode snapshot: {0}")]
    Decode(#[from] toml::de::Error),
}

/// Capability set for a turn-based game hosted by the session runner
pub trait Game: Sized {
    /// Greet the player at session start
    fn welcome(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Draw everything the player needs to pick their next move
    fn render_turn_start(&self, out: &mut dyn Write) -> io::Result<()>;

    /// The question asked when soliciting a move
    fn prompt_text(&self) -> &str;

    /// True when `input` is a playable move; empty input is never valid
    fn validate_guess(&self, input: &str) -> bool;

    /// Tell the player why their input was rejected; stays silent on
    /// inputs the game has nothing helpful to say about
    fn explain_invalid(&self, input: &str, out: &mut dyn Write) -> io::Result<()>;

    /// Apply one validated move
    fn play_turn(&mut self, input: &str, out: &mut dyn Write) -> io::Result<()>;

    /// True once the round is over, win or lose
    fn is_finished(&self) -> bool;

    /// Draw the end-of-round summary
    fn render_outcome(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Capture the full game state as a text snapshot
    fn snapshot(&self) -> Result<String, SnapshotError>;

    /// Rebuild a game from a [`Game::snapshot`] string
    fn restore(snapshot: &str) -> Result<Self, SnapshotError>;
}
