//! The word-guessing engine.
//!
//! One [`Hangman`] value is one round: a secret word, the letters revealed
//! so far, the letters ruled out, and the gallows that fills in as wrong
//! guesses accumulate. The round ends when the word is fully revealed or
//! the figure is complete.

use std::io::{self, Write};

use crossterm::style::Stylize;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::game::gallows::Gallows;
use crate::game::{Game, SnapshotError};
use crate::words::WordList;

/// Placeholder for letters not yet revealed
pub const UNKNOWN: char = '_';

/// One round of hangman
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hangman {
    secret_word: String,
    eliminated: Vec<char>,
    revealed: Vec<char>,
    // Kept last: a TOML table must close the record, after the plain fields.
    gallows: Gallows,
}

impl Hangman {
    /// Start a fresh round with a word drawn from `words`
    pub fn new(words: &WordList) -> Self {
        let secret_word = words.pick().to_string();
        let revealed = vec![UNKNOWN; secret_word.len()];
        debug!("New round with a {}-letter word", secret_word.len());
        Self {
            secret_word,
            eliminated: Vec::new(),
            revealed,
            gallows: Gallows::new(),
        }
    }

    fn already_tried(&self, letter: char) -> bool {
        self.eliminated.contains(&letter) || self.revealed.contains(&letter)
    }

    fn won(&self) -> bool {
        !self.revealed.contains(&UNKNOWN)
    }

    fn reveal(&mut self, letter: char) {
        for (slot, secret) in self.revealed.iter_mut().zip(self.secret_word.chars()) {
            if secret == letter {
                *slot = letter;
            }
        }
    }

    fn eliminate(&mut self, letter: char) {
        self.eliminated.push(letter);
        self.gallows.tighten();
    }
}

impl Game for Hangman {
    fn welcome(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "Welcome to Hangman.")
    }

    fn render_turn_start(&self, out: &mut dyn Write) -> io::Result<()> {
        self.gallows.draw(out)?;
        writeln!(out, "Word:")?;
        for letter in &self.revealed {
            write!(out, " {} ", letter)?;
        }
        writeln!(out)?;
        writeln!(out, "Letters eliminated:")?;
        for letter in &self.eliminated {
            write!(out, " {} ", letter)?;
        }
        writeln!(out)
    }

    fn prompt_text(&self) -> &str {
        "Pick a letter."
    }

    fn validate_guess(&self, input: &str) -> bool {
        let input = input.to_lowercase();
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                letter.is_ascii_alphabetic() && !self.already_tried(letter)
            }
            _ => false,
        }
    }

    fn explain_invalid(&self, input: &str, out: &mut dyn Write) -> io::Result<()> {
        let input = input.to_lowercase();
        let mut chars = input.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if self.already_tried(letter) {
                return writeln!(out, "You already tried that letter.");
            }
        }
        if input.chars().count() > 1 {
            return writeln!(out, "Just one letter please.");
        }
        Ok(())
    }

    fn play_turn(&mut self, input: &str, out: &mut dyn Write) -> io::Result<()> {
        let input = input.to_lowercase();
        let letter = match input.chars().next() {
            Some(letter) => letter,
            None => return Ok(()),
        };
        if self.secret_word.contains(letter) {
            self.reveal(letter);
            debug!("Guess '{}' was a hit", letter);
            writeln!(out, "{}", "Good guess.".green())
        } else {
            self.eliminate(letter);
            debug!(
                "Guess '{}' missed, damage now {}",
                letter,
                self.gallows.damage()
            );
            writeln!(
                out,
                "{}",
                "That letter is not present. The noose tightens.".red()
            )
        }
    }

    fn is_finished(&self) -> bool {
        self.gallows.is_dead() || self.won()
    }

    fn render_outcome(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.won() {
            self.gallows.draw_winner(out)?;
            writeln!(out)?;
            writeln!(out, "{}", "Congrats, you won!".green().bold())?;
        } else {
            self.gallows.draw(out)?;
            writeln!(out)?;
            writeln!(out, "{}", "You're dead!".red().bold())?;
        }
        writeln!(out, "The word was {}.", self.secret_word)?;
        writeln!(out)
    }

    fn snapshot(&self) -> Result<String, SnapshotError> {
        Ok(toml::to_string(self)?)
    }

    fn restore(snapshot: &str) -> Result<Self, SnapshotError> {
        Ok(toml::from_str(snapshot)?)
    }
}
