//! The session runner: a generic turn loop with save and resume.
//!
//! [`Session`] hosts any [`Game`] and drives it one blocking prompt at a
//! time. Typing the save keyword at a guess prompt snapshots the game into
//! the [`SaveStore`] and ends the session without finishing the round; at
//! startup, an existing save can be resumed by name.

use std::io::{BufRead, Write};

use anyhow::Context;
use crossterm::style::Stylize;
use tracing::info;

use crate::console::Console;
use crate::game::Game;
use crate::store::SaveStore;

/// Keyword that saves the game instead of playing a move
const SAVE_KEYWORD: &str = "save";

/// What one round of input solicitation produced
enum TurnInput {
    Guess(String),
    Save,
}

/// One resumable run of a game
pub struct Session<G, R, W> {
    game: G,
    console: Console<R, W>,
    store: SaveStore,
    saved_as: Option<String>,
}

impl<G: Game, R: BufRead, W: Write> Session<G, R, W> {
    pub fn new(game: G, console: Console<R, W>, store: SaveStore) -> Self {
        Self {
            game,
            console,
            store,
            saved_as: None,
        }
    }

    /// Play until the round ends or the player saves
    pub fn run(mut self) -> anyhow::Result<()> {
        self.game.welcome(self.console.writer())?;
        if self.store.any_saves() {
            self.choose_new_or_load()?;
        }
        let finished = self.play_until_done()?;
        if finished {
            self.game.render_outcome(self.console.writer())?;
        }
        Ok(())
    }

    /// Offer the new-vs-resume choice until the player settles it
    fn choose_new_or_load(&mut self) -> anyhow::Result<()> {
        loop {
            let choice = self
                .console
                .prompt(
                    "Type N to play a new game or L to see a list of saved games. \
                     Type the name of a saved game to load it.",
                )?
                .to_lowercase();
            if choice == "n" {
                return Ok(());
            }
            if choice == "l" {
                self.list_saves()?;
            } else if self.store.exists(&choice) {
                return self.load(&choice);
            }
        }
    }

    fn list_saves(&mut self) -> anyhow::Result<()> {
        self.console.say("Saved games:")?;
        for name in self.store.list()? {
            self.console.say(name)?;
        }
        Ok(())
    }

    /// Replace the fresh game with one restored from the store
    fn load(&mut self, name: &str) -> anyhow::Result<()> {
        let snapshot = self
            .store
            .read(name)
            .with_context(|| format!("failed to read saved game '{}'", name))?;
        self.game = G::restore(&snapshot)
            .with_context(|| format!("saved game '{}' is corrupted", name))?;
        self.saved_as = Some(name.to_string());
        info!("Resumed saved game '{}'", name);
        Ok(())
    }

    /// Returns true if the round finished, false if the player saved
    fn play_until_done(&mut self) -> anyhow::Result<bool> {
        while !self.game.is_finished() {
            self.game.render_turn_start(self.console.writer())?;
            match self.solicit_input()? {
                TurnInput::Save => {
                    self.save_game()?;
                    return Ok(false);
                }
                TurnInput::Guess(guess) => {
                    self.game.play_turn(&guess, self.console.writer())?;
                }
            }
        }
        Ok(true)
    }

    /// Prompt until the save keyword or a valid move arrives
    fn solicit_input(&mut self) -> anyhow::Result<TurnInput> {
        loop {
            let input = self.console.prompt(format!(
                "{} Or type 'save' to save game.",
                self.game.prompt_text()
            ))?;
            if input.eq_ignore_ascii_case(SAVE_KEYWORD) {
                return Ok(TurnInput::Save);
            }
            if self.game.validate_guess(&input) {
                return Ok(TurnInput::Guess(input));
            }
            self.game.explain_invalid(&input, self.console.writer())?;
        }
    }

    fn save_game(&mut self) -> anyhow::Result<()> {
        let name = match self.saved_as.clone() {
            Some(name) => name,
            None => {
                let name = self.ask_save_name()?;
                self.saved_as = Some(name.clone());
                name
            }
        };
        let snapshot = self.game.snapshot()?;
        self.store
            .write(&name, &snapshot)
            .with_context(|| format!("failed to write saved game '{}'", name))?;
        info!("Saved game as '{}'", name);
        self.console.say("Your game was saved.".green())?;
        Ok(())
    }

    /// Ask for a save name until one is valid and clear to use
    fn ask_save_name(&mut self) -> anyhow::Result<String> {
        loop {
            let name = self
                .console
                .prompt(
                    "What would you like to name your saved game? \
                     Names must be alphanumeric and at least 2 characters.",
                )?
                .to_lowercase();
            if !valid_session_name(&name) {
                continue;
            }
            if self.store.exists(&name) && !self.confirm_overwrite()? {
                continue;
            }
            return Ok(name);
        }
    }

    fn confirm_overwrite(&mut self) -> anyhow::Result<bool> {
        let answer = self
            .console
            .prompt(
                "Would you like to replace the saved game by that name? \
                 Type Y for yes, or N for no.",
            )?
            .to_lowercase();
        Ok(answer == "y")
    }
}

/// At least two ASCII letters or digits, and never the save keyword itself
fn valid_session_name(name: &str) -> bool {
    name.len() > 1 && name != SAVE_KEYWORD && name.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::hangman::Hangman;
    use crate::words::WordList;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn engine(word: &str) -> Hangman {
        Hangman::new(&WordList::from_words([word]).unwrap())
    }

    fn run_session(
        word: &str,
        script: &str,
        dir: &TempDir,
    ) -> String {
        let mut out = Vec::new();
        let console = Console::new(Cursor::new(script.to_string()), &mut out);
        let store = SaveStore::new(dir.path());
        Session::new(engine(word), console, store)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_valid_session_names() {
        assert!(valid_session_name("foo"));
        assert!(valid_session_name("game2"));
        assert!(!valid_session_name("x"));
        assert!(!valid_session_name(""));
        assert!(!valid_session_name("save"));
        assert!(!valid_session_name("my game"));
        assert!(!valid_session_name("foo.toml"));
    }

    #[test]
    fn test_full_round_plays_to_victory() {
        let dir = TempDir::new().unwrap();
        let text = run_session("cat", "c\na\nt\n", &dir);
        assert!(text.contains("Welcome to Hangman."));
        assert!(text.contains("Pick a letter. Or type 'save' to save game."));
        assert!(text.contains("Congrats, you won!"));
        assert!(text.contains("The word was cat."));
    }

    #[test]
    fn test_invalid_input_explains_then_reprompts() {
        let dir = TempDir::new().unwrap();
        let text = run_session("ox", "ox\no\nx\n", &dir);
        assert!(text.contains("Just one letter please."));
        assert!(text.contains("Congrats, you won!"));
    }

    #[test]
    fn test_first_save_asks_for_a_name() {
        let dir = TempDir::new().unwrap();
        let text = run_session("cat", "c\nsave\nfoo\n", &dir);
        assert!(text.contains("What would you like to name your saved game?"));
        assert!(text.contains("Your game was saved."));
        // Saving ends the session without an outcome.
        assert!(!text.contains("The word was"));

        let store = SaveStore::new(dir.path());
        assert!(store.exists("foo"));
        let restored = Hangman::restore(&store.read("foo").unwrap()).unwrap();
        assert!(!restored.is_finished());
    }

    #[test]
    fn test_save_keyword_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let text = run_session("cat", "SaVe\nfoo\n", &dir);
        assert!(text.contains("Your game was saved."));
        assert!(SaveStore::new(dir.path()).exists("foo"));
    }

    #[test]
    fn test_bad_names_are_rejected_until_valid() {
        let dir = TempDir::new().unwrap();
        let text = run_session("cat", "save\nx\nsave\nfoo!\nmygame\n", &dir);
        assert_eq!(
            text.matches("What would you like to name your saved game?")
                .count(),
            4
        );
        let store = SaveStore::new(dir.path());
        assert!(store.exists("mygame"));
        assert!(!store.exists("x"));
    }

    #[test]
    fn test_loaded_session_saves_under_same_name_silently() {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path());
        let mut game = engine("cat");
        let mut sink = Vec::new();
        game.play_turn("c", &mut sink).unwrap();
        game.play_turn("z", &mut sink).unwrap();
        let snapshot = game.snapshot().unwrap();
        store.write("foo", &snapshot).unwrap();

        let text = run_session("unused", "foo\nsave\n", &dir);
        assert!(!text.contains("What would you like to name your saved game?"));
        assert!(text.contains("Your game was saved."));
        assert_eq!(store.read("foo").unwrap(), snapshot);
    }

    #[test]
    fn test_chooser_lists_saves_then_starts_new() {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path());
        store.write("abc", &engine("dog").snapshot().unwrap()).unwrap();
        store.write("zed", &engine("dog").snapshot().unwrap()).unwrap();

        let text = run_session("ox", "l\nn\no\nx\n", &dir);
        assert!(text.contains("Saved games:"));
        assert!(text.contains("abc"));
        assert!(text.contains("zed"));
        assert!(text.contains("The word was ox."));
    }

    #[test]
    fn test_declined_overwrite_asks_for_another_name() {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path());
        store.write("foo", "placeholder = true\n").unwrap();

        let text = run_session("cat", "n\nsave\nfoo\nn\nbar\n", &dir);
        assert!(text.contains("Would you like to replace the saved game by that name?"));
        assert_eq!(
            text.matches("What would you like to name your saved game?")
                .count(),
            2
        );
        assert!(store.exists("bar"));
        assert_eq!(store.read("foo").unwrap(), "placeholder = true\n");
    }

    #[test]
    fn test_accepted_overwrite_replaces_the_file() {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path());
        store.write("foo", "placeholder = true\n").unwrap();

        let text = run_session("cat", "n\nsave\nfoo\ny\n", &dir);
        assert!(text.contains("Your game was saved."));
        let restored = Hangman::restore(&store.read("foo").unwrap()).unwrap();
        assert!(!restored.is_finished());
    }

    #[test]
    fn test_loading_replaces_the_fresh_game() {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path());
        let mut game = engine("ox");
        let mut sink = Vec::new();
        game.play_turn("o", &mut sink).unwrap();
        store.write("midway", &game.snapshot().unwrap()).unwrap();

        // Finishing the loaded game reveals "ox", not the fresh word.
        let text = run_session("elephant", "midway\nx\n", &dir);
        assert!(text.contains("The word was ox."));
        assert!(text.contains("Congrats, you won!"));
    }

    #[test]
    fn test_corrupted_save_fails_the_load() {
        let dir = TempDir::new().unwrap();
        let store = SaveStore::new(dir.path());
        store.write("bad", "secret_word = 12\n").unwrap();

        let mut out = Vec::new();
        let console = Console::new(Cursor::new("bad\n".to_string()), &mut out);
        let result = Session::new(engine("cat"), console, SaveStore::new(dir.path())).run();
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("corrupted"));
    }
}
