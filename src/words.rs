//! Word lists for the guessing game.
//!
//! A [`WordList`] holds the candidate secret words. Lists load from a file
//! (one word per line) or from the list bundled into the binary; lines that
//! are not purely alphabetic are skipped and everything is lowercased.

use std::fs;
use std::path::Path;

use rand::Rng;
use thiserror::Error;

/// Word list errors
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list: {0}")]
    Read(#[source] std::io::Error),

    #[error("Word list has no usable words")]
    Empty,
}

/// Candidate secret words, always lowercase, alphabetic and non-empty
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load words from a file, one per line
    pub fn from_file(path: &Path) -> Result<Self, WordListError> {
        let content = fs::read_to_string(path).map_err(WordListError::Read)?;
        Self::from_words(content.lines())
    }

    /// Build a list from anything yielding word-like strings
    pub fn from_words<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// The list compiled into the binary
    pub fn builtin() -> Self {
        // The bundled list ships with the crate and is never empty.
        Self {
            words: include_str!("../words/default.txt")
                .lines()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Pick a random word for a new game
    pub fn pick(&self) -> &str {
        let index = rand::rng().random_range(0..self.words.len());
        &self.words[index]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_lowercases() {
        let list = WordList::from_words(["Apple", "BANANA"]).unwrap();
        assert_eq!(list.pick().chars().filter(|c| c.is_uppercase()).count(), 0);
    }

    #[test]
    fn test_from_words_skips_non_alphabetic() {
        let list = WordList::from_words(["apple", "mp3", "it's", "", "  pear  "]).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_from_words_rejects_empty_result() {
        assert!(matches!(
            WordList::from_words(["123", "!!"]),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn test_single_word_list_always_picks_it() {
        let list = WordList::from_words(["walrus"]).unwrap();
        for _ in 0..10 {
            assert_eq!(list.pick(), "walrus");
        }
    }

    #[test]
    fn test_builtin_list_is_usable() {
        let list = WordList::builtin();
        assert!(!list.is_empty());
        assert!(list
            .pick()
            .chars()
            .all(|c| c.is_ascii_alphabetic() && c.is_lowercase()));
    }

    #[test]
    fn test_from_file_missing_path_errors() {
        let err = WordList::from_file(Path::new("/no/such/words.txt")).unwrap_err();
        assert!(matches!(err, WordListError::Read(_)));
    }
}
