//! Validated, immutable word dictionary

use crate::config::WORD_LENGTH;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Dictionary load failures; fatal to starting a game
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Empty dictionary file")]
    Empty,
    #[error("No valid {WORD_LENGTH}-letter words found in dictionary")]
    NoValidWords,
    #[error("Failed to read dictionary {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Set of distinct valid words, with uniform random draw
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Parse a raw word list, one word per line
    ///
    /// Lines are trimmed, blank lines dropped, and only entries of exactly
    /// `WORD_LENGTH` ASCII letters are kept (case-normalized, deduplicated).
    ///
    /// # Errors
    ///
    /// `DictionaryError::Empty` if the text holds nothing but whitespace,
    /// `DictionaryError::NoValidWords` if no line survives validation.
    ///
    /// # Examples
    /// ```
    /// use lexinfinite::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::load("Crane\n  slate \nab\n").unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("CRANE"));
    /// ```
    pub fn load(raw: &str) -> Result<Self, DictionaryError> {
        if raw.trim().is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut index = FxHashSet::default();
        let mut words = Vec::new();

        for line in raw.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if let Ok(word) = Word::new(trimmed)
                && index.insert(word.text().to_string())
            {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::NoValidWords);
        }

        log::info!("Loaded {} words", words.len());
        Ok(Self { words, index })
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_ascii_lowercase())
    }

    /// Draw a word uniformly at random
    ///
    /// # Errors
    ///
    /// `DictionaryError::Empty` if the dictionary holds no words. `load` never
    /// produces such a dictionary, so this only guards the invariant.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, DictionaryError> {
        self.words.choose(rng).ok_or(DictionaryError::Empty)
    }

    /// All words in first-seen order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
