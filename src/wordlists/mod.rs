//! Word lists for the game
//!
//! Provides the validated [`Dictionary`] and the embedded default word list.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::WORDS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_list_is_not_empty() {
        assert!(!WORDS.trim().is_empty());
    }

    #[test]
    fn embedded_list_is_mostly_valid() {
        let total = WORDS.lines().filter(|l| !l.trim().is_empty()).count();
        let dictionary = Dictionary::load(WORDS).unwrap();
        assert!(dictionary.len() * 10 >= total * 9);
    }
}
