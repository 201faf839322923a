//! Word list loading utilities
//!
//! Builds a [`Dictionary`] from a file or from the embedded list.

use super::{Dictionary, DictionaryError, WORDS};
use std::fs;
use std::path::Path;

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns `DictionaryError::Unreadable` if the file cannot be read, or any
/// validation error from [`Dictionary::load`].
///
/// # Examples
/// ```no_run
/// use lexinfinite::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Dictionary::load(&content)
}

/// Load the embedded dictionary
///
/// # Errors
///
/// Only fails if the compiled-in list is broken.
pub fn load_embedded() -> Result<Dictionary, DictionaryError> {
    Dictionary::load(WORDS)
}

/// Load from `path` when given, otherwise the embedded list
///
/// # Errors
///
/// See [`load_from_file`] and [`load_embedded`].
pub fn load(path: Option<&Path>) -> Result<Dictionary, DictionaryError> {
    match path {
        Some(path) => load_from_file(path),
        None => load_embedded(),
    }
}
