//! Score history commands

use crate::output::{print_history, print_summary};
use crate::scores::{KeyValueStore, PersistenceError, ScoreLog};

/// Print every stored round and the aggregate summary
pub fn show_stats<S: KeyValueStore>(scores: &ScoreLog<S>) {
    print_history(scores.all());
    if !scores.is_empty() {
        print_summary(&scores.summary());
    }
    println!();
}

/// Clear the stored history, returning how many rounds were removed
///
/// # Errors
///
/// Returns `PersistenceError` if storage could not be cleared; nothing is
/// removed in that case.
pub fn clear_stats<S: KeyValueStore>(scores: &mut ScoreLog<S>) -> Result<usize, PersistenceError> {
    let removed = scores.len();
    scores.clear()?;
    log::info!("Cleared {removed} stored rounds");
    Ok(removed)
}
