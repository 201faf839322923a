//! Score a single guess against a target word

use crate::core::{Feedback, Word, WordError};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target` without playing a round
///
/// Neither word has to be in the dictionary.
///
/// # Errors
///
/// Returns `WordError` if either word is not five ASCII letters.
pub fn score_words(guess: &str, target: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;
    let feedback = Feedback::score(&guess, &target);
    Ok(ScoreResult {
        guess,
        target,
        feedback,
    })
}

/// Print a scored guess as letters, emoji and pattern
pub fn print_score(result: &ScoreResult) {
    println!("{}  vs  {}", result.guess, result.target);
    println!("{}", result.feedback.to_emoji());
    println!("{}", result.feedback.to_letters());
}
