//! Evaluate command
//!
//! Scores a single guess against a target outside of any game.

use crate::core::{Feedback, Word, WordError};
use crate::engine::LetterStates;

/// A scored guess plus the keyboard hints it produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
    pub keyboard: LetterStates,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either input is not a valid five-letter word.
///
/// # Examples
/// ```
/// use wordle_party::commands::evaluate_guess;
///
/// let evaluation = evaluate_guess("CRANE", "crane").unwrap();
/// assert!(evaluation.feedback.is_solved());
/// ```
pub fn evaluate_guess(guess: &str, target: &str) -> Result<Evaluation, WordError> {
    let guess = Word::new(guess.trim())?;
    let target = Word::new(target.trim())?;
    let feedback = Feedback::evaluate(Some(&guess), &target);
    let keyboard = LetterStates::from_guesses(std::slice::from_ref(&guess), &target);

    Ok(Evaluation {
        guess,
        target,
        feedback,
        keyboard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterResult;

    #[test]
    fn evaluates_repeated_letters() {
        let evaluation = evaluate_guess("erase", "speed").unwrap();
        assert_eq!(evaluation.feedback.to_string(), "Y--YY");
        assert_eq!(evaluation.keyboard.get(b'e'), LetterResult::WrongLocation);
        assert_eq!(evaluation.keyboard.get(b'r'), LetterResult::Incorrect);
    }

    #[test]
    fn rejects_malformed_words() {
        assert_eq!(
            evaluate_guess("toolong", "crane"),
            Err(WordError::InvalidLength(7))
        );
        assert!(evaluate_guess("crane", "cr4ne").is_err());
    }
}
