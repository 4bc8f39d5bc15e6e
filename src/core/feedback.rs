//! Guess feedback calculation and representation
//!
//! Feedback is the per-position classification of a guess against the
//! round's target word, one `LetterResult` per letter.

use super::{LetterResult, WORD_LENGTH, Word, WordError};
use std::fmt;

/// Feedback for a single guess, positionally aligned to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// An unfilled board row
    pub const EMPTY: Self = Self([LetterResult::Empty; WORD_LENGTH]);

    /// All letters correct
    pub const SOLVED: Self = Self([LetterResult::Correct; WORD_LENGTH]);

    /// Build feedback from explicit results
    #[inline]
    #[must_use]
    pub const fn new(results: [LetterResult; WORD_LENGTH]) -> Self {
        Self(results)
    }

    /// Per-position results
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// A missing guess yields [`Feedback::EMPTY`].
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and remove them from the target's letter budget
    /// 2. Second pass: mark remaining letters `WrongLocation` while budget lasts, otherwise `Incorrect`
    ///
    /// Exact matches must consume budget first, otherwise a displaced copy of
    /// a repeated letter could steal the budget of a later exact match.
    ///
    /// # Examples
    /// ```
    /// use wordle_party::core::{Feedback, LetterResult::*, Word};
    ///
    /// let guess = Word::new("ocean").unwrap();
    /// let target = Word::new("reach").unwrap();
    /// let feedback = Feedback::evaluate(Some(&guess), &target);
    ///
    /// assert_eq!(
    ///     feedback.results(),
    ///     &[Incorrect, WrongLocation, WrongLocation, WrongLocation, Incorrect]
    /// );
    /// assert_eq!(Feedback::evaluate(None, &target), Feedback::EMPTY);
    /// ```
    #[must_use]
    pub fn evaluate(guess: Option<&Word>, target: &Word) -> Self {
        let Some(guess) = guess else {
            return Self::EMPTY;
        };

        let mut result = [LetterResult::Incorrect; WORD_LENGTH];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = LetterResult::Correct;
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: displaced letters from the remaining budget
        for (slot, &letter) in result.iter_mut().zip(guess.chars()) {
            if *slot == LetterResult::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                *slot = LetterResult::WrongLocation;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Evaluate raw strings, validating both as words first
    ///
    /// # Errors
    /// Returns `WordError` if either string is not a valid 5-letter word.
    pub fn evaluate_str(guess: &str, target: &str) -> Result<Self, WordError> {
        let guess = Word::new(guess)?;
        let target = Word::new(target)?;
        Ok(Self::evaluate(Some(&guess), &target))
    }

    /// Number of positions with the given result
    #[must_use]
    pub fn count(&self, result: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == result).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use wordle_party::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Feedback::parse("GYG").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut results = [LetterResult::Empty; WORD_LENGTH];
        let mut chars = s.chars();
        for slot in &mut results {
            *slot = LetterResult::from_symbol(chars.next()?)?;
        }
        if chars.next().is_some() {
            return None;
        }
        Some(Self(results))
    }

    /// Convert to an emoji row such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.0 {
            write!(f, "{}", result.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterResult::{Correct, Empty, Incorrect, WrongLocation};
    use super::*;

    fn eval(guess: &str, target: &str) -> Feedback {
        Feedback::evaluate_str(guess, target).unwrap()
    }

    #[test]
    fn missing_guess_is_empty_row() {
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::evaluate(None, &target);
        assert_eq!(feedback, Feedback::EMPTY);
        assert_eq!(feedback.count(Empty), 5);
    }

    #[test]
    fn all_incorrect() {
        let feedback = eval("abcde", "fghij");
        assert_eq!(feedback.results(), &[Incorrect; 5]);
    }

    #[test]
    fn all_correct() {
        let feedback = eval("crane", "crane");
        assert!(feedback.is_solved());
        assert_eq!(feedback, Feedback::SOLVED);
    }

    #[test]
    fn ocean_against_reach() {
        let feedback = eval("ocean", "reach");
        assert_eq!(
            feedback.results(),
            &[Incorrect, WrongLocation, WrongLocation, WrongLocation, Incorrect]
        );
    }

    #[test]
    fn erase_against_speed_uses_both_e_budgets() {
        // SPEED has two E's, so both displaced E's in ERASE are yellow
        let feedback = eval("erase", "speed");
        assert_eq!(
            feedback.results(),
            &[WrongLocation, Incorrect, Incorrect, WrongLocation, WrongLocation]
        );
    }

    #[test]
    fn speed_against_erase_caps_repeated_letter() {
        let feedback = eval("speed", "erase");
        assert_eq!(
            feedback.results(),
            &[WrongLocation, Incorrect, WrongLocation, WrongLocation, Incorrect]
        );
    }

    #[test]
    fn exact_match_takes_budget_before_displaced_copy() {
        // ROBOT vs FLOOR: the second O is green, so the first O only gets
        // the one remaining O of FLOOR
        let feedback = eval("robot", "floor");
        assert_eq!(
            feedback.results(),
            &[WrongLocation, WrongLocation, Incorrect, Correct, Incorrect]
        );

        // Only one E in the target and it is matched exactly
        let feedback = eval("eerie", "crane");
        assert_eq!(
            feedback.results(),
            &[Incorrect, Incorrect, WrongLocation, Incorrect, Correct]
        );
    }

    #[test]
    fn evaluation_is_case_insensitive() {
        assert_eq!(eval("OCEAN", "reach"), eval("ocean", "reach"));
        assert_eq!(eval("ocean", "REACH"), eval("ocean", "reach"));
    }

    #[test]
    fn evaluate_str_rejects_malformed_words() {
        assert_eq!(
            Feedback::evaluate_str("oceans", "reach"),
            Err(WordError::InvalidLength(6))
        );
        assert!(Feedback::evaluate_str("ocean", "re4ch").is_err());
    }

    #[test]
    fn letter_budget_is_never_exceeded() {
        let words = [
            "speed", "erase", "eerie", "robot", "floor", "allow", "llama", "mummy", "geese",
            "crane", "sassy", "aaaaa", "abbey", "kayak",
        ];
        for guess in words {
            for target in words {
                let feedback = eval(guess, target);
                let target_word = Word::new(target).unwrap();
                let counts = target_word.char_counts();

                for letter in b'a'..=b'z' {
                    let in_target = usize::from(counts.get(&letter).copied().unwrap_or(0));
                    let positions: Vec<usize> = (0..WORD_LENGTH)
                        .filter(|&i| guess.as_bytes()[i] == letter)
                        .collect();
                    let correct = positions
                        .iter()
                        .filter(|&&i| feedback.results()[i] == Correct)
                        .count();
                    let present = positions
                        .iter()
                        .filter(|&&i| feedback.results()[i] == WrongLocation)
                        .count();

                    assert!(correct <= in_target, "{guess} vs {target}");
                    assert!(correct + present <= in_target, "{guess} vs {target}");
                }
            }
        }
    }

    #[test]
    fn parse_and_display() {
        let feedback = Feedback::parse("gy-g_").unwrap();
        assert_eq!(
            feedback.results(),
            &[Correct, WrongLocation, Incorrect, Correct, Incorrect]
        );
        assert_eq!(feedback.to_string(), "GY-G-");
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩⬜");
        assert!(Feedback::parse("GYGGYX").is_none());
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
    }
}
