//! Keyboard letter-state aggregation
//!
//! Folds a player's guesses into the best state known for each letter, used
//! to color the on-screen keyboard.

use crate::core::{Feedback, LetterResult, Word};

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best known state per alphabet letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterStates([LetterResult; 26]);

impl LetterStates {
    /// Aggregate every guess, in order, against the target
    ///
    /// # Examples
    /// ```
    /// use wordle_party::core::{LetterResult, Word};
    /// use wordle_party::engine::LetterStates;
    ///
    /// let target = Word::new("reach").unwrap();
    /// let states = LetterStates::from_guesses(&[Word::new("ocean").unwrap()], &target);
    ///
    /// assert_eq!(states.get(b'c'), LetterResult::WrongLocation);
    /// assert_eq!(states.get(b'o'), LetterResult::Incorrect);
    /// assert_eq!(states.get(b'z'), LetterResult::Empty);
    /// ```
    #[must_use]
    pub fn from_guesses(guesses: &[Word], target: &Word) -> Self {
        let mut states = Self::default();
        for guess in guesses {
            states.record(guess, &Feedback::evaluate(Some(guess), target));
        }
        states
    }

    /// Fold one guess and its feedback in
    ///
    /// A letter only ever moves up the `Empty < Incorrect < WrongLocation < Correct` order.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &result) in guess.chars().iter().zip(feedback.results()) {
            if let Some(slot) = Self::index(letter).map(|i| &mut self.0[i]) {
                *slot = (*slot).max(result);
            }
        }
    }

    /// State of one letter; non-letters are always `Empty`
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterResult {
        Self::index(letter.to_ascii_lowercase()).map_or(LetterResult::Empty, |i| self.0[i])
    }

    /// All 26 letters with their state, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterResult)> + '_ {
        (b'a'..=b'z').zip(self.0.iter().copied()).map(|(l, r)| (char::from(l), r))
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }
}
