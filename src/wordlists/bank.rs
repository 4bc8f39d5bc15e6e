//! Target pool and guess dictionary

use super::loader::words_from_slice;
use super::{ALLOWED, TARGETS};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Membership test for accepted guesses
pub trait Dictionary {
    /// Whether `word` may be submitted as a guess (case-insensitive)
    fn is_allowed(&self, word: &str) -> bool;
}

/// Words available to a game: possible targets plus accepted guesses
///
/// Every target is also an accepted guess.
#[derive(Debug, Clone)]
pub struct WordBank {
    targets: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl WordBank {
    /// Build a bank from target words and extra accepted guesses
    #[must_use]
    pub fn new(targets: Vec<Word>, extra_allowed: impl IntoIterator<Item = Word>) -> Self {
        let allowed = targets
            .iter()
            .cloned()
            .chain(extra_allowed)
            .map(String::from)
            .collect();
        Self { targets, allowed }
    }

    /// The bank compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(TARGETS), words_from_slice(ALLOWED))
    }

    /// Possible round targets
    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Draw a random target, or `None` if there are no targets
    pub fn random_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Word> {
        self.targets.choose(rng).cloned()
    }
}

impl Dictionary for WordBank {
    fn is_allowed(&self, word: &str) -> bool {
        self.allowed.contains(&word.to_lowercase())
    }
}
