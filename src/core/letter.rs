//! Per-letter guess classification

use serde::{Deserialize, Serialize};

/// Classification of one letter of a guess
///
/// The ordering is meaningful: `Empty < Incorrect < WrongLocation < Correct`.
/// Keyboard hints keep the maximum state ever observed for a letter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum LetterResult {
    /// No guess in this slot yet
    #[default]
    Empty,
    /// Letter does not occur (or its budget is used up)
    Incorrect,
    /// Letter occurs elsewhere in the target
    WrongLocation,
    /// Letter is in the right position
    Correct,
}

impl LetterResult {
    /// Emoji square used in shareable result grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Empty => '⬛',
            Self::Incorrect => '⬜',
            Self::WrongLocation => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Single ASCII symbol: `G`, `Y`, `-`, or `.` for empty
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Incorrect => '-',
            Self::WrongLocation => 'Y',
            Self::Correct => 'G',
        }
    }

    /// Parse a symbol or emoji back into a result
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::WrongLocation),
            '-' | '_' | '⬜' => Some(Self::Incorrect),
            '.' | '⬛' => Some(Self::Empty),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_total_and_ascending() {
        assert!(LetterResult::Empty < LetterResult::Incorrect);
        assert!(LetterResult::Incorrect < LetterResult::WrongLocation);
        assert!(LetterResult::WrongLocation < LetterResult::Correct);
        assert_eq!(
            LetterResult::Incorrect.max(LetterResult::Correct),
            LetterResult::Correct
        );
    }

    #[test]
    fn symbols_round_trip() {
        for result in [
            LetterResult::Empty,
            LetterResult::Incorrect,
            LetterResult::WrongLocation,
            LetterResult::Correct,
        ] {
            assert_eq!(LetterResult::from_symbol(result.symbol()), Some(result));
            assert_eq!(LetterResult::from_symbol(result.emoji()), Some(result));
        }
        assert_eq!(LetterResult::from_symbol('x'), None);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(LetterResult::default(), LetterResult::Empty);
    }
}
