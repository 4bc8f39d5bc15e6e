//! Word lists for the game
//!
//! Embedded target and dictionary lists compiled into the binary, plus the
//! [`WordBank`] that combines them.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{Dictionary, WordBank};
pub use embedded::{ALLOWED, ALLOWED_COUNT, TARGETS, TARGETS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_lists_are_valid_words() {
        for &word in TARGETS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn targets_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = TARGETS.iter().collect();
        assert_eq!(unique.len(), TARGETS.len());
    }

    #[test]
    fn lists_are_not_empty() {
        assert!(TARGETS_COUNT > 0);
        assert!(ALLOWED_COUNT > 0);
    }
}
