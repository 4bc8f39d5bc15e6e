//! A single round: one target word, every player's guesses toward it

use super::{PlayerId, Word};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One round of a game
///
/// The target never changes after creation. Guess lists are append-only and
/// keep submission order. Players are keyed in id order so boards render in
/// a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    created_at: u64,
    target: Word,
    guesses: BTreeMap<PlayerId, Vec<Word>>,
}

impl Round {
    /// Create a round where every given player starts with no guesses
    ///
    /// `created_at` is the round's identity (unix milliseconds); later rounds
    /// must carry larger values.
    pub fn new<'a>(
        created_at: u64,
        target: Word,
        players: impl IntoIterator<Item = &'a PlayerId>,
    ) -> Self {
        let guesses = players
            .into_iter()
            .map(|id| (id.clone(), Vec::new()))
            .collect();
        Self {
            created_at,
            target,
            guesses,
        }
    }

    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> u64 {
        self.created_at
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Guesses of one player, or `None` if the player is not in this round
    #[must_use]
    pub fn guesses_of(&self, player: &PlayerId) -> Option<&[Word]> {
        self.guesses.get(player).map(Vec::as_slice)
    }

    /// Every player's guesses, in player id order
    pub fn player_guesses(&self) -> impl Iterator<Item = (&PlayerId, &[Word])> {
        self.guesses.iter().map(|(id, words)| (id, words.as_slice()))
    }

    /// Append a guess for a player already in the round
    ///
    /// Returns the player's guess count after the append, or `None` if the
    /// player is not part of this round. Guess-count limits are the caller's
    /// concern.
    pub(crate) fn push_guess(&mut self, player: &PlayerId, guess: Word) -> Option<usize> {
        let list = self.guesses.get_mut(player)?;
        list.push(guess);
        Some(list.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_has_empty_lists_for_everyone() {
        let players = [PlayerId::from("b"), PlayerId::from("a")];
        let round = Round::new(10, Word::new("crane").unwrap(), &players);

        assert_eq!(round.created_at(), 10);
        assert_eq!(round.target().text(), "crane");
        assert_eq!(round.guesses_of(&players[0]), Some(&[][..]));

        let order: Vec<&str> = round.player_guesses().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, ["a", "b"]);
    }

    #[test]
    fn push_guess_appends_in_order() {
        let alice = PlayerId::from("alice");
        let mut round = Round::new(1, Word::new("crane").unwrap(), [&alice]);

        assert_eq!(round.push_guess(&alice, Word::new("slate").unwrap()), Some(1));
        assert_eq!(round.push_guess(&alice, Word::new("crane").unwrap()), Some(2));

        let texts: Vec<&str> = round
            .guesses_of(&alice)
            .unwrap()
            .iter()
            .map(Word::text)
            .collect();
        assert_eq!(texts, ["slate", "crane"]);
    }

    #[test]
    fn push_guess_for_unknown_player_is_rejected() {
        let mut round = Round::new(1, Word::new("crane").unwrap(), [] as [&PlayerId; 0]);
        let stranger = PlayerId::from("stranger");
        assert_eq!(round.push_guess(&stranger, Word::new("slate").unwrap()), None);
        assert_eq!(round.guesses_of(&stranger), None);
    }
}
