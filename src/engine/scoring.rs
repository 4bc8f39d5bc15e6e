//! End-of-game score aggregation
//!
//! Golf scoring: a solved round costs the number of guesses it took, a
//! missed round costs [`MISS_PENALTY`]. The lowest average wins.

use super::EngineError;
use crate::core::{MISS_PENALTY, PlayerId, Round, Word};
use rustc_hash::FxHashMap;

/// Final standings of a game
#[derive(Debug, Clone, PartialEq)]
pub struct GameScore {
    /// Average guesses per round for each roster player
    pub averages: FxHashMap<PlayerId, f64>,
    /// Every player sharing the lowest average, in roster order
    pub winners: Vec<PlayerId>,
    /// All roster players, best first; ties keep roster order
    pub ranking: Vec<PlayerId>,
}

/// Score of one player's guesses for one round
///
/// The 1-based position of the first correct guess, or the miss penalty.
#[must_use]
pub fn raw_round_score(guesses: &[Word], target: &Word) -> u32 {
    guesses
        .iter()
        .position(|g| g == target)
        .map_or(MISS_PENALTY, |i| i as u32 + 1)
}

impl GameScore {
    /// Aggregate every round for every roster player
    ///
    /// A roster player missing from a round is charged the miss penalty for
    /// it. Guess lists of players outside the roster are ignored.
    ///
    /// # Errors
    /// Returns `EngineError::NoRounds` when `rounds` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_party::core::{PlayerId, Round, Word};
    /// use wordle_party::engine::GameScore;
    ///
    /// let alice = PlayerId::from("alice");
    /// let target = Word::new("crane").unwrap();
    /// let round = Round::new(1, target, [&alice]);
    ///
    /// let score = GameScore::aggregate(&[alice.clone()], &[round]).unwrap();
    /// assert_eq!(score.averages[&alice], 8.0);
    /// assert_eq!(score.winners, vec![alice]);
    /// ```
    pub fn aggregate(players: &[PlayerId], rounds: &[Round]) -> Result<Self, EngineError> {
        if rounds.is_empty() {
            return Err(EngineError::NoRounds);
        }

        // Integer totals keep tie detection exact; every player shares the divisor
        let totals: Vec<(&PlayerId, u32)> = players
            .iter()
            .map(|player| {
                let total: u32 = rounds
                    .iter()
                    .map(|round| {
                        round
                            .guesses_of(player)
                            .map_or(MISS_PENALTY, |g| raw_round_score(g, round.target()))
                    })
                    .sum();
                (player, total)
            })
            .collect();

        let round_count = rounds.len() as f64;
        let averages = totals
            .iter()
            .map(|&(player, total)| (player.clone(), f64::from(total) / round_count))
            .collect();

        let best = totals.iter().map(|&(_, total)| total).min();
        let winners = totals
            .iter()
            .filter(|&&(_, total)| Some(total) == best)
            .map(|&(player, _)| player.clone())
            .collect();

        let mut ordered = totals;
        ordered.sort_by_key(|&(_, total)| total);
        let ranking = ordered.into_iter().map(|(player, _)| player.clone()).collect();

        Ok(Self {
            averages,
            winners,
            ranking,
        })
    }

    /// Average of one player, if they are on the roster
    #[must_use]
    pub fn average_of(&self, player: &PlayerId) -> Option<f64> {
        self.averages.get(player).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_GUESSES;

    fn word(w: &str) -> Word {
        Word::new(w).unwrap()
    }

    /// Build a round where each listed player made the given space-separated guesses
    fn round(created_at: u64, target: &str, plays: &[(&PlayerId, &str)]) -> Round {
        let mut round = Round::new(created_at, word(target), plays.iter().map(|(p, _)| *p));
        for (player, guesses) in plays {
            for guess in guesses.split_whitespace() {
                round.push_guess(player, word(guess));
            }
        }
        round
    }

    #[test]
    fn raw_score_is_first_correct_position_or_penalty() {
        let target = word("crane");
        assert_eq!(raw_round_score(&[word("crane")], &target), 1);
        assert_eq!(
            raw_round_score(&[word("slate"), word("irate"), word("crane")], &target),
            3
        );
        assert_eq!(raw_round_score(&[], &target), MISS_PENALTY);
        let misses = vec![word("slate"); MAX_GUESSES];
        assert_eq!(raw_round_score(&misses, &target), MISS_PENALTY);
    }

    #[test]
    fn two_players_two_rounds() {
        let a = PlayerId::from("a");
        let b = PlayerId::from("b");
        let misses = "ocean ocean ocean ocean ocean ocean";

        let rounds = [
            round(1, "crane", &[(&a, "slate irate crane"), (&b, misses)]),
            round(2, "reach", &[(&a, misses), (&b, "ocean reach")]),
        ];

        let score = GameScore::aggregate(&[a.clone(), b.clone()], &rounds).unwrap();
        assert!((score.averages[&a] - 5.5).abs() < f64::EPSILON);
        assert!((score.averages[&b] - 5.0).abs() < f64::EPSILON);
        assert_eq!(score.winners, vec![b.clone()]);
        assert_eq!(score.ranking, vec![b, a]);
    }

    #[test]
    fn ties_produce_multiple_winners_in_roster_order() {
        let a = PlayerId::from("a");
        let b = PlayerId::from("b");
        let c = PlayerId::from("c");
        let rounds = [round(
            1,
            "crane",
            &[(&a, "slate crane"), (&b, "crane"), (&c, "irate crane")],
        )];

        let roster = [c.clone(), b.clone(), a.clone()];
        let score = GameScore::aggregate(&roster, &rounds).unwrap();
        assert_eq!(score.winners, vec![b.clone()]);
        // a and c tie at 2.0; roster order puts c first
        assert_eq!(score.ranking, vec![b, c.clone(), a.clone()]);

        let rounds = [round(1, "crane", &[(&a, "crane"), (&c, "crane")])];
        let score = GameScore::aggregate(&[a.clone(), c.clone()], &rounds).unwrap();
        assert_eq!(score.winners, vec![a, c]);
    }

    #[test]
    fn missing_roster_player_is_charged_penalty() {
        let a = PlayerId::from("a");
        let late = PlayerId::from("late");
        let rounds = [round(1, "crane", &[(&a, "crane")])];

        let score = GameScore::aggregate(&[a.clone(), late.clone()], &rounds).unwrap();
        assert_eq!(score.average_of(&late), Some(f64::from(MISS_PENALTY)));
        assert_eq!(score.ranking, vec![a, late]);
    }

    #[test]
    fn players_outside_roster_are_ignored() {
        let a = PlayerId::from("a");
        let kicked = PlayerId::from("kicked");
        let rounds = [round(1, "crane", &[(&a, "slate crane"), (&kicked, "crane")])];

        let score = GameScore::aggregate(&[a.clone()], &rounds).unwrap();
        assert_eq!(score.average_of(&kicked), None);
        assert_eq!(score.winners, vec![a.clone()]);
        assert_eq!(score.ranking, vec![a]);
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let a = PlayerId::from("a");
        assert_eq!(
            GameScore::aggregate(&[a], &[]),
            Err(EngineError::NoRounds)
        );
    }

    #[test]
    fn aggregation_is_deterministic() {
        let a = PlayerId::from("a");
        let b = PlayerId::from("b");
        let rounds = [round(1, "crane", &[(&a, "crane"), (&b, "crane")])];
        let first = GameScore::aggregate(&[a.clone(), b.clone()], &rounds).unwrap();
        let second = GameScore::aggregate(&[a, b], &rounds).unwrap();
        assert_eq!(first, second);
    }
}
