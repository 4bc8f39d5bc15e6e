//! A multiplayer game: lobby roster, rounds and status transitions

use super::GameError;
use crate::core::{Feedback, PlayerId, Round, Word};
use crate::engine::{GameScore, RoundProgress, is_round_finished};
use crate::wordlists::Dictionary;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    /// Players are joining and picking names
    Lobby,
    /// Rounds are being played
    InProgress,
    /// Scores are final
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lobby => "in the lobby",
            Self::InProgress => "in progress",
            Self::Finished => "finished",
        })
    }
}

/// A player on a game's roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: Option<String>,
}

impl Player {
    #[must_use]
    pub fn new(id: impl Into<PlayerId>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
        }
    }

    /// A player with a display name already chosen
    #[must_use]
    pub fn named(id: impl Into<PlayerId>, name: &str) -> Self {
        Self::new(id, Some(name.to_string()))
    }

    #[must_use]
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }

    /// Name for display, with a placeholder for unnamed players
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "Unknown name...",
        }
    }
}

/// What happened when a player left the lobby
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// Others remain in the game
    Left,
    /// The roster is now empty and the game should be discarded
    Abandoned,
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub progress: RoundProgress,
    /// 1-based number of this guess within the round
    pub guess_number: usize,
}

/// A game document: code, roster, status and every round played
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: String,
    code: String,
    status: GameStatus,
    players: Vec<Player>,
    rounds: Vec<Round>,
}

impl Game {
    /// Open a lobby with `host` as its only player
    #[must_use]
    pub fn new(id: impl Into<String>, code: impl Into<String>, host: Player) -> Self {
        let game = Self {
            id: id.into(),
            code: code.into(),
            status: GameStatus::Lobby,
            players: vec![host],
            rounds: Vec::new(),
        };
        info!(game = %game.id, code = %game.code, "Game created");
        game
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Roster in join order
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Roster ids in join order
    #[must_use]
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    /// Rounds in creation order
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds created so far
    #[must_use]
    pub fn round_number(&self) -> usize {
        self.rounds.len()
    }

    /// The most recently created round
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.iter().max_by_key(|r| r.created_at())
    }

    fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.iter_mut().max_by_key(|r| r.created_at())
    }

    fn require(&self, expected: GameStatus) -> Result<(), GameError> {
        if self.status == expected {
            Ok(())
        } else {
            warn!(game = %self.id, %expected, actual = %self.status, "Operation rejected");
            Err(GameError::WrongStatus {
                expected,
                actual: self.status,
            })
        }
    }

    fn position_of(&self, id: &PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| GameError::UnknownPlayer(id.clone()))
    }

    /// Add a player to the lobby
    ///
    /// # Errors
    /// Fails outside the lobby or if the player already joined.
    pub fn join(&mut self, player: Player) -> Result<(), GameError> {
        self.require(GameStatus::Lobby)?;
        if self.player(&player.id).is_some() {
            return Err(GameError::AlreadyJoined(player.id));
        }
        info!(game = %self.id, player = %player.id, "Player joined");
        self.players.push(player);
        Ok(())
    }

    /// Set a player's display name
    ///
    /// # Errors
    /// Fails for unknown players or a blank name.
    pub fn rename(&mut self, id: &PlayerId, name: &str) -> Result<(), GameError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        let index = self.position_of(id)?;
        self.players[index].name = Some(name.to_string());
        debug!(game = %self.id, player = %id, name, "Player renamed");
        Ok(())
    }

    /// Remove another player from the lobby
    ///
    /// # Errors
    /// Fails outside the lobby or for unknown players.
    pub fn kick(&mut self, id: &PlayerId) -> Result<Player, GameError> {
        self.require(GameStatus::Lobby)?;
        let index = self.position_of(id)?;
        info!(game = %self.id, player = %id, "Player kicked");
        Ok(self.players.remove(index))
    }

    /// Leave the lobby
    ///
    /// # Errors
    /// Fails outside the lobby or for unknown players.
    pub fn leave(&mut self, id: &PlayerId) -> Result<LeaveOutcome, GameError> {
        self.require(GameStatus::Lobby)?;
        let index = self.position_of(id)?;
        self.players.remove(index);
        info!(game = %self.id, player = %id, "Player left");
        Ok(if self.players.is_empty() {
            LeaveOutcome::Abandoned
        } else {
            LeaveOutcome::Left
        })
    }

    /// Start the first round
    ///
    /// # Errors
    /// Fails outside the lobby or while any player is unnamed.
    pub fn start(&mut self, target: Word) -> Result<(), GameError> {
        self.require(GameStatus::Lobby)?;
        if !self.players.iter().all(Player::has_name) {
            return Err(GameError::MissingNames);
        }
        self.push_round(target);
        self.status = GameStatus::InProgress;
        info!(game = %self.id, players = self.players.len(), "Game started");
        Ok(())
    }

    /// Where a player stands in the current round
    ///
    /// # Errors
    /// Fails without a round or if the player is not part of it.
    pub fn progress_of(&self, id: &PlayerId) -> Result<RoundProgress, GameError> {
        let round = self.current_round().ok_or(GameError::NoActiveRound)?;
        let guesses = round
            .guesses_of(id)
            .ok_or_else(|| GameError::UnknownPlayer(id.clone()))?;
        Ok(RoundProgress::of(guesses, round.target())?)
    }

    /// Whether every player has finished the current round
    ///
    /// # Errors
    /// Fails if no round has been created yet.
    pub fn is_round_finished(&self) -> Result<bool, GameError> {
        let round = self.current_round().ok_or(GameError::NoActiveRound)?;
        Ok(is_round_finished(round)?)
    }

    /// Submit a guess for a player in the current round
    ///
    /// The guess is lowercased, validated as a word and checked against the
    /// dictionary before it is recorded.
    ///
    /// # Errors
    /// Fails when the game is not in progress, the guess is malformed or not
    /// in the dictionary, or the player is unknown or already finished.
    pub fn submit_guess<D: Dictionary + ?Sized>(
        &mut self,
        id: &PlayerId,
        raw: &str,
        dictionary: &D,
    ) -> Result<GuessOutcome, GameError> {
        self.require(GameStatus::InProgress)?;

        let guess = Word::new(raw.trim())?;
        if !dictionary.is_allowed(guess.text()) {
            debug!(game = %self.id, player = %id, guess = %guess, "Guess not in word list");
            return Err(GameError::NotInWordList(guess.text().to_string()));
        }

        if self.progress_of(id)?.terminal {
            warn!(game = %self.id, player = %id, "Guess after round end rejected");
            return Err(GameError::AlreadyFinished(id.clone()));
        }

        let game_id = self.id.clone();
        let round = self.current_round_mut().ok_or(GameError::NoActiveRound)?;
        let feedback = Feedback::evaluate(Some(&guess), round.target());
        let guess_number = round
            .push_guess(id, guess)
            .ok_or_else(|| GameError::UnknownPlayer(id.clone()))?;
        let progress = self.progress_of(id)?;

        debug!(
            game = %game_id,
            player = %id,
            guess_number,
            feedback = %feedback,
            "Guess recorded"
        );
        Ok(GuessOutcome {
            feedback,
            progress,
            guess_number,
        })
    }

    /// Begin another round once everyone is done with the current one
    ///
    /// # Errors
    /// Fails when the game is not in progress or the round is unfinished.
    pub fn next_round(&mut self, target: Word) -> Result<(), GameError> {
        self.require(GameStatus::InProgress)?;
        if !self.is_round_finished()? {
            return Err(GameError::RoundNotFinished);
        }
        self.push_round(target);
        info!(game = %self.id, round = self.round_number(), "Next round started");
        Ok(())
    }

    /// End the game once everyone is done with the current round
    ///
    /// # Errors
    /// Fails when the game is not in progress or the round is unfinished.
    pub fn finish(&mut self) -> Result<(), GameError> {
        self.require(GameStatus::InProgress)?;
        if !self.is_round_finished()? {
            return Err(GameError::RoundNotFinished);
        }
        self.status = GameStatus::Finished;
        info!(game = %self.id, rounds = self.round_number(), "Game finished");
        Ok(())
    }

    /// Scores over every round played so far
    ///
    /// # Errors
    /// Fails before the first round.
    pub fn summary(&self) -> Result<GameScore, GameError> {
        Ok(GameScore::aggregate(&self.player_ids(), &self.rounds)?)
    }

    fn push_round(&mut self, target: Word) {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64);
        let created_at = self
            .rounds
            .iter()
            .map(Round::created_at)
            .max()
            .map_or(now, |last| now.max(last.saturating_add(1)));
        let ids: Vec<&PlayerId> = self.players.iter().map(|p| &p.id).collect();
        self.rounds.push(Round::new(created_at, target, ids));
    }
}
