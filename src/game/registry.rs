use super::code::{CODE_LENGTH, generate_game_id, generate_unique_code};
use super::{Game, GameError, GameStatus, LeaveOutcome, Player};
use crate::core::PlayerId;
use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Every open game, keyed by game id
///
/// Hands out join codes that are unique among games still in the lobby and
/// drops games whose roster empties out.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: FxHashMap<String, Game>,
}

impl GameRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new lobby hosted by `host`, returning its id
    pub fn create_game<R: Rng + ?Sized>(&mut self, host: Player, rng: &mut R) -> String {
        let code = generate_unique_code(rng, |code| self.find_lobby_game(code).is_some());
        let mut id = generate_game_id(rng);
        while self.games.contains_key(&id) {
            id = generate_game_id(rng);
        }
        self.games.insert(id.clone(), Game::new(id.clone(), code, host));
        id
    }

    /// The lobby game with this join code, ignoring case
    #[must_use]
    pub fn find_lobby_game(&self, code: &str) -> Option<&Game> {
        self.games
            .values()
            .find(|g| g.status() == GameStatus::Lobby && g.code().eq_ignore_ascii_case(code))
    }

    /// Join the lobby game matching `code`, returning its id
    ///
    /// # Errors
    /// Fails when the code is too short, matches no lobby game, or the player
    /// is already in that game.
    pub fn join_by_code(&mut self, code: &str, player: Player) -> Result<String, GameError> {
        let code = code.trim();
        if code.len() < CODE_LENGTH {
            return Err(GameError::CodeTooShort);
        }
        let id = self
            .find_lobby_game(code)
            .map(|g| g.id().to_string())
            .ok_or_else(|| GameError::GameNotFound(code.to_uppercase()))?;

        self.games
            .get_mut(&id)
            .ok_or_else(|| GameError::GameNotFound(code.to_uppercase()))?
            .join(player)?;
        debug!(game = %id, code, "Joined by code");
        Ok(id)
    }

    /// Leave a lobby game, discarding it once nobody is left
    ///
    /// # Errors
    /// Fails for unknown games, or when the game rejects the leave.
    pub fn leave(&mut self, game_id: &str, player: &PlayerId) -> Result<LeaveOutcome, GameError> {
        let game = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| GameError::GameNotFound(game_id.to_string()))?;
        let outcome = game.leave(player)?;
        if outcome == LeaveOutcome::Abandoned {
            self.games.remove(game_id);
            info!(game = game_id, "Empty game removed");
        }
        Ok(outcome)
    }

    #[must_use]
    pub fn get(&self, game_id: &str) -> Option<&Game> {
        self.games.get(game_id)
    }

    pub fn get_mut(&mut self, game_id: &str) -> Option<&mut Game> {
        self.games.get_mut(game_id)
    }

    /// Take a game out of the registry
    pub fn remove(&mut self, game_id: &str) -> Option<Game> {
        self.games.remove(game_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

/// Set up a lobby for players sharing one terminal
///
/// The first name hosts; everyone else joins by code. Ids are `p1`, `p2`, ...
/// in the order given.
///
/// # Errors
/// Fails with `MissingNames` for an empty list and `EmptyName` for a blank name.
pub fn open_local_game<R: Rng + ?Sized>(names: &[String], rng: &mut R) -> Result<Game, GameError> {
    let Some((host, guests)) = names.split_first() else {
        return Err(GameError::MissingNames);
    };

    let host_id = PlayerId::from("p1");
    let mut registry = GameRegistry::new();
    let game_id = registry.create_game(Player::new(host_id.clone(), None), rng);
    let lobby = registry
        .get_mut(&game_id)
        .ok_or_else(|| GameError::GameNotFound(game_id.clone()))?;
    lobby.rename(&host_id, host)?;
    let code = lobby.code().to_string();

    for (i, name) in guests.iter().enumerate() {
        let id = PlayerId::new(format!("p{}", i + 2));
        registry.join_by_code(&code, Player::new(id.clone(), None))?;
        if let Some(lobby) = registry.get_mut(&game_id) {
            lobby.rename(&id, name)?;
        }
    }

    registry
        .remove(&game_id)
        .ok_or(GameError::GameNotFound(game_id))
}
