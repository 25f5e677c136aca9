use crate::{
    Bag, Board, Dictionary, Moves, Player, PlayerId, Players, Rules, PLAYER_CAPACITY,
};
pub use game_action::*;
pub use game_stage::*;
pub use game_view::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

mod game_action;
mod game_play;
mod game_stage;
mod game_view;
#[cfg(test)]
mod test_setup;

/// Owns the state of one game and implements the move lifecycle: staging, validation,
/// commit and refill.
///
/// Each player is either idle (nothing staged) or staging. A successful
/// [commit](Game::play_temporary_moves) or an explicit
/// [reset](Game::reset_temporary_moves) returns the player to idle. Staged moves never
/// touch the board until they are committed.
#[derive(Debug)]
pub struct Game<L = Dictionary> {
    /// The committed tiles.
    board: Board,
    /// The undrawn tiles.
    bag: Bag,
    /// Every player in join order.
    players: Players,
    /// The player whose turn it is, once a player has joined.
    current_player: Option<PlayerId>,
    /// Staged moves per player, sorted by coordinate. Entries are created lazily.
    temporary_moves: HashMap<PlayerId, Moves>,
    /// The word-legality oracle.
    lexicon: Arc<L>,
    /// The number of tiles a rack is refilled up to.
    rack_capacity: usize,
}

impl<L> Game<L> {
    /// Creates a game without players whose bag draws with a generator seeded from the
    /// operating system.
    ///
    /// # Arguments
    ///
    /// * `rules`: The board layout, letter distribution and rack capacity.
    /// * `lexicon`: The dictionary every commit is checked against.
    pub fn new(rules: Rules, lexicon: Arc<L>) -> Game<L> {
        Game::with_rng(rules, lexicon, StdRng::from_entropy())
    }

    /// Like [Game::new] with a bag whose draws are reproducible from `seed`.
    pub fn with_seed(rules: Rules, lexicon: Arc<L>, seed: u64) -> Game<L> {
        Game::with_rng(rules, lexicon, StdRng::seed_from_u64(seed))
    }

    /// Like [Game::new] with a bag that draws with `rng`.
    pub fn with_rng(rules: Rules, lexicon: Arc<L>, rng: StdRng) -> Game<L> {
        let Rules {
            layout,
            alphabet,
            rack_capacity,
        } = rules;

        Game {
            bag: Bag::new(&alphabet, rng),
            board: Board::new(layout),
            players: Players::with_capacity(PLAYER_CAPACITY),
            current_player: None,
            temporary_moves: HashMap::with_capacity(PLAYER_CAPACITY),
            lexicon,
            rack_capacity,
        }
    }

    /// Adds a player with an empty rack and a score of `0`. The first player to join becomes
    /// the current player.
    ///
    /// # Returns
    ///
    /// The identifier of the new player.
    pub fn add_player(&mut self, name: impl Into<String>) -> PlayerId {
        let player = PlayerId::new(self.players.len());
        self.players.push(Player::new(name));
        if self.current_player.is_none() {
            self.current_player = Some(player);
        }
        debug!(%player, "player joined");

        player
    }

    /// Makes `player` the current player.
    ///
    /// # Returns
    ///
    /// Whether `player` exists. If not, the current player is unchanged.
    pub fn set_current_player(&mut self, player: PlayerId) -> bool {
        if self.player(player).is_none() {
            return false;
        }

        self.current_player = Some(player);
        true
    }

    /// The player whose turn it is, or [None] before any player joined.
    #[inline]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }

    /// # Returns
    ///
    /// The requested player or [None] if no such player joined.
    #[inline]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player.index())
    }

    /// Every player in join order.
    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The committed tiles.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of undrawn tiles.
    #[inline]
    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    /// The number of tiles a rack is refilled up to.
    #[inline]
    pub fn rack_capacity(&self) -> usize {
        self.rack_capacity
    }

    /// The word-legality oracle.
    #[inline]
    pub fn lexicon(&self) -> &Arc<L> {
        &self.lexicon
    }
}
