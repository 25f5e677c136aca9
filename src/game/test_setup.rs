use crate::{
    random_bag_tiles, random_rack, Alphabet, Bag, Board, Dictionary, Game, Player, PlayerId,
    Players, Tile, PLAYER_CAPACITY, RACK_CAPACITY,
};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::sync::Arc;

impl Game<Dictionary> {
    /// Generates an empty game with no players, an empty bag and an empty 15×15 board.
    ///
    /// # Arguments
    ///
    /// * `words`: The dictionary every commit is checked against.
    pub fn empty_game(words: &[&str]) -> Game<Dictionary> {
        let dictionary = Dictionary::from_words(words.iter().copied(), Alphabet::english())
            .expect("test dictionary should build");

        Game {
            board: Board::default(),
            bag: Bag::from_tiles(Vec::new(), StdRng::seed_from_u64(0)),
            players: Players::with_capacity(PLAYER_CAPACITY),
            current_player: None,
            temporary_moves: HashMap::with_capacity(PLAYER_CAPACITY),
            lexicon: Arc::new(dictionary),
            rack_capacity: RACK_CAPACITY,
        }
    }
}

impl<L> Game<L> {
    /// A mutable reference to `self.board`.
    pub fn mut_board(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A mutable reference to `self.bag`.
    pub fn mut_bag(&mut self) -> &mut Bag {
        &mut self.bag
    }

    /// Replaces the bag with one holding exactly `tiles`.
    pub fn mut_bag_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.bag = Bag::from_tiles(tiles.into_iter().collect(), StdRng::seed_from_u64(0));
    }

    /// A mutable reference to the requested player.
    ///
    /// # Panics
    ///
    /// If no such player joined.
    pub fn mut_player(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player.index()]
    }

    /// Adds a random, small, non-zero number of players named after their index.
    ///
    /// # Returns
    ///
    /// The number of players.
    pub fn random_players<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let players = rng.gen_range(2..=PLAYER_CAPACITY);
        for index in 0..players {
            self.add_player(format!("player {index}"));
        }

        players
    }

    /// Fills the bag with a random, small, non-zero number of tiles whose identities do not
    /// collide with any rack.
    ///
    /// # Returns
    ///
    /// The number of tiles in the bag.
    pub fn random_bag<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let tiles = random_bag_tiles(rng, 1_000);
        let bag_len = tiles.len();
        self.mut_bag_tiles(tiles);

        bag_len
    }

    /// Pushes a random number of tiles into each rack, up to the rack capacity.
    pub fn random_racks<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (index, player) in self.players.iter_mut().enumerate() {
            player.add_tiles(random_rack(rng, (index * RACK_CAPACITY) as u32));
        }
    }

    /// Adds a random, medium, non-zero score to each player.
    pub fn random_scores<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let possible_points = Uniform::from(100..200);
        for player in &mut self.players {
            player.add_score(possible_points.sample(rng));
        }
    }
}
