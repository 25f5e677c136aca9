use crate::{Alphabet, Tile, TileId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// The undrawn [tiles](Tile) shared by all players. The bag only shrinks.
///
/// Each bag owns its random number generator, seeded once when the bag is created, so bags
/// of concurrent games never share or reseed a generator.
#[derive(Debug, Clone)]
pub struct Bag {
    tiles: Vec<Tile>,
    rng: StdRng,
}

impl Bag {
    /// Fills a bag with every letter of `alphabet` as many times as its count. Each tile gets
    /// a fresh [identity](TileId), numbered from `0` in letter order.
    ///
    /// # Arguments
    ///
    /// * `alphabet`: The letter distribution.
    /// * `rng`: The generator used by every later draw.
    pub fn new(alphabet: &Alphabet, rng: StdRng) -> Bag {
        let tiles = alphabet
            .iter()
            .flat_map(|(letter, spec)| (0..spec.count).map(move |_| (letter, spec.points)))
            .zip(0..)
            .map(|((letter, points), index)| Tile::new(TileId::new(index), letter, points))
            .collect();

        Bag::from_tiles(tiles, rng)
    }

    /// Like [Bag::new] with a generator seeded from `seed`, so draws are reproducible.
    pub fn with_seed(alphabet: &Alphabet, seed: u64) -> Bag {
        Bag::new(alphabet, StdRng::seed_from_u64(seed))
    }

    /// Like [Bag::new] with a generator seeded from the operating system.
    pub fn from_entropy(alphabet: &Alphabet) -> Bag {
        Bag::new(alphabet, StdRng::from_entropy())
    }

    /// Creates a bag holding exactly `tiles`. The caller keeps [identities](TileId) unique.
    pub fn from_tiles(tiles: Vec<Tile>, rng: StdRng) -> Bag {
        Bag { tiles, rng }
    }

    /// Removes `min(count, self.len())` tiles chosen uniformly at random without
    /// replacement. An empty bag yields an empty vector. The order of the returned tiles is
    /// arbitrary.
    pub fn take_tiles(&mut self, count: usize) -> Vec<Tile> {
        let count = count.min(self.tiles.len());
        let mut taken = Vec::with_capacity(count);
        for _ in 0..count {
            let index = self.rng.gen_range(0..self.tiles.len());
            taken.push(self.tiles.swap_remove(index));
        }
        debug!(taken = count, remaining = self.tiles.len(), "took tiles from bag");

        taken
    }

    /// The number of undrawn tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether every tile has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The undrawn tiles in no particular order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Default for Bag {
    fn default() -> Self {
        Bag::from_entropy(&Alphabet::english())
    }
}
