use crate::{Rack, Tile, TileId, RACK_CAPACITY};
use std::fmt;

/// The index of a [player](Player) in the order players joined a [game](crate::Game).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PlayerId(usize);

impl PlayerId {
    /// # Arguments
    ///
    /// * `index`: The position of the player in join order.
    #[inline]
    pub const fn new(index: usize) -> PlayerId {
        PlayerId(index)
    }

    /// The position of the player in join order.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.0)
    }
}

/// A participant with a name, a score that never decreases and a [rack](Rack) of
/// [tiles](Tile).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    name: String,
    score: u32,
    rack: Rack,
}

impl Player {
    /// Creates a player with a score of `0` and an empty rack.
    pub fn new(name: impl Into<String>) -> Player {
        Player {
            name: name.into(),
            score: 0,
            rack: Rack::with_capacity(RACK_CAPACITY),
        }
    }

    /// The display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cumulative score.
    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The tiles held, in the order they were drawn.
    #[inline]
    pub fn rack(&self) -> &[Tile] {
        &self.rack
    }

    /// # Returns
    ///
    /// The tile identified by `id`, or [None] if it is not in the rack.
    #[inline]
    pub fn get_tile(&self, id: TileId) -> Option<Tile> {
        self.rack.iter().find(|tile| tile.id() == id).copied()
    }

    /// Removes the first rack entry identified by `id`. The order of the other tiles is
    /// kept.
    ///
    /// # Returns
    ///
    /// The removed tile, or [None] if it was not in the rack.
    pub fn remove_tile(&mut self, id: TileId) -> Option<Tile> {
        let index = self.rack.iter().position(|tile| tile.id() == id)?;
        Some(self.rack.remove(index))
    }

    pub(crate) fn add_tiles(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.rack.extend(tiles);
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
