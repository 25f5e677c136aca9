use crate::BLANK;
use std::fmt;

/// Identifies one physical [tile](Tile) for the lifetime of a game. Two tiles printed with
/// the same letter and points are still told apart by their `TileId`.
///
/// # See Also
///
/// * [Bag::new](crate::Bag::new)
/// * [Positions](crate::Positions)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TileId(u32);

impl TileId {
    /// # Arguments
    ///
    /// * `index`: A number unique among all tiles of one game.
    #[inline]
    pub const fn new(index: u32) -> TileId {
        TileId(index)
    }

    /// # Returns
    ///
    /// The number this identity was created from.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A letter and its points, printed on one physical tile. Tiles are never mutated after
/// they are created.
///
/// Equality includes the [identity](TileId), so a tile only equals itself. Use
/// [Tile::same_face] to compare the printed letter and points alone.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Tile {
    id: TileId,
    letter: char,
    points: u32,
}

impl Tile {
    /// # Arguments
    ///
    /// * `id`: The identity of this physical tile.
    /// * `letter`: The printed letter or [BLANK].
    /// * `points`: The points printed on the tile.
    #[inline]
    pub const fn new(id: TileId, letter: char, points: u32) -> Tile {
        Tile { id, letter, points }
    }

    /// The identity of this physical tile.
    #[inline]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// The printed letter or [BLANK].
    #[inline]
    pub const fn letter(&self) -> char {
        self.letter
    }

    /// The points printed on the tile.
    #[inline]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Whether the tile is a blank.
    #[inline]
    pub const fn is_blank(&self) -> bool {
        self.letter == BLANK
    }

    /// Whether both tiles print the same letter and points, regardless of identity.
    #[inline]
    pub fn same_face(&self, other: &Tile) -> bool {
        self.letter == other.letter && self.points == other.points
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_face_ignores_identity() {
        let first = Tile::new(TileId::new(0), 'E', 1);
        let second = Tile::new(TileId::new(1), 'E', 1);

        assert_ne!(first, second);
        assert!(first.same_face(&second));
    }

    #[test]
    fn different_points_different_face() {
        let first = Tile::new(TileId::new(0), 'E', 1);
        let second = Tile::new(TileId::new(1), 'E', 2);

        assert!(!first.same_face(&second));
    }

    #[test]
    fn blank() {
        assert!(Tile::new(TileId::new(3), BLANK, 0).is_blank());
        assert!(!Tile::new(TileId::new(4), 'Q', 10).is_blank());
    }

    #[test]
    fn display() {
        assert_eq!("Q10", Tile::new(TileId::new(9), 'Q', 10).to_string());
        assert_eq!("#9", TileId::new(9).to_string());
    }
}
