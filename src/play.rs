use crate::{Axis, Board, Coordinate, Tile, TileId};
use itertools::Itertools;
use std::collections::BTreeSet;
use std::fmt;

/// A [tile](Tile) sitting at a [coordinate](Coordinate). Used both for a staged proposal
/// and for a committed placement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    coordinate: Coordinate,
    tile: Tile,
}

impl Move {
    /// # Arguments
    ///
    /// * `coordinate`: Where the tile sits.
    /// * `tile`: The tile being placed.
    #[inline]
    pub const fn new(coordinate: Coordinate, tile: Tile) -> Move {
        Move { coordinate, tile }
    }

    /// Where the tile sits.
    #[inline]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The tile being placed.
    #[inline]
    pub const fn tile(&self) -> Tile {
        self.tile
    }

    /// The key staged moves are sorted by: `(x, y)` ascending, then tile identity.
    #[inline]
    pub(crate) fn sort_key(&self) -> (Coordinate, TileId) {
        (self.coordinate, self.tile.id())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.coordinate;
        write!(f, "{} at ({x}, {y})", self.tile)
    }
}

/// The outcome of tentatively moving one tile, independent of word legality.
///
/// # See Also
///
/// * [Board::validate_placement]
/// * [Game::stage_placement](crate::Game::stage_placement)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Placement {
    /// A tile not on the board moves to an empty field.
    OntoBoard,
    /// A tile on the board moves to another empty field.
    Relocated,
    /// A tile on the board moves out of bounds and is picked back up.
    OffBoard,
    /// Any other combination.
    Invalid,
}

impl Placement {
    /// Applies the placement table.
    ///
    /// | on board | target in bounds | target empty | result |
    /// |---|---|---|---|
    /// | no | yes | yes | [Placement::OntoBoard] |
    /// | yes | yes | yes | [Placement::Relocated] |
    /// | yes | no | - | [Placement::OffBoard] |
    /// | otherwise | | | [Placement::Invalid] |
    ///
    /// # Arguments
    ///
    /// * `on_board`: Whether the tile already sits on a field.
    /// * `in_bounds`: Whether the target coordinate names a field.
    /// * `target_empty`: Whether the target field holds no tile.
    pub const fn classify(on_board: bool, in_bounds: bool, target_empty: bool) -> Placement {
        match (on_board, in_bounds, target_empty) {
            (false, true, true) => Placement::OntoBoard,
            (true, true, true) => Placement::Relocated,
            (true, false, _) => Placement::OffBoard,
            _ => Placement::Invalid,
        }
    }

    /// Whether the placement is allowed.
    #[inline]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Placement::Invalid)
    }

    /// Whether the tile ends up on a field, either newly or relocated.
    #[inline]
    pub const fn moved_on_board(self) -> bool {
        matches!(self, Placement::OntoBoard | Placement::Relocated)
    }

    /// Whether the tile is picked back up.
    #[inline]
    pub const fn moved_off_board(self) -> bool {
        matches!(self, Placement::OffBoard)
    }
}

/// Describes the reason why a staged move set can not be
/// [committed](crate::Game::play_temporary_moves).
#[derive(Debug, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum MoveError {
    /// Attempting to commit no [moves](Move).
    #[error("no moves are staged")]
    EmptyMoves,
    /// Attempting to commit [tiles](Tile) the player does not hold.
    #[error("tiles {tiles:?} are not in the rack")]
    NotInRack {
        /// Identities of the tiles missing from the rack.
        tiles: BTreeSet<TileId>,
    },
    /// Attempting to commit [tiles](Tile) outside the board.
    #[error("coordinates {coordinates:?} are out of bounds")]
    CoordinatesOutOfBounds {
        /// [Coordinates](Coordinate) that name no field.
        coordinates: BTreeSet<Coordinate>,
    },
    /// Attempting to commit [tiles](Tile) onto fields that already hold one.
    #[error("coordinates {coordinates:?} are occupied")]
    CoordinatesOccupied {
        /// [Coordinates](Coordinate) whose field already holds a tile.
        coordinates: BTreeSet<Coordinate>,
    },
    /// Attempting to commit two [moves](Move) onto one field or one tile twice.
    #[error("duplicate coordinates {coordinates:?} or tiles {tiles:?}")]
    Duplicates {
        /// [Coordinates](Coordinate) used by more than one move.
        coordinates: BTreeSet<Coordinate>,
        /// Identities of tiles used by more than one move.
        tiles: BTreeSet<TileId>,
    },
    /// Attempting to commit [moves](Move) that do not share an x or a y.
    #[error("moves are not in one line")]
    NotInLine,
    /// Attempting to commit [moves](Move) with empty fields between them.
    #[error("empty fields {holes:?} between moves")]
    Holes {
        /// Empty [coordinates](Coordinate) between the first and last move.
        holes: BTreeSet<Coordinate>,
    },
    /// Attempting to commit a candidate word missing from the dictionary.
    #[error("{word:?} is not a word")]
    NotAWord {
        /// The candidate word.
        word: String,
    },
}

/// Walks `moves` in ascending order along `axis` and spells the candidate word. A field
/// skipped between two consecutive moves must hold a tile on `board`, whose letter bridges
/// the gap. Only fields of `board` are walked, so a move outside the board bridges nothing.
///
/// # Errors
///
/// Every skipped [coordinate](Coordinate) whose field is empty, and the coordinate of every
/// move outside the board.
///
/// # See Also
///
/// * [Game::check_move](crate::Game::check_move)
pub fn spell_word(board: &Board, moves: &[Move], axis: Axis) -> Result<String, BTreeSet<Coordinate>> {
    let mut word = String::with_capacity(moves.len());
    let mut holes = BTreeSet::new();

    let sorted = moves
        .iter()
        .sorted_by_key(|next_move| axis.along(next_move.coordinate()));
    let mut previous: Option<Coordinate> = None;
    for next_move in sorted {
        let coordinate = next_move.coordinate();
        if !board.contains(coordinate) {
            holes.insert(coordinate);
            previous = None;
            continue;
        }
        if let Some(previous) = previous {
            let gap = axis.along(coordinate) - axis.along(previous);
            for steps in 1..gap {
                let skipped = Axis::step(previous, axis, steps);
                match board.get_tile(skipped) {
                    Some(tile) => word.push(tile.letter()),
                    None => {
                        holes.insert(skipped);
                    }
                }
            }
        }
        word.push(next_move.tile().letter());
        previous = Some(coordinate);
    }

    if holes.is_empty() {
        Ok(word)
    } else {
        Err(holes)
    }
}

/// Finds [coordinates](Coordinate) and [tile identities](TileId) used by more than one
/// [move](Move).
pub fn find_duplicates(moves: &[Move]) -> (BTreeSet<Coordinate>, BTreeSet<TileId>) {
    (
        moves.iter().map(Move::coordinate).duplicates().collect(),
        moves
            .iter()
            .map(|next_move| next_move.tile().id())
            .duplicates()
            .collect(),
    )
}

/// The sum of the raw letter points of every placed [tile](Tile). Field premiums are not
/// applied.
pub fn raw_score(moves: &[Move]) -> u32 {
    moves.iter().map(|next_move| next_move.tile().points()).sum()
}
