use crate::{Coordinate, Move, Player, Tile, TileId, PLAYER_CAPACITY, RACK_CAPACITY};
use bimap::BiHashMap;
use smallvec::SmallVec;

/// A vector of [tiles](Tile) held by one player, in the order they were drawn.
///
/// # See Also
///
/// * [RACK_CAPACITY]
/// * [Player](crate::Player)
/// * [Game::pull_new_tiles_from_bag](crate::Game::pull_new_tiles_from_bag)
pub type Rack = SmallVec<[Tile; RACK_CAPACITY]>;
/// A vector of staged [moves](Move) for one player, kept sorted by [coordinate](Coordinate).
///
/// # See Also
///
/// * [Game::add_temporary_move](crate::Game::add_temporary_move)
/// * [Game::check_move](crate::Game::check_move)
pub type Moves = SmallVec<[Move; RACK_CAPACITY]>;
/// A vector of [players](Player) in the order they joined.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [Game](crate::Game)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// A bimap of [tile identities](TileId) on the board to their [coordinates](Coordinate).
/// Each side is unique, so one tile never sits on two fields and one field never holds two
/// tiles.
///
/// # See Also
///
/// * [Board](crate::Board)
pub type Positions = BiHashMap<TileId, Coordinate>;
/// A vector of points for each player.
///
/// # See Also
///
/// * [GameView](crate::GameView)
pub type Scores = SmallVec<[u32; PLAYER_CAPACITY]>;
/// A vector of player names.
///
/// # See Also
///
/// * [GameView](crate::GameView)
pub type Names<'a> = SmallVec<[&'a str; PLAYER_CAPACITY]>;
/// A vector of rack lengths.
///
/// # See Also
///
/// * [GameView](crate::GameView)
pub type RackLens = SmallVec<[usize; PLAYER_CAPACITY]>;
