use crate::{Coordinate, Game, Move, Moves, Placement, PlayerId, TileId, RACK_CAPACITY};
use tracing::{debug, instrument};

/// Describes the reason why a [placement](Game::stage_placement) could not be staged.
#[derive(Debug, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum StageError {
    /// Attempting to stage for a player who never joined.
    #[error("{player} is not in the game")]
    UnknownPlayer {
        /// The requested player.
        player: PlayerId,
    },
    /// Attempting to stage a [tile](crate::Tile) the player does not hold.
    #[error("tile {tile} is not in the rack")]
    TileNotInRack {
        /// The requested tile.
        tile: TileId,
    },
    /// Attempting a combination the [placement table](Placement::classify) forbids.
    #[error("tile {tile} can not be placed at {coordinate:?}")]
    InvalidPlacement {
        /// The target [coordinate](Coordinate).
        coordinate: Coordinate,
        /// The requested tile.
        tile: TileId,
    },
}

impl<L> Game<L> {
    /// Appends `next_move` to the moves staged by `player`, then sorts them by `(x, y)`.
    /// No legality check is performed.
    ///
    /// # See Also
    ///
    /// * [Game::stage_placement]
    #[instrument(level = "debug", skip(self), fields(player = %player, next_move = %next_move))]
    pub fn add_temporary_move(&mut self, player: PlayerId, next_move: Move) {
        let moves = self
            .temporary_moves
            .entry(player)
            .or_insert_with(|| Moves::with_capacity(RACK_CAPACITY));
        moves.push(next_move);
        moves.sort_by_key(Move::sort_key);
    }

    /// Removes every move staged by `player` equal to `next_move`, then sorts the rest by
    /// `(x, y)`.
    #[instrument(level = "debug", skip(self), fields(player = %player, next_move = %next_move))]
    pub fn remove_temporary_move(&mut self, player: PlayerId, next_move: Move) {
        if let Some(moves) = self.temporary_moves.get_mut(&player) {
            moves.retain(|staged| *staged != next_move);
            moves.sort_by_key(Move::sort_key);
        }
    }

    /// Clears every move staged by `player`, abandoning the turn.
    #[instrument(level = "debug", skip(self), fields(player = %player))]
    pub fn reset_temporary_moves(&mut self, player: PlayerId) {
        if let Some(moves) = self.temporary_moves.get_mut(&player) {
            moves.clear();
        }
    }

    /// The moves staged by `player`, sorted by `(x, y)`. Empty if nothing is staged.
    #[inline]
    pub fn temporary_moves(&self, player: PlayerId) -> &[Move] {
        self.temporary_moves
            .get(&player)
            .map_or(&[][..], |moves| moves.as_slice())
    }

    /// Classifies moving the tile identified by `tile` to `coordinate` as seen by `player`:
    /// the committed board plus the moves `player` has staged. Word legality is not
    /// considered.
    ///
    /// # See Also
    ///
    /// * [Placement::classify]
    /// * [Board::validate_placement](crate::Board::validate_placement)
    pub fn validate_single_placement(
        &self,
        player: PlayerId,
        coordinate: Coordinate,
        tile: TileId,
    ) -> Placement {
        let staged = self.temporary_moves(player);
        let on_board = self.board.is_tile_on_board(tile)
            || staged.iter().any(|next_move| next_move.tile().id() == tile);
        let target_empty = self.board.is_field_empty(coordinate)
            && staged
                .iter()
                .all(|next_move| next_move.coordinate() != coordinate);

        Placement::classify(on_board, self.board.contains(coordinate), target_empty)
    }

    /// Stages moving the tile identified by `tile` from the rack of `player` to
    /// `coordinate`, following the [placement table](Placement::classify):
    ///
    /// * [Placement::OntoBoard] stages a new move.
    /// * [Placement::Relocated] replaces the staged move of that tile.
    /// * [Placement::OffBoard] drops the staged move of that tile.
    ///
    /// # Errors
    ///
    /// * [StageError::UnknownPlayer] Attempting to stage for a player who never joined.
    /// * [StageError::TileNotInRack] Attempting to stage a tile the player does not hold.
    /// * [StageError::InvalidPlacement] Attempting a combination the table forbids.
    ///
    /// # Returns
    ///
    /// How the tile moved.
    #[instrument(level = "debug", skip(self), fields(player = %player, tile = %tile))]
    pub fn stage_placement(
        &mut self,
        player: PlayerId,
        coordinate: Coordinate,
        tile: TileId,
    ) -> Result<Placement, StageError> {
        let next_tile = self
            .player(player)
            .ok_or(StageError::UnknownPlayer { player })?
            .get_tile(tile)
            .ok_or(StageError::TileNotInRack { tile })?;

        let placement = self.validate_single_placement(player, coordinate, tile);
        match placement {
            Placement::OntoBoard => {
                self.add_temporary_move(player, Move::new(coordinate, next_tile));
            }
            Placement::Relocated => {
                self.unstage_tile(player, tile);
                self.add_temporary_move(player, Move::new(coordinate, next_tile));
            }
            Placement::OffBoard => {
                self.unstage_tile(player, tile);
            }
            Placement::Invalid => {
                debug!("placement rejected");
                return Err(StageError::InvalidPlacement { coordinate, tile });
            }
        }
        debug!(?placement, "placement staged");

        Ok(placement)
    }

    /// Drops the staged move of `player` that places the tile identified by `tile` at
    /// `coordinate`.
    ///
    /// # Returns
    ///
    /// Whether such a move was staged.
    #[instrument(level = "debug", skip(self), fields(player = %player, tile = %tile))]
    pub fn unstage_placement(
        &mut self,
        player: PlayerId,
        coordinate: Coordinate,
        tile: TileId,
    ) -> bool {
        let Some(staged) = self
            .temporary_moves(player)
            .iter()
            .find(|next_move| {
                next_move.coordinate() == coordinate && next_move.tile().id() == tile
            })
            .copied()
        else {
            debug!("nothing staged there");
            return false;
        };

        self.remove_temporary_move(player, staged);
        true
    }

    fn unstage_tile(&mut self, player: PlayerId, tile: TileId) {
        if let Some(moves) = self.temporary_moves.get_mut(&player) {
            moves.retain(|next_move| next_move.tile().id() != tile);
        }
    }
}
