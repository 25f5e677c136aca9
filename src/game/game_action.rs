use crate::{Coordinate, Game, Lexicon, MoveError, Placement, PlayerId, StageError, Tile, TileId};
use std::collections::HashSet;
use tracing::instrument;

/// A request from a player front end.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    /// [Stage](Game::stage_placement) moving a tile to a coordinate.
    Stage {
        /// The target coordinate. Out of bounds picks the tile back up.
        coordinate: Coordinate,
        /// The tile being moved.
        tile: TileId,
    },
    /// [Unstage](Game::unstage_placement) a staged move.
    Unstage {
        /// The coordinate of the staged move.
        coordinate: Coordinate,
        /// The tile of the staged move.
        tile: TileId,
    },
    /// [Commit](Game::commit_temporary_moves) the staged moves.
    Commit,
    /// [Clear](Game::reset_temporary_moves) the staged moves.
    Abandon,
    /// [Draw](Game::pull_new_tiles_from_bag) up to the rack capacity.
    Refill,
}

/// The result of an accepted [action](Action).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    /// How the staged tile moved.
    Staged(Placement),
    /// Whether a staged move was dropped.
    Unstaged(bool),
    /// The staged moves were placed on the board.
    Committed {
        /// The points earned.
        points: u32,
    },
    /// The staged moves were cleared.
    Abandoned,
    /// The tiles drawn into the rack.
    Refilled(Vec<Tile>),
}

/// Describes the reason why an [action](Action) was rejected. Nothing changed.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ActionError {
    /// Acting for a player who never joined.
    #[error("{player} is not in the game")]
    UnknownPlayer {
        /// The requested player.
        player: PlayerId,
    },
    /// The placement could not be staged.
    #[error(transparent)]
    Stage(#[from] StageError),
    /// The staged moves are not one legal word play.
    #[error("play rejected for {} reason(s)", errors.len())]
    Rejected {
        /// Every rule violated by the staged moves.
        errors: HashSet<MoveError>,
    },
}

impl<L: Lexicon> Game<L> {
    /// Applies `action` on behalf of `player`.
    ///
    /// # Errors
    ///
    /// * [ActionError::UnknownPlayer] Acting for a player who never joined.
    /// * [ActionError::Stage] The placement could not be staged.
    /// * [ActionError::Rejected] The staged moves are not one legal word play.
    ///
    /// # Returns
    ///
    /// What changed.
    #[instrument(level = "debug", skip(self), fields(player = %player))]
    pub fn apply(&mut self, player: PlayerId, action: Action) -> Result<Outcome, ActionError> {
        if self.player(player).is_none() {
            return Err(ActionError::UnknownPlayer { player });
        }

        let outcome = match action {
            Action::Stage { coordinate, tile } => {
                Outcome::Staged(self.stage_placement(player, coordinate, tile)?)
            }
            Action::Unstage { coordinate, tile } => {
                Outcome::Unstaged(self.unstage_placement(player, coordinate, tile))
            }
            Action::Commit => Outcome::Committed {
                points: self
                    .commit_temporary_moves(player)
                    .map_err(|errors| ActionError::Rejected { errors })?,
            },
            Action::Abandon => {
                self.reset_temporary_moves(player);
                Outcome::Abandoned
            }
            Action::Refill => Outcome::Refilled(self.pull_new_tiles_from_bag(player)),
        };

        Ok(outcome)
    }
}
