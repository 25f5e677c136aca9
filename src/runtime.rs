use crate::{Action, ActionError, GameView, Move, Outcome, Tile};
use async_trait::async_trait;
pub use turn_runtime::*;

mod turn_runtime;

/// A player front end. Defines methods to get [actions](Action) from a player and to update
/// that player with the result of each action and the state of the game.
///
/// [Seat::next_action] and the `update_(kind)` methods block execution until getting input
/// or updating output. [Seat::update_view] may execute in parallel with other seats.
///
/// # Errors
///
/// The implementor of [Seat] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated invalid inputs. When a
/// method call fails, the runtime is stopped, and the error is propagated back to the
/// calling client code.
#[async_trait]
pub trait Seat<E> {
    /// During its turn, gets the next [action](Action) from the player.
    fn next_action(&self) -> Result<Action, E>;

    /// When an [action](Action) is accepted but does not end the turn, updates the player
    /// with the state of the game, their rack, their staged moves and what changed.
    fn update_outcome<'a>(
        &self,
        view: &'a GameView<'_>,
        rack: &'a [Tile],
        staged: &'a [Move],
        outcome: &'a Outcome,
    ) -> Result<(), E>;

    /// When an [action](Action) is rejected, updates the player with the state of the game,
    /// their rack, their action and the reason why it was rejected.
    fn update_rejection<'a>(
        &self,
        view: &'a GameView<'_>,
        rack: &'a [Tile],
        action: Action,
        error: ActionError,
    ) -> Result<(), E>;

    /// Updates the player with the state of the game and their rack.
    async fn update_view<'a>(&self, view: &'a GameView<'_>, rack: &'a [Tile]) -> Result<(), E>;
}
