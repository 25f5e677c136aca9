use crate::runtime::Seat;
use crate::{Game, Lexicon, Outcome, PlayerId, Tile};
use futures::future;
use itertools::Itertools;
use tracing::{debug, instrument};

/// How a turn ended.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum TurnEnd {
    /// The staged moves were committed and the rack was refilled.
    Committed {
        /// The points earned.
        points: u32,
        /// The tiles drawn after the commit.
        drawn: Vec<Tile>,
    },
    /// The staged moves were cleared.
    Abandoned,
}

/// It repeatedly asks the seat of the current player for an [action](Action) and applies
/// it. Rejected actions and accepted actions that do not end the turn are reported back to
/// that seat. A commit refills the rack and ends the turn, as does abandoning the staged
/// moves.
///
/// The current player is not advanced.
///
/// # Arguments
///
/// * `seats`: One seat per player, in join order.
/// * `game`: The state of the game.
///
/// # Errors
///
/// When the seat fails to send an action or receive an update.
///
/// # Returns
///
/// How the turn ended, or [None] if there is no current player or no seat for them.
#[instrument(level = "debug", skip_all)]
pub fn process_turn<S, E, L>(seats: &[S], game: &mut Game<L>) -> Result<Option<TurnEnd>, E>
where
    S: Seat<E>,
    L: Lexicon,
{
    let Some(current_player) = game.current_player() else {
        return Ok(None);
    };
    let Some(seat) = seats.get(current_player.index()) else {
        debug!(%current_player, "no seat for the current player");
        return Ok(None);
    };

    loop {
        let action = seat.next_action()?;
        match game.apply(current_player, action) {
            Ok(Outcome::Committed { points }) => {
                let drawn = game.pull_new_tiles_from_bag(current_player);
                return Ok(Some(TurnEnd::Committed { points, drawn }));
            }
            Ok(Outcome::Abandoned) => return Ok(Some(TurnEnd::Abandoned)),
            Ok(outcome) => seat.update_outcome(
                &game.view(),
                game.rack(current_player).unwrap_or_default(),
                game.temporary_moves(current_player),
                &outcome,
            )?,
            Err(error) => seat.update_rejection(
                &game.view(),
                game.rack(current_player).unwrap_or_default(),
                action,
                error,
            )?,
        }
    }
}

/// Asynchronously sends the current state of the game to every [seat](Seat). Seat `i` is
/// sent the rack of the `i`th player to join.
///
/// # Errors
///
/// Accumulates all errors from [Seat::update_view] into a vector.
pub async fn send_updates<S, E, L>(seats: &[S], game: &Game<L>) -> Result<(), Vec<E>>
where
    S: Seat<E>,
{
    let view = game.view();
    let update_tasks = seats.iter().enumerate().map(|(index, seat)| {
        seat.update_view(&view, game.rack(PlayerId::new(index)).unwrap_or_default())
    });

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}
