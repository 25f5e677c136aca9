use crate::{Board, Game, Names, Player, PlayerId, RackLens, Scores, Tile};

/// Immutably borrows the public properties of a [game](Game). Racks are replaced by their
/// lengths.
#[derive(Debug)]
pub struct GameView<'a> {
    /// The number of undrawn tiles.
    pub bag_len: usize,
    /// The committed tiles.
    pub board: &'a Board,
    /// The name of each player.
    pub names: Names<'a>,
    /// The score of each player.
    pub scores: Scores,
    /// The number of tiles in each rack.
    pub rack_lens: RackLens,
    /// The player whose turn it is.
    pub current_player: Option<PlayerId>,
}

impl<L> Game<L> {
    /// # Returns
    ///
    /// A new [GameView], which immutably borrows the board, but with the bag replaced by
    /// its length and each rack replaced by its length.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            bag_len: self.bag.len(),
            board: &self.board,
            names: self.players.iter().map(Player::name).collect(),
            scores: self.players.iter().map(Player::score).collect(),
            rack_lens: self.players.iter().map(|player| player.rack().len()).collect(),
            current_player: self.current_player,
        }
    }

    /// # Returns
    ///
    /// The tiles held by `player`, or [None] if no such player joined.
    #[inline]
    pub fn rack(&self, player: PlayerId) -> Option<&[Tile]> {
        self.player(player).map(Player::rack)
    }

    /// # Returns
    ///
    /// The score of `player`, or [None] if no such player joined.
    #[inline]
    pub fn score(&self, player: PlayerId) -> Option<u32> {
        self.player(player).map(Player::score)
    }
}
