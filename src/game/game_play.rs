use crate::{
    find_axis, find_duplicates, raw_score, spell_word, Game, Lexicon, Move, MoveError, PlayerId,
    Tile,
};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, instrument};

impl<L: Lexicon> Game<L> {
    /// Whether `moves` form one legal word play for `player`.
    ///
    /// # See Also
    ///
    /// * [Game::check_moves]
    #[inline]
    pub fn check_move(&self, player: PlayerId, moves: &[Move]) -> bool {
        self.check_moves(player, moves).is_ok()
    }

    /// Checks `moves` as one word play for `player` and spells the candidate word.
    ///
    /// The moves must share an x (read vertically) or a y (read horizontally). Walking them
    /// in ascending order along that axis, every field skipped between two consecutive moves
    /// must already hold a tile on the board, whose letter becomes part of the word. The
    /// word runs from the first to the last move and must be in the dictionary.
    ///
    /// Words formed perpendicular to the play, tiles touching either end of the play and a
    /// first play through the center are not checked. Moves outside the board stop the check
    /// before the line and the word are considered.
    ///
    /// # Errors
    ///
    /// * [MoveError::EmptyMoves] Attempting to commit no moves.
    /// * [MoveError::NotInRack] Attempting to commit tiles the player does not hold.
    /// * [MoveError::CoordinatesOutOfBounds] Attempting to commit tiles outside the board.
    /// * [MoveError::CoordinatesOccupied] Attempting to commit tiles onto occupied fields.
    /// * [MoveError::Duplicates] Attempting to commit two moves onto one field or one tile
    /// twice.
    /// * [MoveError::NotInLine] Attempting to commit moves that do not share an x or a y.
    /// * [MoveError::Holes] Attempting to commit moves with empty fields between them.
    /// * [MoveError::NotAWord] Attempting to commit a word missing from the dictionary.
    ///
    /// # Returns
    ///
    /// The candidate word.
    pub fn check_moves(&self, player: PlayerId, moves: &[Move]) -> Result<String, HashSet<MoveError>> {
        let mut errors = HashSet::with_capacity(8);

        if moves.is_empty() {
            errors.insert(MoveError::EmptyMoves);
            return Err(errors);
        }

        let rack = self.player(player).map_or(&[][..], |player| player.rack());
        let tiles: BTreeSet<_> = moves
            .iter()
            .map(Move::tile)
            .filter(|tile| !rack.contains(tile))
            .map(|tile| tile.id())
            .collect();
        if !tiles.is_empty() {
            errors.insert(MoveError::NotInRack { tiles });
        }

        let (in_bounds, out_of_bounds): (BTreeSet<_>, BTreeSet<_>) = moves
            .iter()
            .map(Move::coordinate)
            .partition(|&coordinate| self.board.contains(coordinate));
        let off_board = !out_of_bounds.is_empty();
        if off_board {
            errors.insert(MoveError::CoordinatesOutOfBounds {
                coordinates: out_of_bounds,
            });
        }

        let occupied: BTreeSet<_> = in_bounds
            .into_iter()
            .filter(|&coordinate| !self.board.is_field_empty(coordinate))
            .collect();
        if !occupied.is_empty() {
            errors.insert(MoveError::CoordinatesOccupied {
                coordinates: occupied,
            });
        }

        let (coordinates, tiles) = find_duplicates(moves);
        if !coordinates.is_empty() || !tiles.is_empty() {
            errors.insert(MoveError::Duplicates { coordinates, tiles });
        }

        // the word is only spelled across fields of the board
        if off_board {
            debug!(?errors, "moves rejected");
            return Err(errors);
        }

        let Some(axis) = find_axis(moves.iter().map(Move::coordinate)) else {
            errors.insert(MoveError::NotInLine);
            debug!(?errors, "moves rejected");
            return Err(errors);
        };

        match spell_word(&self.board, moves, axis) {
            Ok(word) => {
                if !self.lexicon.is_word(&word) {
                    errors.insert(MoveError::NotAWord { word: word.clone() });
                }
                if errors.is_empty() {
                    debug!(%word, ?axis, "moves accepted");
                    return Ok(word);
                }
            }
            Err(holes) => {
                errors.insert(MoveError::Holes { holes });
            }
        }

        debug!(?errors, "moves rejected");
        Err(errors)
    }

    /// Commits the moves staged by `player`: checks them as one
    /// [word play](Game::check_moves), places each tile on the board, removes it from the
    /// rack, clears the staged moves and adds the raw letter points of the placed tiles to
    /// the player's score. Field premiums are not applied.
    ///
    /// If the check fails, nothing changes and the moves stay staged.
    ///
    /// # Errors
    ///
    /// Every rule [Game::check_moves] found violated.
    ///
    /// # Returns
    ///
    /// The points earned.
    #[instrument(level = "debug", skip(self), fields(player = %player))]
    pub fn commit_temporary_moves(&mut self, player: PlayerId) -> Result<u32, HashSet<MoveError>> {
        let moves = self.temporary_moves(player).to_vec();
        self.check_moves(player, &moves)?;

        let points = raw_score(&moves);
        let Some(current) = self.players.get_mut(player.index()) else {
            // unreachable after a passing check, which requires the tiles in a rack
            return Ok(0);
        };
        for next_move in &moves {
            current.remove_tile(next_move.tile().id());
            self.board.place_tile(next_move.tile(), next_move.coordinate());
        }
        current.add_score(points);
        self.reset_temporary_moves(player);
        debug!(points, tiles = moves.len(), "moves committed");

        Ok(points)
    }

    /// Like [Game::commit_temporary_moves], but reports an empty or illegal play as `0`
    /// points.
    #[inline]
    pub fn play_temporary_moves(&mut self, player: PlayerId) -> u32 {
        self.commit_temporary_moves(player).unwrap_or(0)
    }
}

impl<L> Game<L> {
    /// Draws from the bag until the rack of `player` holds the rack capacity, or the bag
    /// is empty. Nothing is drawn for a full rack or an unknown player.
    ///
    /// # Returns
    ///
    /// The drawn tiles, in the order they were added to the rack.
    #[instrument(level = "debug", skip(self), fields(player = %player))]
    pub fn pull_new_tiles_from_bag(&mut self, player: PlayerId) -> Vec<Tile> {
        let Some(current) = self.players.get_mut(player.index()) else {
            debug!("unknown player");
            return Vec::new();
        };

        let missing = self.rack_capacity.saturating_sub(current.rack().len());
        if missing == 0 {
            debug!("rack is full");
            return Vec::new();
        }

        let drawn = self.bag.take_tiles(missing);
        current.add_tiles(drawn.iter().copied());
        debug!(drawn = drawn.len(), bag_len = self.bag.len(), "rack refilled");

        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, Bag, Board, Dictionary, Player, TileId};
    use map_macro::{btree_set, hash_set};
    use tap::Tap;

    fn tile(index: u32, letter: char, points: u32) -> Tile {
        Tile::new(TileId::new(index), letter, points)
    }

    fn game_with_rack(words: &[&str], rack: &[Tile]) -> (Game<Dictionary>, PlayerId) {
        let mut game = Game::empty_game(words);
        let player = game.add_player("Ada");
        game.mut_player(player).add_tiles(rack.iter().copied());

        (game, player)
    }

    /// Board, racks, scores and staged moves.
    fn snapshot(game: &Game<Dictionary>, player: PlayerId) -> (Board, Vec<Player>, Vec<Move>) {
        (
            game.board().clone(),
            game.players().to_vec(),
            game.temporary_moves(player).to_vec(),
        )
    }

    #[test]
    fn check_moves_empty() {
        let (game, player) = game_with_rack(&["cat"], &[]);

        assert_eq!(
            Err(hash_set! { MoveError::EmptyMoves }),
            game.check_moves(player, &[])
        );
    }

    #[test]
    fn check_moves_horizontal_word() {
        let [c, a, t] = [tile(0, 'C', 3), tile(1, 'A', 1), tile(2, 'T', 1)];
        let (game, player) = game_with_rack(&["cat"], &[c, a, t]);
        let moves = [
            Move::new((3, 7), c),
            Move::new((4, 7), a),
            Move::new((5, 7), t),
        ];

        assert_eq!(Ok(String::from("CAT")), game.check_moves(player, &moves));
        assert!(game.check_move(player, &moves));
    }

    #[test]
    fn check_moves_vertical_word() {
        let [c, a, t] = [tile(0, 'C', 3), tile(1, 'A', 1), tile(2, 'T', 1)];
        let (game, player) = game_with_rack(&["cat"], &[c, a, t]);
        let moves = [
            Move::new((7, 3), c),
            Move::new((7, 4), a),
            Move::new((7, 5), t),
        ];

        assert_eq!(Ok(String::from("CAT")), game.check_moves(player, &moves));
    }

    #[test]
    fn check_moves_single_tile() {
        let a = tile(0, 'A', 1);
        let (game, player) = game_with_rack(&["a"], &[a]);

        assert!(game.check_move(player, &[Move::new((7, 7), a)]));
    }

    #[test]
    fn check_moves_not_in_line() {
        let [a, b] = [tile(0, 'A', 1), tile(1, 'B', 3)];
        let (game, player) = game_with_rack(&["ab", "ba", "a", "b"], &[a, b]);

        assert_eq!(
            Err(hash_set! { MoveError::NotInLine }),
            game.check_moves(player, &[Move::new((0, 0), a), Move::new((1, 1), b)])
        );
    }

    #[test]
    fn check_moves_bridges_gap() {
        let [a, t] = [tile(1, 'A', 1), tile(2, 'T', 1)];
        let (mut game, player) = game_with_rack(&["act"], &[a, t]);
        game.mut_board().place_tile(tile(0, 'C', 3), (2, 0));

        let moves = [Move::new((1, 0), a), Move::new((3, 0), t)];

        assert_eq!(Ok(String::from("ACT")), game.check_moves(player, &moves));
        assert_eq!(Some(Axis::Horizontal), find_axis(moves.iter().map(Move::coordinate)));
    }

    #[test]
    fn check_moves_holes() {
        let [a, t] = [tile(1, 'A', 1), tile(2, 'T', 1)];
        let (game, player) = game_with_rack(&["act"], &[a, t]);

        assert_eq!(
            Err(hash_set! { MoveError::Holes { holes: btree_set! { (2, 0) } } }),
            game.check_moves(player, &[Move::new((1, 0), a), Move::new((3, 0), t)])
        );
    }

    #[test]
    fn check_moves_not_a_word() {
        let [t, a, c] = [tile(2, 'T', 1), tile(1, 'A', 1), tile(0, 'C', 3)];
        let (game, player) = game_with_rack(&["cat"], &[t, a, c]);

        assert_eq!(
            Err(hash_set! { MoveError::NotAWord { word: String::from("TAC") } }),
            game.check_moves(
                player,
                &[
                    Move::new((0, 0), t),
                    Move::new((1, 0), a),
                    Move::new((2, 0), c)
                ]
            )
        );
    }

    #[test]
    fn check_moves_not_in_rack() {
        let a = tile(0, 'A', 1);
        let stranger = tile(7, 'A', 1);
        let (game, player) = game_with_rack(&["a"], &[a]);

        assert_eq!(
            Err(hash_set! { MoveError::NotInRack { tiles: btree_set! { stranger.id() } } }),
            game.check_moves(player, &[Move::new((7, 7), stranger)])
        );
    }

    #[test]
    fn check_moves_out_of_bounds_and_occupied() {
        let [a, t] = [tile(1, 'A', 1), tile(2, 'T', 1)];
        let (mut game, player) = game_with_rack(&["at"], &[a, t]);
        game.mut_board().place_tile(tile(0, 'C', 3), (14, 0));
        let occupied = hash_set! {
            MoveError::CoordinatesOccupied { coordinates: btree_set! { (14, 0) } },
        };

        assert_eq!(
            Err(occupied.clone()),
            game.check_moves(player, &[Move::new((14, 0), a), Move::new((14, 1), t)])
        );
        assert_eq!(
            Err(occupied.tap_mut(|errors| {
                errors.insert(MoveError::CoordinatesOutOfBounds {
                    coordinates: btree_set! { (15, 0) },
                });
            })),
            game.check_moves(player, &[Move::new((14, 0), a), Move::new((15, 0), t)])
        );
    }

    #[test]
    fn check_moves_far_off_board() {
        let [a, t] = [tile(1, 'A', 1), tile(2, 'T', 1)];
        let (mut game, player) = game_with_rack(&["at"], &[a, t]);
        game.add_temporary_move(player, Move::new((isize::MIN, 0), a));
        game.add_temporary_move(player, Move::new((isize::MAX, 0), t));
        let before = snapshot(&game, player);

        assert_eq!(
            Err(hash_set! {
                MoveError::CoordinatesOutOfBounds {
                    coordinates: btree_set! { (isize::MIN, 0), (isize::MAX, 0) },
                },
            }),
            game.check_moves(player, game.temporary_moves(player))
        );
        assert_eq!(0, game.play_temporary_moves(player));

        assert_eq!(before, snapshot(&game, player));
    }

    #[test]
    fn check_moves_wide_span_off_board() {
        let [a, t] = [tile(1, 'A', 1), tile(2, 'T', 1)];
        let (mut game, player) = game_with_rack(&["at"], &[a, t]);
        game.add_temporary_move(player, Move::new((0, 0), a));
        game.add_temporary_move(player, Move::new((200_000_000, 0), t));

        assert_eq!(
            Err(hash_set! {
                MoveError::CoordinatesOutOfBounds {
                    coordinates: btree_set! { (200_000_000, 0) },
                },
            }),
            game.commit_temporary_moves(player)
        );
        assert_eq!(2, game.temporary_moves(player).len());
    }

    #[test]
    fn check_moves_duplicates() {
        let a = tile(1, 'A', 1);
        let (game, player) = game_with_rack(&["aa"], &[a]);

        assert_eq!(
            Err(hash_set! {
                MoveError::Duplicates {
                    coordinates: btree_set! {},
                    tiles: btree_set! { a.id() },
                },
            }),
            game.check_moves(player, &[Move::new((0, 0), a), Move::new((1, 0), a)])
        );
    }

    #[test]
    fn play_temporary_moves_scores_raw_points() {
        let [c, a, t, x] = [
            tile(0, 'C', 3),
            tile(1, 'A', 1),
            tile(2, 'T', 1),
            tile(3, 'X', 8),
        ];
        let (mut game, player) = game_with_rack(&["cat"], &[c, a, t, x]);
        // (7, 3) is a double letter field
        game.add_temporary_move(player, Move::new((7, 5), t));
        game.add_temporary_move(player, Move::new((7, 3), c));
        game.add_temporary_move(player, Move::new((7, 4), a));

        assert_eq!(5, game.play_temporary_moves(player));

        assert_eq!(Some(5), game.score(player));
        assert_eq!(Some(c), game.board().get_tile((7, 3)));
        assert_eq!(Some(a), game.board().get_tile((7, 4)));
        assert_eq!(Some(t), game.board().get_tile((7, 5)));
        assert_eq!(Some(&[x][..]), game.rack(player));
        assert!(game.temporary_moves(player).is_empty());
    }

    #[test]
    fn play_temporary_moves_accumulates_score() {
        let [c, a, t, o, x] = [
            tile(0, 'C', 3),
            tile(1, 'A', 1),
            tile(2, 'T', 1),
            tile(3, 'O', 1),
            tile(4, 'X', 8),
        ];
        let (mut game, player) = game_with_rack(&["cat", "ox"], &[c, a, t, o, x]);
        game.add_temporary_move(player, Move::new((0, 0), c));
        game.add_temporary_move(player, Move::new((1, 0), a));
        game.add_temporary_move(player, Move::new((2, 0), t));
        game.play_temporary_moves(player);
        game.add_temporary_move(player, Move::new((5, 5), o));
        game.add_temporary_move(player, Move::new((5, 6), x));

        assert_eq!(9, game.play_temporary_moves(player));

        assert_eq!(Some(14), game.score(player));
    }

    #[test]
    fn play_temporary_moves_nothing_staged() {
        let (mut game, player) = game_with_rack(&["cat"], &[tile(0, 'C', 3)]);
        let before = snapshot(&game, player);

        assert_eq!(0, game.play_temporary_moves(player));

        assert_eq!(before, snapshot(&game, player));
    }

    #[test]
    fn play_temporary_moves_invalid_is_atomic() {
        let [a, b] = [tile(0, 'A', 1), tile(1, 'B', 3)];
        let (mut game, player) = game_with_rack(&["ab"], &[a, b]);
        game.add_temporary_move(player, Move::new((0, 0), a));
        game.add_temporary_move(player, Move::new((1, 1), b));
        let before = snapshot(&game, player);

        assert_eq!(0, game.play_temporary_moves(player));

        assert_eq!(before, snapshot(&game, player));
        assert_eq!(2, game.temporary_moves(player).len());
    }

    #[test]
    fn play_temporary_moves_not_a_word_is_atomic() {
        let [b, a] = [tile(0, 'B', 3), tile(1, 'A', 1)];
        let (mut game, player) = game_with_rack(&["ab"], &[b, a]);
        game.add_temporary_move(player, Move::new((0, 0), b));
        game.add_temporary_move(player, Move::new((1, 0), a));
        let before = snapshot(&game, player);

        assert_eq!(
            Err(hash_set! { MoveError::NotAWord { word: String::from("BA") } }),
            game.commit_temporary_moves(player)
        );

        assert_eq!(before, snapshot(&game, player));
    }

    #[test]
    fn pull_new_tiles_from_bag_fills_rack() {
        let mut game = Game::empty_game(&["cat"]);
        let player = game.add_player("Ada");
        *game.mut_bag() = Bag::with_seed(&crate::Alphabet::english(), 3);

        let drawn = game.pull_new_tiles_from_bag(player);

        assert_eq!(7, drawn.len());
        assert_eq!(Some(drawn.as_slice()), game.rack(player));
        assert_eq!(93, game.bag_len());
    }

    #[test]
    fn pull_new_tiles_from_bag_tops_up() {
        let mut game = Game::empty_game(&["cat"]);
        let player = game.add_player("Ada");
        game.mut_player(player)
            .add_tiles([tile(200, 'A', 1), tile(201, 'B', 3)]);
        *game.mut_bag() = Bag::with_seed(&crate::Alphabet::english(), 3);

        assert_eq!(5, game.pull_new_tiles_from_bag(player).len());
        assert_eq!(Some(7), game.rack(player).map(<[Tile]>::len));
    }

    #[test]
    fn pull_new_tiles_from_bag_full_rack() {
        let mut game = Game::empty_game(&["cat"]);
        let player = game.add_player("Ada");
        game.mut_player(player)
            .add_tiles((0..7).map(|index| tile(100 + index, 'E', 1)));
        *game.mut_bag() = Bag::with_seed(&crate::Alphabet::english(), 3);
        let rack = game.rack(player).map(<[Tile]>::to_vec);

        assert!(game.pull_new_tiles_from_bag(player).is_empty());

        assert_eq!(rack, game.rack(player).map(<[Tile]>::to_vec));
        assert_eq!(100, game.bag_len());
    }

    #[test]
    fn pull_new_tiles_from_bag_nearly_empty() {
        let mut game = Game::empty_game(&["cat"]);
        let player = game.add_player("Ada");
        game.mut_bag_tiles([tile(0, 'A', 1), tile(1, 'B', 3)]);

        assert_eq!(2, game.pull_new_tiles_from_bag(player).len());
        assert!(game.pull_new_tiles_from_bag(player).is_empty());
        assert_eq!(0, game.bag_len());
    }

    #[test]
    fn pull_new_tiles_from_bag_unknown_player() {
        let mut game = Game::empty_game(&["cat"]);

        assert!(game.pull_new_tiles_from_bag(PlayerId::new(0)).is_empty());
    }
}
