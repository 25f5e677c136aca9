//! Concrete structs to represent and protect the state of a tile-placement word game with
//! methods to stage, check and commit plays.
//!
//! ## Summary
//!
//! Players hold [tiles](Tile) carrying a letter and points in a [rack](Player::rack), drawn
//! from a [bag](Bag) of the [alphabet's](Alphabet) tile distribution. Each turn, the current
//! player stages [moves](Move) onto a square [board](Board) of [fields](Field), then commits
//! them as one word play. A commit is accepted when the staged tiles lie on one line, leave
//! no empty fields between them and spell a word found in the [lexicon](Lexicon). The player
//! earns the letter points of the placed tiles and refills their rack from the bag.
//!
//! ## How is the game created?
//!
//! [Game::new] and [Game::with_seed] create the game from [rules](Rules) and a
//! [dictionary](Dictionary). [Dictionary::load] reads a word list, or a compact cache of it
//! built on a previous load. Players join through [Game::add_player]. The first player to
//! join becomes the current player.
//!
//! ## How are tiles played?
//!
//! * [Stage](Game::stage_placement) a tile from the rack onto an empty field. Staging moves
//! never touch the board, so other players do not see them. Staging a tile that is already
//! staged relocates it, and staging it out of bounds picks it back up.
//! * [Check](Game::check_moves) the staged moves at any time without changing anything.
//! * [Commit](Game::commit_temporary_moves) the staged moves. Either every tile is placed and
//! scored, or nothing changes and the caller learns every rule that was violated.
//! * [Refill](Game::pull_new_tiles_from_bag) the rack up to the rack capacity.
//!
//! [Game::apply] accepts the same steps as [actions](Action), and
//! [process_turn] drives one turn through a [seat](Seat) for the current player.
//!
//! ## How are points calculated?
//!
//! The points of a play are the sum of the [points](Tile::points) of the tiles placed by
//! that play. Tiles already on the board that the word runs through, field
//! [premiums](Premium) and words formed perpendicular to the play do not count.
//!
//! ## How is the game viewed?
//!
//! [Game::view] offers an immutable [view](GameView) of everything visible to all players.
//! [Game::rack] and [Game::temporary_moves] share private information for each individual
//! player. [send_updates] pushes both to every seat concurrently.
//!
//! ## How are the words ranked?
//!
//! A [dictionary](Dictionary) ranks its words by [length](Metric::Length),
//! [raw score](Metric::Score) or [score per letter](Metric::RelativeScore), and exports the
//! statistics of every word as CSV.
//!
//! ## How is the game tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. [Game] implements
//! methods to get mutable references to its properties, helper methods to add random data
//! to specific properties, and a method to create an empty game over a small dictionary.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use bag::*;
pub use board::*;
pub use consts::*;
pub use coordinate::*;
pub use dictionary::*;
pub use field::*;
pub use game::*;
pub use play::*;
pub use player::*;
pub use rules::*;
pub use runtime::*;
#[cfg(test)]
pub use random::*;
pub use tile::*;
pub use types::*;

mod bag;
mod board;
mod consts;
mod coordinate;
mod dictionary;
mod field;
mod game;
mod play;
mod player;
#[cfg(test)]
mod random;
mod rules;
mod runtime;
mod tile;
mod types;
