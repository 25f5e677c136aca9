use konst::primitive::parse_usize;
use konst::{option, result};

/// The number of [tiles](crate::Tile) a player holds after drawing from a full bag.
/// Racks are stored on the stack until they grow beyond `RACK_CAPACITY`. If the
/// environment variable named `RACK_CAPACITY` is present at compile time and is able to be
/// parsed into a `usize`, set to the value of the environment variable. Otherwise, it is set
/// to `7`.
///
/// [Rules](crate::Rules) may still ask for a different run-time rack size; the constant only
/// decides the inline storage of a [rack](crate::Rack) and the default of
/// [Rules::english](crate::Rules::english).
///
/// # See Also
///
/// * [Rack](crate::Rack)
/// * [Game::pull_new_tiles_from_bag](crate::Game::pull_new_tiles_from_bag)
pub const RACK_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("RACK_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    7
);
const _: () = assert!(RACK_CAPACITY > 0);
/// The number of players whose names, scores and racks fit inline before the per-player
/// vectors of a [game](crate::Game) spill to the heap. Read from the `PLAYER_CAPACITY`
/// environment variable at compile time when it parses as a `usize`, else `4`. More players
/// may still join.
///
/// # See Also
///
/// * [Players](crate::Players)
/// * [Game](crate::Game)
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    4
);
/// The letter printed on a blank [tile](crate::Tile). `*`.
pub const BLANK: char = '*';
