use crate::{Alphabet, Coordinate, Tile, TileId, RACK_CAPACITY};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// A [tile](Tile) with identity `index` and a random letter of the English
/// [alphabet](Alphabet) with its points. Blanks are never chosen.
pub fn random_tile<R: Rng + ?Sized>(rng: &mut R, index: u32) -> Tile {
    let letter = char::from(rng.gen_range(b'A'..=b'Z'));

    Tile::new(
        TileId::new(index),
        letter,
        Alphabet::english().points(letter),
    )
}

/// A [coordinate](Coordinate) where both components lie in `0..size`.
pub fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Coordinate {
    let possible_components = Uniform::from(0..size as isize);
    (
        possible_components.sample(rng),
        possible_components.sample(rng),
    )
}

/// A random, small, non-zero number of [tiles](Tile) with identities counting up from
/// `first_index`.
pub fn random_bag_tiles<R: Rng + ?Sized>(rng: &mut R, first_index: u32) -> Vec<Tile> {
    let bag_len = rng.gen_range(10..20);
    (first_index..first_index + bag_len)
        .map(|index| random_tile(rng, index))
        .collect()
}

/// Between one and [RACK_CAPACITY] [tiles](Tile) with identities counting up from
/// `first_index`.
pub fn random_rack<R: Rng + ?Sized>(rng: &mut R, first_index: u32) -> Vec<Tile> {
    let rack_len = rng.gen_range(1..=RACK_CAPACITY as u32);
    (first_index..first_index + rack_len)
        .map(|index| random_tile(rng, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_tile_scores_like_alphabet() {
        let alphabet = Alphabet::english();

        for index in 0..50 {
            let tile = random_tile(&mut rand::thread_rng(), index);

            assert_eq!(TileId::new(index), tile.id());
            assert!(!tile.is_blank());
            assert_eq!(alphabet.points(tile.letter()), tile.points());
        }
    }

    #[test]
    fn random_coordinate_in_bounds() {
        for _ in 0..50 {
            let (x, y) = random_coordinate(&mut rand::thread_rng(), 15);

            assert!((0..15).contains(&x));
            assert!((0..15).contains(&y));
        }
    }

    #[test]
    fn random_bag_tiles_counts_up() {
        let tiles = random_bag_tiles(&mut rand::thread_rng(), 100);

        assert!((10..20).contains(&tiles.len()));
        for (offset, tile) in tiles.iter().enumerate() {
            assert_eq!(TileId::new(100 + offset as u32), tile.id());
        }
    }

    #[test]
    fn random_rack_fits() {
        let rack = random_rack(&mut rand::thread_rng(), 0);

        assert!((1..=RACK_CAPACITY).contains(&rack.len()));
    }
}
