use crate::{Coordinate, BLANK, RACK_CAPACITY};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::collections::BTreeMap;

/// Describes the scoring classification printed on a [field](crate::Field).
///
/// Scoring does not apply these multipliers; a commit earns the raw letter points of the
/// placed tiles only.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, FromPrimitive)]
pub enum Premium {
    /// `0`.
    Normal = 0,
    /// `1`.
    DoubleLetter = 1,
    /// `2`.
    TripleLetter = 2,
    /// `3`.
    DoubleWord = 3,
    /// `4`.
    TripleWord = 4,
    /// `5`.
    CenterStar = 5,
}

impl Default for Premium {
    fn default() -> Self {
        Premium::Normal
    }
}

/// Describes the reason why a [layout](Layout) could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LayoutError {
    /// Attempting to create a layout without rows.
    #[error("layout has no rows")]
    Empty,
    /// Attempting to create a layout whose rows are not as long as there are rows.
    #[error("row {row} has {len} fields, expected {size}")]
    NotSquare {
        /// The index of the offending row.
        row: usize,
        /// The number of fields in the offending row.
        len: usize,
        /// The number of rows.
        size: usize,
    },
    /// Attempting to create a layout with a code that is not a [premium](Premium).
    #[error("unknown premium code {code} at {coordinate:?}")]
    UnknownCode {
        /// The offending code.
        code: u8,
        /// Where the code was found.
        coordinate: Coordinate,
    },
}

/// The codes of the standard 15×15 board, indexed `[x][y]`.
const ENGLISH_LAYOUT: [[u8; 15]; 15] = [
    [4, 0, 0, 1, 0, 0, 0, 4, 0, 0, 0, 1, 0, 0, 4],
    [0, 3, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 3, 0],
    [0, 0, 3, 0, 0, 0, 1, 0, 1, 0, 0, 0, 3, 0, 0],
    [1, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 1],
    [0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0],
    [0, 2, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 2, 0],
    [0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0],
    [4, 0, 0, 1, 0, 0, 0, 5, 0, 0, 0, 1, 0, 0, 4],
    [0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0],
    [0, 2, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 2, 0],
    [0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 3, 0, 0, 0, 0],
    [1, 0, 0, 3, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 1],
    [0, 0, 3, 0, 0, 0, 1, 0, 1, 0, 0, 0, 3, 0, 0],
    [0, 3, 0, 0, 0, 2, 0, 0, 0, 2, 0, 0, 0, 3, 0],
    [4, 0, 0, 1, 0, 0, 0, 4, 0, 0, 0, 1, 0, 0, 4],
];

/// Letter, points and number of copies in the bag for the English set. 100 tiles.
const ENGLISH_ALPHABET: [(char, u32, usize); 27] = [
    ('A', 1, 9),
    ('B', 3, 2),
    ('C', 3, 2),
    ('D', 2, 4),
    ('E', 1, 12),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 4, 2),
    ('I', 1, 9),
    ('J', 8, 1),
    ('K', 5, 1),
    ('L', 1, 4),
    ('M', 3, 2),
    ('N', 1, 6),
    ('O', 1, 8),
    ('P', 3, 2),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 4),
    ('T', 1, 6),
    ('U', 1, 4),
    ('V', 4, 2),
    ('W', 4, 2),
    ('X', 8, 1),
    ('Y', 4, 2),
    ('Z', 10, 1),
    (BLANK, 0, 2),
];

/// A square table of [premiums](Premium) that fixes the size of the board.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Layout {
    size: usize,
    premiums: Vec<Premium>,
}

impl Layout {
    /// Checks that `rows` is non-empty and square and that every code names a
    /// [premium](Premium), then creates the layout. `rows[x][y]` is the field at `(x, y)`.
    ///
    /// # Errors
    ///
    /// * [LayoutError::Empty] Attempting to create a layout without rows.
    /// * [LayoutError::NotSquare] Attempting to create a layout whose rows are not as long
    /// as there are rows.
    /// * [LayoutError::UnknownCode] Attempting to create a layout with a code that is not
    /// a [premium](Premium).
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Layout, LayoutError> {
        let size = rows.len();
        if size == 0 {
            return Err(LayoutError::Empty);
        }

        let mut premiums = Vec::with_capacity(size * size);
        for (x, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(LayoutError::NotSquare {
                    row: x,
                    len: row.len(),
                    size,
                });
            }
            for (y, &code) in row.iter().enumerate() {
                let premium = Premium::from_u8(code).ok_or(LayoutError::UnknownCode {
                    code,
                    coordinate: (x as isize, y as isize),
                })?;
                premiums.push(premium);
            }
        }

        Ok(Layout { size, premiums })
    }

    /// The standard 15×15 layout with a center star at `(7, 7)`.
    pub fn english() -> Layout {
        Layout {
            size: ENGLISH_LAYOUT.len(),
            premiums: ENGLISH_LAYOUT
                .iter()
                .flatten()
                .map(|&code| Premium::from_u8(code).unwrap_or_default())
                .collect(),
        }
    }

    /// The number of fields along each side.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether both components of `coordinate` lie in `0..size`.
    #[inline]
    pub fn contains(&self, (x, y): Coordinate) -> bool {
        let size = self.size as isize;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// # Returns
    ///
    /// The [premium](Premium) at `coordinate` or [None] if out of bounds.
    pub fn premium(&self, coordinate: Coordinate) -> Option<Premium> {
        self.index(coordinate).map(|index| self.premiums[index])
    }

    /// # Returns
    ///
    /// The position of `coordinate` in a row-major vector of fields or [None] if out of bounds.
    #[inline]
    pub(crate) fn index(&self, coordinate @ (x, y): Coordinate) -> Option<usize> {
        self.contains(coordinate)
            .then(|| x as usize * self.size + y as usize)
    }

    /// Iterates over every [premium](Premium) in row-major order.
    pub(crate) fn premiums(&self) -> impl Iterator<Item = Premium> + '_ {
        self.premiums.iter().copied()
    }
}

/// The points and number of copies of one letter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LetterSpec {
    /// The points printed on each copy.
    pub points: u32,
    /// The number of copies in a full bag.
    pub count: usize,
}

/// Maps each letter of a language to its [points and count](LetterSpec). Letters are stored
/// in upper case and looked up case-insensitively.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Alphabet {
    letters: BTreeMap<char, LetterSpec>,
}

impl Alphabet {
    /// # Arguments
    ///
    /// * `letters`: Letter, points and count triples. A repeated letter replaces the
    /// earlier entry.
    pub fn new(letters: impl IntoIterator<Item = (char, u32, usize)>) -> Alphabet {
        Alphabet {
            letters: letters
                .into_iter()
                .map(|(letter, points, count)| {
                    (fold(letter), LetterSpec { points, count })
                })
                .collect(),
        }
    }

    /// The English letter set with 98 letter tiles and 2 blanks.
    pub fn english() -> Alphabet {
        Alphabet::new(ENGLISH_ALPHABET)
    }

    /// # Returns
    ///
    /// The [points and count](LetterSpec) of `letter` or [None] if it is not in the alphabet.
    #[inline]
    pub fn get(&self, letter: char) -> Option<LetterSpec> {
        self.letters.get(&fold(letter)).copied()
    }

    /// # Returns
    ///
    /// The points of `letter`, or `0` if it is not in the alphabet.
    #[inline]
    pub fn points(&self, letter: char) -> u32 {
        self.get(letter).map_or(0, |spec| spec.points)
    }

    /// # Returns
    ///
    /// The sum of the points of each letter in `word`. Letters outside the alphabet score `0`.
    pub fn word_score(&self, word: &str) -> u32 {
        word.chars().map(|letter| self.points(letter)).sum()
    }

    /// The number of tiles in a full bag.
    pub fn tile_count(&self) -> usize {
        self.letters.values().map(|spec| spec.count).sum()
    }

    /// Iterates over every letter with its [points and count](LetterSpec) in letter order.
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterSpec)> + '_ {
        self.letters.iter().map(|(&letter, &spec)| (letter, spec))
    }
}

/// Upper case of `letter` when it maps to a single character, otherwise `letter` itself.
fn fold(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

/// The static tables a [game](crate::Game) is built from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rules {
    /// The premium table and size of the board.
    pub layout: Layout,
    /// The letters, points and bag distribution.
    pub alphabet: Alphabet,
    /// The number of tiles a player draws up to.
    pub rack_capacity: usize,
}

impl Rules {
    /// The standard English rules on a 15×15 board with [RACK_CAPACITY] tiles per rack.
    pub fn english() -> Rules {
        Rules {
            layout: Layout::english(),
            alphabet: Alphabet::english(),
            rack_capacity: RACK_CAPACITY,
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Rules::english()
    }
}
