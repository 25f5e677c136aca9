/// A tuple with two integer components for horizontal and vertical position on the board.
/// The first component indexes columns (`x`) and the second indexes rows (`y`). Components
/// may lie outside the board, which is how a tile is picked back up.
///
/// # See Also
///
/// * [Board](crate::Board)
/// * [Move](crate::Move)
pub type Coordinate = (isize, isize);

/// The direction a word is read in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Along increasing x with a fixed y.
    Horizontal,
    /// Along increasing y with a fixed x.
    Vertical,
}

impl Axis {
    /// # Returns
    ///
    /// The component of `coordinate` that changes when reading along this axis.
    #[inline]
    pub fn along(self, (x, y): Coordinate) -> isize {
        match self {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        }
    }

    /// # Returns
    ///
    /// The [coordinate](Coordinate) reached from `coordinate` after `steps` cells along this
    /// axis.
    #[inline]
    pub fn step((x, y): Coordinate, axis: Axis, steps: isize) -> Coordinate {
        match axis {
            Axis::Horizontal => (x + steps, y),
            Axis::Vertical => (x, y + steps),
        }
    }
}

/// Finds the axis shared by all [coordinates](Coordinate). A shared x wins over a shared y,
/// so a single coordinate is read [vertically](Axis::Vertical). If `coordinates` is empty or
/// not in one line, [None] is returned.
///
/// # Arguments
///
/// * `coordinates`: An [iterator](Iterator) of [coordinates](Coordinate).
///
/// # See Also
///
/// * [Game::check_move](crate::Game::check_move)
pub fn find_axis(coordinates: impl Iterator<Item = Coordinate> + Clone) -> Option<Axis> {
    let (first_x, first_y) = coordinates.clone().next()?;

    if coordinates.clone().all(|(x, _)| x == first_x) {
        Some(Axis::Vertical)
    } else if coordinates.clone().all(|(_, y)| y == first_y) {
        Some(Axis::Horizontal)
    } else {
        None
    }
}
