use crate::{Coordinate, Field, Layout, Placement, Positions, Tile, TileId};

/// A square grid of [fields](Field) plus a reverse index from [tile identity](TileId) to
/// [coordinate](Coordinate).
///
/// A tile is in the reverse index if and only if it occupies exactly one field, and that
/// field holds that tile. Every mutation keeps both sides in step, so callers never see a
/// tile on two fields or a field that disagrees with the index.
///
/// Mutations are bounds-safe: an out-of-bounds coordinate or an absent tile is a no-op.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    layout: Layout,
    fields: Vec<Field>,
    positions: Positions,
}

impl Board {
    /// Creates an empty board with one [field](Field) per entry of `layout`.
    pub fn new(layout: Layout) -> Board {
        let fields = layout.premiums().map(Field::new).collect();

        Board {
            layout,
            fields,
            positions: Positions::new(),
        }
    }

    /// The number of fields along each side.
    #[inline]
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// The premium table this board was created from.
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Whether `coordinate` names a field of this board.
    #[inline]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.layout.contains(coordinate)
    }

    /// Places `tile` on the field at `coordinate`. If `tile` is already on the board, its
    /// previous field is vacated first, so placing a tile at its own coordinate changes
    /// nothing.
    ///
    /// Neither bounds nor occupancy are validated; use [Board::validate_placement] first.
    /// An out-of-bounds `coordinate` is ignored. A tile already on the destination field
    /// is taken off the board to keep the reverse index consistent.
    ///
    /// # Returns
    ///
    /// The other tile that was taken off the destination field, if any.
    pub fn place_tile(&mut self, tile: Tile, coordinate: Coordinate) -> Option<Tile> {
        let index = self.layout.index(coordinate)?;

        self.remove_tile_by_reference(tile.id());
        let displaced = self.fields[index].occupy(tile);
        if let Some(displaced) = displaced {
            self.positions.remove_by_left(&displaced.id());
        }
        self.positions.insert(tile.id(), coordinate);

        displaced
    }

    /// Vacates the field at `coordinate` and drops its entry from the reverse index.
    ///
    /// # Returns
    ///
    /// The tile that was on the field, or [None] if the field was empty or out of bounds.
    pub fn remove_tile_by_coordinate(&mut self, coordinate: Coordinate) -> Option<Tile> {
        let index = self.layout.index(coordinate)?;
        let tile = self.fields[index].vacate()?;
        self.positions.remove_by_left(&tile.id());

        Some(tile)
    }

    /// Takes the tile identified by `id` off the board.
    ///
    /// # Returns
    ///
    /// The coordinate the tile was on, or [None] if it was not on the board.
    pub fn remove_tile_by_reference(&mut self, id: TileId) -> Option<Coordinate> {
        let (_, coordinate) = self.positions.remove_by_left(&id)?;
        if let Some(index) = self.layout.index(coordinate) {
            self.fields[index].vacate();
        }

        Some(coordinate)
    }

    /// # Returns
    ///
    /// The field at `coordinate`, or [None] if `coordinate` is out of bounds.
    #[inline]
    pub fn get_field(&self, coordinate: Coordinate) -> Option<&Field> {
        self.layout
            .index(coordinate)
            .map(|index| &self.fields[index])
    }

    /// # Returns
    ///
    /// The tile at `coordinate`, or [None] if the field is empty or out of bounds.
    #[inline]
    pub fn get_tile(&self, coordinate: Coordinate) -> Option<Tile> {
        self.get_field(coordinate).and_then(Field::occupant)
    }

    /// Whether the field at `coordinate` exists and holds no tile. Out of bounds and
    /// occupied both answer `false`; call [Board::get_field] to tell them apart.
    #[inline]
    pub fn is_field_empty(&self, coordinate: Coordinate) -> bool {
        self.get_field(coordinate).map_or(false, Field::is_empty)
    }

    /// Whether no field of the board holds a tile.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The number of tiles on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the tile identified by `id` is on the board.
    #[inline]
    pub fn is_tile_on_board(&self, id: TileId) -> bool {
        self.positions.contains_left(&id)
    }

    /// # Returns
    ///
    /// The coordinate of the tile identified by `id`, or [None] if it is not on the board.
    #[inline]
    pub fn get_tile_position(&self, id: TileId) -> Option<Coordinate> {
        self.positions.get_by_left(&id).copied()
    }

    /// Iterates over every occupied field as a coordinate and tile pair, in no particular
    /// order.
    pub fn tiles(&self) -> impl Iterator<Item = (Coordinate, Tile)> + '_ {
        self.positions
            .right_values()
            .filter_map(|&coordinate| self.get_tile(coordinate).map(|tile| (coordinate, tile)))
    }

    /// Classifies moving the tile identified by `id` to `coordinate` without changing the
    /// board. Word legality is not considered.
    ///
    /// # See Also
    ///
    /// * [Placement::classify]
    /// * [Game::stage_placement](crate::Game::stage_placement)
    pub fn validate_placement(&self, id: TileId, coordinate: Coordinate) -> Placement {
        Placement::classify(
            self.is_tile_on_board(id),
            self.contains(coordinate),
            self.is_field_empty(coordinate),
        )
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(Layout::english())
    }
}
