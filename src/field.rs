use crate::{Premium, Tile};

/// One cell of the [board](crate::Board). The [premium](Premium) is fixed when the board is
/// created; only the occupant changes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Field {
    premium: Premium,
    occupant: Option<Tile>,
}

impl Field {
    /// Creates an empty field.
    #[inline]
    pub const fn new(premium: Premium) -> Field {
        Field {
            premium,
            occupant: None,
        }
    }

    /// The scoring classification of this field.
    #[inline]
    pub const fn premium(&self) -> Premium {
        self.premium
    }

    /// The tile on this field, if any.
    #[inline]
    pub const fn occupant(&self) -> Option<Tile> {
        self.occupant
    }

    /// Whether no tile is on this field.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[inline]
    pub(crate) fn occupy(&mut self, tile: Tile) -> Option<Tile> {
        self.occupant.replace(tile)
    }

    #[inline]
    pub(crate) fn vacate(&mut self) -> Option<Tile> {
        self.occupant.take()
    }
}
