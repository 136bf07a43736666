use super::square::Square;
use super::types::{Colour, Occupation};

/******************************************\
|==========================================|
|              Occupancy Grid              |
|==========================================|
\******************************************/

/// # Occupancy grid
///
/// The colour-only view of the board, one [`Occupation`] cell per square in
/// the flat 1-64 numbering. The move generators walk this grid exclusively,
/// so hypothetical positions are a cheap `Copy` away. The grid carries no
/// piece identity, that lives in the board's piece map.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyGrid([Occupation; Square::NUM]);

impl OccupancyGrid {
    /// Grid with every square empty
    pub const EMPTY: Self = OccupancyGrid([Occupation::Empty; Square::NUM]);

    /// The occupation of a square
    #[inline]
    pub const fn get(&self, sq: Square) -> Occupation {
        self.0[sq.index()]
    }

    /// Marks a square as held by a colour
    #[inline]
    pub const fn set(&mut self, sq: Square, col: Colour) {
        self.0[sq.index()] = Occupation::of(col);
    }

    /// Marks a square as empty
    #[inline]
    pub const fn clear(&mut self, sq: Square) {
        self.0[sq.index()] = Occupation::Empty;
    }

    /// Whether a square holds no piece
    #[inline]
    pub const fn is_empty(&self, sq: Square) -> bool {
        matches!(self.get(sq), Occupation::Empty)
    }

    /// Whether a square holds a piece of the given colour
    #[inline]
    pub const fn holds(&self, sq: Square, col: Colour) -> bool {
        self.get(sq).is_side(col)
    }
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        Self::EMPTY
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
