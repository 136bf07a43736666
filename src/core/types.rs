/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two colours in chess: White and Black.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    White,
    Black
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);

/******************************************\
|==========================================|
|                 Direction                |
|==========================================|
\******************************************/

/// # Direction Representation
///
/// Represents the 8 ray directions as offsets on the flat 1-64 board
/// numbering: one rank is 8 squares, one file is 1 square.

#[rustfmt::skip]
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N = 8, S = -8, W = -1, E = 1,
    NE = 9, NW = 7, SE = -7, SW = -9,
}

impl Direction {
    /// The flat-numbering offset of one step in this direction
    #[inline]
    pub const fn offset(self) -> i16 {
        self as i16
    }
}

/******************************************\
|==========================================|
|                Occupation                |
|==========================================|
\******************************************/

/// # Occupation Representation
///
/// The colour-only state of a single board cell. This is all the move
/// generators ever see of the board: which squares are taken and by which
/// side, never by which piece.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupation {
    Empty,
    White,
    Black,
}

impl Occupation {
    /// Number of elements in the Occupation enum
    pub const NUM: usize = 3;
}

crate::impl_from_to_primitive!(Occupation);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Returns the forward direction for a colour
    pub const fn forward(&self) -> Direction {
        match self {
            Colour::White => Direction::N,
            Colour::Black => Direction::S,
        }
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

impl Occupation {
    /// The occupation marker for a side
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::core::{Colour, Occupation};
    ///
    /// assert_eq!(Occupation::of(Colour::White), Occupation::White);
    /// assert_eq!(Occupation::of(Colour::Black), Occupation::Black);
    /// ```
    pub const fn of(colour: Colour) -> Self {
        match colour {
            Colour::White => Occupation::White,
            Colour::Black => Occupation::Black,
        }
    }

    /// Whether the cell is empty
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Occupation::Empty)
    }

    /// Whether the cell is taken by the given side
    #[inline]
    pub const fn is_side(self, colour: Colour) -> bool {
        match (self, colour) {
            (Occupation::White, Colour::White) => true,
            (Occupation::Black, Colour::Black) => true,
            _ => false,
        }
    }
}

impl From<Colour> for Occupation {
    fn from(colour: Colour) -> Self {
        Occupation::of(colour)
    }
}

impl std::fmt::Display for Colour {
    /// Displays the colour in lowercase ("white" / "black")
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colour::White => write!(f, "white"),
            Colour::Black => write!(f, "black"),
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
