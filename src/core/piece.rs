use super::errors::ChessError;
use super::square::{Coord, File, Rank};
use super::types::Colour;

/******************************************\
|==========================================|
|               Piece Kinds                |
|==========================================|
\******************************************/

/// # Piece kind representation
///
/// - Represents the six kinds of chess piece

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn, Knight, Bishop, Rook, Queen, King,
}

impl PieceKind {
    /// Number of elements in the PieceKind enum
    pub const NUM: usize = 6;
}

crate::impl_from_to_primitive!(PieceKind);
crate::impl_enum_iter!(PieceKind);

/// Figurine glyphs indexed by [colour][kind]
#[rustfmt::skip]
const GLYPHS: [[char; PieceKind::NUM]; Colour::NUM] = [
    ['♙', '♘', '♗', '♖', '♕', '♔'],
    ['♟', '♞', '♝', '♜', '♛', '♚'],
];

impl PieceKind {
    /// The figurine glyph for this kind in the given colour
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::core::{Colour, PieceKind};
    ///
    /// assert_eq!(PieceKind::Queen.glyph(Colour::White), '♕');
    /// assert_eq!(PieceKind::Knight.glyph(Colour::Black), '♞');
    /// ```
    pub const fn glyph(self, colour: Colour) -> char {
        GLYPHS[colour.index()][self.index()]
    }
}

impl std::fmt::Display for PieceKind {
    /// Displays the kind as its lowercase name
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{name}")
    }
}

/******************************************\
|==========================================|
|                  Pieces                  |
|==========================================|
\******************************************/

/// # A piece on the board
///
/// A kind, a colour and the coordinate the piece currently stands on. The
/// coordinate is kept in lockstep with the board's piece map, only board
/// mutations may move it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    colour: Colour,
    coord: Coord,
}

impl Piece {
    /// Creates a piece on its canonical starting square for the given file
    ///
    /// Back-rank pieces only accept the files they start the game on, pawns
    /// accept any file. The rank is derived from the colour.
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::core::{Colour, File, Piece, PieceKind};
    ///
    /// let rook = Piece::new(PieceKind::Rook, Colour::White, File::FileA).unwrap();
    /// assert_eq!(rook.coord().to_string(), "a1");
    ///
    /// assert!(Piece::new(PieceKind::Rook, Colour::White, File::FileB).is_err());
    /// ```
    pub fn new(kind: PieceKind, colour: Colour, file: File) -> Result<Self, ChessError> {
        let valid = match kind {
            PieceKind::Pawn => true,
            PieceKind::Rook => matches!(file, File::FileA | File::FileH),
            PieceKind::Knight => matches!(file, File::FileB | File::FileG),
            PieceKind::Bishop => matches!(file, File::FileC | File::FileF),
            PieceKind::Queen => matches!(file, File::FileD),
            PieceKind::King => matches!(file, File::FileE),
        };
        if !valid {
            return Err(ChessError::InvalidConstruction { kind, file });
        }

        let home_rank = match kind {
            PieceKind::Pawn => Rank::Rank2.relative(colour),
            _ => Rank::Rank1.relative(colour),
        };

        Ok(Self::at(kind, colour, Coord::from_parts(file, home_rank)))
    }

    /// Places a piece on an arbitrary coordinate, bypassing the canonical
    /// starting-square check
    pub const fn at(kind: PieceKind, colour: Colour, coord: Coord) -> Self {
        Piece { kind, colour, coord }
    }

    /// The kind of the piece
    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The colour of the piece
    #[inline]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    /// The coordinate the piece stands on
    #[inline]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// The figurine glyph of the piece
    #[inline]
    pub const fn glyph(&self) -> char {
        self.kind.glyph(self.colour)
    }

    /// Relocates the piece. Callers must keep the owning board's grid and
    /// piece map in sync.
    #[inline]
    pub(crate) fn set_coord(&mut self, coord: Coord) {
        self.coord = coord;
    }
}

impl std::fmt::Display for Piece {
    /// Displays the piece as its glyph followed by its coordinate (e.g. "♗ c1")
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph(), self.coord)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_back_rank_files() {
        assert!(Piece::new(PieceKind::Rook, Colour::White, File::FileA).is_ok());
        assert!(Piece::new(PieceKind::Rook, Colour::White, File::FileH).is_ok());
        assert!(Piece::new(PieceKind::Knight, Colour::Black, File::FileG).is_ok());
        assert!(Piece::new(PieceKind::Bishop, Colour::White, File::FileC).is_ok());
        assert!(Piece::new(PieceKind::Queen, Colour::Black, File::FileD).is_ok());
        assert!(Piece::new(PieceKind::King, Colour::White, File::FileE).is_ok());

        for file in [File::FileB, File::FileD, File::FileE] {
            assert!(matches!(
                Piece::new(PieceKind::Rook, Colour::White, file),
                Err(ChessError::InvalidConstruction { kind: PieceKind::Rook, .. })
            ));
        }
        assert!(Piece::new(PieceKind::Queen, Colour::White, File::FileE).is_err());
        assert!(Piece::new(PieceKind::King, Colour::Black, File::FileD).is_err());
    }

    #[test]
    fn test_pawns_accept_any_file() {
        for file in File::iter() {
            let pawn = Piece::new(PieceKind::Pawn, Colour::White, file).unwrap();
            assert_eq!(pawn.coord().rank(), Rank::Rank2);

            let pawn = Piece::new(PieceKind::Pawn, Colour::Black, file).unwrap();
            assert_eq!(pawn.coord().rank(), Rank::Rank7);
        }
    }

    #[test]
    fn test_home_ranks_follow_colour() {
        let white_king = Piece::new(PieceKind::King, Colour::White, File::FileE).unwrap();
        assert_eq!(white_king.coord().to_string(), "e1");

        let black_king = Piece::new(PieceKind::King, Colour::Black, File::FileE).unwrap();
        assert_eq!(black_king.coord().to_string(), "e8");
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(PieceKind::Pawn.glyph(Colour::White), '♙');
        assert_eq!(PieceKind::King.glyph(Colour::Black), '♚');

        let bishop = Piece::at(PieceKind::Bishop, Colour::White, "c1".parse().unwrap());
        assert_eq!(bishop.to_string(), "♗ c1");
    }

    #[test]
    fn test_display_kind_names() {
        assert_eq!(PieceKind::Knight.to_string(), "knight");
        assert_eq!(PieceKind::Queen.to_string(), "queen");
    }
}
