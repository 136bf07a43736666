use std::collections::BTreeMap;

use crate::core::{
    ChessError, Colour, Coord, File, Occupation, OccupancyGrid, Piece, PieceKind, Rank, Square,
};

mod check;
mod legality;
mod movegen;
mod movement;

pub use legality::TurnContext;
pub use movegen::pseudo_legal_targets;

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// Back-rank piece kinds from file a to file h
#[rustfmt::skip]
const BACK_RANK: [PieceKind; File::NUM] = [
    PieceKind::Rook, PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen,
    PieceKind::King, PieceKind::Bishop, PieceKind::Knight, PieceKind::Rook,
];

/// # Board representation
///
/// The board keeps two views of the same position. The [`OccupancyGrid`] is
/// the colour-only view the move generators walk, and the piece map is the
/// coordinate-keyed view that knows which piece stands where. Every mutation
/// goes through methods that keep the two in lockstep.
///
/// Captured pieces move to the cemetery and played moves append a line to the
/// history, so a finished game can be replayed from the board alone.
///
/// ## Examples
///
/// ```
/// use arbiter::Board;
///
/// let board = Board::startpos();
/// assert_eq!(board.pieces().count(), 32);
/// ```

#[derive(Debug, Clone)]
pub struct Board {
    /// Colour-only occupation, flat 1-64 numbering
    grid: OccupancyGrid,
    /// Live pieces keyed by coordinate
    pieces: BTreeMap<Coord, Piece>,
    /// Captured pieces in capture order
    cemetery: Vec<Piece>,
    /// One formatted line per played move
    history: Vec<String>,
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    /// Creates a board with both armies on their starting squares
    pub fn startpos() -> Self {
        let mut board = Board {
            grid: OccupancyGrid::EMPTY,
            pieces: BTreeMap::new(),
            cemetery: Vec::new(),
            history: Vec::new(),
        };

        for colour in [Colour::White, Colour::Black] {
            let home = Rank::Rank1.relative(colour);
            let pawn_rank = Rank::Rank2.relative(colour);
            for (file, kind) in File::iter().zip(BACK_RANK) {
                board.place(Piece::at(kind, colour, Coord::from_parts(file, home)));
                board.place(Piece::at(
                    PieceKind::Pawn,
                    colour,
                    Coord::from_parts(file, pawn_rank),
                ));
            }
        }

        board
    }

    /// Creates a board holding exactly the given pieces
    ///
    /// Fails if two pieces share a coordinate or if either side is missing
    /// its king.
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::{Board, Colour, Piece, PieceKind};
    ///
    /// let board = Board::from_pieces([
    ///     Piece::at(PieceKind::King, Colour::White, "e1".parse().unwrap()),
    ///     Piece::at(PieceKind::King, Colour::Black, "e8".parse().unwrap()),
    /// ]).unwrap();
    /// assert_eq!(board.pieces().count(), 2);
    /// ```
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Result<Self, ChessError> {
        let mut board = Board {
            grid: OccupancyGrid::EMPTY,
            pieces: BTreeMap::new(),
            cemetery: Vec::new(),
            history: Vec::new(),
        };

        for piece in pieces {
            if board.pieces.contains_key(&piece.coord()) {
                return Err(ChessError::InvariantViolation(format!(
                    "two pieces placed on {}",
                    piece.coord()
                )));
            }
            board.place(piece);
        }

        for colour in [Colour::White, Colour::Black] {
            board.find_king(colour)?;
        }

        Ok(board)
    }

    /// Inserts a piece into both representations
    fn place(&mut self, piece: Piece) {
        self.grid.set(piece.coord().square(), piece.colour());
        self.pieces.insert(piece.coord(), piece);
    }

    /// The occupation of a square
    #[inline]
    pub fn occupation(&self, sq: Square) -> Occupation {
        self.grid.get(sq)
    }

    /// The colour-only occupancy grid
    #[inline]
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// The piece standing on a coordinate, if any
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.pieces.get(&coord)
    }

    /// Iterates over the live pieces in file-major coordinate order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    /// The captured pieces in capture order
    #[inline]
    pub fn cemetery(&self) -> &[Piece] {
        &self.cemetery
    }

    /// The played moves, one formatted line each
    #[inline]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Locates the king of a colour
    pub fn find_king(&self, colour: Colour) -> Result<Coord, ChessError> {
        self.pieces
            .values()
            .find(|p| p.kind() == PieceKind::King && p.colour() == colour)
            .map(|p| p.coord())
            .ok_or_else(|| {
                ChessError::InvariantViolation(format!("no {colour} king on the board"))
            })
    }

    /// Checks that the grid and the piece map describe the same position
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let mut occupied = 0;
        for number in 1..=Square::NUM as i16 {
            let sq = Square::from_number_unchecked(number);
            match self.pieces.get(&sq.coord()) {
                Some(piece) => {
                    assert_eq!(piece.coord(), sq.coord());
                    assert!(self.grid.holds(sq, piece.colour()));
                    occupied += 1;
                }
                None => assert!(self.grid.is_empty(sq)),
            }
        }
        assert_eq!(occupied, self.pieces.len());
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for Board {
    /// Displays the board as a rank-by-rank diagram from black's back rank
    /// down, with file and rank labels
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::iter() {
                match self.pieces.get(&Coord::from_parts(file, rank)) {
                    Some(piece) => write!(f, " {}", piece.glyph())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in File::iter() {
            write!(f, " {file}")?;
        }
        writeln!(f)
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
    fn test_startpos_layout() {
        let board = Board::startpos();
        board.assert_consistent();

        assert_eq!(board.pieces().count(), 32);
        assert!(board.cemetery().is_empty());
        assert!(board.history().is_empty());

        let e1 = board.piece_at("e1".parse().unwrap()).unwrap();
        assert_eq!(e1.kind(), PieceKind::King);
        assert_eq!(e1.colour(), Colour::White);

        let d8 = board.piece_at("d8".parse().unwrap()).unwrap();
        assert_eq!(d8.kind(), PieceKind::Queen);
        assert_eq!(d8.colour(), Colour::Black);

        for file in File::iter() {
            let white_pawn = board.piece_at(Coord::from_parts(file, Rank::Rank2)).unwrap();
            assert_eq!(white_pawn.kind(), PieceKind::Pawn);
            assert_eq!(white_pawn.colour(), Colour::White);

            let black_pawn = board.piece_at(Coord::from_parts(file, Rank::Rank7)).unwrap();
            assert_eq!(black_pawn.kind(), PieceKind::Pawn);
            assert_eq!(black_pawn.colour(), Colour::Black);
        }

        for rank in [Rank::Rank3, Rank::Rank4, Rank::Rank5, Rank::Rank6] {
            for file in File::iter() {
                assert!(board.piece_at(Coord::from_parts(file, rank)).is_none());
            }
        }
    }

    #[test]
    fn test_startpos_grid_matches_map() {
        let board = Board::startpos();

        assert_eq!(board.occupation(Square::new(1).unwrap()), Occupation::White);
        assert_eq!(board.occupation(Square::new(16).unwrap()), Occupation::White);
        assert_eq!(board.occupation(Square::new(29).unwrap()), Occupation::Empty);
        assert_eq!(board.occupation(Square::new(49).unwrap()), Occupation::Black);
        assert_eq!(board.occupation(Square::new(64).unwrap()), Occupation::Black);
    }

    #[test]
    fn test_from_pieces_rejects_duplicates() {
        let e4: Coord = "e4".parse().unwrap();
        let result = Board::from_pieces([
            Piece::at(PieceKind::King, Colour::White, "e1".parse().unwrap()),
            Piece::at(PieceKind::King, Colour::Black, "e8".parse().unwrap()),
            Piece::at(PieceKind::Rook, Colour::White, e4),
            Piece::at(PieceKind::Knight, Colour::Black, e4),
        ]);
        assert!(matches!(result, Err(ChessError::InvariantViolation(_))));
    }

    #[test]
    fn test_from_pieces_requires_both_kings() {
        let result = Board::from_pieces([Piece::at(
            PieceKind::King,
            Colour::White,
            "e1".parse().unwrap(),
        )]);
        assert!(matches!(result, Err(ChessError::InvariantViolation(_))));
    }

    #[test]
    fn test_find_king() {
        let board = Board::startpos();
        assert_eq!(
            board.find_king(Colour::White).unwrap(),
            "e1".parse().unwrap()
        );
        assert_eq!(
            board.find_king(Colour::Black).unwrap(),
            "e8".parse().unwrap()
        );
    }

    #[test]
    fn test_display_startpos() {
        let board = Board::startpos();
        let diagram = board.to_string();

        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
