use super::legality::aligned;
use super::movegen::pseudo_legal_targets;
use super::Board;
use crate::core::{ChessError, Colour, Coord, Piece, Square};

/******************************************\
|==========================================|
|             Check Detection              |
|==========================================|
\******************************************/

impl Board {
    /// Whether a piece attacks the given king square on the current grid
    pub(crate) fn delivers_check(&self, piece: &Piece, king_square: Square) -> bool {
        pseudo_legal_targets(piece, self.grid()).contains(&king_square)
    }

    /// Detects whether the side `colour` stands in check, given where the
    /// opposing side's last move ended.
    ///
    /// The piece that just moved is the most likely checker, so it is probed
    /// first. If it does not attack the king, the remaining enemy pieces are
    /// scanned, but only those whose line type could reach the king's square.
    /// That second pass finds discovered checks from sliders.
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::{Board, Colour, Piece, PieceKind};
    ///
    /// let board = Board::from_pieces([
    ///     Piece::at(PieceKind::King, Colour::White, "e1".parse().unwrap()),
    ///     Piece::at(PieceKind::Rook, Colour::Black, "e8".parse().unwrap()),
    ///     Piece::at(PieceKind::King, Colour::Black, "h8".parse().unwrap()),
    /// ]).unwrap();
    ///
    /// assert!(board.is_in_check(Colour::White, "e8".parse().unwrap()).unwrap());
    /// ```
    pub fn is_in_check(&self, colour: Colour, last_move: Coord) -> Result<bool, ChessError> {
        let last_piece = self
            .piece_at(last_move)
            .ok_or(ChessError::NotFound(last_move))?;
        if last_piece.colour() == colour {
            return Err(ChessError::InvariantViolation(format!(
                "the piece on {last_move} belongs to the side being tested for check"
            )));
        }

        let king_square = self.find_king(colour)?.square();
        if self.delivers_check(last_piece, king_square) {
            return Ok(true);
        }

        for enemy in self.pieces() {
            if enemy.colour() == colour || enemy.coord() == last_move {
                continue;
            }
            if aligned(enemy.kind(), enemy.coord(), king_square.coord())
                && self.delivers_check(enemy, king_square)
            {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
