use super::legality::TurnContext;
use super::movegen::pseudo_legal_targets;
use super::Board;
use crate::core::{ChessError, Colour, Coord, PieceKind};

/******************************************\
|==========================================|
|             Board Mutations              |
|==========================================|
\******************************************/

impl Board {
    /// Relocates a piece along one of its pseudo-legal moves.
    ///
    /// The destination is validated against the occupancy grid as it stands,
    /// so a capture must leave the victim on the grid until after this call.
    /// A pawn's diagonal step only validates while the grid still shows the
    /// enemy piece it takes. The piece map entry for the destination must
    /// already be gone.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<(), ChessError> {
        let piece = self.piece_at(from).ok_or(ChessError::NotFound(from))?;

        if !pseudo_legal_targets(piece, self.grid()).contains(&to.square()) {
            return Err(ChessError::IllegalMove { from, to });
        }
        if self.piece_at(to).is_some() {
            return Err(ChessError::InvariantViolation(format!(
                "the piece on {to} was not captured before moving onto it"
            )));
        }

        let mut piece = self.pieces.remove(&from).ok_or(ChessError::NotFound(from))?;
        piece.set_coord(to);
        self.grid.clear(from.square());
        self.grid.set(to.square(), piece.colour());
        self.pieces.insert(to, piece);

        Ok(())
    }

    /// Removes the piece on `at` to the cemetery on behalf of the capturing
    /// side. The occupancy grid is left untouched, the following
    /// [`move_piece`](Board::move_piece) overwrites the cell.
    pub fn capture_piece(&mut self, at: Coord, by: Colour) -> Result<PieceKind, ChessError> {
        let victim = self.piece_at(at).ok_or(ChessError::NotFound(at))?;
        if victim.colour() == by {
            return Err(ChessError::InvariantViolation(format!(
                "the {by} side cannot capture its own piece on {at}"
            )));
        }

        let victim = self.pieces.remove(&at).ok_or(ChessError::NotFound(at))?;
        self.cemetery.push(victim);
        Ok(victim.kind())
    }

    /// Appends a played move to the history as a glyph and destination
    /// coordinate, e.g. "♗ c4"
    pub fn record_move(&mut self, kind: PieceKind, colour: Colour, to: Coord) {
        self.history.push(format!("{} {}", kind.glyph(colour), to));
    }

    /// Plays one complete turn: validates the move against the legality
    /// filter, performs the capture and relocation, records the move and
    /// works out the check state the opponent starts their turn in.
    ///
    /// The returned [`TurnContext`] must be fed to the opponent's turn.
    /// Capturing a king ends the game, so no check detection runs and the
    /// returned context carries no check flags.
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::{Board, TurnContext};
    ///
    /// let mut board = Board::startpos();
    /// let ctx = board
    ///     .play("e2".parse().unwrap(), "e4".parse().unwrap(), TurnContext::default())
    ///     .unwrap();
    /// assert_eq!(ctx.last_move, Some("e4".parse().unwrap()));
    /// assert!(!ctx.in_check);
    /// ```
    pub fn play(
        &mut self,
        from: Coord,
        to: Coord,
        ctx: TurnContext,
    ) -> Result<TurnContext, ChessError> {
        let piece = self.piece_at(from).ok_or(ChessError::NotFound(from))?;
        let mover = piece.colour();
        let kind = piece.kind();

        if !self.legal_targets(from, ctx)?.contains(&to.square()) {
            return Err(ChessError::IllegalMove { from, to });
        }

        let mut king_captured = false;
        if self.grid.holds(to.square(), !mover) {
            king_captured = self.capture_piece(to, mover)? == PieceKind::King;
        }

        self.move_piece(from, to)?;
        self.record_move(kind, mover, to);

        if king_captured {
            return Ok(TurnContext {
                in_check: false,
                mover_gave_check: false,
                last_move: Some(to),
            });
        }

        let enemy_king = self.find_king(!mover)?.square();
        let moved = self.piece_at(to).ok_or(ChessError::NotFound(to))?;
        let mover_gave_check = self.delivers_check(moved, enemy_king);
        let in_check = mover_gave_check || self.is_in_check(!mover, to)?;

        Ok(TurnContext {
            in_check,
            mover_gave_check,
            last_move: Some(to),
        })
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
    use crate::core::{Occupation, Piece};

    fn coord(s: &str) -> Coord {
        s.parse().unwrap()
    }

    fn piece(kind: PieceKind, colour: Colour, at: &str) -> Piece {
        Piece::at(kind, colour, coord(at))
    }

    #[test]
    fn test_move_piece_updates_both_representations() {
        let mut board = Board::startpos();
        board.move_piece(coord("e2"), coord("e4")).unwrap();
        board.assert_consistent();

        assert!(board.piece_at(coord("e2")).is_none());
        let pawn = board.piece_at(coord("e4")).unwrap();
        assert_eq!(pawn.kind(), PieceKind::Pawn);
        assert_eq!(pawn.coord(), coord("e4"));
        assert_eq!(
            board.occupation(coord("e4").square()),
            Occupation::White
        );
        assert_eq!(board.occupation(coord("e2").square()), Occupation::Empty);
    }

    #[test]
    fn test_move_piece_rejects_non_moves() {
        let mut board = Board::startpos();

        assert!(matches!(
            board.move_piece(coord("e2"), coord("e5")),
            Err(ChessError::IllegalMove { .. })
        ));
        assert!(matches!(
            board.move_piece(coord("e4"), coord("e5")),
            Err(ChessError::NotFound(_))
        ));
        // A bishop boxed in by its own pawns has no moves at all
        assert!(matches!(
            board.move_piece(coord("c1"), coord("d2")),
            Err(ChessError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_capture_bookkeeping() {
        let mut board = Board::from_pieces([
            piece(PieceKind::King, Colour::White, "e1"),
            piece(PieceKind::Rook, Colour::White, "e4"),
            piece(PieceKind::Knight, Colour::Black, "e7"),
            piece(PieceKind::King, Colour::Black, "h8"),
        ])
        .unwrap();

        let taken = board.capture_piece(coord("e7"), Colour::White).unwrap();
        assert_eq!(taken, PieceKind::Knight);

        // The victim leaves the piece map for the cemetery while the grid
        // still shows it, the mover's relocation overwrites the cell
        assert!(board.piece_at(coord("e7")).is_none());
        assert_eq!(board.cemetery().len(), 1);
        assert_eq!(board.cemetery()[0].kind(), PieceKind::Knight);
        assert_eq!(board.occupation(coord("e7").square()), Occupation::Black);

        board.move_piece(coord("e4"), coord("e7")).unwrap();
        board.assert_consistent();
        assert_eq!(board.occupation(coord("e7").square()), Occupation::White);
    }

    #[test]
    fn test_capture_rejects_own_pieces_and_empty_squares() {
        let mut board = Board::startpos();

        assert!(matches!(
            board.capture_piece(coord("e2"), Colour::White),
            Err(ChessError::InvariantViolation(_))
        ));
        assert!(matches!(
            board.capture_piece(coord("e4"), Colour::White),
            Err(ChessError::NotFound(_))
        ));
        assert!(board.cemetery().is_empty());
    }

    #[test]
    fn test_record_move_format() {
        let mut board = Board::startpos();
        board.record_move(PieceKind::Bishop, Colour::White, coord("c4"));
        board.record_move(PieceKind::Pawn, Colour::Black, coord("d5"));

        assert_eq!(board.history(), ["♗ c4", "♟ d5"]);
    }

    #[test]
    fn test_play_opening_exchange() {
        let mut board = Board::startpos();

        let ctx = board
            .play(coord("e2"), coord("e4"), TurnContext::default())
            .unwrap();
        assert_eq!(ctx.last_move, Some(coord("e4")));
        assert!(!ctx.in_check);

        let ctx = board.play(coord("d7"), coord("d5"), ctx).unwrap();
        let ctx = board.play(coord("e4"), coord("d5"), ctx).unwrap();
        board.assert_consistent();

        assert_eq!(board.history(), ["♙ e4", "♟ d5", "♙ d5"]);
        assert_eq!(board.cemetery().len(), 1);
        assert_eq!(board.cemetery()[0].kind(), PieceKind::Pawn);
        assert_eq!(board.cemetery()[0].colour(), Colour::Black);
        assert_eq!(board.pieces().count(), 31);

        assert!(!ctx.in_check);
        assert!(!ctx.mover_gave_check);
        assert_eq!(ctx.last_move, Some(coord("d5")));
    }

    #[test]
    fn test_play_rejects_illegal_moves() {
        let mut board = Board::startpos();

        assert!(matches!(
            board.play(coord("e2"), coord("e5"), TurnContext::default()),
            Err(ChessError::IllegalMove { .. })
        ));
        assert!(matches!(
            board.play(coord("e4"), coord("e5"), TurnContext::default()),
            Err(ChessError::NotFound(_))
        ));

        // A rejected move leaves no trace
        assert!(board.history().is_empty());
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn test_play_reports_check_and_forces_the_reply() {
        let mut board = Board::from_pieces([
            piece(PieceKind::King, Colour::White, "e1"),
            piece(PieceKind::Queen, Colour::White, "e2"),
            piece(PieceKind::King, Colour::Black, "e8"),
        ])
        .unwrap();

        let ctx = board
            .play(coord("e2"), coord("e7"), TurnContext::default())
            .unwrap();
        assert!(ctx.in_check);
        assert!(ctx.mover_gave_check);
        assert_eq!(ctx.last_move, Some(coord("e7")));

        // The only reply is taking the undefended queen
        let moves = board.all_legal_moves(Colour::Black, ctx).unwrap();
        assert_eq!(moves, vec![(coord("e8"), coord("e7"))]);

        let ctx = board.play(coord("e8"), coord("e7"), ctx).unwrap();
        assert!(!ctx.in_check);
        assert_eq!(board.cemetery().len(), 1);
        assert_eq!(board.cemetery()[0].kind(), PieceKind::Queen);
    }

    #[test]
    fn test_play_king_capture_skips_check_detection() {
        let mut board = Board::from_pieces([
            piece(PieceKind::King, Colour::White, "e1"),
            piece(PieceKind::Rook, Colour::White, "e4"),
            piece(PieceKind::King, Colour::Black, "e8"),
        ])
        .unwrap();

        let ctx = board
            .play(coord("e4"), coord("e8"), TurnContext::default())
            .unwrap();

        assert!(!ctx.in_check);
        assert!(!ctx.mover_gave_check);
        assert_eq!(ctx.last_move, Some(coord("e8")));
        assert_eq!(board.cemetery()[0].kind(), PieceKind::King);
        assert!(board.find_king(Colour::Black).is_err());
        assert_eq!(board.history(), ["♖ e8"]);
    }
}
