use super::movegen::pseudo_legal_targets;
use super::Board;
use crate::core::{ChessError, Colour, Coord, PieceKind, Square};

/******************************************\
|==========================================|
|               Turn Context               |
|==========================================|
\******************************************/

/// # Turn context
///
/// What the previous turn left behind. [`Board::play`] returns the context
/// the next turn must be fed, carrying whether the side to move is in check
/// and which enemy piece moved last. The legality filter uses the last mover
/// to re-examine the one piece that may still be giving check even when it
/// does not line up with the king.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnContext {
    /// The side to move starts the turn in check
    pub in_check: bool,
    /// The previous move delivered the check
    pub mover_gave_check: bool,
    /// Where the previous move ended
    pub last_move: Option<Coord>,
}

/******************************************\
|==========================================|
|             Legality Filter              |
|==========================================|
\******************************************/

/// Whether a piece kind standing on `from` could slide at the king's square,
/// were the path open. Only sliders can answer yes, so only sliders need a
/// re-scan after a hypothetical move.
pub(crate) fn aligned(kind: PieceKind, from: Coord, king: Coord) -> bool {
    let diagonal = from.file_dist(king) == from.rank_dist(king);
    let straight = from.file() == king.file() || from.rank() == king.rank();
    match kind {
        PieceKind::Bishop => diagonal,
        PieceKind::Rook => straight,
        PieceKind::Queen => diagonal || straight,
        _ => false,
    }
}

impl Board {
    /// Computes the moves of the piece on `at` that do not leave its own
    /// king attacked.
    ///
    /// Each pseudo-legal candidate is played out on a copy of the occupancy
    /// grid. Rather than re-scanning the whole enemy army, only the piece
    /// that gave check on the previous move and the sliders lined up with
    /// the king get their targets recomputed on the hypothetical grid.
    ///
    /// ## Examples
    ///
    /// ```
    /// use arbiter::{Board, TurnContext};
    ///
    /// let board = Board::startpos();
    /// let targets = board
    ///     .legal_targets("e2".parse().unwrap(), TurnContext::default())
    ///     .unwrap();
    /// assert_eq!(targets.len(), 2);
    /// ```
    pub fn legal_targets(&self, at: Coord, ctx: TurnContext) -> Result<Vec<Square>, ChessError> {
        let piece = self.piece_at(at).ok_or(ChessError::NotFound(at))?;
        let king_home = self.find_king(piece.colour())?;

        let candidates = pseudo_legal_targets(piece, self.grid());
        let mut legal = Vec::with_capacity(candidates.len());

        'candidates: for target in candidates {
            let mut hypothetical = *self.grid();
            hypothetical.clear(at.square());
            hypothetical.set(target, piece.colour());

            let king_square = if piece.kind() == PieceKind::King {
                target
            } else {
                king_home.square()
            };

            for enemy in self.pieces() {
                if enemy.colour() == piece.colour() || enemy.coord().square() == target {
                    continue;
                }

                let suspect = (ctx.mover_gave_check && Some(enemy.coord()) == ctx.last_move)
                    || aligned(enemy.kind(), enemy.coord(), king_square.coord());
                if !suspect {
                    continue;
                }

                if pseudo_legal_targets(enemy, &hypothetical).contains(&king_square) {
                    continue 'candidates;
                }
            }

            legal.push(target);
        }

        legal.sort();
        Ok(legal)
    }

    /// Enumerates every legal move of a side as (from, to) coordinate pairs,
    /// sorted. An empty result on a turn in check is checkmate, otherwise
    /// stalemate.
    pub fn all_legal_moves(
        &self,
        colour: Colour,
        ctx: TurnContext,
    ) -> Result<Vec<(Coord, Coord)>, ChessError> {
        let mut moves = Vec::new();
        let movers: Vec<Coord> = self
            .pieces()
            .filter(|p| p.colour() == colour)
            .map(|p| p.coord())
            .collect();

        for from in movers {
            for target in self.legal_targets(from, ctx)? {
                moves.push((from, target.coord()));
            }
        }

        moves.sort();
        Ok(moves)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
