use crate::core::{Colour, Direction, OccupancyGrid, Piece, PieceKind, Rank, Square};

/******************************************\
|==========================================|
|          Pseudo-Legal Movegen            |
|==========================================|
\******************************************/

/// Sliding directions of a rook
const ROOK_RAYS: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];

/// Sliding directions of a bishop
const BISHOP_RAYS: [Direction; 4] = [Direction::NE, Direction::NW, Direction::SE, Direction::SW];

/// Knight jumps as (file delta, rank delta) pairs
#[rustfmt::skip]
const KNIGHT_JUMPS: [(i16, i16); 8] = [
    (1, 2), (1, -2), (-1, 2), (-1, -2),
    (2, 1), (2, -1), (-2, 1), (-2, -1),
];

/// King steps as (file delta, rank delta) pairs
#[rustfmt::skip]
const KING_STEPS: [(i16, i16); 8] = [
    (0, 1), (0, -1), (1, 0), (-1, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

/// Computes the squares a piece attacks or steps to on the given grid,
/// ignoring whether the move would leave its own king in check.
///
/// The grid is taken separately from the piece so callers can probe
/// hypothetical positions without touching a board.
///
/// ## Examples
///
/// ```
/// use arbiter::core::{Colour, OccupancyGrid, Piece, PieceKind};
/// use arbiter::board::pseudo_legal_targets;
///
/// let rook = Piece::at(PieceKind::Rook, Colour::White, "a1".parse().unwrap());
/// let targets = pseudo_legal_targets(&rook, &OccupancyGrid::EMPTY);
/// assert_eq!(targets.len(), 14);
/// ```
pub fn pseudo_legal_targets(piece: &Piece, grid: &OccupancyGrid) -> Vec<Square> {
    let origin = piece.coord().square();
    let colour = piece.colour();
    let mut targets = Vec::new();

    match piece.kind() {
        PieceKind::Rook => slide(origin, colour, &ROOK_RAYS, grid, &mut targets),
        PieceKind::Bishop => slide(origin, colour, &BISHOP_RAYS, grid, &mut targets),
        PieceKind::Queen => {
            slide(origin, colour, &ROOK_RAYS, grid, &mut targets);
            slide(origin, colour, &BISHOP_RAYS, grid, &mut targets);
        }
        PieceKind::Knight => steps(origin, colour, &KNIGHT_JUMPS, grid, &mut targets),
        PieceKind::King => steps(origin, colour, &KING_STEPS, grid, &mut targets),
        PieceKind::Pawn => pawn_targets(piece, grid, &mut targets),
    }

    targets
}

/// Walks each ray one step at a time until it runs off the board, wraps
/// around a board edge or hits a piece. An enemy piece is a capture target
/// and still ends the ray.
fn slide(
    origin: Square,
    colour: Colour,
    rays: &[Direction],
    grid: &OccupancyGrid,
    targets: &mut Vec<Square>,
) {
    for &ray in rays {
        let mut number = origin.number() as i16;
        let mut last_column = origin.column();

        loop {
            number += ray.offset();
            if !Square::in_range(number) {
                break;
            }

            let sq = Square::from_number_unchecked(number);
            // A single step never moves more than one column, a larger jump
            // means the flat numbering wrapped onto the other edge
            if last_column.abs_diff(sq.column()) > 1 {
                break;
            }

            if grid.is_empty(sq) {
                targets.push(sq);
                last_column = sq.column();
            } else {
                if !grid.holds(sq, colour) {
                    targets.push(sq);
                }
                break;
            }
        }
    }
}

/// Probes each fixed (file, rank) offset once, rejecting off-board and
/// edge-wrapped candidates and squares held by the mover's own side
fn steps(
    origin: Square,
    colour: Colour,
    offsets: &[(i16, i16)],
    grid: &OccupancyGrid,
    targets: &mut Vec<Square>,
) {
    for &(file_delta, rank_delta) in offsets {
        let number = origin.number() as i16 + rank_delta * 8 + file_delta;
        if !Square::in_range(number) {
            continue;
        }

        let sq = Square::from_number_unchecked(number);
        if origin.column().abs_diff(sq.column()) != file_delta.unsigned_abs() as u8 {
            continue;
        }

        if !grid.holds(sq, colour) {
            targets.push(sq);
        }
    }
}

/// Pawns split into two independent move families. Pushes need empty
/// squares and never capture, diagonal steps exist only onto enemy pieces.
fn pawn_targets(piece: &Piece, grid: &OccupancyGrid, targets: &mut Vec<Square>) {
    let origin = piece.coord().square();
    let colour = piece.colour();
    let forward = colour.forward().offset();

    let push = origin.number() as i16 + forward;
    if Square::in_range(push) {
        let push_sq = Square::from_number_unchecked(push);
        if grid.is_empty(push_sq) {
            targets.push(push_sq);

            // The double push exists only from the pawn's home rank
            if piece.coord().rank() == Rank::Rank2.relative(colour) {
                let double = push + forward;
                if Square::in_range(double) {
                    let double_sq = Square::from_number_unchecked(double);
                    if grid.is_empty(double_sq) {
                        targets.push(double_sq);
                    }
                }
            }
        }
    }

    for file_delta in [-1i16, 1] {
        let number = origin.number() as i16 + forward + file_delta;
        if !Square::in_range(number) {
            continue;
        }

        let sq = Square::from_number_unchecked(number);
        if origin.column().abs_diff(sq.column()) != 1 {
            continue;
        }

        if grid.holds(sq, !colour) {
            targets.push(sq);
        }
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
