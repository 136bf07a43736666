use super::piece::PieceKind;
use super::square::{Coord, File};
use thiserror::Error;

/******************************************\
|==========================================|
|               Chess Errors               |
|==========================================|
\******************************************/

/// # Rule-engine error type
///
/// Every fallible operation in the crate reports through this enum.

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A flat square number outside 1-64
    #[error("Square number {0} is out of range, expected 1-64")]
    OutOfRange(i16),

    /// A piece built on a file it does not start the game on
    #[error("A {kind} cannot start on file {file}")]
    InvalidConstruction { kind: PieceKind, file: File },

    /// A lookup on a coordinate with no piece
    #[error("No piece found at {0}")]
    NotFound(Coord),

    /// A move rejected by the rules
    #[error("Illegal move from {from} to {to}")]
    IllegalMove { from: Coord, to: Coord },

    /// An operation that would corrupt the board state
    #[error("Board invariant violated: {0}")]
    InvariantViolation(String),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
