// Core module exports

mod macros;

// Value-type submodules
pub mod errors;
pub mod grid;
pub mod piece;
pub mod square;
pub mod types;

// Re-export common types for easier access
pub use errors::ChessError;
pub use grid::OccupancyGrid;
pub use piece::{Piece, PieceKind};
pub use square::{Coord, File, ParseCoordError, ParseFileError, ParseRankError, Rank, Square};
pub use types::{Colour, Direction, Occupation};
