//! # Arbiter
//!
//! A turn-based chess rules engine: board state, pseudo-legal move generation
//! per piece, check-aware legality filtering, and the capture and move-history
//! bookkeeping needed to drive a game to checkmate or stalemate.
pub mod board;
pub mod core;

pub use board::{Board, TurnContext};
pub use core::*;
