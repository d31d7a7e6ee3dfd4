//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use bitboard_chess::board::prelude::*;
//!
//! let position: Position = "8/8/8/8/8/8/8/K1k5 w - - 0 1".parse().unwrap();
//! assert_eq!(position.piece_at(Square::A1).kind(), PieceKind::King);
//! ```

pub use super::{
    Bitboard, BitboardSet, CastlingRights, Colour, FenError, Move, MoveError, MoveParseError,
    PieceCode, PieceKind, Position, PositionBuilder, Square, SquareError,
};
