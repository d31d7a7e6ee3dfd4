//! Chess position representation and pseudo-legal move handling.
//!
//! Uses one bitboard per (colour, kind) pair, mirrored by a per-square
//! occupant array, and generates attacks set-wise with shifts and ray fills.
//!
//! # Example
//! ```
//! use bitboard_chess::board::{Colour, Move, Position, Square};
//!
//! let mut position = Position::start();
//! assert!(position.is_valid_move(Move::new(Square::E2, Square::E4)));
//! position.make_move(Move::new(Square::E2, Square::E4));
//! assert_eq!(position.side_to_move(), Colour::Black);
//! assert!(!position.is_in_check(Colour::Black));
//! ```

pub mod attacks;
mod bitboards;
mod builder;
mod error;
mod fen;
mod make_move;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use bitboards::BitboardSet;
pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use state::Position;
pub use types::{
    Bitboard, BitboardIter, CastleSides, CastlingRights, Colour, Move, PieceCode, PieceKind,
    Square,
};
