pub mod board;
pub mod game;

pub use board::{Bitboard, Colour, Move, PieceKind, Position, Square};
pub use game::{Game, GameError};
