//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Square` - board square, a1=0 ... h8=63
//! - `Bitboard` - 64-bit square set with edge-masked directional shifts
//! - `Colour`, `PieceKind`, `PieceCode` - who owns a square and with what
//! - `Move` - a proposed from/to pair
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleSides, CastlingRights};
pub use moves::Move;
pub use piece::{Colour, PieceCode, PieceKind};
pub use square::Square;
