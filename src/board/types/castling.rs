//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Colour;

const CASTLE_WHITE_K: u8 = 1 << 0;
const CASTLE_WHITE_Q: u8 = 1 << 1;
const CASTLE_BLACK_K: u8 = 1 << 2;
const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// The castling sides still open to one colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSides {
    None,
    KingSide,
    QueenSide,
    Both,
}

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, colour: Colour, kingside: bool) -> bool {
        self.0 & Self::bit_for(colour, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, colour: Colour, kingside: bool) {
        self.0 |= Self::bit_for(colour, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, colour: Colour, kingside: bool) {
        self.0 &= !Self::bit_for(colour, kingside);
    }

    /// Drop both rights of a colour
    #[inline]
    pub fn remove_all(&mut self, colour: Colour) {
        self.remove(colour, true);
        self.remove(colour, false);
    }

    /// Per-colour view of the rights
    #[must_use]
    pub const fn sides(self, colour: Colour) -> CastleSides {
        match (self.has(colour, true), self.has(colour, false)) {
            (true, true) => CastleSides::Both,
            (true, false) => CastleSides::KingSide,
            (false, true) => CastleSides::QueenSide,
            (false, false) => CastleSides::None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(colour: Colour, kingside: bool) -> u8 {
        match (colour, kingside) {
            (Colour::White, true) => CASTLE_WHITE_K,
            (Colour::White, false) => CASTLE_WHITE_Q,
            (Colour::Black, true) => CASTLE_BLACK_K,
            (Colour::Black, false) => CASTLE_BLACK_Q,
        }
    }
}
