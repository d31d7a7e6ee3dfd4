//! Bitboard type and operations.
//!
//! Bit *i* of a [`Bitboard`] stands for square *i* (a1 = bit 0, h8 = bit 63).
//! Directional shifts clear the files that would otherwise wrap around the
//! a/h edge before shifting, so a piece on file h never lands on file a.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// A 64-bit bitboard representing piece positions or attack squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bitboard(pub u64);

// File masks (columns)
impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_B: Bitboard = Bitboard(0x0202020202020202);
    pub const FILE_C: Bitboard = Bitboard(0x0404040404040404);
    pub const FILE_D: Bitboard = Bitboard(0x0808080808080808);
    pub const FILE_E: Bitboard = Bitboard(0x1010101010101010);
    pub const FILE_F: Bitboard = Bitboard(0x2020202020202020);
    pub const FILE_G: Bitboard = Bitboard(0x4040404040404040);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_2: Bitboard = Bitboard(0x000000000000FF00);
    pub const RANK_3: Bitboard = Bitboard(0x0000000000FF0000);
    pub const RANK_4: Bitboard = Bitboard(0x00000000FF000000);
    pub const RANK_5: Bitboard = Bitboard(0x000000FF00000000);
    pub const RANK_6: Bitboard = Bitboard(0x0000FF0000000000);
    pub const RANK_7: Bitboard = Bitboard(0x00FF000000000000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    const NOT_A: u64 = !Self::FILE_A.0;
    const NOT_H: u64 = !Self::FILE_H.0;
    const NOT_AB: u64 = !(Self::FILE_A.0 | Self::FILE_B.0);
    const NOT_GH: u64 = !(Self::FILE_G.0 | Self::FILE_H.0);
}

impl Bitboard {
    /// Get the file mask for a given file index (0-7)
    #[inline]
    #[must_use]
    pub const fn file_mask(file: usize) -> Self {
        Bitboard(Self::FILE_A.0 << file)
    }

    /// Get the rank mask for a given rank index (0-7)
    #[inline]
    #[must_use]
    pub const fn rank_mask(rank: usize) -> Self {
        Bitboard(Self::RANK_1.0 << (rank * 8))
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if exactly one bit is set
    #[inline]
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & sq.bit().0 != 0
    }

    /// Lowest set square, if any
    #[inline]
    #[must_use]
    pub const fn first_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros()))
        }
    }

    /// Returns an iterator over the squares set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Shift all bits north (toward rank 8)
    #[inline]
    #[must_use]
    pub const fn north(self) -> Self {
        Bitboard(self.0 << 8)
    }

    /// Shift all bits south (toward rank 1)
    #[inline]
    #[must_use]
    pub const fn south(self) -> Self {
        Bitboard(self.0 >> 8)
    }

    /// Shift all bits east (toward file h); file h drops off
    #[inline]
    #[must_use]
    pub const fn east(self) -> Self {
        Bitboard((self.0 & Self::NOT_H) << 1)
    }

    /// Shift all bits west (toward file a); file a drops off
    #[inline]
    #[must_use]
    pub const fn west(self) -> Self {
        Bitboard((self.0 & Self::NOT_A) >> 1)
    }

    #[inline]
    #[must_use]
    pub const fn north_east(self) -> Self {
        Bitboard((self.0 & Self::NOT_H) << 9)
    }

    #[inline]
    #[must_use]
    pub const fn north_west(self) -> Self {
        Bitboard((self.0 & Self::NOT_A) << 7)
    }

    #[inline]
    #[must_use]
    pub const fn south_east(self) -> Self {
        Bitboard((self.0 & Self::NOT_H) >> 7)
    }

    #[inline]
    #[must_use]
    pub const fn south_west(self) -> Self {
        Bitboard((self.0 & Self::NOT_A) >> 9)
    }

    // Knight leaps, named by the long leg first: `north_north_east` is two
    // ranks up and one file right.

    #[inline]
    #[must_use]
    pub const fn north_north_east(self) -> Self {
        Bitboard((self.0 & Self::NOT_H) << 17)
    }

    #[inline]
    #[must_use]
    pub const fn north_north_west(self) -> Self {
        Bitboard((self.0 & Self::NOT_A) << 15)
    }

    #[inline]
    #[must_use]
    pub const fn east_east_north(self) -> Self {
        Bitboard((self.0 & Self::NOT_GH) << 10)
    }

    #[inline]
    #[must_use]
    pub const fn west_west_north(self) -> Self {
        Bitboard((self.0 & Self::NOT_AB) << 6)
    }

    #[inline]
    #[must_use]
    pub const fn south_south_east(self) -> Self {
        Bitboard((self.0 & Self::NOT_H) >> 15)
    }

    #[inline]
    #[must_use]
    pub const fn south_south_west(self) -> Self {
        Bitboard((self.0 & Self::NOT_A) >> 17)
    }

    #[inline]
    #[must_use]
    pub const fn east_east_south(self) -> Self {
        Bitboard((self.0 & Self::NOT_GH) >> 6)
    }

    #[inline]
    #[must_use]
    pub const fn west_west_south(self) -> Self {
        Bitboard((self.0 & Self::NOT_AB) >> 10)
    }
}

impl From<Square> for Bitboard {
    fn from(sq: Square) -> Self {
        sq.bit()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::EMPTY, |bb, sq| bb | sq.bit())
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

/// Renders the board as an 8x8 grid, rank 8 at the top.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let bit = (self.0 >> (rank * 8 + file)) & 1;
                write!(f, " {}", if bit == 1 { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        let sq = self.0.first_square()?;
        self.0 .0 &= self.0 .0 - 1;
        Some(sq)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
