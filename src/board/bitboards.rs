//! Per-piece bitboard store.
//!
//! One mask per (colour, kind) pair, kept in a fixed array indexed by the
//! packed [`PieceCode`]. Only the twelve pairs a real piece can form are
//! ever written; the remaining slots stay zero, so derived equality compares
//! exactly the twelve piece masks.

use std::ops::{Index, IndexMut};

use super::types::{Bitboard, Colour, PieceCode, PieceKind, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct BitboardSet {
    masks: [Bitboard; 16],
}

/// Array slot of a (colour, kind) pair.
///
/// # Panics
/// Panics on a pair no piece can form: kind `None`, or the other colour's pawn.
#[inline]
fn slot(colour: Colour, kind: PieceKind) -> usize {
    assert!(
        kind.belongs_to(colour),
        "no bitboard for {colour} {kind:?}"
    );
    PieceCode::new(colour, kind).index()
}

impl BitboardSet {
    #[must_use]
    pub const fn new() -> Self {
        BitboardSet {
            masks: [Bitboard::EMPTY; 16],
        }
    }

    /// Mask of one (colour, kind) pair.
    ///
    /// # Panics
    /// Panics if the pair is not a real piece (see [`PieceKind::belongs_to`]).
    #[inline]
    #[must_use]
    pub fn get(&self, colour: Colour, kind: PieceKind) -> Bitboard {
        self.masks[slot(colour, kind)]
    }

    /// Replace the mask of one (colour, kind) pair.
    ///
    /// # Panics
    /// Panics if the pair is not a real piece.
    #[inline]
    pub fn set(&mut self, colour: Colour, kind: PieceKind, mask: Bitboard) {
        self.masks[slot(colour, kind)] = mask;
    }

    /// Union of the six masks a colour owns
    #[must_use]
    pub fn occupancy(&self, colour: Colour) -> Bitboard {
        PieceKind::owned_by(colour)
            .into_iter()
            .fold(Bitboard::EMPTY, |acc, kind| acc | self.get(colour, kind))
    }

    /// Every occupied square
    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupancy(Colour::White) | self.occupancy(Colour::Black)
    }

    /// Every empty square
    #[inline]
    #[must_use]
    pub fn empty(&self) -> Bitboard {
        !self.occupied()
    }

    /// Squares holding `kind` of either colour; either pawn kind means all pawns.
    #[must_use]
    pub fn kind_occupancy(&self, kind: PieceKind) -> Bitboard {
        match kind {
            PieceKind::None => self.empty(),
            PieceKind::WhitePawn | PieceKind::BlackPawn => {
                self.get(Colour::White, PieceKind::WhitePawn)
                    | self.get(Colour::Black, PieceKind::BlackPawn)
            }
            _ => self.get(Colour::White, kind) | self.get(Colour::Black, kind),
        }
    }

    /// Which piece, if any, has its bit set on `sq`
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> PieceCode {
        for colour in Colour::BOTH {
            for kind in PieceKind::owned_by(colour) {
                if self.get(colour, kind).contains(sq) {
                    return PieceCode::new(colour, kind);
                }
            }
        }
        PieceCode::EMPTY
    }

    #[inline]
    pub(crate) fn add(&mut self, sq: Square, piece: PieceCode) {
        if !piece.is_empty() {
            self.masks[slot(piece.colour(), piece.kind())] |= sq.bit();
        }
    }

    #[inline]
    pub(crate) fn remove(&mut self, sq: Square, piece: PieceCode) {
        if !piece.is_empty() {
            self.masks[slot(piece.colour(), piece.kind())] &= !sq.bit();
        }
    }
}

impl Index<(Colour, PieceKind)> for BitboardSet {
    type Output = Bitboard;

    fn index(&self, (colour, kind): (Colour, PieceKind)) -> &Bitboard {
        &self.masks[slot(colour, kind)]
    }
}

impl IndexMut<(Colour, PieceKind)> for BitboardSet {
    fn index_mut(&mut self, (colour, kind): (Colour, PieceKind)) -> &mut Bitboard {
        &mut self.masks[slot(colour, kind)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BitboardSet {
        let mut set = BitboardSet::new();
        set.set(Colour::White, PieceKind::WhitePawn, Bitboard::RANK_2);
        set.set(Colour::White, PieceKind::King, Square::E1.bit());
        set.set(Colour::Black, PieceKind::BlackPawn, Bitboard::RANK_7);
        set.set(Colour::Black, PieceKind::Queen, Square::D8.bit());
        set
    }

    #[test]
    fn test_occupancy_is_colour_partitioned() {
        let set = sample();
        assert_eq!(
            set.occupancy(Colour::White),
            Bitboard::RANK_2 | Square::E1.bit()
        );
        assert_eq!(
            set.occupancy(Colour::Black),
            Bitboard::RANK_7 | Square::D8.bit()
        );
        assert_eq!(set.occupied().popcount(), 18);
        assert_eq!(set.empty().popcount(), 46);
        assert!((set.occupancy(Colour::White) & set.occupancy(Colour::Black)).is_empty());
    }

    #[test]
    fn test_index_matches_get() {
        let mut set = sample();
        assert_eq!(set[(Colour::Black, PieceKind::Queen)], Square::D8.bit());
        set[(Colour::Black, PieceKind::Queen)] = Square::H4.bit();
        assert_eq!(set.get(Colour::Black, PieceKind::Queen), Square::H4.bit());
    }

    #[test]
    fn test_kind_occupancy_merges_colours() {
        let set = sample();
        assert_eq!(
            set.kind_occupancy(PieceKind::WhitePawn),
            Bitboard::RANK_2 | Bitboard::RANK_7
        );
        assert_eq!(set.kind_occupancy(PieceKind::Queen), Square::D8.bit());
    }

    #[test]
    fn test_piece_at() {
        let set = sample();
        assert_eq!(
            set.piece_at(Square::D8),
            PieceCode::new(Colour::Black, PieceKind::Queen)
        );
        assert_eq!(set.piece_at(Square::D4), PieceCode::EMPTY);
    }

    #[test]
    fn test_equality_is_order_independent() {
        let a = sample();
        let mut b = BitboardSet::new();
        b.set(Colour::Black, PieceKind::Queen, Square::D8.bit());
        b.set(Colour::Black, PieceKind::BlackPawn, Bitboard::RANK_7);
        b.set(Colour::White, PieceKind::King, Square::E1.bit());
        b.set(Colour::White, PieceKind::WhitePawn, Bitboard::RANK_2);
        assert_eq!(a, b);
        b.set(Colour::White, PieceKind::King, Square::F1.bit());
        assert_ne!(a, b);
    }

    #[test]
    #[should_panic(expected = "no bitboard")]
    fn test_wrong_colour_pawn_fails_fast() {
        let set = BitboardSet::new();
        let _ = set.get(Colour::Black, PieceKind::WhitePawn);
    }

    #[test]
    #[should_panic(expected = "no bitboard")]
    fn test_none_kind_fails_fast() {
        let set = BitboardSet::new();
        let _ = set.get(Colour::White, PieceKind::None);
    }
}
