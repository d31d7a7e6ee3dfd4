//! Attack generation from whole bitboards.
//!
//! Every function works set-wise: given all pieces of one kind, it returns
//! every square any of them attacks. Sliders use a bounded ray fill (the
//! "dumb7fill"): step while the squares are empty, then one more step so the
//! first blocker, friend or foe, is included.

use super::bitboards::BitboardSet;
use super::types::{Bitboard, Colour, PieceKind, Square};

type Step = fn(Bitboard) -> Bitboard;

const ROOK_STEPS: [Step; 4] = [Bitboard::north, Bitboard::south, Bitboard::east, Bitboard::west];

const BISHOP_STEPS: [Step; 4] = [
    Bitboard::north_east,
    Bitboard::north_west,
    Bitboard::south_east,
    Bitboard::south_west,
];

/// Squares attacked by `pawns` of `colour`: the two forward diagonals only.
#[inline]
#[must_use]
pub fn pawn_attacks(colour: Colour, pawns: Bitboard) -> Bitboard {
    match colour {
        Colour::White => pawns.north_east() | pawns.north_west(),
        Colour::Black => pawns.south_east() | pawns.south_west(),
    }
}

/// Push targets of `pawns`: one step into an empty square, and a second step
/// for pawns still on their start rank when both squares are empty.
#[must_use]
pub fn pawn_pushes(colour: Colour, pawns: Bitboard, empty: Bitboard) -> Bitboard {
    match colour {
        Colour::White => {
            let single = pawns.north() & empty;
            let double = (single & Bitboard::RANK_3).north() & empty;
            single | double
        }
        Colour::Black => {
            let single = pawns.south() & empty;
            let double = (single & Bitboard::RANK_6).south() & empty;
            single | double
        }
    }
}

#[must_use]
pub fn knight_attacks(knights: Bitboard) -> Bitboard {
    knights.north_north_east()
        | knights.north_north_west()
        | knights.east_east_north()
        | knights.west_west_north()
        | knights.south_south_east()
        | knights.south_south_west()
        | knights.east_east_south()
        | knights.west_west_south()
}

#[must_use]
pub fn king_attacks(kings: Bitboard) -> Bitboard {
    let lateral = kings.east() | kings.west();
    let band = lateral | kings;
    lateral | band.north() | band.south()
}

/// Ray fill in one direction. At most 7 shifts, whatever `empty` holds.
#[inline]
fn ray_fill(sliders: Bitboard, empty: Bitboard, step: Step) -> Bitboard {
    let mut flood = sliders;
    let mut frontier = sliders;
    for _ in 0..6 {
        frontier = step(frontier) & empty;
        if frontier.is_empty() {
            break;
        }
        flood |= frontier;
    }
    step(flood)
}

fn slide(sliders: Bitboard, empty: Bitboard, steps: &[Step]) -> Bitboard {
    steps
        .iter()
        .fold(Bitboard::EMPTY, |acc, &step| acc | ray_fill(sliders, empty, step))
}

#[must_use]
pub fn bishop_attacks(bishops: Bitboard, empty: Bitboard) -> Bitboard {
    slide(bishops, empty, &BISHOP_STEPS)
}

#[must_use]
pub fn rook_attacks(rooks: Bitboard, empty: Bitboard) -> Bitboard {
    slide(rooks, empty, &ROOK_STEPS)
}

#[must_use]
pub fn queen_attacks(queens: Bitboard, empty: Bitboard) -> Bitboard {
    bishop_attacks(queens, empty) | rook_attacks(queens, empty)
}

/// Squares a set of `kind` pieces attacks. `PieceKind::None` attacks nothing.
#[must_use]
pub fn attacks_of(kind: PieceKind, pieces: Bitboard, empty: Bitboard) -> Bitboard {
    match kind {
        PieceKind::None => Bitboard::EMPTY,
        PieceKind::WhitePawn => pawn_attacks(Colour::White, pieces),
        PieceKind::BlackPawn => pawn_attacks(Colour::Black, pieces),
        PieceKind::Knight => knight_attacks(pieces),
        PieceKind::Bishop => bishop_attacks(pieces, empty),
        PieceKind::Rook => rook_attacks(pieces, empty),
        PieceKind::Queen => queen_attacks(pieces, empty),
        PieceKind::King => king_attacks(pieces),
    }
}

impl BitboardSet {
    /// Every square `colour` attacks, whoever stands on it.
    #[must_use]
    pub fn attacks(&self, colour: Colour) -> Bitboard {
        let empty = self.empty();
        PieceKind::owned_by(colour)
            .into_iter()
            .fold(Bitboard::EMPTY, |acc, kind| {
                acc | attacks_of(kind, self.get(colour, kind), empty)
            })
    }

    #[inline]
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, colour: Colour) -> bool {
        self.attacks(colour).contains(sq)
    }

    /// Square of `colour`'s king.
    ///
    /// # Panics
    /// Panics unless the king mask has exactly one bit set; any other count
    /// means the position is corrupt.
    #[must_use]
    pub fn king_square(&self, colour: Colour) -> Square {
        let kings = self.get(colour, PieceKind::King);
        assert!(
            kings.is_single(),
            "{colour} must have exactly one king, found {}",
            kings.popcount()
        );
        Square::from_index_unchecked(kings.0.trailing_zeros())
    }

    /// Whether `colour`'s king is attacked by the other side.
    ///
    /// # Panics
    /// Panics if `colour` does not have exactly one king.
    #[must_use]
    pub fn is_in_check(&self, colour: Colour) -> bool {
        self.is_square_attacked(self.king_square(colour), colour.opposite())
    }
}
