//! Colour, piece kind and the packed piece code stored per square.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side colours.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Colour {
    White = 0,
    Black = 1,
}

impl Colour {
    /// Both colours in index order (White=0, Black=1)
    pub const BOTH: [Colour; 2] = [Colour::White, Colour::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the other side
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Colour {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }

    /// Rank a pawn of this colour promotes on (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn promotion_rank(self) -> usize {
        match self {
            Colour::White => 7,
            Colour::Black => 0,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::White => write!(f, "White"),
            Colour::Black => write!(f, "Black"),
        }
    }
}

/// Piece kinds. Pawns carry their colour because they push and capture in
/// opposite directions; every other kind is combined with a [`Colour`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PieceKind {
    None = 0,
    WhitePawn = 1,
    BlackPawn = 2,
    Knight = 3,
    Bishop = 4,
    Rook = 5,
    Queen = 6,
    King = 7,
}

impl PieceKind {
    /// Kinds a pawn may promote to, queen first
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// The six kinds a colour can own, pawn kind included
    #[must_use]
    pub const fn owned_by(colour: Colour) -> [PieceKind; 6] {
        [
            PieceKind::pawn(colour),
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ]
    }

    /// The pawn kind of a colour
    #[inline]
    #[must_use]
    pub const fn pawn(colour: Colour) -> PieceKind {
        match colour {
            Colour::White => PieceKind::WhitePawn,
            Colour::Black => PieceKind::BlackPawn,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self, PieceKind::WhitePawn | PieceKind::BlackPawn)
    }

    /// Whether a piece of `colour` may be of this kind.
    #[inline]
    #[must_use]
    pub const fn belongs_to(self, colour: Colour) -> bool {
        match self {
            PieceKind::None => false,
            PieceKind::WhitePawn => matches!(colour, Colour::White),
            PieceKind::BlackPawn => matches!(colour, Colour::Black),
            _ => true,
        }
    }

    #[inline]
    const fn from_u8(value: u8) -> PieceKind {
        match value & 0b111 {
            1 => PieceKind::WhitePawn,
            2 => PieceKind::BlackPawn,
            3 => PieceKind::Knight,
            4 => PieceKind::Bishop,
            5 => PieceKind::Rook,
            6 => PieceKind::Queen,
            7 => PieceKind::King,
            _ => PieceKind::None,
        }
    }

    /// Parse a non-pawn kind from its lowercase letter (n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for this kind; `None` has no letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> Option<char> {
        match self {
            PieceKind::None => None,
            PieceKind::WhitePawn | PieceKind::BlackPawn => Some('p'),
            PieceKind::Knight => Some('n'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Rook => Some('r'),
            PieceKind::Queen => Some('q'),
            PieceKind::King => Some('k'),
        }
    }
}

/// A square occupant packed as `(colour << 3) | kind`.
///
/// A code whose kind is [`PieceKind::None`] is always [`PieceCode::EMPTY`];
/// the colour bit of an empty square never survives construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceCode(u8);

impl PieceCode {
    pub const EMPTY: PieceCode = PieceCode(0);

    #[inline]
    #[must_use]
    pub const fn new(colour: Colour, kind: PieceKind) -> Self {
        match kind {
            PieceKind::None => PieceCode::EMPTY,
            _ => PieceCode(((colour as u8) << 3) | kind as u8),
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        PieceKind::from_u8(self.0)
    }

    /// Colour of the occupant. Meaningless for an empty square.
    #[inline]
    #[must_use]
    pub const fn colour(self) -> Colour {
        if self.0 & 0b1000 == 0 {
            Colour::White
        } else {
            Colour::Black
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self.kind(), PieceKind::None)
    }

    /// True when the square holds a piece of `colour`
    #[inline]
    #[must_use]
    pub const fn is_colour(self, colour: Colour) -> bool {
        !self.is_empty() && self.colour() as u8 == colour as u8
    }

    /// Raw code in 0..16, used as an array index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Parse a FEN piece letter; uppercase is White.
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Self> {
        let colour = if c.is_ascii_uppercase() {
            Colour::White
        } else {
            Colour::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::pawn(colour),
            other => PieceKind::from_char(other)?,
        };
        Some(PieceCode::new(colour, kind))
    }

    /// FEN letter for this occupant, `None` for an empty square
    #[must_use]
    pub fn to_fen_char(self) -> Option<char> {
        let c = self.kind().to_char()?;
        Some(match self.colour() {
            Colour::White => c.to_ascii_uppercase(),
            Colour::Black => c,
        })
    }
}
