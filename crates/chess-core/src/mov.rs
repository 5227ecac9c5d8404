//! Move representation.

use crate::{Piece, Square};
use std::fmt;

/// A pseudo-legal move: origin, destination, and an optional promotion piece.
///
/// Packed into 15 bits: origin in bits 0-5, destination in bits 6-11 and the
/// promotion code above them. Displays as `<from><to>[n|b|r|q]`, e.g. `e2e4`
/// or `a7a8q`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    const PROMO_SHIFT: u16 = 12;

    /// Creates a plain (non-promoting) move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.index() as u16) | ((to.index() as u16) << 6))
    }

    /// Creates a pawn move that promotes to `piece`.
    ///
    /// Anything other than a knight, bishop or rook is taken as a queen.
    #[inline]
    pub const fn promoting(from: Square, to: Square, piece: Piece) -> Self {
        let code: u16 = match piece {
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            _ => 4,
        };
        Move(Self::new(from, to).0 | (code << Self::PROMO_SHIFT))
    }

    #[inline]
    pub const fn from(self) -> Square {
        Square::from_low_bits(self.0)
    }

    #[inline]
    pub const fn to(self) -> Square {
        Square::from_low_bits(self.0 >> 6)
    }

    /// Returns the promotion piece, if this move promotes.
    #[inline]
    pub const fn promotion(self) -> Option<Piece> {
        match self.0 >> Self::PROMO_SHIFT {
            1 => Some(Piece::Knight),
            2 => Some(Piece::Bishop),
            3 => Some(Piece::Rook),
            4 => Some(Piece::Queen),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion().is_some()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(piece) = self.promotion() {
            write!(f, "{}", piece.letter())?;
        }
        Ok(())
    }
}

/// Names the move between the least significant set bits of two masks.
///
/// For drivers that hold single-square masks rather than [`Square`]s.
pub fn move_name(from: u64, to: u64) -> Option<String> {
    let from = Square::from_lsb(from)?;
    let to = Square::from_lsb(to)?;
    Some(Move::new(from, to).to_string())
}
