//! Bitboard representation and the directional shift primitives.
//!
//! A bitboard is a 64-bit integer where each bit represents a square on the
//! chess board. Every higher-level generator is built from the eight one-step
//! shifts below; the four shifts with a horizontal component mask out the file
//! a bit would wrap onto, so no bit ever crosses from the h file to the a file
//! or back.

use chess_core::Square;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, BitXorAssign, Not};

/// A set of squares. Bit 0 is a1, bit 7 is h1, bit 63 is h8.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    /// Every square except the a file. Guards shifts with an eastward component.
    pub const NOT_A_FILE: Bitboard = Bitboard(!Self::FILE_A.0);

    /// Every square except the h file. Guards shifts with a westward component.
    pub const NOT_H_FILE: Bitboard = Bitboard(!Self::FILE_H.0);

    pub const RANK_1: Bitboard = Bitboard(0xFF);
    pub const RANK_3: Bitboard = Bitboard(0xFF << 16);
    pub const RANK_6: Bitboard = Bitboard(0xFF << 40);
    pub const RANK_8: Bitboard = Bitboard(0xFF << 56);

    #[inline]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    #[inline]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq.index())
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_not_empty(self) -> bool {
        self.0 != 0
    }

    /// Population count.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & Self::from_square(sq).0 != 0
    }

    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= Self::from_square(sq).0;
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !Self::from_square(sq).0;
    }

    /// The square of the least significant set bit.
    #[inline]
    pub const fn lsb_square(self) -> Option<Square> {
        Square::from_lsb(self.0)
    }

    /// Removes and returns the least significant set bit.
    #[inline]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        let sq = self.lsb_square()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    /// One step toward rank 8.
    #[inline]
    pub const fn north(self) -> Bitboard {
        Bitboard(self.0 << 8)
    }

    /// One step toward rank 1.
    #[inline]
    pub const fn south(self) -> Bitboard {
        Bitboard(self.0 >> 8)
    }

    /// One step toward the h file.
    #[inline]
    pub const fn east(self) -> Bitboard {
        Bitboard((self.0 << 1) & Self::NOT_A_FILE.0)
    }

    /// One step toward the a file.
    #[inline]
    pub const fn west(self) -> Bitboard {
        Bitboard((self.0 >> 1) & Self::NOT_H_FILE.0)
    }

    #[inline]
    pub const fn north_east(self) -> Bitboard {
        Bitboard((self.0 << 9) & Self::NOT_A_FILE.0)
    }

    #[inline]
    pub const fn north_west(self) -> Bitboard {
        Bitboard((self.0 << 7) & Self::NOT_H_FILE.0)
    }

    #[inline]
    pub const fn south_east(self) -> Bitboard {
        Bitboard((self.0 >> 7) & Self::NOT_A_FILE.0)
    }

    #[inline]
    pub const fn south_west(self) -> Bitboard {
        Bitboard((self.0 >> 9) & Self::NOT_H_FILE.0)
    }
}

impl BitAnd for Bitboard {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
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

impl Not for Bitboard {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

/// Lists the set squares, e.g. `Bitboard[a1, e4]`.
impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bitboard[")?;
        for (i, sq) in (*self).into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", sq)?;
        }
        f.write_str("]")
    }
}

/// Yields set squares, least significant bit first.
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.0.pop_lsb()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}
