//! Board coordinates and square naming.
//!
//! Squares use little-endian rank-file mapping: `index = rank * 8 + file`, so
//! a1 = 0, h1 = 7, a2 = 8 and h8 = 63. Bit `i` of a mask is square `i`.

use std::fmt;

/// A file (column), a through h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// Files from a to h.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// A rank (row), 1 through 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
}

impl Rank {
    /// Ranks from 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// One of the 64 squares.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Returns the square with the given index, if it is below 64.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Keeps the low six bits of `bits`, which always name a square.
    #[inline]
    pub(crate) const fn from_low_bits(bits: u16) -> Self {
        Square((bits & 0x3F) as u8)
    }

    /// Returns the square of the least significant set bit of `mask`.
    #[inline]
    pub const fn from_lsb(mask: u64) -> Option<Self> {
        if mask == 0 {
            None
        } else {
            Some(Square(mask.trailing_zeros() as u8))
        }
    }

    /// Parses a lowercase name such as `e4`.
    pub fn from_algebraic(name: &str) -> Option<Self> {
        match *name.as_bytes() {
            [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
                Some(Square((rank - b'1') * 8 + (file - b'a')))
            }
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file().index()) as char;
        let rank = (b'1' + self.rank().index()) as char;
        write!(f, "{}{}", file, rank)
    }
}

/// Returns the name of the least significant set bit of `mask`.
///
/// Higher bits are ignored; an empty mask has no name.
pub fn square_name(mask: u64) -> Option<String> {
    Square::from_lsb(mask).map(|sq| sq.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_and_rank_of_square() {
        let e4 = Square::new(File::E, Rank::R4);
        assert_eq!(e4.file(), File::E);
        assert_eq!(e4.rank(), Rank::R4);
        assert_eq!(e4.index(), 28);
    }

    #[test]
    fn parse_names() {
        assert_eq!(Square::from_algebraic("a1"), Square::from_index(0));
        assert_eq!(Square::from_algebraic("h1"), Square::from_index(7));
        assert_eq!(Square::from_algebraic("h8"), Square::from_index(63));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("A1"), None);
        assert_eq!(Square::from_algebraic("a10"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn every_index_names_back_to_itself() {
        for index in 0..64u8 {
            let sq = Square::from_index(index).unwrap();
            assert_eq!(Square::from_algebraic(&sq.to_string()), Some(sq));
        }
        assert_eq!(Square::from_index(64), None);
        assert_eq!(format!("{:?}", Square::new(File::C, Rank::R7)), "Square(c7)");
    }

    #[test]
    fn low_bits_wrap_into_board() {
        assert_eq!(Square::from_low_bits(0x3F).index(), 63);
        assert_eq!(Square::from_low_bits(0x40 | 12).index(), 12);
    }

    #[test]
    fn lsb_naming() {
        assert_eq!(Square::from_lsb(0), None);
        assert_eq!(Square::from_lsb(1 << 12), Square::from_algebraic("e2"));
        assert_eq!(square_name((1 << 12) | (1 << 40)), Some("e2".to_string()));
        assert_eq!(square_name(1 << 63), Some("h8".to_string()));
        assert_eq!(square_name(0), None);
    }
}
