//! Player color representation.

use std::fmt;

/// Represents the two players in chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true if pieces of this color are written in uppercase.
    #[inline]
    pub const fn is_uppercase(self) -> bool {
        matches!(self, Color::White)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Selects which side a generator works for.
///
/// `Both` never means "compute both sides at once": generators expand it into
/// one call per color and combine the results, so own-piece filtering always
/// happens against a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFilter {
    White,
    Black,
    Both,
}

impl ColorFilter {
    /// Returns the single color selected, or `None` for [`ColorFilter::Both`].
    #[inline]
    pub const fn single(self) -> Option<Color> {
        match self {
            ColorFilter::White => Some(Color::White),
            ColorFilter::Black => Some(Color::Black),
            ColorFilter::Both => None,
        }
    }
}

impl From<Color> for ColorFilter {
    fn from(color: Color) -> Self {
        match color {
            Color::White => ColorFilter::White,
            Color::Black => ColorFilter::Black,
        }
    }
}
