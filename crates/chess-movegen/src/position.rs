//! The bitboard store: two color masks, six piece-type masks, and a cached union.

use std::fmt;

use chess_core::{Color, File, ParseError, Piece, PlacedPiece, Placement, Rank, Square};
use thiserror::Error;

use crate::Bitboard;

/// A bitboard set that breaks one of the store's invariants.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InvalidPositionError {
    #[error("squares {0:#018x} are claimed by both colors")]
    OverlappingColors(u64),

    #[error("squares {squares:#018x} hold both a {first} and a {second}")]
    OverlappingPieces {
        first: Piece,
        second: Piece,
        squares: u64,
    },

    #[error("pieces on {0:#018x} have no color")]
    UncoloredPieces(u64),

    #[error("colored squares {0:#018x} hold no piece")]
    MissingPieces(u64),

    #[error("cached union {cached:#018x} differs from white | black = {actual:#018x}")]
    StaleUnion { cached: u64, actual: u64 },
}

/// Errors from building a position out of a layout description.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid layout description: {0}")]
    Parse(#[from] ParseError),

    #[error("inconsistent position: {0}")]
    Invalid(#[from] InvalidPositionError),
}

/// Piece placement as a set of bitboards.
///
/// Piece-type masks are color-agnostic; a piece's color is found by
/// intersecting its type mask with a color mask. The union of both colors is
/// cached: code that edits a color mask through [`Position::occupied_by_mut`]
/// must call [`Position::recompute_union`] before handing the position to a
/// generator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    colors: [Bitboard; 2],
    pieces: [Bitboard; 6],
    all: Bitboard,
}

impl Position {
    /// Creates a position with no pieces.
    pub const fn empty() -> Self {
        Position {
            colors: [Bitboard::EMPTY; 2],
            pieces: [Bitboard::EMPTY; 6],
            all: Bitboard::EMPTY,
        }
    }

    /// Creates the standard starting position.
    ///
    /// ```text
    /// rnbqkbnr
    /// pppppppp
    /// --------
    /// --------
    /// --------
    /// --------
    /// PPPPPPPP
    /// RNBQKBNR
    /// ```
    pub const fn startpos() -> Self {
        let white = Bitboard(0xFFFF);
        let black = Bitboard(0xFFFF << 48);
        Position {
            colors: [white, black],
            pieces: [
                Bitboard((0xFF << 48) | (0xFF << 8)),
                Bitboard(0x42 | (0x42 << 56)),
                Bitboard(0x24 | (0x24 << 56)),
                Bitboard(0x81 | (0x81 << 56)),
                Bitboard(0x08 | (0x08 << 56)),
                Bitboard(0x10 | (0x10 << 56)),
            ],
            all: Bitboard(white.0 | black.0),
        }
    }

    /// Builds a position from a layout description such as
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    ///
    /// Only the text before the first whitespace is read, so a full FEN line
    /// is accepted. The result is validated; a description that places two
    /// pieces on one square is rejected.
    pub fn from_description(desc: &str) -> Result<Self, PositionError> {
        let placement = Placement::parse(desc).inspect_err(|e| {
            tracing::debug!(error = %e, "rejected layout description");
        })?;

        let mut position = Position::empty();
        for placed in placement.pieces() {
            position.pieces[placed.piece.index()].set(placed.square);
            position.colors[placed.color.index()].set(placed.square);
        }
        position.recompute_union();

        position.validate().inspect_err(|e| {
            tracing::debug!(error = %e, "layout description produced an inconsistent position");
        })?;
        tracing::debug!(pieces = placement.len(), "parsed layout description");
        Ok(position)
    }

    /// Serializes the placement back to a layout description.
    pub fn to_description(&self) -> String {
        let placed = self.all.into_iter().filter_map(|square| {
            self.piece_at(square).map(|(piece, color)| PlacedPiece {
                square,
                piece,
                color,
            })
        });
        Placement::from_pieces(placed).to_string()
    }

    /// Checks every store invariant.
    pub fn validate(&self) -> Result<(), InvalidPositionError> {
        let [white, black] = self.colors;

        let both = white & black;
        if both.is_not_empty() {
            return Err(InvalidPositionError::OverlappingColors(both.0));
        }

        let mut typed = Bitboard::EMPTY;
        for (i, first) in Piece::ALL.into_iter().enumerate() {
            for second in Piece::ALL.into_iter().skip(i + 1) {
                let squares = self.pieces[first.index()] & self.pieces[second.index()];
                if squares.is_not_empty() {
                    return Err(InvalidPositionError::OverlappingPieces {
                        first,
                        second,
                        squares: squares.0,
                    });
                }
            }
            typed |= self.pieces[first.index()];
        }

        let colored = white | black;
        if self.all != colored {
            return Err(InvalidPositionError::StaleUnion {
                cached: self.all.0,
                actual: colored.0,
            });
        }

        let uncolored = typed & !colored;
        if uncolored.is_not_empty() {
            return Err(InvalidPositionError::UncoloredPieces(uncolored.0));
        }

        let missing = colored & !typed;
        if missing.is_not_empty() {
            return Err(InvalidPositionError::MissingPieces(missing.0));
        }

        Ok(())
    }

    /// Re-derives the cached union from the two color masks.
    #[inline]
    pub fn recompute_union(&mut self) {
        self.all = self.colors[Color::White.index()] | self.colors[Color::Black.index()];
    }

    /// Places a piece, keeping the cached union current.
    ///
    /// Any piece already on the square is not removed.
    pub fn put(&mut self, square: Square, piece: Piece, color: Color) {
        self.pieces[piece.index()].set(square);
        self.colors[color.index()].set(square);
        self.all.set(square);
    }

    /// Returns the piece and color at the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        let color = Color::ALL
            .into_iter()
            .find(|c| self.colors[c.index()].contains(sq))?;
        let piece = Piece::ALL
            .into_iter()
            .find(|p| self.pieces[p.index()].contains(sq))?;
        Some((piece, color))
    }

    /// Returns every square holding a piece of the given type, either color.
    #[inline]
    pub fn piece_mask(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    /// Mutable access to a piece-type mask.
    #[inline]
    pub fn piece_mask_mut(&mut self, piece: Piece) -> &mut Bitboard {
        &mut self.pieces[piece.index()]
    }

    /// Returns every square holding a piece of the given color.
    #[inline]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    /// Mutable access to a color mask. Call [`Position::recompute_union`] afterwards.
    #[inline]
    pub fn occupied_by_mut(&mut self, color: Color) -> &mut Bitboard {
        &mut self.colors[color.index()]
    }

    /// Returns a bitboard of pieces of the given type and color.
    #[inline]
    pub fn pieces_of(&self, piece: Piece, color: Color) -> Bitboard {
        self.pieces[piece.index()] & self.colors[color.index()]
    }

    #[inline]
    pub fn pawns_of(&self, color: Color) -> Bitboard {
        self.pieces_of(Piece::Pawn, color)
    }

    #[inline]
    pub fn knights_of(&self, color: Color) -> Bitboard {
        self.pieces_of(Piece::Knight, color)
    }

    #[inline]
    pub fn bishops_of(&self, color: Color) -> Bitboard {
        self.pieces_of(Piece::Bishop, color)
    }

    #[inline]
    pub fn rooks_of(&self, color: Color) -> Bitboard {
        self.pieces_of(Piece::Rook, color)
    }

    #[inline]
    pub fn queens_of(&self, color: Color) -> Bitboard {
        self.pieces_of(Piece::Queen, color)
    }

    #[inline]
    pub fn king_of(&self, color: Color) -> Bitboard {
        self.pieces_of(Piece::King, color)
    }

    /// Returns a bitboard of all occupied squares (the cached union).
    #[inline]
    pub fn all_pieces(&self) -> Bitboard {
        self.all
    }

    /// Returns a bitboard of all empty squares.
    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.all
    }

    /// Renders the board as 8 lines, rank 8 first, `-` for empty squares.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                out.push(match self.piece_at(Square::new(file, rank)) {
                    Some((piece, color)) => piece.to_char(color),
                    None => '-',
                });
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_description())
    }
}
