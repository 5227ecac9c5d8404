//! Board-layout descriptions (the piece-placement field of FEN).
//!
//! Ranks are written from rank 8 down to rank 1 and separated by `/`. Within a
//! rank, files run from a to h: a piece letter fills one square (uppercase for
//! White, lowercase for Black) and a digit 1-8 skips that many empty squares.
//! The description ends at the first whitespace or at the end of input.

use std::fmt;

use thiserror::Error;

use crate::{Color, File, Piece, Rank, Square};

/// Error produced when a layout description cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason} at offset {offset}")]
pub struct ParseError {
    /// What was wrong with the input.
    pub reason: String,
    /// Byte offset of the offending character.
    pub offset: usize,
}

impl ParseError {
    fn new(reason: impl Into<String>, offset: usize) -> Self {
        ParseError {
            reason: reason.into(),
            offset,
        }
    }
}

/// A single piece placed on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedPiece {
    pub square: Square,
    pub piece: Piece,
    pub color: Color,
}

/// The pieces named by a layout description, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pieces: Vec<PlacedPiece>,
}

impl Placement {
    /// Layout of the standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Parses a layout description.
    ///
    /// Short ranks and missing trailing ranks are accepted and leave their
    /// squares empty. A rank describing more than eight files, a ninth rank,
    /// or any character other than a piece letter, a digit 1-8, `/` or the
    /// terminating whitespace is rejected.
    pub fn parse(desc: &str) -> Result<Self, ParseError> {
        let mut pieces = Vec::new();
        let mut rank = Rank::R8.index();
        let mut file = 0u8;

        for (offset, c) in desc.char_indices() {
            if c.is_whitespace() {
                break;
            }
            match c {
                '/' => {
                    if rank == 0 {
                        return Err(ParseError::new("more than 8 ranks", offset));
                    }
                    rank -= 1;
                    file = 0;
                }
                '1'..='8' => {
                    let skip = c as u8 - b'0';
                    if file + skip > 8 {
                        return Err(ParseError::new(
                            format!("rank {} overflows past the h file", rank + 1),
                            offset,
                        ));
                    }
                    file += skip;
                }
                _ => {
                    let Some((piece, color)) = Piece::from_char(c) else {
                        return Err(ParseError::new(
                            format!("unexpected character '{}'", c),
                            offset,
                        ));
                    };
                    let (Some(f), Some(r)) = (File::from_index(file), Rank::from_index(rank))
                    else {
                        return Err(ParseError::new(
                            format!("rank {} overflows past the h file", rank + 1),
                            offset,
                        ));
                    };
                    pieces.push(PlacedPiece {
                        square: Square::new(f, r),
                        piece,
                        color,
                    });
                    file += 1;
                }
            }
        }

        Ok(Placement { pieces })
    }

    /// Builds a placement from already-known pieces.
    pub fn from_pieces(pieces: impl IntoIterator<Item = PlacedPiece>) -> Self {
        Placement {
            pieces: pieces.into_iter().collect(),
        }
    }

    /// Returns the placed pieces.
    pub fn pieces(&self) -> &[PlacedPiece] {
        &self.pieces
    }

    /// Returns the number of placed pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns true if no pieces are placed.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl fmt::Display for Placement {
    /// Writes the canonical description: all 8 ranks, runs of empty squares
    /// collapsed into digits. If two pieces share a square the later one wins.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut board: [Option<char>; 64] = [None; 64];
        for placed in &self.pieces {
            board[placed.square.index() as usize] = Some(placed.piece.to_char(placed.color));
        }

        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match board[rank * 8 + file] {
                    Some(c) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", c)?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
