//! Core value types for the bitboard move generator.
//!
//! This crate provides the plain types shared by the generator and its callers:
//! - [`Color`] and [`ColorFilter`] for side selection
//! - [`Piece`] for the six piece types
//! - [`Square`], [`File`], and [`Rank`] for board coordinates and naming
//! - [`Move`] for the `e2e4` / `a7a8q` move format
//! - [`Placement`] for parsing board-layout descriptions
//! - [`square_name`] and [`move_name`] for naming raw single-square masks

mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use color::{Color, ColorFilter};
pub use mov::{move_name, Move};
pub use piece::Piece;
pub use placement::{ParseError, PlacedPiece, Placement};
pub use square::{square_name, File, Rank, Square};
