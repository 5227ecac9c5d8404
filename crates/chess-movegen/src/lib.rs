//! Bitboard position store, pseudo-legal move generation and evaluation.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit board masks with the eight directional shifts
//! - [`Position`] - two color masks, six piece-type masks and their union
//! - [`movegen`] - Kogge-Stone sliding fills, per-piece target masks and
//!   ordered move lists
//! - [`evaluate`] - material and mobility scoring
//! - [`EvalWeights`] - evaluation weights, parsed from TOML text
//!
//! Moves are pseudo-legal: they follow each piece's movement rules and never
//! capture the mover's own pieces, but may leave the mover's king in check.
//! Castling and en passant are left to the caller.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, ColorFilter};
//! use chess_movegen::{evaluate, generate_move_strings, Position};
//!
//! let position = Position::startpos();
//! let moves = generate_move_strings(&position, ColorFilter::White);
//! assert_eq!(moves.len(), 20);
//! assert_eq!(moves[0], "a2a3");
//!
//! let score = evaluate(&position, Color::White);
//! assert_eq!(score.tenths(), 0);
//! ```
//!
//! [`chess_core::square_name`] and [`chess_core::move_name`] name squares and
//! moves from raw single-square masks, for drivers that keep their own masks.
//!
//! The crate does no file, network or environment I/O. It logs through
//! [`tracing`] and never installs a subscriber.

mod bitboard;
mod config;
mod eval;
pub mod movegen;
mod position;

pub use bitboard::{Bitboard, BitboardIter};
pub use config::{ConfigError, EvalWeights, MAX_WEIGHT};
pub use eval::{evaluate, evaluate_with, Score};
pub use movegen::{generate_move_strings, generate_moves, piece_moves};
pub use position::{InvalidPositionError, Position, PositionError};
