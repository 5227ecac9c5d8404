//! Pseudo-legal move generation.
//!
//! Generation is a pure function of a [`Position`] snapshot. Moves obey each
//! piece's movement rules and never capture a piece of the mover's color, but
//! may leave the mover's king in check. Castling and en passant are not
//! generated.
//!
//! The aggregate list is ordered by color (White before Black), then by piece
//! type (pawn, knight, bishop, rook, queen, king), then by origin square, then
//! by destination square, squares in increasing index order. A pawn's
//! promotions come before its plain moves.

mod fill;
mod pieces;
mod promotion;

use chess_core::{Color, ColorFilter, Move, Piece};

use crate::{Bitboard, Position};

pub use fill::{
    east_occluded, north_east_occluded, north_occluded, north_west_occluded, south_east_occluded,
    south_occluded, south_west_occluded, west_occluded, Direction,
};
pub use pieces::{
    bishop_moves, king_moves, knight_moves, pawn_moves, piece_moves, queen_moves, rook_moves,
};
pub use promotion::expand_promotions;

/// Generates the full pseudo-legal move list for the selected side(s).
///
/// For [`ColorFilter::Both`] the White list is generated first and the Black
/// list appended after it.
pub fn generate_moves(position: &Position, filter: ColorFilter) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    match filter.single() {
        Some(color) => generate_for(position, color, &mut moves),
        None => {
            generate_for(position, Color::White, &mut moves);
            generate_for(position, Color::Black, &mut moves);
        }
    }
    moves
}

/// Like [`generate_moves`], rendered as move strings (`e2e4`, `a7a8q`).
pub fn generate_move_strings(position: &Position, filter: ColorFilter) -> Vec<String> {
    generate_moves(position, filter)
        .into_iter()
        .map(|mv| mv.to_string())
        .collect()
}

/// Appends the moves of one color, attributing each to its origin square.
///
/// The mask generators work on whole piece-type masks, so each origin is
/// isolated in a scratch copy of the position whose type mask holds only that
/// square. The scratch copy is made once and its type mask restored after each
/// piece type.
fn generate_for(position: &Position, color: Color, moves: &mut Vec<Move>) {
    let start = moves.len();
    let mut scratch = *position;

    for piece in Piece::ALL {
        for from in position.pieces_of(piece, color) {
            *scratch.piece_mask_mut(piece) = Bitboard::from_square(from);

            let mut targets = piece_moves(&scratch, piece, color.into());
            if piece == Piece::Pawn {
                expand_promotions(&mut targets, from, moves);
            }
            moves.extend(targets.into_iter().map(|to| Move::new(from, to)));
        }
        *scratch.piece_mask_mut(piece) = position.piece_mask(piece);
    }

    tracing::trace!(%color, count = moves.len() - start, "generated pseudo-legal moves");
}
