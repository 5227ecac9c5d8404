//! Promotion expansion for a single pawn's target mask.

use chess_core::{Move, Piece, Square};

use crate::Bitboard;

/// Moves every back-rank destination out of `pawn_moves` and emits it as four
/// promoting moves (n, b, r, q) from `from`.
///
/// Rank 8 destinations come first, then rank 1, each in increasing square
/// order. Afterwards `pawn_moves` holds only plain destinations, so no square
/// is reported both ways.
pub fn expand_promotions(pawn_moves: &mut Bitboard, from: Square, out: &mut Vec<Move>) {
    let white_promotions = *pawn_moves & Bitboard::RANK_8;
    let black_promotions = *pawn_moves & Bitboard::RANK_1;
    *pawn_moves ^= white_promotions | black_promotions;

    for to in white_promotions.into_iter().chain(black_promotions) {
        out.extend(
            Piece::PROMOTIONS
                .into_iter()
                .map(|piece| Move::promoting(from, to, piece)),
        );
    }
}
