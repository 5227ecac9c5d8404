//! Static evaluation from material and mobility.

use std::fmt;
use std::ops::Neg;

use chess_core::{Color, Piece};

use crate::movegen::generate_moves;
use crate::{EvalWeights, Position};

/// An evaluation in tenths of a pawn, from one side's point of view.
///
/// Keeping tenths as an integer lets the mobility term (0.1 per move) be
/// represented exactly while scores still compare and hash as integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i32);

impl Score {
    pub const ZERO: Score = Score(0);

    #[inline]
    pub const fn from_tenths(tenths: i32) -> Self {
        Score(tenths)
    }

    /// Returns the raw value in tenths of a pawn.
    #[inline]
    pub const fn tenths(self) -> i32 {
        self.0
    }

    /// Returns the value in pawns.
    #[inline]
    pub fn pawns(self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Returns the value in whole pawns, truncated toward zero.
    #[inline]
    pub const fn truncated(self) -> i32 {
        self.0 / 10
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        Score(-self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{}", sign, abs / 10, abs % 10)
    }
}

/// Evaluates `position` for `color` with the default weights.
pub fn evaluate(position: &Position, color: Color) -> Score {
    evaluate_with(position, color, &EvalWeights::default())
}

/// Evaluates `position` for `color`.
///
/// The score is the weighted material difference plus the mobility weight
/// times the difference in pseudo-legal move counts. Both sides' full move
/// lists are generated, so this costs two aggregate generations.
///
/// The sum is taken in `i64` and clamped to `-i32::MAX..=i32::MAX`, so weights
/// built directly instead of through [`EvalWeights::validate`] cannot overflow
/// and the result can always be negated.
pub fn evaluate_with(position: &Position, color: Color, weights: &EvalWeights) -> Score {
    let enemy = color.opposite();

    let material: i64 = Piece::ALL
        .into_iter()
        .map(|piece| {
            let own = i64::from(position.pieces_of(piece, color).count());
            let theirs = i64::from(position.pieces_of(piece, enemy).count());
            i64::from(weights.piece(piece)) * (own - theirs)
        })
        .sum();

    let own_moves = generate_moves(position, color.into()).len() as i64;
    let enemy_moves = generate_moves(position, enemy.into()).len() as i64;
    let mobility = i64::from(weights.mobility) * (own_moves - enemy_moves);

    tracing::trace!(
        %color,
        material,
        own_moves,
        enemy_moves,
        mobility,
        "evaluated position"
    );

    let limit = i64::from(i32::MAX);
    Score((material + mobility).clamp(-limit, limit) as i32)
}
