//! Per-piece pseudo-legal target masks.
//!
//! Each generator returns the union of destination squares for every piece of
//! its type and the requested color. [`ColorFilter::Both`] is always expanded
//! into one call per color so own-piece filtering stays per side.

use chess_core::{Color, ColorFilter, Piece};

use super::fill::Direction;
use crate::{Bitboard, Position};

#[inline]
fn per_color(filter: ColorFilter, generate: impl Fn(Color) -> Bitboard) -> Bitboard {
    match filter.single() {
        Some(color) => generate(color),
        None => generate(Color::White) | generate(Color::Black),
    }
}

/// Returns the target mask for pieces of `piece` type.
pub fn piece_moves(position: &Position, piece: Piece, filter: ColorFilter) -> Bitboard {
    match piece {
        Piece::Pawn => pawn_moves(position, filter),
        Piece::Knight => knight_moves(position, filter),
        Piece::Bishop => bishop_moves(position, filter),
        Piece::Rook => rook_moves(position, filter),
        Piece::Queen => queen_moves(position, filter),
        Piece::King => king_moves(position, filter),
    }
}

/// Pawn pushes, double pushes from the home rank, and diagonal captures.
///
/// A double push is derived from a successful single push, so a pawn can
/// never jump over a piece directly in front of it.
pub fn pawn_moves(position: &Position, filter: ColorFilter) -> Bitboard {
    per_color(filter, |color| {
        let pawns = position.pawns_of(color);
        let empty = position.empty_squares();
        let enemies = position.occupied_by(color.opposite());

        let (captures, pushes) = match color {
            Color::White => {
                let single = pawns.north() & empty;
                let double = (single & Bitboard::RANK_3).north() & empty;
                (pawns.north_east() | pawns.north_west(), single | double)
            }
            Color::Black => {
                let single = pawns.south() & empty;
                let double = (single & Bitboard::RANK_6).south() & empty;
                (pawns.south_east() | pawns.south_west(), single | double)
            }
        };

        (captures & enemies) | pushes
    })
}

/// Knight jumps, each composed of an orthogonal step and a diagonal step.
pub fn knight_moves(position: &Position, filter: ColorFilter) -> Bitboard {
    per_color(filter, |color| {
        let knights = position.knights_of(color);

        let west_west_north = knights.west().north_west();
        let west_north_north = knights.north().north_west();
        let east_north_north = knights.north().north_east();
        let east_east_north = knights.east().north_east();

        let east_east_south = knights.east().south_east();
        let east_south_south = knights.south().south_east();
        let west_south_south = knights.south().south_west();
        let west_west_south = knights.west().south_west();

        let jumps = west_west_north
            | west_north_north
            | east_north_north
            | east_east_north
            | east_east_south
            | east_south_south
            | west_south_south
            | west_west_south;

        jumps & !position.occupied_by(color)
    })
}

/// One step in any direction. Castling is not generated.
pub fn king_moves(position: &Position, filter: ColorFilter) -> Bitboard {
    per_color(filter, |color| {
        let king = position.king_of(color);
        let steps = Direction::ALL
            .into_iter()
            .fold(Bitboard::EMPTY, |acc, dir| acc | dir.shift(king));
        steps & !position.occupied_by(color)
    })
}

pub fn bishop_moves(position: &Position, filter: ColorFilter) -> Bitboard {
    per_color(filter, |color| {
        slider_moves(position, color, Piece::Bishop, Direction::DIAGONAL)
    })
}

pub fn rook_moves(position: &Position, filter: ColorFilter) -> Bitboard {
    per_color(filter, |color| {
        slider_moves(position, color, Piece::Rook, Direction::ORTHOGONAL)
    })
}

/// Queens combine the bishop and rook rays from the same origins.
pub fn queen_moves(position: &Position, filter: ColorFilter) -> Bitboard {
    per_color(filter, |color| {
        slider_moves(position, color, Piece::Queen, Direction::DIAGONAL)
            | slider_moves(position, color, Piece::Queen, Direction::ORTHOGONAL)
    })
}

/// Sliding targets for the `piece` pieces of `color` along `directions`.
///
/// The fills give the empty squares a slider can reach; shifting each fill one
/// step further gives the attacks, which also reach the first blocker. The
/// origins themselves are removed from the quiet moves.
fn slider_moves(
    position: &Position,
    color: Color,
    piece: Piece,
    directions: [Direction; 4],
) -> Bitboard {
    let sliders = position.pieces_of(piece, color);
    let empty = position.empty_squares();

    let mut fills = Bitboard::EMPTY;
    let mut attacks = Bitboard::EMPTY;
    for dir in directions {
        let fill = dir.occluded_fill(sliders, empty);
        fills |= fill;
        attacks |= dir.shift(fill);
    }

    let attacks = attacks & !position.occupied_by(color);
    let moves = fills & !position.piece_mask(piece);
    moves | attacks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Square;

    fn bb(names: &[&str]) -> Bitboard {
        names
            .iter()
            .map(|n| Bitboard::from_square(Square::from_algebraic(n).unwrap()))
            .fold(Bitboard::EMPTY, |acc, b| acc | b)
    }

    fn pos(desc: &str) -> Position {
        Position::from_description(desc).unwrap()
    }

    #[test]
    fn startpos_pawns() {
        let start = Position::startpos();
        assert_eq!(
            pawn_moves(&start, ColorFilter::White),
            Bitboard::RANK_3 | Bitboard(0xFF << 24)
        );
        assert_eq!(
            pawn_moves(&start, ColorFilter::Black),
            Bitboard::RANK_6 | Bitboard(0xFF << 32)
        );
    }

    #[test]
    fn pawn_double_push_needs_clear_first_square() {
        let blocked = pos("8/8/8/8/8/4n3/4P3/8");
        assert!(pawn_moves(&blocked, ColorFilter::White).is_empty());

        let far_blocked = pos("8/8/8/8/4n3/8/4P3/8");
        assert_eq!(pawn_moves(&far_blocked, ColorFilter::White), bb(&["e3"]));
    }

    #[test]
    fn pawn_double_push_only_from_home_rank() {
        let advanced = pos("8/8/8/8/8/4P3/8/8");
        assert_eq!(pawn_moves(&advanced, ColorFilter::White), bb(&["e4"]));

        let black = pos("8/8/4p3/8/8/8/8/8");
        assert_eq!(pawn_moves(&black, ColorFilter::Black), bb(&["e5"]));
    }

    #[test]
    fn pawn_captures_only_enemies() {
        let p = pos("8/8/8/3r1R2/4P3/8/8/8");
        assert_eq!(pawn_moves(&p, ColorFilter::White), bb(&["d5", "e5"]));

        let black = pos("8/8/8/8/p7/1N6/8/8");
        assert_eq!(pawn_moves(&black, ColorFilter::Black), bb(&["a3", "b3"]));
    }

    #[test]
    fn pawn_captures_do_not_wrap() {
        // an unguarded north-east shift from h4 would land on a6
        let p = pos("8/8/p7/8/7P/8/8/8");
        assert_eq!(pawn_moves(&p, ColorFilter::White), bb(&["h5"]));
    }

    #[test]
    fn both_colors_is_union() {
        let start = Position::startpos();
        for piece in Piece::ALL {
            let both = piece_moves(&start, piece, ColorFilter::Both);
            let white = piece_moves(&start, piece, ColorFilter::White);
            let black = piece_moves(&start, piece, ColorFilter::Black);
            assert_eq!(both, white | black, "{piece}");
        }
    }

    #[test]
    fn knight_jumps() {
        let center = pos("8/8/8/8/3N4/8/8/8");
        assert_eq!(
            knight_moves(&center, ColorFilter::White),
            bb(&["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"])
        );

        let corner = pos("8/8/8/8/8/8/8/N7");
        assert_eq!(knight_moves(&corner, ColorFilter::White), bb(&["b3", "c2"]));

        let start = Position::startpos();
        assert_eq!(
            knight_moves(&start, ColorFilter::White),
            bb(&["a3", "c3", "f3", "h3"])
        );
    }

    #[test]
    fn knight_on_edge_files_does_not_wrap() {
        let h = pos("8/8/8/8/7N/8/8/8");
        assert_eq!(
            knight_moves(&h, ColorFilter::White),
            bb(&["g2", "g6", "f3", "f5"])
        );
        let b = pos("8/8/8/8/1n6/8/8/8");
        assert_eq!(
            knight_moves(&b, ColorFilter::Black),
            bb(&["a2", "a6", "c2", "c6", "d3", "d5"])
        );
    }

    #[test]
    fn king_steps() {
        let corner = pos("8/8/8/8/8/8/8/K7");
        assert_eq!(king_moves(&corner, ColorFilter::White), bb(&["a2", "b1", "b2"]));

        let crowded = pos("8/8/8/8/8/8/PPp5/K1r5");
        assert_eq!(king_moves(&crowded, ColorFilter::White), bb(&["b1"]));
    }

    #[test]
    fn rook_stops_at_own_blocker() {
        let p = pos("8/8/8/8/P7/8/8/R7");
        assert_eq!(
            rook_moves(&p, ColorFilter::White),
            bb(&["a2", "a3", "b1", "c1", "d1", "e1", "f1", "g1", "h1"])
        );
    }

    #[test]
    fn rook_captures_enemy_blocker() {
        let p = pos("8/8/8/8/p7/8/8/R7");
        let moves = rook_moves(&p, ColorFilter::White);
        assert!(moves.contains(Square::from_algebraic("a4").unwrap()));
        assert!(!moves.contains(Square::from_algebraic("a5").unwrap()));
        assert_eq!(moves.count(), 10);
    }

    #[test]
    fn bishop_rays() {
        let p = pos("8/8/8/8/3B4/8/8/8");
        assert_eq!(bishop_moves(&p, ColorFilter::White).count(), 13);

        let blocked = pos("8/8/8/2p1P3/3b4/8/8/8");
        let moves = bishop_moves(&blocked, ColorFilter::Black);
        assert!(moves.contains(Square::from_algebraic("e5").unwrap()));
        assert!(!moves.contains(Square::from_algebraic("c5").unwrap()));
        assert!(!moves.contains(Square::from_algebraic("f6").unwrap()));
        assert_eq!(moves.count(), 7);
    }

    #[test]
    fn queen_combines_rays() {
        let p = pos("8/8/8/8/3Q4/8/8/8");
        assert_eq!(queen_moves(&p, ColorFilter::White).count(), 27);

        let start = Position::startpos();
        assert!(queen_moves(&start, ColorFilter::White).is_empty());
        assert!(bishop_moves(&start, ColorFilter::Both).is_empty());
        assert!(rook_moves(&start, ColorFilter::Both).is_empty());
    }
}
