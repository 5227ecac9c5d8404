//! Directions and Kogge-Stone occluded fills for sliding pieces.
//!
//! An occluded fill floods `gen` through the squares in `pro` in one
//! direction, doubling the step each round (1, 2, 4 squares), so a full
//! 7-square ray costs three rounds. The result holds the origins and every
//! propagator reached; the first blocker is not included. Shifting the fill
//! one more step gives the attack set, which does include the blocker.
//!
//! See <https://www.chessprogramming.org/Kogge-Stone_Algorithm>.

use crate::Bitboard;

/// One of the eight compass directions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// The rook directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::South,
        Direction::North,
        Direction::East,
        Direction::West,
    ];

    /// The bishop directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::SouthWest,
    ];

    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Shifts `bb` one step in this direction without wrapping files.
    #[inline]
    pub const fn shift(self, bb: Bitboard) -> Bitboard {
        match self {
            Direction::North => bb.north(),
            Direction::South => bb.south(),
            Direction::East => bb.east(),
            Direction::West => bb.west(),
            Direction::NorthEast => bb.north_east(),
            Direction::NorthWest => bb.north_west(),
            Direction::SouthEast => bb.south_east(),
            Direction::SouthWest => bb.south_west(),
        }
    }

    /// Runs the occluded fill for this direction.
    #[inline]
    pub fn occluded_fill(self, gen: Bitboard, pro: Bitboard) -> Bitboard {
        match self {
            Direction::North => north_occluded(gen, pro),
            Direction::South => south_occluded(gen, pro),
            Direction::East => east_occluded(gen, pro),
            Direction::West => west_occluded(gen, pro),
            Direction::NorthEast => north_east_occluded(gen, pro),
            Direction::NorthWest => north_west_occluded(gen, pro),
            Direction::SouthEast => south_east_occluded(gen, pro),
            Direction::SouthWest => south_west_occluded(gen, pro),
        }
    }
}

#[inline]
fn fill_left(mut gen: u64, mut pro: u64, step: u32) -> Bitboard {
    gen |= pro & (gen << step);
    pro &= pro << step;
    gen |= pro & (gen << (2 * step));
    pro &= pro << (2 * step);
    gen |= pro & (gen << (4 * step));
    Bitboard(gen)
}

#[inline]
fn fill_right(mut gen: u64, mut pro: u64, step: u32) -> Bitboard {
    gen |= pro & (gen >> step);
    pro &= pro >> step;
    gen |= pro & (gen >> (2 * step));
    pro &= pro >> (2 * step);
    gen |= pro & (gen >> (4 * step));
    Bitboard(gen)
}

/// Occluded fill toward rank 8.
#[inline]
pub fn north_occluded(gen: Bitboard, pro: Bitboard) -> Bitboard {
    fill_left(gen.0, pro.0, 8)
}

/// Occluded fill toward rank 1.
#[inline]
pub fn south_occluded(gen: Bitboard, pro: Bitboard) -> Bitboard {
    fill_right(gen.0, pro.0, 8)
}

/// Occluded fill toward the h file.
#[inline]
pub fn east_occluded(gen: Bitboard, pro: Bitboard) -> Bitboard {
    fill_left(gen.0, pro.0 & Bitboard::NOT_A_FILE.0, 1)
}

/// Occluded fill toward the a file.
#[inline]
pub fn west_occluded(gen: Bitboard, pro: Bitboard) -> Bitboard {
    fill_right(gen.0, pro.0 & Bitboard::NOT_H_FILE.0, 1)
}

/// Occluded fill toward h8.
#[inline]
pub fn north_east_occluded(gen: Bitboard, pro: Bitboard) -> Bitboard {
    fill_left(gen.0, pro.0 & Bitboard::NOT_A_FILE.0, 9)
}

/// Occluded fill toward a8.
#[inline]
pub fn north_west_occluded(gen: Bitboard, pro: Bitboard) -> Bitboard {
    fill_left(gen.0, pro.0 & Bitboard::NOT_H_FILE.0, 7)
}

/// Occluded fill toward h1.
#[inline]
pub fn south_east_occluded(gen: Bitboard, pro: Bitboard) -> Bitboard {
    fill_right(gen.0, pro.0 & Bitboard::NOT_A_FILE.0, 7)
}

/// Occluded fill toward a1.
#[inline]
pub fn south_west_occluded(gen: Bitboard, pro: Bitboard) -> Bitboard {
    fill_right(gen.0, pro.0 & Bitboard::NOT_H_FILE.0, 9)
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

    /// Walks a ray one square at a time; the reference for the doubling fill.
    fn naive_fill(dir: Direction, gen: Bitboard, pro: Bitboard) -> Bitboard {
        let mut result = gen;
        let mut frontier = gen;
        loop {
            frontier = dir.shift(frontier) & pro;
            if frontier.is_empty() {
                return result;
            }
            result |= frontier;
        }
    }

    #[test]
    fn open_board_rays() {
        let a1 = bb(&["a1"]);
        assert_eq!(north_occluded(a1, !Bitboard::EMPTY), Bitboard::FILE_A);
        assert_eq!(east_occluded(a1, !Bitboard::EMPTY), Bitboard::RANK_1);
        assert_eq!(north_east_occluded(a1, !Bitboard::EMPTY).count(), 8);
        assert!(north_east_occluded(a1, !Bitboard::EMPTY).contains(Square::from_algebraic("h8").unwrap()));
    }

    #[test]
    fn fill_stops_before_blocker() {
        let a1 = bb(&["a1"]);
        let empty = !bb(&["a1", "a4"]);
        let fill = north_occluded(a1, empty);
        assert_eq!(fill, bb(&["a1", "a2", "a3"]));
        assert_eq!(Direction::North.shift(fill), bb(&["a2", "a3", "a4"]));
    }

    #[test]
    fn horizontal_fill_does_not_wrap() {
        let g4 = bb(&["g4"]);
        assert_eq!(east_occluded(g4, !Bitboard::EMPTY), bb(&["g4", "h4"]));
        let b4 = bb(&["b4"]);
        assert_eq!(west_occluded(b4, !Bitboard::EMPTY), bb(&["a4", "b4"]));
    }

    #[test]
    fn diagonal_fill_does_not_wrap() {
        let g2 = bb(&["g2"]);
        assert_eq!(north_east_occluded(g2, !Bitboard::EMPTY), bb(&["g2", "h3"]));
        assert_eq!(south_east_occluded(g2, !Bitboard::EMPTY), bb(&["g2", "h1"]));
        let b7 = bb(&["b7"]);
        assert_eq!(north_west_occluded(b7, !Bitboard::EMPTY), bb(&["b7", "a8"]));
        assert_eq!(south_west_occluded(b7, !Bitboard::EMPTY), bb(&["b7", "a6"]));
    }

    #[test]
    fn matches_naive_walk() {
        let blockers = bb(&["c3", "f6", "d7", "b5", "g2", "e4"]);
        let pro = !blockers;
        for gen in [bb(&["d4"]), bb(&["a1", "h8"]), bb(&["h1", "a8", "e5"])] {
            for dir in Direction::ALL {
                assert_eq!(
                    dir.occluded_fill(gen, pro),
                    naive_fill(dir, gen, pro),
                    "{dir:?} from {gen:?}"
                );
            }
        }
    }
}
