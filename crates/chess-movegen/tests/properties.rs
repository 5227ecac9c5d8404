//! Property tests over random piece placements.

use chess_core::{Color, ColorFilter, Piece, Square};
use chess_movegen::{evaluate, generate_moves, piece_moves, Bitboard, Position};
use proptest::prelude::*;

fn position() -> impl Strategy<Value = Position> {
    let cell = prop_oneof![
        4 => Just(None),
        1 => (0usize..6, any::<bool>()).prop_map(|(p, white)| {
            let color = if white { Color::White } else { Color::Black };
            Some((Piece::ALL[p], color))
        }),
    ];
    proptest::collection::vec(cell, 64).prop_map(|cells| {
        let mut position = Position::empty();
        for (index, cell) in cells.into_iter().enumerate() {
            if let Some((piece, color)) = cell {
                let square = Square::from_index(index as u8).unwrap();
                position.put(square, piece, color);
            }
        }
        position
    })
}

proptest! {
    #[test]
    fn shifts_never_wrap_files(bits in any::<u64>()) {
        let bb = Bitboard::new(bits);
        prop_assert!((bb.east() & Bitboard::FILE_A).is_empty());
        prop_assert!((bb.north_east() & Bitboard::FILE_A).is_empty());
        prop_assert!((bb.south_east() & Bitboard::FILE_A).is_empty());
        prop_assert!((bb.west() & Bitboard::FILE_H).is_empty());
        prop_assert!((bb.north_west() & Bitboard::FILE_H).is_empty());
        prop_assert!((bb.south_west() & Bitboard::FILE_H).is_empty());
    }

    #[test]
    fn shifts_keep_every_bit_that_stays_on_board(bits in any::<u64>()) {
        let bb = Bitboard::new(bits);
        prop_assert_eq!(bb.north().count(), (bb & !Bitboard::RANK_8).count());
        prop_assert_eq!(bb.south().count(), (bb & !Bitboard::RANK_1).count());
        prop_assert_eq!(bb.east().count(), (bb & !Bitboard::FILE_H).count());
        prop_assert_eq!(bb.west().count(), (bb & !Bitboard::FILE_A).count());
    }

    #[test]
    fn union_matches_color_masks(position in position()) {
        let white = position.occupied_by(Color::White);
        let black = position.occupied_by(Color::Black);
        prop_assert_eq!(position.all_pieces(), white | black);
        prop_assert!((white & black).is_empty());
        prop_assert!(position.validate().is_ok());
    }

    #[test]
    fn description_round_trips(position in position()) {
        let desc = position.to_description();
        let reparsed = Position::from_description(&desc).unwrap();
        prop_assert_eq!(reparsed, position);
    }

    #[test]
    fn both_is_white_then_black(position in position()) {
        let mut expected = generate_moves(&position, ColorFilter::White);
        expected.extend(generate_moves(&position, ColorFilter::Black));
        prop_assert_eq!(generate_moves(&position, ColorFilter::Both), expected);
    }

    #[test]
    fn moves_start_on_own_pieces_and_never_land_on_them(position in position()) {
        for color in Color::ALL {
            let own = position.occupied_by(color);
            for mv in generate_moves(&position, color.into()) {
                prop_assert!(own.contains(mv.from()), "{} does not start on a {} piece", mv, color);
                prop_assert!(!own.contains(mv.to()), "{} lands on a {} piece", mv, color);
                prop_assert_ne!(mv.from(), mv.to());
            }
        }
    }

    #[test]
    fn move_list_covers_each_piece_mask(position in position()) {
        for color in Color::ALL {
            let moves = generate_moves(&position, color.into());
            for piece in Piece::ALL {
                let targets = moves
                    .iter()
                    .filter(|mv| position.piece_at(mv.from()) == Some((piece, color)))
                    .fold(Bitboard::EMPTY, |acc, mv| acc | Bitboard::from_square(mv.to()));
                prop_assert_eq!(targets, piece_moves(&position, piece, color.into()));
            }
        }
    }

    #[test]
    fn both_filter_is_union_of_colors(position in position()) {
        for piece in Piece::ALL {
            let both = piece_moves(&position, piece, ColorFilter::Both);
            let white = piece_moves(&position, piece, ColorFilter::White);
            let black = piece_moves(&position, piece, ColorFilter::Black);
            prop_assert_eq!(both, white | black);
        }
    }

    #[test]
    fn generation_does_not_mutate_position(position in position()) {
        let before = position;
        let _ = generate_moves(&position, ColorFilter::Both);
        let _ = evaluate(&position, Color::White);
        prop_assert_eq!(position, before);
    }

    #[test]
    fn evaluation_is_antisymmetric(position in position()) {
        prop_assert_eq!(evaluate(&position, Color::White), -evaluate(&position, Color::Black));
    }
}
