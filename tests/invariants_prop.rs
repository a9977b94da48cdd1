//! Property tests for the rules engine.
//!
//! Invariants covered:
//! - A move or rotation either fully applies or leaves the piece untouched.
//! - Legality rejects anything outside the bounds.
//! - Over a random rollout the falling piece always sits on legal cells, game
//!   over means no falling piece, and the counters never go backwards.

use proptest::prelude::*;
use tile_tetris::core::{Board, Game, GameConfig, Piece};
use tile_tetris::types::{Coord, Direction, Intent, PieceKind, Spin};

const INTENTS: [Intent; 5] = [
    Intent::MoveLeft,
    Intent::MoveRight,
    Intent::SoftDrop,
    Intent::RotateCw,
    Intent::RotateCcw,
];

fn obstacle_board(obstacles: &[(i32, i32)]) -> Board {
    let mut board = Board::zero_origin();
    for &(x, y) in obstacles {
        let c = Coord::new(x, y);
        if board.is_cell_free(c) {
            board.commit_cells(&[c], PieceKind::Z);
        }
    }
    board
}

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

proptest! {
    #[test]
    fn move_is_all_or_nothing(
        kind in kind_strategy(),
        x in 1i32..9,
        y in 1i32..19,
        obstacles in prop::collection::vec((0i32..10, 0i32..20), 0..40),
        dir in 0usize..3,
    ) {
        let board = obstacle_board(&obstacles);
        let mut piece = Piece::new(kind, Coord::new(x, y), 1000);
        prop_assume!(board.is_valid(piece.cells()));

        let direction = Direction::ALL[dir];
        let before = piece;
        if piece.try_move(direction, &board) {
            prop_assert_eq!(piece.position(), before.position() + direction.offset());
            prop_assert_eq!(piece.offsets(), before.offsets());
            prop_assert!(board.is_valid(piece.cells()));
        } else {
            prop_assert_eq!(piece, before);
        }
    }

    #[test]
    fn rotation_round_trips_or_changes_nothing(
        kind in kind_strategy(),
        x in 1i32..9,
        y in 1i32..19,
        obstacles in prop::collection::vec((0i32..10, 0i32..20), 0..40),
        clockwise in any::<bool>(),
    ) {
        let board = obstacle_board(&obstacles);
        let mut piece = Piece::new(kind, Coord::new(x, y), 1000);
        prop_assume!(board.is_valid(piece.cells()));

        let spin = if clockwise { Spin::Cw } else { Spin::Ccw };
        let before = piece;
        if piece.rotate(spin, &board) {
            prop_assert!(board.is_valid(piece.cells()));
            prop_assert_eq!(piece.position(), before.position());
            // Turning back always fits: the starting cells were legal.
            prop_assert!(piece.rotate(spin.reverse(), &board));
        }
        prop_assert_eq!(piece, before);
    }

    #[test]
    fn cells_outside_bounds_are_never_valid(
        x in -30i32..30,
        y in -30i32..30,
    ) {
        let board = Board::new();
        let inside = board.bounds().contains(Coord::new(x, y));
        prop_assert_eq!(board.is_valid([Coord::new(x, y)]), inside);
    }

    #[test]
    fn rollout_respects_core_invariants(
        seed in any::<u32>(),
        steps in 1usize..400,
        script in prop::collection::vec((0usize..5, 0u32..1500), 1..64),
    ) {
        let mut game = Game::new(GameConfig::default().with_seed(seed)).unwrap();
        game.start();

        let mut pieces_locked = 0;
        let mut lines_cleared = 0;
        for i in 0..steps {
            let (intent, delta) = script[i % script.len()];
            let report = game.advance(delta, &[INTENTS[intent]]);

            prop_assert_eq!(report.game_over, game.is_game_over());
            match game.active() {
                Some(piece) => {
                    prop_assert!(!game.is_game_over());
                    prop_assert!(game.board().is_valid(piece.cells()));
                }
                None => prop_assert!(game.is_game_over()),
            }

            prop_assert!(game.pieces_locked() >= pieces_locked);
            prop_assert!(game.lines_cleared() >= lines_cleared);
            pieces_locked = game.pieces_locked();
            lines_cleared = game.lines_cleared();

            for y in 0..game.board().height() {
                prop_assert!(!game.board().is_row_full(game.board().bounds().y_min + y));
            }

            if game.is_game_over() {
                break;
            }
        }
    }
}
