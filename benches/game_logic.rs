use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tile_tetris::core::{Board, Game, GameConfig, Piece};
use tile_tetris::types::{Coord, Direction, PieceKind, Spin};

fn bench_advance(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default().with_seed(12345)).unwrap();
    game.start();

    c.bench_function("advance_16ms", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.restart();
            }
            game.advance_time(black_box(16));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::zero_origin();
            // Fill bottom 4 rows
            let cells: Vec<Coord> = (0..4)
                .flat_map(|y| (0..10).map(move |x| Coord::new(x, y)))
                .collect();
            board.commit_cells(&cells, PieceKind::I);
            board.clear_completed_lines()
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut board = Board::new();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| board.spawn_next())
    });
}

fn bench_try_move(c: &mut Criterion) {
    let board = Board::zero_origin();
    let mut piece = Piece::new(PieceKind::T, Coord::new(4, 10), 1000);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            piece.try_move(black_box(Direction::Right), &board);
            piece.try_move(black_box(Direction::Left), &board)
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let board = Board::zero_origin();
    let mut piece = Piece::new(PieceKind::T, Coord::new(4, 10), 1000);

    c.bench_function("try_rotate", |b| {
        b.iter(|| piece.rotate(black_box(Spin::Cw), &board))
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
