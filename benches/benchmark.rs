use criterion::{criterion_group, criterion_main, Criterion};

use sudoku_play::{Board, PuzzleTemplate, SIZE};
use sudoku_play::constraint::{Constraint, DefaultConstraint};
use sudoku_play::session::Session;

use rand::Rng;
use rand::SeedableRng;

use rand_chacha::ChaCha12Rng;

// Explanation of benchmark classes:
//
// placement checks: Raw constraint queries, every digit in every cell of the
//                   sample board.
// board validation: Whole-board checks, once on a solved board and once on
//                   the untouched sample board.
// session:          Complete plays driven through the session API, once
//                   scripted and once with a pre-generated random edit
//                   sequence.

const EDIT_SEED: u64 = 42;
const RANDOM_EDIT_COUNT: usize = 1000;

const SOLUTION_ROWS: [[usize; SIZE]; SIZE] = [
    [5, 3, 4, 6, 7, 8, 9, 1, 2],
    [6, 7, 2, 1, 9, 5, 3, 4, 8],
    [1, 9, 8, 3, 4, 2, 5, 6, 7],
    [8, 5, 9, 7, 6, 1, 4, 2, 3],
    [4, 2, 6, 8, 5, 3, 7, 9, 1],
    [7, 1, 3, 9, 2, 4, 8, 5, 6],
    [9, 6, 1, 5, 3, 7, 2, 8, 4],
    [2, 8, 7, 4, 1, 9, 6, 3, 5],
    [3, 4, 5, 2, 8, 6, 1, 7, 9]
];

fn sample_board() -> Board {
    Board::from_template(&PuzzleTemplate::sample())
}

fn solved_board() -> Board {
    Board::from_template(&PuzzleTemplate::from_rows(SOLUTION_ROWS).unwrap())
}

fn benchmark_placement_checks(c: &mut Criterion) {
    let board = sample_board();

    c.bench_function("placement checks", |b| b.iter(|| {
        let mut valid = 0;

        for row in 0..SIZE {
            for column in 0..SIZE {
                for number in 1..=SIZE {
                    if DefaultConstraint
                            .check_number(&board, column, row, number) {
                        valid += 1;
                    }
                }
            }
        }

        valid
    }));
}

fn benchmark_board_validation(c: &mut Criterion) {
    let solved = solved_board();
    let sample = sample_board();
    let mut group = c.benchmark_group("board validation");

    group.bench_function("solved",
        |b| b.iter(|| DefaultConstraint.check(&solved)));
    group.bench_function("givens only",
        |b| b.iter(|| DefaultConstraint.check(&sample)));
    group.finish();
}

fn benchmark_scripted_playthrough(c: &mut Criterion) {
    let template = PuzzleTemplate::sample();

    c.bench_function("session scripted playthrough", |b| b.iter(|| {
        let mut session = Session::new(&template, DefaultConstraint);

        for row in 0..SIZE {
            for column in 0..SIZE {
                if session.board().get_cell(column, row).unwrap().is_none() {
                    let digit = SOLUTION_ROWS[row][column].to_string();
                    session.edit_cell(column, row, digit.as_str()).unwrap();
                }
            }
        }

        session.check_solution().solved
    }));
}

fn benchmark_random_edits(c: &mut Criterion) {
    let template = PuzzleTemplate::sample();

    // The edit sequence is generated up front with a fixed seed, so the
    // measured workload is the same in every run.
    let mut rng = ChaCha12Rng::seed_from_u64(EDIT_SEED);
    let edits: Vec<(usize, usize, String)> = (0..RANDOM_EDIT_COUNT)
        .map(|_| {
            let column = rng.gen_range(0..SIZE);
            let row = rng.gen_range(0..SIZE);
            let input = match rng.gen_range(0..10) {
                0 => String::from("x"),
                _ => rng.gen_range(1..=9).to_string()
            };

            (column, row, input)
        })
        .collect();

    c.bench_function("session random edits", |b| b.iter(|| {
        let mut session = Session::new(&template, DefaultConstraint);

        for (column, row, input) in edits.iter() {
            session.edit_cell(*column, *row, input.as_str()).unwrap();
        }

        session.any_conflicts()
    }));
}

criterion_group!(all,
    benchmark_placement_checks,
    benchmark_board_validation,
    benchmark_scripted_playthrough,
    benchmark_random_edits
);

criterion_main!(all);
