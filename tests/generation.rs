use std::collections::HashMap;

use rand::{rngs::StdRng, SeedableRng};
use word_search_generator::{
    DiagonalBounds, Grid, Orientation, Puzzle, PuzzleConfig, SENTINEL,
};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|word| word.to_string()).collect()
}

fn check_puzzle(puzzle: &Puzzle) {
    let size = puzzle.size();
    let display = puzzle.display();
    let solution = puzzle.solution();

    assert_eq!(display.size(), size);
    assert_eq!(solution.size(), size);

    for row in 0..size {
        for column in 0..size {
            let shown = display.get(row, column).unwrap();
            let solved = solution.get(row, column).unwrap();

            assert!(shown.is_ascii_lowercase(), "display cell {:?}", shown);
            assert!(solved == SENTINEL || solved == shown, "solution cell {:?}", solved);
        }
    }

    let mut covered: HashMap<(usize, usize), char> = HashMap::new();

    for placement in puzzle.placements() {
        let span = placement.span;

        assert!(span.in_bounds(size));
        assert_eq!(span.read(solution), placement.word);
        assert_eq!(span.read(display), placement.word);

        for (coord, ch) in span.cells().into_iter().zip(placement.word.chars()) {
            let previous = *covered.entry(coord).or_insert(ch);
            assert_eq!(previous, ch, "crossing at {:?} disagrees", coord);
        }
    }

    // only placed words leave letters in the solution
    let letters = solution.rows().flatten().filter(|&&ch| ch != SENTINEL).count();
    assert_eq!(letters, covered.len());
}

#[test]
fn generated_puzzles_hold_their_words() {
    let list = words(&[
        "nap",
        "sleep",
        "pillow",
        "eggplant",
        "distraction",
        "sandwich",
        "anklet",
        "rats",
        "skater",
    ]);

    for seed in 0..50 {
        for diagonal_bounds in [DiagonalBounds::Corrected, DiagonalBounds::Legacy] {
            let config = PuzzleConfig {
                words: &list,
                diagonal_bounds,
            };
            let puzzle = Puzzle::generate(&config, &mut StdRng::seed_from_u64(seed));

            assert_eq!(puzzle.size(), 13);
            assert_eq!(puzzle.placements().len() + puzzle.unplaced().len(), list.len());
            check_puzzle(&puzzle);
        }
    }
}

#[test]
fn crowded_grid_never_corrupts_placed_words() {
    // many long words relative to the grid, so plenty of attempts collide
    let list = words(&["abcd", "efgh", "ijkl", "mnop", "qrst", "uvwx", "yzab", "cdef", "ghij"]);

    for seed in 0..50 {
        let puzzle = Puzzle::from_words(&list, &mut StdRng::seed_from_u64(seed));

        assert_eq!(puzzle.size(), 6);
        check_puzzle(&puzzle);
    }
}

#[test]
fn cat_lies_on_a_line_of_the_solution() {
    for seed in 0..20 {
        let puzzle = Puzzle::from_words(&words(&["cat"]), &mut StdRng::seed_from_u64(seed));
        let solution = puzzle.solution();
        assert_eq!(puzzle.size(), 5);

        let mut lines: Vec<String> = Vec::new();
        for i in 0..5 {
            lines.push((0..5).map(|j| solution[(i, j)]).collect());
            lines.push((0..5).map(|j| solution[(j, i)]).collect());
        }
        for offset in 0..5 {
            lines.push((0..5 - offset).map(|i| solution[(i + offset, i)]).collect());
            lines.push((0..5 - offset).map(|i| solution[(i, i + offset)]).collect());
        }

        let found = lines
            .iter()
            .any(|line| line.contains("cat") || line.contains("tac"));
        assert!(found, "seed {}: cat not found in\n{}", seed, solution);
    }
}

#[test]
fn every_orientation_gets_used() {
    let list = words(&["ant", "bee", "cow", "doe", "elk", "fox"]);
    let mut seen = Vec::new();

    for seed in 0..30 {
        let puzzle = Puzzle::from_words(&list, &mut StdRng::seed_from_u64(seed));
        for placement in puzzle.placements() {
            seen.push((placement.span.orientation, placement.span.reversed));
        }
    }

    for orientation in Orientation::ALL {
        for reversed in [false, true] {
            assert!(seen.contains(&(orientation, reversed)), "{:?} {}", orientation, reversed);
        }
    }
}

#[test]
fn grids_survive_a_trip_through_a_file() {
    let list = words(&["ferris", "crab", "borrow"]);
    let puzzle = Puzzle::from_words(&list, &mut StdRng::seed_from_u64(2024));

    let dir = std::env::temp_dir();
    let puzzle_path = dir.join(format!("word_search_puzzle_{}.txt", std::process::id()));
    let solution_path = dir.join(format!("word_search_solution_{}.txt", std::process::id()));

    puzzle.display().write_to_file(&puzzle_path).unwrap();
    puzzle.solution().write_to_file(&solution_path).unwrap();

    let text = std::fs::read_to_string(&puzzle_path).unwrap();
    assert_eq!(text, puzzle.display().render());
    assert_eq!(text.lines().count(), puzzle.size());
    assert!(text.lines().all(|line| line.len() == puzzle.size() * 2));

    assert_eq!(&Grid::read_from_file(&puzzle_path).unwrap(), puzzle.display());
    assert_eq!(&Grid::read_from_file(&solution_path).unwrap(), puzzle.solution());

    std::fs::remove_file(puzzle_path).unwrap();
    std::fs::remove_file(solution_path).unwrap();
}
