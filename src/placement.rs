//! Placing a single word into the puzzle grids.
//!
//! Every attempt picks a random line for the word, checks it against the solution grid and only
//! then writes the letters, so a word is either placed completely or not at all.

use rand::Rng;

use crate::grid::{Grid, SENTINEL};

/// How many randomized attempts a word gets before it is left out of the puzzle.
pub const ATTEMPTS_PER_WORD: usize = 100;

/// The line a word is placed along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right along a row.
    Row,

    /// Top to bottom along a column.
    Column,

    /// Top-left to bottom-right along a diagonal.
    Diagonal,
}

impl Orientation {
    /// All orientations, in the order [`Orientation::random`] draws from.
    pub const ALL: [Orientation; 3] = [Orientation::Row, Orientation::Column, Orientation::Diagonal];

    /// Returns a uniformly random orientation.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// The (row, column) offset between consecutive cells of the line.
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Row => (0, 1),
            Orientation::Column => (1, 0),
            Orientation::Diagonal => (1, 1),
        }
    }
}

/// How far a diagonal word may reach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DiagonalBounds {
    /// Diagonals follow the same bounds as rows and columns: any word no longer than the grid fits,
    /// and every start that keeps the word inside the grid can be chosen.
    #[default]
    Corrected,

    /// Diagonal words must be strictly shorter than the grid and never touch the last possible
    /// start cell. Matches puzzles made by earlier versions of this tool.
    Legacy,
}

impl DiagonalBounds {
    /// The largest start row (and column) for a diagonal word of length `len`, or `None` if the word
    /// can't be placed diagonally at all.
    fn max_start(self, size: usize, len: usize) -> Option<usize> {
        match self {
            DiagonalBounds::Corrected => size.checked_sub(len),
            DiagonalBounds::Legacy => size.checked_sub(len)?.checked_sub(1),
        }
    }
}

/// Where a word's letters sit in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSpan {
    /// The top-most, left-most cell the word covers, as (row, column).
    pub start: (usize, usize),

    /// The number of letters in the word.
    pub len: usize,

    /// The line the word lies along.
    pub orientation: Orientation,

    /// Whether the word reads backwards along its line, so its last letter sits on `start`.
    pub reversed: bool,
}

impl WordSpan {
    /// Creates a new [WordSpan].
    pub fn new(start: (usize, usize), len: usize, orientation: Orientation, reversed: bool) -> Self {
        Self {
            start,
            len,
            orientation,
            reversed,
        }
    }

    /// Returns the coordinates of the word's letters, first letter first.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (row_step, column_step) = self.orientation.step();

        (0..self.len)
            .map(|letter| {
                let offset = if self.reversed {
                    self.len - 1 - letter
                } else {
                    letter
                };

                (
                    self.start.0 + offset * row_step,
                    self.start.1 + offset * column_step,
                )
            })
            .collect()
    }

    /// Reads the word back out of `grid`.
    pub fn read(&self, grid: &Grid) -> String {
        grid.read_cells(self.cells())
    }

    /// Whether the span stays inside a `size` x `size` grid.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.cells()
            .iter()
            .all(|&(row, column)| row < size && column < size)
    }
}

/// Writes words into a display grid and its solution grid.
///
/// The solution grid decides whether a placement is allowed: a cell holding the [`SENTINEL`] takes any
/// letter, a cell holding a letter only takes that same letter again.
#[derive(Debug)]
pub struct Placer<'g> {
    display: &'g mut Grid,
    solution: &'g mut Grid,
    diagonal_bounds: DiagonalBounds,
}

impl<'g> Placer<'g> {
    /// Creates a placer over two grids of the same size.
    pub fn new(display: &'g mut Grid, solution: &'g mut Grid, diagonal_bounds: DiagonalBounds) -> Self {
        debug_assert_eq!(display.size(), solution.size());

        Self {
            display,
            solution,
            diagonal_bounds,
        }
    }

    /// Places `word` with up to [`ATTEMPTS_PER_WORD`] random attempts, each with a fresh orientation
    /// and position. Returns the span the word ended up in, or `None` if every attempt failed.
    ///
    /// Words must be sanitized: anything other than 'a' to 'z' is never placed.
    pub fn place<R: Rng + ?Sized>(&mut self, word: &str, rng: &mut R) -> Option<WordSpan> {
        if !is_placeable(word) {
            log::debug!("refusing to place {:?}: not all lowercase letters", word);
            return None;
        }

        for attempt in 1..=ATTEMPTS_PER_WORD {
            let orientation = Orientation::random(rng);

            if let Some(span) = self.try_place(word, orientation, rng) {
                log::debug!("placed {:?} after {} attempt(s): {:?}", word, attempt, span);
                return Some(span);
            }
        }

        None
    }

    /// Makes a single attempt at placing `word` along a random line of the given orientation, in a
    /// random direction. Nothing is written unless the whole word fits and consists only of
    /// 'a' to 'z'.
    pub fn try_place<R: Rng + ?Sized>(
        &mut self,
        word: &str,
        orientation: Orientation,
        rng: &mut R,
    ) -> Option<WordSpan> {
        if !is_placeable(word) {
            log::trace!("{:?} has characters outside 'a'..='z'", word);
            return None;
        }

        let letters: Vec<char> = word.chars().collect();

        let Some(span) = self.random_span(letters.len(), orientation, rng) else {
            log::trace!("{:?} does not fit along a {:?}", word, orientation);
            return None;
        };

        if !self.fits(&span, &letters) {
            log::trace!("{:?} conflicts with placed letters at {:?}", word, span);
            return None;
        }

        for (coord, &ch) in span.cells().into_iter().zip(&letters) {
            self.display.set(coord, ch);
            self.solution.set(coord, ch);
        }

        Some(span)
    }

    fn random_span<R: Rng + ?Sized>(
        &self,
        len: usize,
        orientation: Orientation,
        rng: &mut R,
    ) -> Option<WordSpan> {
        let size = self.solution.size();

        let (start, reversed) = match orientation {
            Orientation::Row => {
                let row = rng.gen_range(0..size);
                let reversed = rng.gen_bool(0.5);
                let column = rng.gen_range(0..=size.checked_sub(len)?);

                ((row, column), reversed)
            }
            Orientation::Column => {
                let column = rng.gen_range(0..size);
                let reversed = rng.gen_bool(0.5);
                let row = rng.gen_range(0..=size.checked_sub(len)?);

                ((row, column), reversed)
            }
            Orientation::Diagonal => {
                let reversed = rng.gen_bool(0.5);
                let max_start = self.diagonal_bounds.max_start(size, len)?;

                (
                    (rng.gen_range(0..=max_start), rng.gen_range(0..=max_start)),
                    reversed,
                )
            }
        };

        Some(WordSpan::new(start, len, orientation, reversed))
    }

    fn fits(&self, span: &WordSpan, letters: &[char]) -> bool {
        span.cells()
            .into_iter()
            .zip(letters)
            .all(|(coord, &ch)| {
                let existing = self.solution[coord];
                existing == SENTINEL || existing == ch
            })
    }
}

/// Only lowercase ASCII letters may enter the grids, which keeps them apart from the [`SENTINEL`].
fn is_placeable(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn blank(size: usize) -> (Grid, Grid) {
        (Grid::filled(size, 'z'), Grid::filled(size, SENTINEL))
    }

    #[test]
    fn span_cells_follow_direction() {
        let forward = WordSpan::new((1, 2), 3, Orientation::Row, false);
        assert_eq!(forward.cells(), vec![(1, 2), (1, 3), (1, 4)]);

        let backward = WordSpan::new((0, 1), 3, Orientation::Column, true);
        assert_eq!(backward.cells(), vec![(2, 1), (1, 1), (0, 1)]);

        let diagonal = WordSpan::new((1, 0), 2, Orientation::Diagonal, false);
        assert_eq!(diagonal.cells(), vec![(1, 0), (2, 1)]);
        assert!(diagonal.in_bounds(3));
        assert!(!diagonal.in_bounds(2));
    }

    #[test]
    fn placed_word_reads_back_from_both_grids() {
        let mut rng = StdRng::seed_from_u64(1);

        for orientation in Orientation::ALL {
            let (mut display, mut solution) = blank(6);
            let span = Placer::new(&mut display, &mut solution, DiagonalBounds::Corrected)
                .try_place("word", orientation, &mut rng)
                .expect("an empty grid accepts any word that fits");

            assert_eq!(span.orientation, orientation);
            assert!(span.in_bounds(6));
            assert_eq!(span.read(&solution), "word");
            assert_eq!(span.read(&display), "word");
        }
    }

    #[test]
    fn conflicting_attempt_writes_nothing() {
        let (mut display, mut solution) = blank(3);
        for row in 0..3 {
            for column in 0..3 {
                solution.set((row, column), 'q');
            }
        }
        let before = (display.clone(), solution.clone());

        let mut rng = StdRng::seed_from_u64(2);
        let mut placer = Placer::new(&mut display, &mut solution, DiagonalBounds::Corrected);

        for orientation in Orientation::ALL {
            assert_eq!(placer.try_place("abc", orientation, &mut rng), None);
        }
        assert_eq!(placer.place("abc", &mut rng), None);

        assert_eq!((display, solution), before);
    }

    #[test]
    fn crossing_on_matching_letter_is_allowed() {
        let (mut display, mut solution) = blank(3);
        // every cell already holds the only letter of the word
        for row in 0..3 {
            for column in 0..3 {
                solution.set((row, column), 'a');
            }
        }

        let mut rng = StdRng::seed_from_u64(3);
        let span = Placer::new(&mut display, &mut solution, DiagonalBounds::Corrected)
            .try_place("aaa", Orientation::Column, &mut rng);

        assert!(span.is_some());
    }

    #[test]
    fn word_longer_than_grid_never_fits() {
        let (mut display, mut solution) = blank(3);
        let mut rng = StdRng::seed_from_u64(4);
        let mut placer = Placer::new(&mut display, &mut solution, DiagonalBounds::Corrected);

        assert_eq!(placer.place("abcd", &mut rng), None);
        assert_eq!(solution, Grid::filled(3, SENTINEL));
    }

    #[test]
    fn diagonal_bounds() {
        assert_eq!(DiagonalBounds::Corrected.max_start(5, 5), Some(0));
        assert_eq!(DiagonalBounds::Corrected.max_start(5, 3), Some(2));
        assert_eq!(DiagonalBounds::Legacy.max_start(5, 5), None);
        assert_eq!(DiagonalBounds::Legacy.max_start(5, 3), Some(1));
        assert_eq!(DiagonalBounds::Corrected.max_start(2, 3), None);

        let mut rng = StdRng::seed_from_u64(5);

        let (mut display, mut solution) = blank(4);
        let span = Placer::new(&mut display, &mut solution, DiagonalBounds::Corrected)
            .try_place("full", Orientation::Diagonal, &mut rng)
            .unwrap();
        assert_eq!(span.start, (0, 0));

        let (mut display, mut solution) = blank(4);
        let span = Placer::new(&mut display, &mut solution, DiagonalBounds::Legacy)
            .try_place("full", Orientation::Diagonal, &mut rng);
        assert_eq!(span, None);
    }

    #[test]
    fn legacy_diagonal_never_uses_last_start() {
        let mut rng = StdRng::seed_from_u64(6);

        for _ in 0..200 {
            let (mut display, mut solution) = blank(5);
            let span = Placer::new(&mut display, &mut solution, DiagonalBounds::Legacy)
                .try_place("abc", Orientation::Diagonal, &mut rng)
                .unwrap();

            assert!(span.start.0 <= 1 && span.start.1 <= 1);
        }
    }

    #[test]
    fn unsanitized_words_are_refused() {
        let mut rng = StdRng::seed_from_u64(1);
        let (mut display, mut solution) = blank(3);
        let before = (display.clone(), solution.clone());
        let mut placer = Placer::new(&mut display, &mut solution, DiagonalBounds::Corrected);

        for word in ["X1", "Cat", "a b", "é"] {
            for orientation in Orientation::ALL {
                assert_eq!(placer.try_place(word, orientation, &mut rng), None);
            }
            assert_eq!(placer.place(word, &mut rng), None);
        }

        assert_eq!((display, solution), before);
    }
}
