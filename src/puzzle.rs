//! Building a complete puzzle from a word list.

use rand::Rng;

use crate::{
    error::{Error, Result},
    grid::{Grid, SENTINEL},
    placement::{DiagonalBounds, Placer, WordSpan},
    words,
};

/// The number of rows and columns added around the longest word.
pub const MARGIN: usize = 2;

/// Returns the side length of the grid for `words`: the longest word plus [`MARGIN`].
pub fn grid_size<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .map(|word| word.as_ref().chars().count())
        .max()
        .unwrap_or(0)
        + MARGIN
}

/// The configuration for a puzzle. See [`Puzzle::generate`] for details.
#[derive(Clone, Copy, Debug)]
pub struct PuzzleConfig<'a> {
    /// The raw words to hide, in placement order. They are sanitized before use.
    pub words: &'a [String],

    /// How far diagonal words may reach.
    pub diagonal_bounds: DiagonalBounds,
}

impl<'a> PuzzleConfig<'a> {
    /// A configuration with the default bounds for the given words.
    pub fn new(words: &'a [String]) -> Self {
        Self {
            words,
            diagonal_bounds: DiagonalBounds::default(),
        }
    }
}

/// A word that made it into the puzzle, together with where it was put.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The sanitized word.
    pub word: String,

    /// The cells the word covers.
    pub span: WordSpan,
}

/// A generated word search: the grid shown to the solver and the solution grid marking where each
/// word lies.
#[derive(Clone, Debug)]
pub struct Puzzle {
    display: Grid,
    solution: Grid,
    placements: Vec<Placement>,
    unplaced: Vec<String>,
}

impl Puzzle {
    /// Generates a puzzle for the given configuration.
    ///
    /// The words are sanitized first (see [`words::sanitize_all`]), then the grid is sized so the
    /// longest word has room to spare. The display grid starts out as random letters and the
    /// solution grid as [`SENTINEL`]s. Words are placed one at a time in input order, so earlier words
    /// constrain later ones. A word that can't be placed within its attempt budget is left out and
    /// reported by [`Puzzle::unplaced`].
    pub fn generate<R: Rng + ?Sized>(config: &PuzzleConfig<'_>, rng: &mut R) -> Self {
        let words = words::sanitize_all(config.words);
        let size = grid_size(&words);

        let mut display = Grid::random_letters(size, rng);
        let mut solution = Grid::filled(size, SENTINEL);

        let mut placements = Vec::with_capacity(words.len());
        let mut unplaced = Vec::new();

        let mut placer = Placer::new(&mut display, &mut solution, config.diagonal_bounds);

        for word in words {
            match placer.place(&word, rng) {
                Some(span) => placements.push(Placement { word, span }),
                None => {
                    log::warn!("could not place {:?} in a {}x{} grid", word, size, size);
                    unplaced.push(word);
                }
            }
        }

        log::info!(
            "generated {}x{} puzzle with {} word(s), {} unplaced",
            size,
            size,
            placements.len(),
            unplaced.len()
        );

        Self {
            display,
            solution,
            placements,
            unplaced,
        }
    }

    /// Generates a puzzle for `words` with the default configuration.
    pub fn from_words<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> Self {
        Self::generate(&PuzzleConfig::new(words), rng)
    }

    /// The number of rows and columns of both grids.
    pub fn size(&self) -> usize {
        self.display.size()
    }

    /// The grid shown to the solver. Every cell holds a lowercase letter.
    pub fn display(&self) -> &Grid {
        &self.display
    }

    /// The solution grid. Cells covered by a word hold its letter, all others hold [`SENTINEL`].
    pub fn solution(&self) -> &Grid {
        &self.solution
    }

    /// The words that were placed, in input order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The words that ran out of attempts and are not in the puzzle, in input order.
    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }

    /// Whether every word was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns the puzzle if every word was placed, or [`Error::UnplacedWords`] otherwise.
    pub fn into_complete(self) -> Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(Error::UnplacedWords(self.unplaced))
        }
    }
}
