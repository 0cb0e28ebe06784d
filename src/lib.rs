#![warn(missing_docs)]

//! # Word search generator
//!
//! Generates square word search puzzles. Each puzzle has a display grid, where the hidden words are
//! surrounded by random filler letters, and a solution grid that only shows the hidden words.
//!
//! Words go along rows, columns or the top-left to bottom-right diagonal, forwards or backwards.
//! Words may cross where they share a letter. Every random choice comes from a caller-supplied
//! [`rand::Rng`], so seeding it reproduces a puzzle exactly.
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use word_search_generator::Puzzle;
//!
//! let words = vec![String::from("cat"), String::from("dog")];
//! let puzzle = Puzzle::from_words(&words, &mut StdRng::seed_from_u64(1));
//!
//! assert_eq!(puzzle.size(), 5);
//! print!("{}", puzzle.display());
//! ```

pub mod error;
pub mod grid;
pub mod logging;
pub mod placement;
pub mod puzzle;
pub mod session;
pub mod words;

pub use error::{Error, Result};
pub use grid::{Grid, SENTINEL};
pub use placement::{DiagonalBounds, Orientation, Placer, WordSpan, ATTEMPTS_PER_WORD};
pub use puzzle::{grid_size, Placement, Puzzle, PuzzleConfig};
pub use session::Session;
