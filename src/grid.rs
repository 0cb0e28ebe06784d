//! The square letter grid shared by the puzzle and its solution.

use std::{fmt::Display, fs, ops::Index, path::Path};

use array2d::Array2D;
use rand::Rng;

use crate::error::{Error, Result};

/// Marks a solution cell that no word covers yet. It is never a lowercase letter.
pub const SENTINEL: char = 'X';

/// A square grid of characters, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<char>,
}

impl Grid {
    /// Creates a `size` x `size` grid with every cell set to `ch`.
    pub fn filled(size: usize, ch: char) -> Self {
        Self {
            cells: Array2D::filled_with(ch, size, size),
        }
    }

    /// Creates a `size` x `size` grid where each cell is picked independently and uniformly from 'a' to 'z'.
    pub fn random_letters<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Self {
            cells: Array2D::filled_by_row_major(|| random_letter(&mut *rng), size, size),
        }
    }

    /// The number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.cells.num_rows()
    }

    /// Gets the character at the given coordinate, returning [`Option::None`] if it is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        self.cells.get(row, column).copied()
    }

    pub(crate) fn set(&mut self, (row, column): (usize, usize), ch: char) {
        self.cells[(row, column)] = ch;
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &char> + '_> + '_ {
        self.cells.rows_iter()
    }

    /// Reads the characters at the given coordinates into a string.
    pub fn read_cells<I>(&self, coords: I) -> String
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        coords.into_iter().map(|coord| self[coord]).collect()
    }

    /// Renders the grid as text: every cell is followed by a single space and every row ends
    /// with a newline.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Parses text in the format produced by [`Grid::render`]. Blank lines are ignored and
    /// cells may be separated by any amount of whitespace.
    ///
    /// Any single character is accepted as a cell, so both display and solution grids parse. The
    /// contents are not checked against 'a' to 'z' or the [`SENTINEL`].
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<char>> = Vec::new();

        for (row, line) in text.lines().filter(|line| !line.trim().is_empty()).enumerate() {
            let cells = line
                .split_whitespace()
                .enumerate()
                .map(|(column, token)| {
                    let mut chars = token.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => Ok(ch),
                        _ => Err(Error::InvalidCell {
                            row,
                            column,
                            token: token.to_owned(),
                        }),
                    }
                })
                .collect::<Result<Vec<_>>>()?;

            rows.push(cells);
        }

        if rows.is_empty() {
            return Err(Error::EmptyGrid);
        }

        let expected = rows.len();
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(Error::NotSquare {
                row,
                expected,
                found: cells.len(),
            });
        }

        let mut grid = Self::filled(expected, SENTINEL);
        for (row, cells) in rows.into_iter().enumerate() {
            for (column, ch) in cells.into_iter().enumerate() {
                grid.set((row, column), ch);
            }
        }

        Ok(grid)
    }

    /// Writes the rendered grid to `path`, replacing any existing file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render()).map_err(|e| Error::io(path, e))
    }

    /// Reads a grid previously written with [`Grid::write_to_file`].
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(&text)
    }
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    (b'a' + rng.gen_range(0..26u8)) as char
}

impl Index<(usize, usize)> for Grid {
    type Output = char;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.cells[index]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for &ch in row {
                write!(f, "{} ", ch)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
