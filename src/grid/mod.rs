//! Grid exercises: rectangular character grids and flood fill.
//!
//! [`Grid`] is a row-major rectangular grid of `char` cells with fallible
//! constructors (ragged input is rejected, not silently truncated).
//! [`num_islands`] counts 4-connected components of land cells.
//!
//! # Examples
//!
//! ```
//! use practicar::grid::{num_islands, Grid};
//!
//! let grid = Grid::from_rows(&["110", "010", "001"]).expect("rows have equal length");
//! assert_eq!(num_islands(&grid), 2);
//! ```

use crate::error::{PracticarError, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A rectangular character grid (row-major storage).
///
/// # Examples
///
/// ```
/// use practicar::grid::Grid;
///
/// let g = Grid::from_rows(&["10", "01"]).expect("rows have equal length");
/// assert_eq!(g.shape(), (2, 2));
/// assert_eq!(g.get(0, 0), '1');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a grid from rows of characters.
    ///
    /// All rows must have the same character count; an empty row set is a
    /// valid 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns an error if any row's length differs from the first row's.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let count = row.chars().count();
            if count != cols {
                return Err(PracticarError::ShapeMismatch {
                    expected: format!("{cols} cells per row"),
                    actual: format!("{count} in row {i}"),
                });
            }
            cells.extend(row.chars());
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Creates a grid from a flat cell vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell count doesn't match rows * cols.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<char>) -> Result<Self> {
        if cells.len() != rows * cols {
            return Err(PracticarError::shape_mismatch(
                "rows*cols",
                rows * cols,
                cells.len(),
            ));
        }
        Ok(Self { cells, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns true when the grid has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Gets the cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> char {
        assert!(row < self.rows && col < self.cols, "cell index out of bounds");
        self.cells[row * self.cols + col]
    }
}

/// Counts the islands in a grid of land (`'1'`) and water cells.
///
/// An island is a maximal set of land cells connected 4-directionally
/// (up, down, left, right — diagonal adjacency does not connect). Any
/// cell other than `'1'` is water. Each island is flooded iteratively
/// with an explicit queue, so deep or snake-shaped islands cannot
/// overflow the stack.
///
/// # Examples
///
/// ```
/// use practicar::grid::{num_islands, Grid};
///
/// let g = Grid::from_rows(&[
///     "11000",
///     "11000",
///     "00100",
///     "00011",
/// ]).expect("rows have equal length");
/// assert_eq!(num_islands(&g), 3);
/// ```
#[must_use]
pub fn num_islands(grid: &Grid) -> usize {
    const LAND: char = '1';

    if grid.is_empty() {
        return 0;
    }

    let (rows, cols) = grid.shape();
    let mut visited = vec![false; rows * cols];
    let mut islands = 0;
    let mut queue = VecDeque::new();

    for start_row in 0..rows {
        for start_col in 0..cols {
            if visited[start_row * cols + start_col] || grid.get(start_row, start_col) != LAND {
                continue;
            }

            // new component: flood everything reachable from here
            islands += 1;
            visited[start_row * cols + start_col] = true;
            queue.push_back((start_row, start_col));

            while let Some((row, col)) = queue.pop_front() {
                let neighbors = [
                    (row.wrapping_sub(1), col),
                    (row + 1, col),
                    (row, col.wrapping_sub(1)),
                    (row, col + 1),
                ];
                for (r, c) in neighbors {
                    if r < rows && c < cols && !visited[r * cols + c] && grid.get(r, c) == LAND {
                        visited[r * cols + c] = true;
                        queue.push_back((r, c));
                    }
                }
            }
        }
    }

    islands
}
