//! Toroidal 2D lattice of cell states.

use crate::cell::{CellState, Neighborhood};
use crate::error::InvalidConfiguration;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maps an index offset onto the torus: `-1 -> len - 1`, `len -> 0`,
/// in-range values unchanged.
///
/// Neighborhood extraction only ever steps one cell past an edge, but the
/// `rem_euclid` form keeps the function total over any offset.
pub fn wrap_index(i: isize, len: usize) -> usize {
    i.rem_euclid(len as isize) as usize
}

/// Fixed-size rectangular lattice with toroidal boundary conditions.
///
/// Cells are stored flat in row-major order; `(i, j)` addresses row `i`,
/// column `j`, and single-step lookups past an edge wrap to the opposite
/// edge. Dimensions never change after construction, and the stepper
/// replaces a grid wholesale rather than mutating it while reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Rows in the reference configuration.
    pub const DEFAULT_ROWS: usize = 70;
    /// Columns in the reference configuration.
    pub const DEFAULT_COLS: usize = 100;
    /// Probability that a freshly seeded cell starts as a tree.
    pub const INITIAL_TREE_COVERAGE: f64 = 0.4;

    /// Uniform grid filled with `state`.
    ///
    /// # Errors
    /// Returns [`InvalidConfiguration::EmptyGrid`] when either dimension
    /// is zero.
    pub fn filled(
        rows: usize,
        cols: usize,
        state: CellState,
    ) -> Result<Self, InvalidConfiguration> {
        if rows == 0 || cols == 0 {
            return Err(InvalidConfiguration::EmptyGrid { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![state; rows * cols],
        })
    }

    /// Random initial population: each cell independently a tree with
    /// probability [`Grid::INITIAL_TREE_COVERAGE`], ash otherwise. Fire
    /// only ever appears through stepping.
    ///
    /// # Errors
    /// Returns [`InvalidConfiguration::EmptyGrid`] when either dimension
    /// is zero.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, InvalidConfiguration> {
        let mut grid = Self::filled(rows, cols, CellState::Ash)?;
        for cell in &mut grid.cells {
            if rng.random::<f64>() < Self::INITIAL_TREE_COVERAGE {
                *cell = CellState::Tree;
            }
        }
        Ok(grid)
    }

    /// Builds a grid from nested rows, mostly for scenario setup.
    ///
    /// # Errors
    /// Returns [`InvalidConfiguration::EmptyGrid`] for empty input and
    /// [`InvalidConfiguration::RaggedRow`] when row lengths differ.
    pub fn from_rows(rows: &[Vec<CellState>]) -> Result<Self, InvalidConfiguration> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(InvalidConfiguration::EmptyGrid {
                rows: row_count,
                cols: col_count,
            });
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != col_count {
                return Err(InvalidConfiguration::RaggedRow {
                    row: index,
                    expected: col_count,
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            rows: row_count,
            cols: col_count,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Flat row-major view of the cells.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        i * self.cols + j
    }

    /// State at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> CellState {
        self.cells[self.index(i, j)]
    }

    /// Overwrites the state at row `i`, column `j`. Used for scenario
    /// setup; the stepper never mutates a grid it is reading from.
    pub fn set(&mut self, i: usize, j: usize, state: CellState) {
        let index = self.index(i, j);
        self.cells[index] = state;
    }

    /// The 3x3 window centered at `(i, j)`, with wrap-around on both axes.
    /// Never indexes out of bounds; every offset has a value on the torus.
    pub fn neighborhood(&self, i: usize, j: usize) -> Neighborhood {
        let mut window = [[CellState::Ash; 3]; 3];
        for di in -1..=1_isize {
            for dj in -1..=1_isize {
                let wi = wrap_index(i as isize + di, self.rows);
                let wj = wrap_index(j as isize + dj, self.cols);
                window[(di + 1) as usize][(dj + 1) as usize] = self.get(wi, wj);
            }
        }
        Neighborhood::new(window)
    }

    /// Share of cells in `state`, as a percentage of the whole grid.
    /// Zero for an empty grid.
    pub fn population_percentage(&self, state: CellState) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        let count = self.cells.iter().filter(|&&cell| cell == state).count();
        count as f64 * 100.0 / self.cells.len() as f64
    }
}
