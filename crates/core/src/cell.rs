//! Cell states and the 3x3 neighborhood window.

use serde::{Deserialize, Serialize};

/// State of a single lattice cell. Every cell is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Living fuel, may ignite.
    Tree,
    /// Burning this generation; turns to ash on the next.
    Fire,
    /// Burned out or bare ground, may regrow.
    Ash,
}

/// Ephemeral 3x3 window of cell states centered on a target cell.
///
/// Extracted fresh from the grid each step. The target sits at offset
/// (0, 0) and its eight neighbors at row/column offsets in {-1, 0, 1};
/// wrap-around extraction guarantees every slot is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    cells: [[CellState; 3]; 3],
}

impl Neighborhood {
    /// Wraps a pre-extracted window, `cells[1][1]` being the target cell.
    pub fn new(cells: [[CellState; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Cell at row offset `di` and column offset `dj`, both in {-1, 0, 1}.
    pub fn at(&self, di: i32, dj: i32) -> CellState {
        debug_assert!((-1..=1).contains(&di) && (-1..=1).contains(&dj));
        self.cells[(di + 1) as usize][(dj + 1) as usize]
    }

    /// The target cell itself.
    pub fn center(&self) -> CellState {
        self.cells[1][1]
    }

    /// True when any cell of the window is burning.
    pub fn any_burning(&self) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|&cell| cell == CellState::Fire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_address_the_window() {
        let mut cells = [[CellState::Ash; 3]; 3];
        cells[0][2] = CellState::Fire;
        cells[1][1] = CellState::Tree;
        let window = Neighborhood::new(cells);

        assert_eq!(window.at(-1, 1), CellState::Fire);
        assert_eq!(window.at(0, 0), CellState::Tree);
        assert_eq!(window.center(), CellState::Tree);
    }

    #[test]
    fn any_burning_scans_the_whole_window() {
        let quiet = Neighborhood::new([[CellState::Tree; 3]; 3]);
        assert!(!quiet.any_burning());

        let mut cells = [[CellState::Ash; 3]; 3];
        cells[2][0] = CellState::Fire;
        assert!(Neighborhood::new(cells).any_burning());
    }
}
