//! Synchronous grid stepping and the stateful simulation driver.

use crate::cell::CellState;
use crate::error::InvalidConfiguration;
use crate::evolve::evolve_cell;
use crate::grid::Grid;
use crate::params::SimulationParameters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Share of the grid in each state after a step, in percent.
///
/// Every cell falls into exactly one category, so the three values sum to
/// 100 within floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationStats {
    /// Percentage of ash cells.
    pub ash: f64,
    /// Percentage of tree cells.
    pub tree: f64,
    /// Percentage of burning cells.
    pub fire: f64,
}

impl PopulationStats {
    /// Aggregate percentages over a grid snapshot.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            ash: grid.population_percentage(CellState::Ash),
            tree: grid.population_percentage(CellState::Tree),
            fire: grid.population_percentage(CellState::Fire),
        }
    }
}

/// Applies the evolution rule across the whole grid synchronously.
///
/// Every next state is computed from the incoming snapshot and written into
/// an independently assembled grid, so no cell observes a neighbor's
/// already-updated state within the same step (classic cellular-automaton
/// semantics). Total over any well-formed grid and valid parameters.
pub fn step<R: Rng + ?Sized>(
    grid: &Grid,
    parameters: &SimulationParameters,
    rng: &mut R,
) -> (Grid, PopulationStats) {
    let mut next = grid.clone();
    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            let neighborhood = grid.neighborhood(i, j);
            let state = evolve_cell(grid.get(i, j), &neighborhood, parameters, rng);
            next.set(i, j, state);
        }
    }
    let stats = PopulationStats::from_grid(&next);
    (next, stats)
}

/// Construction-time configuration for [`FireSimulation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid rows.
    pub rows: usize,
    /// Grid columns.
    pub cols: usize,
    /// RNG seed; drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Initial simulation parameters.
    pub parameters: SimulationParameters,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: Grid::DEFAULT_ROWS,
            cols: Grid::DEFAULT_COLS,
            seed: None,
            parameters: SimulationParameters::default(),
        }
    }
}

/// Stateful driver owning the current grid, parameters and RNG.
///
/// External callers control the cadence: one `step` per timer tick, `reset`
/// to start over, and pause is simply not calling `step`. Steps never
/// overlap; the grid reference is swapped wholesale once a step commits, so
/// no locking is ever needed.
pub struct FireSimulation {
    grid: Grid,
    parameters: SimulationParameters,
    rng: StdRng,
    seed: u64,
    current_step: u64,
}

impl FireSimulation {
    /// Seeds the initial grid (40% tree coverage) from the configured RNG.
    ///
    /// # Errors
    /// Returns [`InvalidConfiguration`] when the grid dimensions are zero.
    pub fn new(config: SimulationConfig) -> Result<Self, InvalidConfiguration> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::random(config.rows, config.cols, &mut rng)?;
        info!(
            rows = config.rows,
            cols = config.cols,
            seed,
            "initialized simulation grid"
        );
        Ok(Self {
            grid,
            parameters: config.parameters,
            rng,
            seed,
            current_step: 0,
        })
    }

    /// Advances one generation and replaces the grid snapshot.
    pub fn step(&mut self) -> PopulationStats {
        let (next, stats) = step(&self.grid, &self.parameters, &mut self.rng);
        self.grid = next;
        self.current_step += 1;
        debug!(
            step = self.current_step,
            ash = stats.ash,
            tree = stats.tree,
            fire = stats.fire,
            "advanced one generation"
        );
        stats
    }

    /// Discards the current run: reseeds the RNG from the original seed and
    /// regrows a fresh grid, so a reset run replays the original exactly.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.grid = Grid::random(self.grid.rows(), self.grid.cols(), &mut self.rng)
            .expect("dimensions validated at construction");
        self.current_step = 0;
        info!(seed = self.seed, "simulation reset");
    }

    /// Swaps in new parameters, effective from the next step.
    pub fn set_parameters(&mut self, parameters: SimulationParameters) {
        self.parameters = parameters;
    }

    /// Current grid snapshot.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Parameters applied to the next step.
    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// Number of committed steps since creation or the last reset.
    pub fn current_step(&self) -> u64 {
        self.current_step
    }

    /// The seed this run is reproducible from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_reflect_uniform_grids() {
        let grid = Grid::filled(3, 3, CellState::Tree).unwrap();
        let stats = PopulationStats::from_grid(&grid);
        assert_eq!(stats.tree, 100.0);
        assert_eq!(stats.ash, 0.0);
        assert_eq!(stats.fire, 0.0);
    }

    #[test]
    fn default_config_matches_reference_dimensions() {
        let config = SimulationConfig::default();
        assert_eq!(config.rows, 70);
        assert_eq!(config.cols, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn stepping_advances_the_counter() {
        let mut sim = FireSimulation::new(SimulationConfig {
            rows: 8,
            cols: 8,
            seed: Some(1),
            parameters: SimulationParameters::default(),
        })
        .unwrap();
        sim.step();
        sim.step();
        assert_eq!(sim.current_step(), 2);
    }

    #[test]
    fn zero_dimensions_fail_construction() {
        let config = SimulationConfig {
            rows: 0,
            cols: 10,
            seed: Some(1),
            parameters: SimulationParameters::default(),
        };
        assert!(FireSimulation::new(config).is_err());
    }
}
