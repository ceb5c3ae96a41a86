//! Per-cell state transition rule.

use crate::cell::{CellState, Neighborhood};
use crate::params::SimulationParameters;
use crate::wind;
use rand::Rng;

/// Advances a single cell by one generation.
///
/// A pure function of the current state, its 3x3 window, the parameters and
/// a single uniform draw in `[0, 1)` where a transition is probabilistic:
/// fire burns out to ash in exactly one step, ash regrows into a tree with
/// the regrowth probability, a tree next to fire ignites with the
/// wind-directional probability, and an untouched tree ignites spontaneously
/// with the ignition probability. No other transitions exist.
pub fn evolve_cell<R: Rng + ?Sized>(
    state: CellState,
    neighborhood: &Neighborhood,
    parameters: &SimulationParameters,
    rng: &mut R,
) -> CellState {
    match state {
        CellState::Fire => CellState::Ash,
        CellState::Ash => {
            if rng.random::<f64>() < parameters.tree_regrowth_probability() {
                CellState::Tree
            } else {
                CellState::Ash
            }
        }
        CellState::Tree => {
            if neighborhood.any_burning() {
                let ignition = wind::spread_probability(
                    neighborhood,
                    parameters.wind_speed(),
                    parameters.wind_direction(),
                );
                if rng.random::<f64>() < ignition {
                    CellState::Fire
                } else {
                    CellState::Tree
                }
            } else if rng.random::<f64>() < parameters.spontaneous_ignition_probability() {
                CellState::Fire
            } else {
                CellState::Tree
            }
        }
    }
}
