//! Forest-Fire Cellular Automaton Core Library
//!
//! Simulates forest-fire propagation on a toroidal 2D lattice. Each
//! generation, fire burns out to ash, ash regrows into trees, and trees
//! ignite from burning neighbors with a probability steered by wind
//! direction and speed.
//!
//! The library exposes the grid model, the wind-directional
//! spread-probability model, the per-cell evolution rule and a synchronous
//! whole-grid stepper, plus a stateful [`FireSimulation`] driver. Rendering,
//! charting and tick scheduling are the caller's concern: drive
//! [`FireSimulation::step`] from a timer and consume the grid snapshot and
//! population percentages it produces. All randomness is injected through
//! [`rand::Rng`] bounds, so seeded runs are fully reproducible.

pub mod cell;
pub mod error;
pub mod evolve;
pub mod grid;
pub mod params;
pub mod simulation;
pub mod wind;

pub use cell::{CellState, Neighborhood};
pub use error::InvalidConfiguration;
pub use evolve::evolve_cell;
pub use grid::{wrap_index, Grid};
pub use params::SimulationParameters;
pub use simulation::{step, FireSimulation, PopulationStats, SimulationConfig};
pub use wind::{
    normalize_wind_direction, spread_probability, spread_probability_at,
    spread_probability_from_offset, wind_influence_grid,
};
