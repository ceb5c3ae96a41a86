//! Wind-directional fire-spread probability model.
//!
//! A tree next to a burning cell catches fire with a probability that blends
//! a wind-independent base rate with the alignment between the fire's
//! approach direction and the wind vector. Higher wind speed makes the
//! alignment matter more and the baseline less; at speed 0 spread is
//! certain regardless of direction.

use crate::cell::{CellState, Neighborhood};
use crate::grid::Grid;
use nalgebra::Vector2;

/// Re-maps the compass convention of the wind control (0 degrees = up,
/// growing clockwise) into the coordinate system of the offset vectors.
pub fn normalize_wind_direction(degrees: f64) -> f64 {
    (90.0 + 180.0 - degrees).rem_euclid(360.0)
}

/// Probability that fire spreads from a single burning neighbor at relative
/// offset (`dx`, `dy`) onto the target cell.
///
/// `dx` is the column offset and `dy` the row offset, each in {-1, 0, 1}
/// and never both zero. `wind_direction` is the compass direction of the
/// wind; `wind_speed` in `[0, 1]` is the blend weight between the
/// wind-independent base rate and the fully wind-steered rate.
pub fn spread_probability_from_offset(
    dx: i32,
    dy: i32,
    wind_speed: f64,
    wind_direction: f64,
) -> f64 {
    let wind_rad = normalize_wind_direction(wind_direction).to_radians();
    // Row indices grow downward, so the y component flips sign relative to
    // conventional y-up trigonometric orientation.
    let wind_vector = Vector2::new(wind_rad.cos(), -wind_rad.sin());
    let offset = Vector2::new(f64::from(dx), f64::from(dy));
    // Length is 1 orthogonally, sqrt(2) diagonally; never zero.
    let direction_vector = offset / offset.norm();
    // Cosine similarity mapped from [-1, 1] into [0, 1].
    let directional_influence = f64::midpoint(direction_vector.dot(&wind_vector), 1.0);
    (1.0 - wind_speed) + directional_influence * wind_speed
}

/// Probability that the center cell of `neighborhood` catches fire.
///
/// Evaluates the offset model for every burning neighbor and takes the
/// MAXIMUM (not the sum): a tree catches from its most favorably aligned
/// burning neighbor. Zero when nothing in the window burns.
pub fn spread_probability(
    neighborhood: &Neighborhood,
    wind_speed: f64,
    wind_direction: f64,
) -> f64 {
    let mut max_probability: f64 = 0.0;
    for di in -1..=1_i32 {
        for dj in -1..=1_i32 {
            if di == 0 && dj == 0 {
                continue; // the target cell is not its own neighbor
            }
            if neighborhood.at(di, dj) == CellState::Fire {
                let probability =
                    spread_probability_from_offset(dj, di, wind_speed, wind_direction);
                max_probability = max_probability.max(probability);
            }
        }
    }
    max_probability
}

/// Standalone exposure of the model at an arbitrary grid position, for
/// callers painting a wind-influence overlay.
pub fn spread_probability_at(
    grid: &Grid,
    i: usize,
    j: usize,
    wind_speed: f64,
    wind_direction: f64,
) -> f64 {
    spread_probability(&grid.neighborhood(i, j), wind_speed, wind_direction)
}

/// Canonical 3x3 grid for the wind-influence overlay: a single burning cell
/// surrounded by trees. Painting each ring cell with
/// [`spread_probability_at`] visualizes how the wind steers ignition.
pub fn wind_influence_grid() -> Grid {
    let mut grid = Grid::filled(3, 3, CellState::Tree).expect("3x3 dimensions are non-zero");
    grid.set(1, 1, CellState::Fire);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const OFFSETS: [(i32, i32); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1),
        (-1, 0),
        (1, 0),
        (-1, 1),
        (0, 1),
        (1, 1),
    ];

    #[test]
    fn calm_wind_spreads_with_certainty() {
        for direction in [0.0, 45.0, 90.0, 180.0, 270.0, 359.0] {
            for (dx, dy) in OFFSETS {
                assert_eq!(spread_probability_from_offset(dx, dy, 0.0, direction), 1.0);
            }
        }
    }

    #[test]
    fn aligned_neighbor_stays_certain_as_wind_grows() {
        // Compass direction 0 maps to the (0, 1) offset vector, so the
        // directional influence is exactly 1 and the blend stays pinned.
        let mut previous = spread_probability_from_offset(0, 1, 0.0, 0.0);
        for speed in [0.25, 0.5, 0.75, 1.0] {
            let probability = spread_probability_from_offset(0, 1, speed, 0.0);
            assert!(probability >= previous);
            assert_relative_eq!(probability, 1.0, max_relative = 1e-12);
            previous = probability;
        }
    }

    #[test]
    fn opposed_neighbor_probability_falls_with_wind_speed() {
        // The (0, -1) offset points against the same wind: influence 0,
        // so the probability is the bare base rate 1 - speed.
        let mut previous = spread_probability_from_offset(0, -1, 0.0, 0.0);
        assert_eq!(previous, 1.0);
        for speed in [0.25, 0.5, 0.75, 1.0] {
            let probability = spread_probability_from_offset(0, -1, speed, 0.0);
            assert!(probability < previous);
            assert_relative_eq!(probability, 1.0 - speed, epsilon = 1e-12);
            previous = probability;
        }
    }

    #[test]
    fn no_burning_neighbors_means_zero() {
        let quiet = Neighborhood::new([[CellState::Tree; 3]; 3]);
        assert_eq!(spread_probability(&quiet, 0.5, 120.0), 0.0);
    }

    #[test]
    fn burning_center_is_ignored() {
        let mut cells = [[CellState::Tree; 3]; 3];
        cells[1][1] = CellState::Fire;
        let window = Neighborhood::new(cells);
        assert_eq!(spread_probability(&window, 0.5, 120.0), 0.0);
    }

    #[test]
    fn maximum_rule_over_multiple_neighbors() {
        let mut cells = [[CellState::Tree; 3]; 3];
        cells[2][1] = CellState::Fire; // offset (0, 1), aligned with wind 0
        cells[0][1] = CellState::Fire; // offset (0, -1), opposed
        let window = Neighborhood::new(cells);

        let combined = spread_probability(&window, 0.8, 0.0);
        let aligned = spread_probability_from_offset(0, 1, 0.8, 0.0);
        let opposed = spread_probability_from_offset(0, -1, 0.8, 0.0);

        assert_eq!(combined, aligned.max(opposed));
        assert!(combined > opposed);
    }

    #[test]
    fn direction_normalization_wraps_into_range() {
        assert_eq!(normalize_wind_direction(0.0), 270.0);
        assert_eq!(normalize_wind_direction(90.0), 180.0);
        assert_eq!(normalize_wind_direction(270.0), 0.0);
        assert!((0.0..360.0).contains(&normalize_wind_direction(359.5)));
    }

    #[test]
    fn influence_grid_has_a_burning_core() {
        let grid = wind_influence_grid();
        assert_eq!(grid.get(1, 1), CellState::Fire);
        assert_eq!(grid.get(0, 0), CellState::Tree);

        // The core has no burning neighbor; every ring cell sees it.
        assert_eq!(spread_probability_at(&grid, 1, 1, 0.5, 90.0), 0.0);
        assert!(spread_probability_at(&grid, 0, 1, 0.5, 90.0) > 0.0);
    }
}
