//! Construction-time validation failures.

use thiserror::Error;

/// Rejected configuration input.
///
/// Out-of-range parameters are never clamped: a silently adjusted value
/// would skew the statistical behavior of the automaton without any
/// visible failure, so construction fails instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConfiguration {
    /// Wind speed outside `[0, 1]` (NaN included).
    #[error("wind speed must be within [0, 1], got {0}")]
    WindSpeed(f64),

    /// Wind direction outside `[0, 360)` degrees (NaN included).
    #[error("wind direction must be within [0, 360) degrees, got {0}")]
    WindDirection(f64),

    /// A probability parameter outside `[0, 1]` (NaN included).
    #[error("{name} must be within [0, 1], got {value}")]
    Probability {
        /// Which parameter was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Grid construction with a zero dimension.
    #[error("grid dimensions must be non-zero, got {rows}x{cols}")]
    EmptyGrid {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Non-rectangular row input to [`crate::Grid::from_rows`].
    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}
