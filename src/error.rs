//! Error taxonomy for the solver.

use thiserror::Error;

/// Errors produced while building instances, solving, or checking tours.
///
/// Every error is terminal: the search is deterministic and exhaustive,
/// so nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TspError {
    /// A matrix row does not have one entry per city.
    #[error("cost matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Fewer than two cities.
    #[error("a tour needs at least 2 cities, got {found}")]
    TooFewCities { found: usize },

    /// The start city cannot leave.
    #[error("city {city} has no outgoing edge")]
    NoOutgoingEdge { city: usize },

    /// The frontier emptied before any complete tour was reached.
    #[error("no tour exists: every branch dead-ended before visiting all cities")]
    NoTour,

    /// A checked cost addition overflowed the cost type.
    #[error("cost overflow while accumulating tour bound")]
    Overflow,

    /// The configured iteration budget ran out.
    #[error("iteration limit of {limit} reached before a tour was proven optimal")]
    IterationLimit { limit: usize },

    /// The cancellation flag was raised.
    #[error("search cancelled after {iterations} iterations")]
    Cancelled { iterations: usize },

    /// A tour failed validation or evaluation.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The instance is too large for exhaustive enumeration.
    #[error("instance of {size} cities exceeds the enumeration limit of {max}")]
    TooLarge { size: usize, max: usize },
}
