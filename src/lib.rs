//! Exact solver for the asymmetric Traveling Salesman Problem.
//!
//! Finds a minimum-cost Hamiltonian cycle over a small, fully specified
//! cost matrix using best-first Branch and Bound with row/column matrix
//! reduction as the lower bound. Intended for tens of cities; the search
//! is exact, never approximate.
//!
//! - **Matrix**: [`matrix::CostMatrix`] with the [`matrix::NO_EDGE`]
//!   sentinel for missing edges, and the reduction lower bound.
//! - **Branch and Bound**: [`bnb::BnbRunner`] expands partial tours
//!   ([`bnb::SearchNode`]) in order of their bound and stops at the first
//!   complete tour, which is optimal.
//! - **Tours**: [`tour::Tour`] holds the closed edge sequence, with
//!   validation and rendering.
//! - **Brute force**: [`brute_force::solve`] enumerates every tour of a
//!   small instance, for cross-checking.
//! - **Instances**: [`generate::generate`] builds seeded random matrices.
//!
//! # Examples
//!
//! ```
//! use u_tsp::bnb::{BnbConfig, BnbRunner};
//! use u_tsp::matrix::{CostMatrix, NO_EDGE};
//!
//! const INF: u64 = NO_EDGE;
//! let matrix = CostMatrix::from_rows(vec![
//!     vec![INF, 10, 8, 9, 7],
//!     vec![10, INF, 10, 5, 6],
//!     vec![8, 10, INF, 8, 9],
//!     vec![9, 5, 8, INF, 6],
//!     vec![7, 6, 9, 6, INF],
//! ])?;
//!
//! let result = BnbRunner::run(&matrix, &BnbConfig::default())?;
//! assert_eq!(result.cost, 34);
//! assert_eq!(result.tour.to_string(), "0 -> 2 -> 3 -> 1 -> 4 -> 0");
//! # Ok::<(), u_tsp::TspError>(())
//! ```

pub mod bnb;
pub mod brute_force;
mod error;
pub mod generate;
pub mod matrix;
pub mod tour;

pub use error::TspError;
