//! Branch and Bound (BnB) for the asymmetric TSP.
//!
//! An exact best-first search over partial tours. Each node carries a
//! reduced copy of the cost matrix; the reduction gives an admissible
//! lower bound, and the frontier always expands the node with the
//! smallest bound. The first complete tour popped is optimal.
//!
//! # Key Components
//!
//! - [`SearchNode`]: a partial tour with its reduced matrix and bound
//! - [`BnbRunner`]: the search loop, with optional cancellation
//! - [`BnbConfig`]: iteration budget, tie-break and pruning switches
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//!   Salesman Problem"
//! - Lawler & Wood (1966), "Branch-and-Bound Methods: A Survey"

mod config;
mod frontier;
mod node;
mod runner;

pub use config::{BnbConfig, TieBreak};
pub use node::SearchNode;
pub use runner::{BnbResult, BnbRunner};

/// Every tour starts and ends here.
pub const START: usize = 0;
