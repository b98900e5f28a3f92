//! Branch and Bound execution loop.
//!
//! # Algorithm
//!
//! 1. Reduce the input matrix; the reduction is the root's lower bound
//! 2. Repeatedly pop the live node with the smallest bound:
//!    a. If it has visited every city, close the tour and stop
//!    b. Otherwise branch on every open edge out of its current city,
//!       bound each child and push it
//! 3. An empty frontier means no tour exists
//!
//! Every child's bound is at least its parent's, so the first complete
//! node popped is optimal.
//!
//! # Reference
//!
//! Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//! Salesman Problem", *Operations Research* 11(6), 972-989.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};

use super::config::BnbConfig;
use super::frontier::Frontier;
use super::node::SearchNode;
use super::START;
use crate::error::TspError;
use crate::matrix::{Cost, CostMatrix};
use crate::tour::Tour;

/// Result of a Branch and Bound run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbResult {
    /// The optimal tour, starting and ending at city 0.
    pub tour: Tour,

    /// Cost of the optimal tour.
    pub cost: Cost,

    /// Number of frontier pops.
    pub iterations: usize,

    /// Number of nodes pushed onto the frontier, root included.
    pub nodes_generated: usize,

    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// Executes best-first Branch and Bound.
pub struct BnbRunner;

impl BnbRunner {
    /// Solves `matrix` to optimality.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::bnb::{BnbConfig, BnbRunner};
    /// use u_tsp::matrix::{CostMatrix, NO_EDGE};
    ///
    /// let m = CostMatrix::from_rows(vec![
    ///     vec![NO_EDGE, 2, 1, NO_EDGE],
    ///     vec![2, NO_EDGE, 4, 3],
    ///     vec![1, 4, NO_EDGE, 2],
    ///     vec![NO_EDGE, 3, 2, NO_EDGE],
    /// ])
    /// .unwrap();
    ///
    /// let result = BnbRunner::run(&m, &BnbConfig::default()).unwrap();
    /// assert_eq!(result.cost, 8);
    /// assert_eq!(result.tour.cities(), vec![0, 1, 3, 2]);
    /// ```
    pub fn run(matrix: &CostMatrix, config: &BnbConfig) -> Result<BnbResult, TspError> {
        Self::run_with_cancel(matrix, config, None)
    }

    /// Runs Branch and Bound with an optional cancellation token.
    ///
    /// The token is checked once per iteration, after popping a node and
    /// before expanding it.
    pub fn run_with_cancel(
        matrix: &CostMatrix,
        config: &BnbConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BnbResult, TspError> {
        let size = matrix.size();
        if matrix.out_degree(START) == 0 {
            return Err(TspError::NoOutgoingEdge { city: START });
        }

        let root = SearchNode::root(matrix)?;
        debug!(
            "branch and bound over {size} cities, root bound {}",
            root.cost()
        );
        if config.prune_dead_ends && root.is_dead_end() {
            debug!("root is a dead end, no tour exists");
            return Err(TspError::NoTour);
        }

        let mut frontier = Frontier::new(config.tie_break);
        frontier.push(root);

        let mut iterations = 0usize;
        let mut nodes_generated = 1usize;
        let mut max_frontier = 1usize;
        let mut overflowed = false;

        while let Some(node) = frontier.pop() {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                debug!("iteration limit {} reached", config.max_iterations);
                return Err(TspError::IterationLimit {
                    limit: config.max_iterations,
                });
            }
            iterations += 1;

            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(TspError::Cancelled { iterations });
                }
            }

            trace!(
                "iteration {iterations}: city {} level {} bound {} frontier {}",
                node.vertex(),
                node.level(),
                node.cost(),
                frontier.len()
            );

            if node.is_complete() {
                let cost = node.cost();
                let tour = node.into_tour();
                debug_assert!(tour.validate(size).is_ok());
                debug!(
                    "optimal tour of cost {cost} after {iterations} iterations, \
                     {nodes_generated} nodes generated"
                );
                return Ok(BnbResult {
                    tour,
                    cost,
                    iterations,
                    nodes_generated,
                    max_frontier,
                });
            }

            for to in node.successors() {
                let child = match node.child(to) {
                    Ok(Some(child)) => child,
                    Ok(None) => continue,
                    // no representable tour extends it
                    Err(TspError::Overflow) => {
                        trace!("bound of {} -> {to} overflows, dropped", node.vertex());
                        overflowed = true;
                        continue;
                    }
                    Err(e) => return Err(e),
                };
                debug_assert!(child.cost() >= node.cost());
                if config.prune_dead_ends && child.is_dead_end() {
                    continue;
                }
                frontier.push(child);
                nodes_generated += 1;
            }
            max_frontier = max_frontier.max(frontier.len());
        }

        if overflowed {
            debug!("frontier exhausted after {iterations} iterations, bounds overflowed");
            return Err(TspError::Overflow);
        }
        debug!("frontier exhausted after {iterations} iterations, no tour exists");
        Err(TspError::NoTour)
    }
}
