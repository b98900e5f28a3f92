//! Branch and Bound configuration.

/// Ordering among frontier entries with equal bounds.
///
/// The bounding argument does not care which of several equal-cost
/// entries is expanded first; this only decides which optimal tour is
/// reported when there are several, and how fast the search gets there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The entry pushed first is popped first.
    #[default]
    InsertionOrder,

    /// Prefer the deeper partial tour, then insertion order.
    ///
    /// Reaches complete tours sooner when many nodes share a bound.
    DeepestFirst,
}

/// Configuration for the Branch and Bound solver.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::{BnbConfig, TieBreak};
///
/// let config = BnbConfig::default()
///     .with_max_iterations(10_000)
///     .with_tie_break(TieBreak::DeepestFirst);
/// assert_eq!(config.max_iterations, 10_000);
/// assert!(config.prune_dead_ends);
/// ```
#[derive(Debug, Clone)]
pub struct BnbConfig {
    /// Maximum number of frontier pops. 0 = no limit.
    pub max_iterations: usize,

    /// Tie-break among equal-cost frontier entries.
    pub tie_break: TieBreak,

    /// Discard children that can no longer be completed: some city that
    /// still has to leave has no open outgoing edge, or some city that
    /// still has to be entered has no open incoming edge.
    pub prune_dead_ends: bool,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            max_iterations: 0,
            tie_break: TieBreak::default(),
            prune_dead_ends: true,
        }
    }
}

impl BnbConfig {
    /// Sets the iteration budget (0 = unlimited).
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Enables or disables dead-end pruning.
    pub fn with_prune_dead_ends(mut self, prune: bool) -> Self {
        self.prune_dead_ends = prune;
        self
    }
}
