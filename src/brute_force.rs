//! Exhaustive enumeration.
//!
//! Tries every ordering of cities `1..n` after city 0. Exponential, so
//! it refuses instances above [`MAX_CITIES`]; it exists to cross-check
//! the Branch and Bound optimum on small instances.

use crate::bnb::START;
use crate::error::TspError;
use crate::matrix::{checked_add, Cost, CostMatrix};
use crate::tour::Tour;

/// Largest instance [`solve`] accepts.
pub const MAX_CITIES: usize = 10;

/// Finds a minimum-cost tour by trying every permutation.
///
/// Among equal-cost tours the lexicographically smallest city order wins.
pub fn solve(matrix: &CostMatrix) -> Result<Tour, TspError> {
    let size = matrix.size();
    if size > MAX_CITIES {
        return Err(TspError::TooLarge {
            size,
            max: MAX_CITIES,
        });
    }

    let mut search = Enumeration {
        matrix,
        order: vec![START],
        visited: vec![false; size],
        best: None,
    };
    search.visited[START] = true;
    search.extend(0)?;

    let (_, order) = search.best.ok_or(TspError::NoTour)?;
    Tour::from_cities(&order, matrix)
}

struct Enumeration<'a> {
    matrix: &'a CostMatrix,
    order: Vec<usize>,
    visited: Vec<bool>,
    best: Option<(Cost, Vec<usize>)>,
}

impl Enumeration<'_> {
    fn extend(&mut self, cost: Cost) -> Result<(), TspError> {
        let size = self.matrix.size();
        let current = self.order[self.order.len() - 1];

        if self.order.len() == size {
            if self.matrix.has_edge(current, START) {
                let total = checked_add(cost, self.matrix.get(current, START))?;
                if self.best.as_ref().is_none_or(|(best, _)| total < *best) {
                    self.best = Some((total, self.order.clone()));
                }
            }
            return Ok(());
        }

        for next in 0..size {
            if self.visited[next] || !self.matrix.has_edge(current, next) {
                continue;
            }
            let cost = checked_add(cost, self.matrix.get(current, next))?;
            self.visited[next] = true;
            self.order.push(next);
            self.extend(cost)?;
            self.order.pop();
            self.visited[next] = false;
        }
        Ok(())
    }
}
