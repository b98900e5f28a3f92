//! State-space tree nodes.

use super::START;
use crate::error::TspError;
use crate::matrix::{checked_add, reduce, Cost, CostMatrix, NO_EDGE};
use crate::tour::{Edge, Tour};

/// One partial tour in the state-space tree.
///
/// A node at level `k` has taken `k` edges, starting from city 0. Its
/// reduced matrix has every departed row, every entered column and the
/// premature return `(vertex, 0)` closed, and `cost` is a lower bound on
/// every tour that extends `path`.
#[derive(Debug, Clone)]
pub struct SearchNode {
    matrix: CostMatrix,
    path: Vec<Edge>,
    vertex: usize,
    level: usize,
    cost: Cost,
}

impl SearchNode {
    /// Builds the root: the start city, an empty path, and the reduction
    /// bound of the input matrix.
    pub fn root(costs: &CostMatrix) -> Result<Self, TspError> {
        let mut matrix = costs.clone();
        let cost = reduce(&mut matrix)?;
        Ok(Self {
            matrix,
            path: Vec::new(),
            vertex: START,
            level: 0,
            cost,
        })
    }

    /// The reduced matrix.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Edges taken so far, in travel order.
    pub fn path(&self) -> &[Edge] {
        &self.path
    }

    /// City currently occupied.
    pub fn vertex(&self) -> usize {
        self.vertex
    }

    /// Number of edges taken.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Lower bound on any completion of this partial tour.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Whether every city has been visited; only the return edge remains.
    pub fn is_complete(&self) -> bool {
        self.level + 1 == self.matrix.size()
    }

    /// Cities reachable from the current vertex through open edges.
    pub fn successors(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.matrix.size()).filter(move |&to| self.matrix.has_edge(self.vertex, to))
    }

    /// Builds and bounds the child that travels `vertex -> to`.
    ///
    /// Child bound = parent bound + reduced edge cost + reduction of the
    /// child matrix. For the last city the return edge is settled here:
    /// `None` when it is closed, otherwise its reduced cost is added.
    ///
    /// `to` must be one of [`successors`](Self::successors).
    pub fn child(&self, to: usize) -> Result<Option<Self>, TspError> {
        let edge = self.matrix.get(self.vertex, to);
        debug_assert_ne!(edge, NO_EDGE, "edge {} -> {to} is closed", self.vertex);

        let mut child = self.branch(to);
        let mut cost = checked_add(self.cost, edge)?;

        if child.is_complete() {
            let closing = self.matrix.get(to, START);
            if closing == NO_EDGE {
                return Ok(None);
            }
            cost = checked_add(cost, closing)?;
        }

        child.cost = checked_add(cost, reduce(&mut child.matrix)?)?;
        Ok(Some(child))
    }

    /// Whether some city that still has to leave has no open outgoing
    /// edge, or some city that still has to be entered has no open
    /// incoming edge. Such a node has no completion.
    pub fn is_dead_end(&self) -> bool {
        if self.is_complete() {
            return false;
        }

        let size = self.matrix.size();
        let mut departed = vec![false; size];
        let mut entered = vec![false; size];
        for edge in &self.path {
            departed[edge.from] = true;
            entered[edge.to] = true;
        }

        (0..size).any(|city| !departed[city] && self.matrix.out_degree(city) == 0)
            || (0..size).any(|city| !entered[city] && self.matrix.in_degree(city) == 0)
    }

    /// Consumes a complete node and closes its path into a tour.
    pub fn into_tour(self) -> Tour {
        debug_assert!(self.is_complete());
        Tour::close(self.path, START, self.cost)
    }

    /// Copies this node one edge further without computing the bound.
    fn branch(&self, to: usize) -> Self {
        let from = self.vertex;

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(Edge::new(from, to));

        let mut matrix = self.matrix.clone();
        matrix.close_row(from);
        matrix.close_column(to);
        matrix.set(to, START, NO_EDGE);

        Self {
            matrix,
            path,
            vertex: to,
            level: self.level + 1,
            cost: self.cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: Cost = NO_EDGE;

    fn five_city() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![INF, 10, 8, 9, 7],
            vec![10, INF, 10, 5, 6],
            vec![8, 10, INF, 8, 9],
            vec![9, 5, 8, INF, 6],
            vec![7, 6, 9, 6, INF],
        ])
        .unwrap()
    }

    #[test]
    fn test_root_bound() {
        let root = SearchNode::root(&five_city()).unwrap();
        assert_eq!(root.cost(), 32);
        assert_eq!(root.level(), 0);
        assert_eq!(root.vertex(), START);
        assert!(root.path().is_empty());
        assert_eq!(root.successors().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_branch_closes_row_column_and_return() {
        let root = SearchNode::root(&five_city()).unwrap();
        let child = root.branch(2);

        assert_eq!(child.path(), &[Edge::new(0, 2)]);
        assert_eq!(child.vertex(), 2);
        assert_eq!(child.level(), 1);
        assert!(child.matrix().row(0).iter().all(|&c| c == INF));
        assert!(child.matrix().column(2).all(|c| c == INF));
        assert!(!child.matrix().has_edge(2, 0));
        // untouched entries keep the parent's reduced values
        assert_eq!(child.matrix().get(3, 1), root.matrix().get(3, 1));
    }

    #[test]
    fn test_child_cost_is_monotone() {
        let root = SearchNode::root(&five_city()).unwrap();
        for to in root.successors().collect::<Vec<_>>() {
            let child = root.child(to).unwrap().unwrap();
            assert!(child.cost() >= root.cost());
            assert!(crate::matrix::is_reduced(child.matrix()));
        }
    }

    #[test]
    fn test_child_bound_matches_hand_computation() {
        // reduced root row 0 is [-, 3, 0, 2, 0]; travelling 0 -> 2 costs 0
        // and leaves a matrix whose reduction adds 2
        let root = SearchNode::root(&five_city()).unwrap();
        assert_eq!(root.matrix().get(0, 2), 0);
        let child = root.child(2).unwrap().unwrap();
        assert_eq!(child.cost(), 34);
    }

    #[test]
    fn test_last_child_requires_return_edge() {
        // 0 -> 1 -> 2, but 2 cannot return to 0
        let m = CostMatrix::from_rows(vec![
            vec![INF, 1, INF],
            vec![INF, INF, 1],
            vec![INF, 1, INF],
        ])
        .unwrap();
        let root = SearchNode::root(&m).unwrap();
        let first = root.child(1).unwrap().unwrap();
        assert!(!first.is_complete());
        assert!(first.child(2).unwrap().is_none());
    }

    #[test]
    fn test_complete_node_closes_into_tour() {
        let m = CostMatrix::from_rows(vec![
            vec![INF, 1, INF],
            vec![INF, INF, 2],
            vec![3, INF, INF],
        ])
        .unwrap();
        let root = SearchNode::root(&m).unwrap();
        let last = root.child(1).unwrap().unwrap().child(2).unwrap().unwrap();
        assert!(last.is_complete());
        assert_eq!(last.cost(), 6);

        let tour = last.into_tour();
        assert_eq!(tour.cities(), vec![0, 1, 2]);
        assert_eq!(tour.cost(), 6);
    }

    #[test]
    fn test_dead_end_detection() {
        // city 3 can only be entered from city 1
        let m = CostMatrix::from_rows(vec![
            vec![INF, 1, 1, INF],
            vec![1, INF, 1, 1],
            vec![1, 1, INF, INF],
            vec![1, 1, 1, INF],
        ])
        .unwrap();
        let root = SearchNode::root(&m).unwrap();
        assert!(!root.is_dead_end());

        // 0 -> 1 -> 2 closes row 1, so 3 can no longer be entered
        let via_one = root.child(1).unwrap().unwrap();
        assert!(!via_one.is_dead_end());
        let stuck = via_one.child(2).unwrap().unwrap();
        assert!(stuck.is_dead_end());
    }
}
