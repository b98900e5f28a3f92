//! Tours: the closed edge sequence a solver reports.

use std::fmt;

use crate::error::TspError;
use crate::matrix::{checked_add, Cost, CostMatrix};

/// Directed edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    /// Creates the directed edge `from -> to`.
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A Hamiltonian cycle as an ordered list of directed edges.
///
/// The first edge leaves the start city and the last edge returns to it.
///
/// # Examples
///
/// ```
/// use u_tsp::matrix::{CostMatrix, NO_EDGE};
/// use u_tsp::tour::Tour;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![NO_EDGE, 1, 9],
///     vec![9, NO_EDGE, 1],
///     vec![1, 9, NO_EDGE],
/// ])
/// .unwrap();
/// let tour = Tour::from_cities(&[0, 1, 2], &m).unwrap();
/// assert_eq!(tour.cost(), 3);
/// assert_eq!(tour.to_string(), "0 -> 1 -> 2 -> 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    edges: Vec<Edge>,
    cost: Cost,
}

impl Tour {
    /// Closes an open path by appending the edge back to `start`.
    pub(crate) fn close(mut path: Vec<Edge>, start: usize, cost: Cost) -> Self {
        let last = path.last().map_or(start, |e| e.to);
        path.push(Edge::new(last, start));
        Self { edges: path, cost }
    }

    /// Builds a tour visiting `cities` in order and returning to the first.
    ///
    /// The cost is evaluated against `matrix`; the tour is validated.
    pub fn from_cities(cities: &[usize], matrix: &CostMatrix) -> Result<Self, TspError> {
        let Some(&start) = cities.first() else {
            return Err(TspError::InvalidTour("no cities given".into()));
        };
        let path = cities.windows(2).map(|w| Edge::new(w[0], w[1])).collect();
        let mut tour = Self::close(path, start, 0);
        tour.validate(matrix.size())?;
        tour.cost = tour.evaluate(matrix)?;
        Ok(tour)
    }

    /// The edges in travel order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Total cost of the cycle.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of edges (equal to the number of cities).
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the tour has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Cities in visiting order, starting at the start city, without
    /// repeating it at the end.
    pub fn cities(&self) -> Vec<usize> {
        self.edges.iter().map(|e| e.from).collect()
    }

    /// Checks that this is a Hamiltonian cycle over `size` cities that
    /// starts and ends at city 0.
    pub fn validate(&self, size: usize) -> Result<(), TspError> {
        if self.edges.is_empty() || self.edges.len() != size {
            return Err(TspError::InvalidTour(format!(
                "expected {size} edges, got {}",
                self.edges.len()
            )));
        }
        if self.edges[0].from != 0 {
            return Err(TspError::InvalidTour(format!(
                "tour starts at city {} instead of 0",
                self.edges[0].from
            )));
        }

        let mut entered = vec![false; size];
        for (k, edge) in self.edges.iter().enumerate() {
            if edge.to >= size || edge.from >= size {
                return Err(TspError::InvalidTour(format!(
                    "edge {edge} leaves the {size}-city range"
                )));
            }
            if let Some(next) = self.edges.get(k + 1) {
                if next.from != edge.to {
                    return Err(TspError::InvalidTour(format!(
                        "edge {next} does not continue from {edge}"
                    )));
                }
            }
            if std::mem::replace(&mut entered[edge.to], true) {
                return Err(TspError::InvalidTour(format!(
                    "city {} is entered twice",
                    edge.to
                )));
            }
        }

        // consecutive + every city entered once => last edge returns to 0
        Ok(())
    }

    /// Sums the edge costs of this tour in `matrix`.
    pub fn evaluate(&self, matrix: &CostMatrix) -> Result<Cost, TspError> {
        self.edges.iter().try_fold(0, |total, edge| {
            if !matrix.has_edge(edge.from, edge.to) {
                return Err(TspError::InvalidTour(format!("edge {edge} does not exist")));
            }
            checked_add(total, matrix.get(edge.from, edge.to))
        })
    }

    /// Renders the tour with city names, e.g. `Vilnius -> Kaunas -> Vilnius`.
    ///
    /// Cities without a name fall back to their index.
    pub fn display_with_names<S: AsRef<str>>(&self, names: &[S]) -> String {
        let name = |city: usize| {
            names
                .get(city)
                .map_or_else(|| city.to_string(), |n| n.as_ref().to_string())
        };

        let mut parts: Vec<String> = self.edges.iter().map(|e| name(e.from)).collect();
        if let Some(last) = self.edges.last() {
            parts.push(name(last.to));
        }
        parts.join(" -> ")
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: [&str; 0] = [];
        f.write_str(&self.display_with_names(&names))
    }
}
