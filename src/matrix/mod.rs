//! Cost matrices.
//!
//! A [`CostMatrix`] is a square grid of directed edge weights with its
//! dimension carried at runtime. Missing edges hold the [`NO_EDGE`]
//! sentinel, which compares greater than every real weight. Diagonal
//! entries are always `NO_EDGE`: a city never travels to itself.
//!
//! # Key Components
//!
//! - [`CostMatrix`]: owned row-major storage with validated construction
//! - [`reduce`]: row/column reduction returning the reduction lower bound
//! - [`checked_add`]: cost arithmetic that reports overflow instead of
//!   wrapping into the sentinel

mod reduction;

use std::fmt;

use crate::error::TspError;

pub use reduction::{column_reduce, is_reduced, reduce, row_reduce};

/// Edge weight and accumulated tour cost.
pub type Cost = u64;

/// Sentinel for "no such edge". Behaves as infinite cost.
pub const NO_EDGE: Cost = Cost::MAX;

/// Adds two costs, failing when the sum overflows or lands on the sentinel.
pub fn checked_add(a: Cost, b: Cost) -> Result<Cost, TspError> {
    a.checked_add(b)
        .filter(|&sum| sum != NO_EDGE)
        .ok_or(TspError::Overflow)
}

/// Square matrix of directed edge costs.
///
/// Entry `(i, j)` is the cost of travelling from city `i` to city `j`.
///
/// # Examples
///
/// ```
/// use u_tsp::matrix::{CostMatrix, NO_EDGE};
///
/// let m = CostMatrix::from_rows(vec![
///     vec![NO_EDGE, 2, 1],
///     vec![2, NO_EDGE, 4],
///     vec![1, 4, NO_EDGE],
/// ])
/// .unwrap();
/// assert_eq!(m.size(), 3);
/// assert_eq!(m.get(1, 2), 4);
/// assert!(!m.has_edge(0, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<Cost>>", into = "Vec<Vec<Cost>>")
)]
pub struct CostMatrix {
    size: usize,
    cells: Vec<Cost>,
}

impl CostMatrix {
    /// Builds a matrix from rows.
    ///
    /// Fails when there are fewer than two rows or any row length differs
    /// from the row count. Diagonal values are replaced by [`NO_EDGE`].
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self, TspError> {
        let size = rows.len();
        if size < 2 {
            return Err(TspError::TooFewCities { found: size });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(TspError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }

        let mut matrix = Self { size, cells };
        matrix.clear_diagonal();
        Ok(matrix)
    }

    /// Builds a `size x size` matrix by evaluating `cost(i, j)` per entry.
    pub fn from_fn<F>(size: usize, mut cost: F) -> Result<Self, TspError>
    where
        F: FnMut(usize, usize) -> Cost,
    {
        if size < 2 {
            return Err(TspError::TooFewCities { found: size });
        }
        let mut cells = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                cells.push(if i == j { NO_EDGE } else { cost(i, j) });
            }
        }
        Ok(Self { size, cells })
    }

    /// A matrix with no edges at all.
    pub fn unconnected(size: usize) -> Result<Self, TspError> {
        Self::from_fn(size, |_, _| NO_EDGE)
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost of edge `(from, to)`, or [`NO_EDGE`].
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Cost {
        self.cells[from * self.size + to]
    }

    /// Sets the cost of edge `(from, to)`. Diagonal writes are ignored.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn set(&mut self, from: usize, to: usize, cost: Cost) {
        if from != to {
            self.cells[from * self.size + to] = cost;
        }
    }

    /// Whether edge `(from, to)` exists.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get(from, to) != NO_EDGE
    }

    /// Outgoing costs of city `from`.
    pub fn row(&self, from: usize) -> &[Cost] {
        &self.cells[from * self.size..(from + 1) * self.size]
    }

    /// Incoming costs of city `to`, in row order.
    pub fn column(&self, to: usize) -> impl Iterator<Item = Cost> + '_ {
        self.cells.iter().skip(to).step_by(self.size).copied()
    }

    /// Number of finite outgoing edges of `from`.
    pub fn out_degree(&self, from: usize) -> usize {
        self.row(from).iter().filter(|&&c| c != NO_EDGE).count()
    }

    /// Number of finite incoming edges of `to`.
    pub fn in_degree(&self, to: usize) -> usize {
        self.column(to).filter(|&c| c != NO_EDGE).count()
    }

    /// Copies the matrix back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Cost>> {
        self.cells.chunks(self.size).map(<[Cost]>::to_vec).collect()
    }

    /// Forbids every departure from `from`.
    pub(crate) fn close_row(&mut self, from: usize) {
        let size = self.size;
        self.cells[from * size..(from + 1) * size].fill(NO_EDGE);
    }

    /// Forbids every arrival at `to`.
    pub(crate) fn close_column(&mut self, to: usize) {
        for i in 0..self.size {
            self.cells[i * self.size + to] = NO_EDGE;
        }
    }

    fn clear_diagonal(&mut self) {
        for i in 0..self.size {
            self.cells[i * self.size + i] = NO_EDGE;
        }
    }
}

impl TryFrom<Vec<Vec<Cost>>> for CostMatrix {
    type Error = TspError;

    fn try_from(rows: Vec<Vec<Cost>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<Cost>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.to_rows()
    }
}

impl fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .filter(|&&c| c != NO_EDGE)
            .map(|c| c.to_string().len())
            .max()
            .unwrap_or(1);

        for row in self.cells.chunks(self.size) {
            let cells: Vec<String> = row
                .iter()
                .map(|&c| {
                    if c == NO_EDGE {
                        format!("{:>width$}", "-")
                    } else {
                        format!("{c:>width$}")
                    }
                })
                .collect();
            writeln!(f, "[{}]", cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: Cost = NO_EDGE;

    #[test]
    fn test_from_rows_normalizes_diagonal() {
        let m = CostMatrix::from_rows(vec![vec![0, 3], vec![4, 7]]).unwrap();
        assert_eq!(m.get(0, 0), INF);
        assert_eq!(m.get(1, 1), INF);
        assert_eq!(m.get(0, 1), 3);
        assert_eq!(m.get(1, 0), 4);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = CostMatrix::from_rows(vec![vec![INF, 1, 2], vec![1, INF], vec![2, 1, INF]])
            .unwrap_err();
        assert_eq!(
            err,
            TspError::NotSquare {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_single_city() {
        let err = CostMatrix::from_rows(vec![vec![INF]]).unwrap_err();
        assert_eq!(err, TspError::TooFewCities { found: 1 });
        assert!(CostMatrix::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_from_fn_and_degrees() {
        let m = CostMatrix::from_fn(4, |i, j| if j == (i + 1) % 4 { 1 } else { INF }).unwrap();
        for city in 0..4 {
            assert_eq!(m.out_degree(city), 1);
            assert_eq!(m.in_degree(city), 1);
        }
        assert!(m.has_edge(3, 0));
        assert!(!m.has_edge(0, 3));
    }

    #[test]
    fn test_set_ignores_diagonal() {
        let mut m = CostMatrix::unconnected(3).unwrap();
        m.set(1, 1, 5);
        m.set(1, 2, 5);
        assert_eq!(m.get(1, 1), INF);
        assert_eq!(m.get(1, 2), 5);
    }

    #[test]
    fn test_close_row_and_column() {
        let mut m = CostMatrix::from_fn(3, |i, j| (i * 3 + j) as Cost).unwrap();
        m.close_row(0);
        m.close_column(2);
        assert!(m.row(0).iter().all(|&c| c == INF));
        assert!(m.column(2).all(|c| c == INF));
        assert_eq!(m.get(1, 0), 3);
        assert_eq!(m.get(2, 1), 7);
    }

    #[test]
    fn test_to_rows_roundtrips_through_from_rows() {
        let rows = vec![vec![INF, 1, 2], vec![3, INF, 4], vec![5, 6, INF]];
        let m = CostMatrix::from_rows(rows.clone()).unwrap();
        assert_eq!(m.to_rows(), rows);
        assert_eq!(Vec::<Vec<Cost>>::from(m), rows);
    }

    #[test]
    fn test_checked_add_rejects_sentinel() {
        assert_eq!(checked_add(2, 3), Ok(5));
        assert_eq!(checked_add(NO_EDGE - 1, 1), Err(TspError::Overflow));
        assert_eq!(checked_add(NO_EDGE, 1), Err(TspError::Overflow));
    }

    #[test]
    fn test_display_marks_missing_edges() {
        let m = CostMatrix::from_rows(vec![vec![INF, 10], vec![7, INF]]).unwrap();
        assert_eq!(m.to_string(), "[ - 10]\n[ 7  -]\n");
    }
}
