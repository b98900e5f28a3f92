//! Row and column reduction.
//!
//! Every city needs exactly one outgoing and one incoming edge in a tour,
//! so subtracting the smallest entry of each row, then of each column,
//! removes cost that every completion must pay anyway. The sum of the
//! subtracted minima is an admissible lower bound.

use super::{checked_add, Cost, CostMatrix, NO_EDGE};
use crate::error::TspError;

/// Subtracts each row's smallest finite entry from that row.
///
/// Returns the per-row minimum, `None` for rows without a finite entry.
pub fn row_reduce(matrix: &mut CostMatrix) -> Vec<Option<Cost>> {
    let size = matrix.size;
    let mut minima = Vec::with_capacity(size);

    for row in matrix.cells.chunks_mut(size) {
        let min = row.iter().copied().filter(|&c| c != NO_EDGE).min();
        if let Some(min) = min.filter(|&m| m > 0) {
            for cell in row.iter_mut().filter(|c| **c != NO_EDGE) {
                *cell -= min;
            }
        }
        minima.push(min);
    }

    minima
}

/// Subtracts each column's smallest finite entry from that column.
///
/// Returns the per-column minimum, `None` for columns without a finite entry.
pub fn column_reduce(matrix: &mut CostMatrix) -> Vec<Option<Cost>> {
    let size = matrix.size;
    let mut minima = Vec::with_capacity(size);

    for j in 0..size {
        let min = matrix.column(j).filter(|&c| c != NO_EDGE).min();
        if let Some(min) = min.filter(|&m| m > 0) {
            for i in 0..size {
                let cell = &mut matrix.cells[i * size + j];
                if *cell != NO_EDGE {
                    *cell -= min;
                }
            }
        }
        minima.push(min);
    }

    minima
}

/// Fully reduces `matrix` in place and returns the reduction bound.
///
/// Lines with no finite entry contribute 0. Fails only if the sum of the
/// minima overflows [`Cost`].
///
/// # Examples
///
/// ```
/// use u_tsp::matrix::{reduce, CostMatrix, NO_EDGE};
///
/// let mut m = CostMatrix::from_rows(vec![
///     vec![NO_EDGE, 2, 1, NO_EDGE],
///     vec![2, NO_EDGE, 4, 3],
///     vec![1, 4, NO_EDGE, 2],
///     vec![NO_EDGE, 3, 2, NO_EDGE],
/// ])
/// .unwrap();
/// assert_eq!(reduce(&mut m).unwrap(), 8);
/// assert_eq!(reduce(&mut m).unwrap(), 0);
/// ```
pub fn reduce(matrix: &mut CostMatrix) -> Result<Cost, TspError> {
    let rows = row_reduce(matrix);
    let cols = column_reduce(matrix);

    rows.into_iter()
        .chain(cols)
        .flatten()
        .try_fold(0, checked_add)
}

/// Whether every row and column with a finite entry contains a zero.
pub fn is_reduced(matrix: &CostMatrix) -> bool {
    let size = matrix.size;
    (0..size).all(|i| line_is_reduced(matrix.row(i).iter().copied()))
        && (0..size).all(|j| line_is_reduced(matrix.column(j)))
}

fn line_is_reduced(line: impl Iterator<Item = Cost>) -> bool {
    let mut finite = false;
    for cost in line {
        if cost == 0 {
            return true;
        }
        finite |= cost != NO_EDGE;
    }
    !finite
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
    fn test_row_reduce_minima() {
        let mut m = five_city();
        let minima = row_reduce(&mut m);
        assert_eq!(minima, vec![Some(7), Some(5), Some(8), Some(5), Some(6)]);
        assert_eq!(m.row(0), &[INF, 3, 1, 2, 0]);
        assert_eq!(m.row(2), &[0, 2, INF, 0, 1]);
    }

    #[test]
    fn test_reduce_five_city_bound() {
        let mut m = five_city();
        // rows: 7+5+8+5+6 = 31, then only column 2 lacks a zero (min 1)
        assert_eq!(reduce(&mut m).unwrap(), 32);
        assert!(is_reduced(&m));
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let mut m = five_city();
        reduce(&mut m).unwrap();
        let before = m.clone();
        assert_eq!(reduce(&mut m).unwrap(), 0);
        assert_eq!(m, before);
    }

    #[test]
    fn test_all_sentinel_lines_contribute_zero() {
        let mut m = CostMatrix::from_rows(vec![
            vec![INF, 4, 6],
            vec![INF, INF, INF],
            vec![3, INF, INF],
        ])
        .unwrap();
        let rows = row_reduce(&mut m.clone());
        assert_eq!(rows, vec![Some(4), None, Some(3)]);
        // row minima 4 + 3, column 2 still holds 2 after row reduction
        assert_eq!(reduce(&mut m).unwrap(), 9);
        assert!(m.row(1).iter().all(|&c| c == INF));
    }

    #[test]
    fn test_zero_minimum_leaves_line_untouched() {
        let mut m = CostMatrix::from_rows(vec![vec![INF, 0], vec![0, INF]]).unwrap();
        assert_eq!(reduce(&mut m).unwrap(), 0);
        assert_eq!(m.to_rows(), vec![vec![INF, 0], vec![0, INF]]);
    }

    #[test]
    fn test_reduce_reports_overflow() {
        let big = NO_EDGE / 2 + 1;
        let mut m = CostMatrix::from_rows(vec![vec![INF, big], vec![big, INF]]).unwrap();
        assert_eq!(reduce(&mut m), Err(TspError::Overflow));
    }

    #[test]
    fn test_is_reduced_detects_missing_zero() {
        let m = CostMatrix::from_rows(vec![vec![INF, 1], vec![0, INF]]).unwrap();
        assert!(!is_reduced(&m));
        assert!(is_reduced(&CostMatrix::unconnected(3).unwrap()));
    }
}
