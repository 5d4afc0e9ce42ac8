use ndarray::{Array2, ArrayView1, Axis};
use ndarray::parallel::prelude::*;

use crate::error::{DobbleError, DobbleResult};
use crate::ops::galois::GaloisField;
use crate::ops::primes::is_prime_power;

/// Number of points (and lines) of a projective plane of the given order.
pub fn plane_size(order: usize) -> usize {
    order * order + order + 1
}

/// Number of cards in a deck of `order`: `n² + n + 1` for a prime power `n`.
///
/// Fails with `InvalidArgument` for other orders or when the count does not
/// fit in `usize`.
pub fn deck_size(order: usize) -> DobbleResult<usize> {
    if !is_prime_power(order) {
        return Err(DobbleError::invalid(format!(
            "the order must be a prime power, got {}",
            order
        )));
    }
    order
        .checked_mul(order)
        .and_then(|sq| sq.checked_add(order))
        .and_then(|s| s.checked_add(1))
        .ok_or_else(|| DobbleError::invalid(format!("order {} is too large", order)))
}

/// Computes the incidence matrix of the finite projective plane of `order`.
///
/// Rows are lines, columns are points: `m[[line, point]]` is `true` iff the
/// point lies on the line. Fails with `InvalidArgument` unless `order` is a
/// prime power.
///
/// Points `n*(x+1) + y + 1` form the affine plane over GF(n); point `s + 1`
/// is the direction of slope `s`, point 0 the vertical direction. Line 0 is
/// the line at infinity, lines `1..=n` are the verticals and the last n²
/// lines are `y = s*x + c`. Field arithmetic is plain mod-n for prime n.
///
/// ```text
/// order = 2
/// [1 1 1 0 0 0 0]
/// [1 0 0 1 1 0 0]
/// [1 0 0 0 0 1 1]
/// [0 1 0 1 0 1 0]
/// [0 1 0 0 1 0 1]
/// [0 0 1 1 0 0 1]
/// [0 0 1 0 1 1 0]
/// ```
pub fn incidence_matrix(order: usize) -> DobbleResult<Array2<bool>> {
    if !is_prime_power(order) {
        return Err(DobbleError::invalid(format!(
            "the order must be a prime power, got {}",
            order
        )));
    }

    let n = order;
    let field = GaloisField::new(n)?;
    let size = plane_size(n);
    let mut m = Array2::from_elem((size, size), false);

    // Line 0 holds the first n + 1 points.
    for pt in 0..=n {
        m[[0, pt]] = true;
    }

    // Lines 1..=n: point 0 plus one contiguous block of n points each.
    for line in 0..n {
        let row = line + 1;
        m[[row, 0]] = true;
        let start = (line + 1) * n + 1;
        for pt in start..start + n {
            m[[row, pt]] = true;
        }
    }

    // Remaining n² lines, one per (block, line) pair.
    let mut row = n + 1;
    for block in 0..n {
        for line in 0..n {
            m[[row, block + 1]] = true;
            for pt in 0..n {
                let offset = field.add(field.mul(block, pt), line);
                m[[row, n * (pt + 1) + offset + 1]] = true;
            }
            row += 1;
        }
    }

    Ok(m)
}

fn shared(a: &ArrayView1<bool>, b: &ArrayView1<bool>) -> usize {
    a.iter().zip(b.iter()).filter(|&(&x, &y)| x && y).count()
}

/// Every pair of distinct lanes along `axis` shares exactly one `true`.
fn lanes_meet_once(m: &Array2<bool>, axis: Axis) -> bool {
    let count = m.len_of(axis);
    m.axis_iter(axis)
        .into_par_iter()
        .enumerate()
        .all(|(i, a)| (i + 1..count).all(|j| shared(&a, &m.index_axis(axis, j)) == 1))
}

/// Incidence structure of PG(2, n), immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectivePlane {
    order: usize,
    incidence: Array2<bool>,
}

impl ProjectivePlane {
    pub fn new(order: usize) -> DobbleResult<Self> {
        let incidence = incidence_matrix(order)?;
        Ok(Self { order, incidence })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn size(&self) -> usize {
        plane_size(self.order)
    }

    pub fn incidence(&self) -> &Array2<bool> {
        &self.incidence
    }

    /// Ascending point indices on `line`, or `None` past the last line.
    pub fn points_on_line(&self, line: usize) -> Option<Vec<usize>> {
        if line >= self.size() {
            return None;
        }
        let points = self
            .incidence
            .row(line)
            .iter()
            .enumerate()
            .filter_map(|(pt, &on)| on.then_some(pt))
            .collect();
        Some(points)
    }

    /// Checks the plane axioms: n + 1 points per line and lines per point,
    /// two lines meet in one point, two points share one line.
    pub fn verify(&self) -> bool {
        let k = self.order + 1;
        let weights_ok = self
            .incidence
            .axis_iter(Axis(0))
            .chain(self.incidence.axis_iter(Axis(1)))
            .all(|lane| lane.iter().filter(|&&on| on).count() == k);

        weights_ok
            && lanes_meet_once(&self.incidence, Axis(0))
            && lanes_meet_once(&self.incidence, Axis(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_fano_plane() {
        let m = incidence_matrix(2).unwrap();
        let expected = arr2(&[
            [true, true, true, false, false, false, false],
            [true, false, false, true, true, false, false],
            [true, false, false, false, false, true, true],
            [false, true, false, true, false, true, false],
            [false, true, false, false, true, false, true],
            [false, false, true, true, false, false, true],
            [false, false, true, false, true, true, false],
        ]);
        assert_eq!(m, expected);
    }

    #[test]
    fn test_plane_shape_and_weights() {
        for order in [2usize, 3, 4, 5, 7, 8, 9] {
            let plane = ProjectivePlane::new(order).unwrap();
            let size = plane_size(order);
            assert_eq!(plane.incidence().dim(), (size, size));
            for lane in plane.incidence().axis_iter(Axis(0)) {
                assert_eq!(lane.iter().filter(|&&b| b).count(), order + 1);
            }
            for lane in plane.incidence().axis_iter(Axis(1)) {
                assert_eq!(lane.iter().filter(|&&b| b).count(), order + 1);
            }
            assert!(plane.verify(), "order {} violates the plane axioms", order);
        }
    }

    #[test]
    fn test_rejects_non_prime_power() {
        for order in [0usize, 1, 6, 10, 12] {
            let err = incidence_matrix(order).unwrap_err();
            assert_eq!(err.kind(), crate::error::ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_points_on_line() {
        let plane = ProjectivePlane::new(3).unwrap();
        assert_eq!(plane.points_on_line(0), Some(vec![0, 1, 2, 3]));
        assert_eq!(plane.points_on_line(1), Some(vec![0, 4, 5, 6]));
        assert_eq!(plane.points_on_line(13), None);
    }

    #[test]
    fn test_verify_detects_broken_plane() {
        let mut plane = ProjectivePlane::new(2).unwrap();
        plane.incidence[[0, 3]] = true;
        assert!(!plane.verify());
    }

    #[test]
    fn test_verify_parallel_lanes_order_nine() {
        let mut plane = ProjectivePlane::new(9).unwrap();
        assert!(plane.verify());
        // 행 가중치는 유지한 채 한 점을 옮기면 교차 조건이 깨짐
        let row = plane.points_on_line(0).unwrap();
        let moved = (0..plane.size()).find(|p| !row.contains(p)).unwrap();
        plane.incidence[[0, row[0]]] = false;
        plane.incidence[[0, moved]] = true;
        assert!(!plane.verify());
    }

    #[test]
    fn test_deck_size() {
        assert_eq!(deck_size(2).unwrap(), 7);
        assert_eq!(deck_size(7).unwrap(), 57);
        assert_eq!(deck_size(9).unwrap(), 91);
        for order in [0usize, 1, 6, 10] {
            assert_eq!(
                deck_size(order).unwrap_err().kind(),
                crate::error::ErrorKind::InvalidArgument
            );
        }
        // 2^63: 소수 거듭제곱이지만 n²이 usize를 넘음
        assert!(deck_size(1usize << (usize::BITS - 1)).is_err());
    }
}
