use ndarray::ArrayView1;

use crate::error::{PerceptronError, Result};

/// Upper bound on the points of a sampled boundary line.
pub const MAX_LINE_POINTS: usize = 2000;

/// The line `w0 + w1·x1 + w2·x2 = 0` separating the two classes in 2-D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionBoundary {
    pub bias: f64,
    pub w1: f64,
    pub w2: f64,
}

impl DecisionBoundary {
    /// Requires exactly three weights (bias plus two features).
    pub fn from_weights(w: ArrayView1<f64>) -> Result<Self> {
        if w.len() != 3 {
            return Err(PerceptronError::DimensionalityMismatch {
                expected: 2,
                actual: w.len().saturating_sub(1),
            });
        }
        Ok(Self {
            bias: w[0],
            w1: w[1],
            w2: w[2],
        })
    }

    /// `x2` on the boundary for a given `x1`, `None` when the line is vertical.
    pub fn x2_at(&self, x1: f64) -> Option<f64> {
        if self.w2 == 0.0 {
            return None;
        }
        Some((self.bias + x1 * self.w1) / -self.w2)
    }

    /// Points along the boundary for `x1` in `[from, to)` spaced by `step`.
    ///
    /// At most [`MAX_LINE_POINTS`] are produced; wider ranges get a coarser step.
    pub fn sample_line(&self, from: f64, to: f64, step: f64) -> Vec<(f64, f64)> {
        if step.is_nan() || step <= 0.0 || !from.is_finite() || !to.is_finite() || to <= from {
            return vec![];
        }
        let span = to - from;
        let mut n = (span / step).ceil();
        let mut step = step;
        if !n.is_finite() || n > MAX_LINE_POINTS as f64 {
            n = MAX_LINE_POINTS as f64;
            step = span / n;
        }
        (0..n as usize)
            .map(|i| from + i as f64 * step)
            .filter_map(|x1| self.x2_at(x1).map(|x2| (x1, x2)))
            .filter(|(_, x2)| x2.is_finite())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_x2_at() {
        // 1 + x1 - 2 x2 = 0  =>  x2 = (1 + x1) / 2
        let b = DecisionBoundary::from_weights(array![1.0, 1.0, -2.0].view()).unwrap();
        assert_abs_diff_eq!(0.5, b.x2_at(0.0).unwrap());
        assert_abs_diff_eq!(1.5, b.x2_at(2.0).unwrap());
    }

    #[test]
    fn test_vertical_boundary() {
        let b = DecisionBoundary::from_weights(array![1.0, 1.0, 0.0].view()).unwrap();
        assert_eq!(None, b.x2_at(1.0));
        assert!(b.sample_line(-1.0, 1.0, 0.1).is_empty());
    }

    #[test]
    fn test_sample_line_spacing() {
        let b = DecisionBoundary::from_weights(array![0.0, 1.0, 1.0].view()).unwrap();
        let line = b.sample_line(-1.0, 1.0, 0.5);
        assert_eq!(4, line.len());
        for (x1, x2) in line {
            assert_abs_diff_eq!(-x1, x2);
        }
    }

    #[test]
    fn test_sample_line_large_coordinates() {
        let b = DecisionBoundary::from_weights(array![0.0, 1.0, 1.0].view()).unwrap();
        let from = 1e17;
        let to = 1e17 + 1000.0;
        let line = b.sample_line(from, to, 0.1);
        assert!(!line.is_empty());
        assert!(line.len() <= MAX_LINE_POINTS);
        for (x1, _) in line {
            assert!(x1 >= from && x1 <= to, "{}", x1);
        }
    }

    #[test]
    fn test_sample_line_wide_range_is_capped() {
        let b = DecisionBoundary::from_weights(array![0.0, 1.0, 1.0].view()).unwrap();
        let line = b.sample_line(-1e9, 1e9, 0.1);
        assert_eq!(MAX_LINE_POINTS, line.len());
        assert_eq!(-1e9, line[0].0);
        assert!(line[MAX_LINE_POINTS - 1].0 < 1e9);
    }

    #[test]
    fn test_sample_line_empty_range() {
        let b = DecisionBoundary::from_weights(array![0.0, 1.0, 1.0].view()).unwrap();
        assert!(b.sample_line(2.0, 2.0, 0.1).is_empty());
        assert!(b.sample_line(3.0, 2.0, 0.1).is_empty());
    }

    #[test]
    fn test_wrong_dimensionality() {
        let err = DecisionBoundary::from_weights(array![0.0, 1.0].view()).unwrap_err();
        assert_eq!(
            PerceptronError::DimensionalityMismatch {
                expected: 2,
                actual: 1
            },
            err
        );
    }
}
