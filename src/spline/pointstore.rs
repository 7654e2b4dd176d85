use crate::spline::splineerror::SplineError;
use crate::spline::validator::{check_finite, check_finite_value};

/// Column-wise knot storage: abscissas kept non-decreasing, ordinates
/// index-aligned. Duplicate abscissas are legal and encode jump nodes.
pub struct PointStore {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PointStore {
    pub fn new() -> PointStore {
        PointStore {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    pub fn n(&self) -> usize {
        self.x.len()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn x_mut(&mut self) -> &mut [f64] {
        &mut self.x
    }

    /// Grows backing storage to hold at least `min_capacity` points.
    /// Existing content is preserved.
    pub fn reserve(&mut self, min_capacity: usize) {
        if min_capacity > self.x.capacity() {
            let additional = min_capacity - self.x.len();
            self.x.reserve(additional);
            self.y.reserve(additional);
        }
    }

    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
    }

    /// Appends one point. Both values must be finite (a NaN abscissa would
    /// slip past any ordering comparison) and the new abscissa may equal the
    /// last one but must not fall below it; all checks run before any write.
    pub fn push_back(&mut self, x: f64, y: f64) -> Result<(), SplineError> {
        let n = self.x.len();
        check_finite_value(x, "x", n)?;
        check_finite_value(y, "y", n)?;
        if n > 0 && x < self.x[n - 1] {
            return Err(SplineError::NonMonotoneInsertion {
                index: n,
                prev: self.x[n - 1],
                next: x,
            });
        }
        if n == self.x.capacity() {
            self.reserve((n + 1) * 2);
        }
        self.x.push(x);
        self.y.push(y);
        Ok(())
    }

    /// Replaces all content with the given arrays. Validation runs before
    /// any mutation, so a failed build leaves the store untouched.
    pub fn build_from(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), SplineError> {
        if xs.len() != ys.len() {
            return Err(SplineError::LengthMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        check_finite(xs, "x")?;
        check_finite(ys, "y")?;
        for i in 1..xs.len() {
            if xs[i] < xs[i - 1] {
                return Err(SplineError::NonMonotoneInput {
                    index: i,
                    prev: xs[i - 1],
                    next: xs[i],
                });
            }
        }
        self.x.clear();
        self.y.clear();
        self.x.extend_from_slice(xs);
        self.y.extend_from_slice(ys);
        Ok(())
    }
}
