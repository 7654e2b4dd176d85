use std::cell::Cell;

use crate::spline::splineerror::SplineError;

/// Cached interval search over a non-decreasing node array.
///
/// The one-slot cache exploits the temporal locality of dense sequential
/// sampling: a query landing in the interval returned last time is answered
/// without searching. The cache lives in a `Cell` so lookup works through a
/// shared reference; the type is deliberately `!Sync`, matching the
/// single-threaded evaluation contract.
pub struct IntervalLocator {
    last_interval: Cell<usize>,
}

impl IntervalLocator {
    pub fn new() -> IntervalLocator {
        IntervalLocator {
            last_interval: Cell::new(0),
        }
    }

    pub fn reset(&self) {
        self.last_interval.set(0);
    }

    /// Returns `i` such that `X[i] <= q <= X[i+1]`.
    ///
    /// Queries sitting exactly on an interior node resolve to the interval
    /// on the right of that node; at a duplicated node this skips the
    /// zero-width interval, so a jump discontinuity is read from its
    /// right-hand side. With `check_range` off, out-of-range queries clamp
    /// to the boundary interval.
    pub fn locate(
        &self,
        x: &[f64],
        q: f64,
        check_range: bool,
        name: &str,
    ) -> Result<usize, SplineError> {
        let n = x.len();
        if n == 0 {
            return Err(SplineError::EmptyDomain {
                name: name.to_owned(),
            });
        }
        if n == 1 {
            return Err(SplineError::DegenerateDomain {
                name: name.to_owned(),
            });
        }
        // A non-finite query brackets nothing: every ordering comparison
        // below would be false and it would fall through to interval 0.
        if !q.is_finite() {
            return Err(SplineError::OutOfDomain {
                x: q,
                x_min: x[0],
                x_max: x[n - 1],
            });
        }

        // Fast path. The bracket test is half-open (closed at the top only
        // for the last interval) so a cache hit always agrees with what a
        // fresh search would return, duplicated nodes included.
        let cached = self.last_interval.get();
        if cached + 1 < n
            && x[cached] <= q
            && (q < x[cached + 1] || (cached == n - 2 && q == x[cached + 1]))
        {
            return Ok(cached);
        }

        if check_range && (q < x[0] || q > x[n - 1]) {
            return Err(SplineError::OutOfDomain {
                x: q,
                x_min: x[0],
                x_max: x[n - 1],
            });
        }

        // First index with X[j] > q, so a query on a node falls in the
        // interval to its right.
        let j = x.partition_point(|&v| v <= q);
        let mut interval = j.saturating_sub(1);
        if interval + 1 < n && x[interval] == x[interval + 1] {
            interval += 1; // zero-width interval at a duplicated node
        }
        if interval + 1 >= n {
            interval = n - 2;
        }
        self.last_interval.set(interval);
        Ok(interval)
    }
}
