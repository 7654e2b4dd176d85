use std::cell::RefCell;
use std::fmt;
use std::io::Write;

use crate::spline::family::{self, Coefficients, SplineType};
use crate::spline::intervallocator::IntervalLocator;
use crate::spline::pointstore::PointStore;
use crate::spline::splineerror::SplineError;

/// One named univariate interpolant: knot storage, cached interval search
/// and the precomputed coefficient table of its family.
///
/// The table sits behind a `RefCell` because appends drop it and the next
/// evaluation rebuilds it through a shared reference. Range checking is on
/// by default; switched off, out-of-domain queries extrapolate with the
/// boundary interval's polynomial.
pub struct Spline {
    name: String,
    spline_type: SplineType,
    points: PointStore,
    locator: IntervalLocator,
    check_range: bool,
    coefficients_cell: RefCell<Option<Coefficients>>,
}

impl fmt::Debug for Spline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spline")
            .field("name", &self.name)
            .field("spline_type", &self.spline_type)
            .field("n", &self.points.n())
            .field("check_range", &self.check_range)
            .finish()
    }
}

impl Spline {
    pub fn new(name: String, spline_type: SplineType) -> Spline {
        Spline {
            name,
            spline_type,
            points: PointStore::new(),
            locator: IntervalLocator::new(),
            check_range: true,
            coefficients_cell: RefCell::new(None),
        }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn spline_type(&self) -> SplineType {
        self.spline_type
    }

    pub fn n(&self) -> usize {
        self.points.n()
    }

    pub fn check_range(&self) -> bool {
        self.check_range
    }

    pub fn set_check_range(&mut self, check_range: bool) {
        self.check_range = check_range;
    }

    pub fn x(&self) -> &[f64] {
        self.points.x()
    }

    pub fn y(&self) -> &[f64] {
        self.points.y()
    }

    pub fn x_min(&self) -> Result<f64, SplineError> {
        self.points
            .x()
            .first()
            .copied()
            .ok_or_else(|| self.empty_domain())
    }

    pub fn x_max(&self) -> Result<f64, SplineError> {
        self.points
            .x()
            .last()
            .copied()
            .ok_or_else(|| self.empty_domain())
    }

    fn empty_domain(&self) -> SplineError {
        SplineError::EmptyDomain {
            name: self.name.clone(),
        }
    }

    /// Bulk build from two equal-length arrays. Validation runs before any
    /// mutation; on failure the spline keeps its previous content.
    pub fn build(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), SplineError> {
        self.points.build_from(xs, ys)?;
        self.locator.reset();
        *self.coefficients_cell.borrow_mut() = if self.points.n() >= 2 {
            Some(family::compute(
                self.spline_type,
                self.points.x(),
                self.points.y(),
                &self.name,
            )?)
        } else {
            None
        };
        Ok(())
    }

    /// Appends one knot. The coefficient table is dropped and rebuilt on
    /// the next evaluation, so a burst of appends pays for one recompute.
    pub fn push_back(&mut self, x: f64, y: f64) -> Result<(), SplineError> {
        self.points.push_back(x, y)?;
        *self.coefficients_cell.borrow_mut() = None;
        Ok(())
    }

    pub fn evaluate(&self, x: f64) -> Result<f64, SplineError> {
        let interval = self
            .locator
            .locate(self.points.x(), x, self.check_range, &self.name)?;
        let mut borrow = self.coefficients_cell.borrow_mut();
        if borrow.is_none() {
            *borrow = Some(family::compute(
                self.spline_type,
                self.points.x(),
                self.points.y(),
                &self.name,
            )?);
        }
        let coefficients = borrow.as_ref().ok_or_else(|| self.empty_domain())?;
        Ok(coefficients.value(self.points.x(), self.points.y(), interval, x))
    }

    /// Translates all abscissas so the first knot sits at `x0`. Relative
    /// spacing is untouched, so the coefficient table stays valid.
    pub fn set_origin(&mut self, x0: f64) -> Result<(), SplineError> {
        if self.points.n() == 0 {
            return Err(self.empty_domain());
        }
        let x = self.points.x_mut();
        let shift = x0 - x[0];
        for xi in x.iter_mut() {
            *xi += shift;
        }
        Ok(())
    }

    /// Affinely remaps the abscissas so the domain becomes `[xmin, xmax]`.
    /// Interval widths change, so the coefficient table is invalidated.
    pub fn set_range(&mut self, xmin: f64, xmax: f64) -> Result<(), SplineError> {
        if xmax <= xmin {
            return Err(SplineError::InvalidRange {
                x_min: xmin,
                x_max: xmax,
            });
        }
        let n = self.points.n();
        if n < 2 || self.points.x()[n - 1] == self.points.x()[0] {
            return Err(SplineError::DegenerateSpline {
                name: self.name.clone(),
            });
        }
        let x = self.points.x_mut();
        let scale = (xmax - xmin) / (x[n - 1] - x[0]);
        let shift = xmin - scale * x[0];
        for xi in x.iter_mut() {
            *xi = f64::mul_add(*xi, scale, shift);
        }
        *self.coefficients_cell.borrow_mut() = None;
        Ok(())
    }

    /// Writes `header`, then `nintervals + 1` equally spaced samples across
    /// the domain, one tab-separated `x\ty` line each.
    pub fn dump(
        &self,
        sink: &mut dyn Write,
        nintervals: usize,
        header: &str,
    ) -> Result<(), SplineError> {
        writeln!(sink, "{}", header)?;
        let x_min = self.x_min()?;
        let x_max = self.x_max()?;
        let dx = (x_max - x_min) / nintervals as f64;
        for i in 0..=nintervals {
            // the last sample is pinned to the upper bound so rounding can
            // never push it out of the domain
            let x = if i == nintervals {
                x_max
            } else {
                f64::mul_add(i as f64, dx, x_min)
            };
            writeln!(sink, "{}\t{}", x, self.evaluate(x)?)?;
        }
        Ok(())
    }
}
