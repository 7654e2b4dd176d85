use std::fmt::Display;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::spline::splineerror::SplineError;

// ─────────────────────────────────────────────
// SplineType
// ─────────────────────────────────────────────

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplineType {
    Constant,
    Linear,
    Akima,
    Bessel,
    Pchip,
    Cubic,
    Quintic,
}

impl SplineType {
    pub fn name(&self) -> &'static str {
        match self {
            SplineType::Constant => "constant",
            SplineType::Linear => "linear",
            SplineType::Akima => "akima",
            SplineType::Bessel => "bessel",
            SplineType::Pchip => "pchip",
            SplineType::Cubic => "cubic",
            SplineType::Quintic => "quintic",
        }
    }

    pub fn parse(value: &str) -> Result<SplineType, SplineError> {
        match value {
            "constant" => Ok(SplineType::Constant),
            "linear" => Ok(SplineType::Linear),
            "akima" => Ok(SplineType::Akima),
            "bessel" => Ok(SplineType::Bessel),
            "pchip" => Ok(SplineType::Pchip),
            "cubic" => Ok(SplineType::Cubic),
            "quintic" => Ok(SplineType::Quintic),
            _ => Err(SplineError::UnknownSplineType {
                value: value.to_owned(),
            }),
        }
    }
}

impl Display for SplineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ─────────────────────────────────────────────
// Coefficients
// ─────────────────────────────────────────────
//
// One tagged table per family class. Constant and linear splines evaluate
// straight off the stored nodes; the cubic families share one table layout
// and differ only in how the node slopes are chosen. Polynomials are kept
// in Horner order relative to the interval's left node:
//   cubic   [d, c, b, a]       -> a + b*t + c*t^2 + d*t^3
//   quintic [f, e, d, c, b, a] -> a + b*t + ... + f*t^5

pub enum Coefficients {
    Constant,
    Linear,
    Cubic(Vec<[f64; 4]>),
    Quintic(Vec<[f64; 6]>),
}

impl Coefficients {
    /// Evaluates the polynomial of `interval` at `q`, with node data at hand
    /// for the table-free families.
    pub fn value(&self, x: &[f64], y: &[f64], interval: usize, q: f64) -> f64 {
        match self {
            Coefficients::Constant => y[interval],
            Coefficients::Linear => {
                let h = x[interval + 1] - x[interval];
                if h == 0.0 {
                    y[interval]
                } else {
                    let slope = (y[interval + 1] - y[interval]) / h;
                    f64::mul_add(slope, q - x[interval], y[interval])
                }
            }
            Coefficients::Cubic(table) => horner(&table[interval], q - x[interval]),
            Coefficients::Quintic(table) => horner(&table[interval], q - x[interval]),
        }
    }
}

fn horner(coefs: &[f64], t: f64) -> f64 {
    let mut result = coefs[0];
    for &beta in &coefs[1..] {
        result = f64::mul_add(result, t, beta);
    }
    result
}

// ─────────────────────────────────────────────
// Shared helpers
// ─────────────────────────────────────────────
//
// Duplicated abscissas split the node array into blocks of strictly
// increasing x. Coefficients are fitted per block, so a jump node breaks
// smoothness exactly there and never feeds a zero interval width into a
// slope or a moment system. The zero-width separator interval itself gets a
// flat polynomial; the locator skips it anyway.

fn strict_blocks(x: &[f64]) -> Vec<(usize, usize)> {
    let mut blocks = Vec::new();
    let mut start = 0;
    for i in 0..x.len() - 1 {
        if x[i] == x[i + 1] {
            blocks.push((start, i));
            start = i + 1;
        }
    }
    blocks.push((start, x.len() - 1));
    blocks
}

fn widths(x: &[f64]) -> Vec<f64> {
    (0..x.len() - 1).map(|i| x[i + 1] - x[i]).collect()
}

fn secant_slopes(y: &[f64], h: &[f64]) -> Vec<f64> {
    (0..h.len()).map(|i| (y[i + 1] - y[i]) / h[i]).collect()
}

/// Per-interval cubic coefficients from node values and Hermite slopes
/// t[0..=n], stored as [d, c, b, a].
fn cubic_from_hermite(y: &[f64], h: &[f64], t: &[f64]) -> Vec<[f64; 4]> {
    (0..h.len())
        .map(|i| {
            let dy = y[i + 1] - y[i];
            let a = y[i];
            let b = t[i];
            let c = (3.0 * dy / h[i] - 2.0 * t[i] - t[i + 1]) / h[i];
            let d = (-2.0 * dy / h[i] + t[i] + t[i + 1]) / (h[i] * h[i]);
            [d, c, b, a]
        })
        .collect()
}

/// Per-interval cubic coefficients from node values and second derivatives
/// (moments) m[0..=n], stored as [d, c, b, a].
fn cubic_from_moments(y: &[f64], h: &[f64], m: &[f64]) -> Vec<[f64; 4]> {
    (0..h.len())
        .map(|i| {
            let d = (m[i + 1] - m[i]) / (6.0 * h[i]);
            let c = m[i] / 2.0;
            let b = (y[i + 1] - y[i]) / h[i] - h[i] * (2.0 * m[i] + m[i + 1]) / 6.0;
            let a = y[i];
            [d, c, b, a]
        })
        .collect()
}

fn flat_table(y: &[f64]) -> Vec<[f64; 4]> {
    (0..y.len() - 1).map(|i| [0.0, 0.0, 0.0, y[i]]).collect()
}

// ─────────────────────────────────────────────
// Akima
// ─────────────────────────────────────────────
//
// No linear system; each node slope is a weighted average of neighbouring
// finite differences, with phantom slopes extrapolated past the ends:
//   s[-1] = 2*s[0] - s[1],   s[-2] = 2*s[-1] - s[0]
//   s[n]  = 2*s[n-1] - s[n-2],   s[n+1] = 2*s[n] - s[n-1]
// Weights w1 = |s[i+1] - s[i]|, w2 = |s[i-1] - s[i-2]|; equal neighbouring
// slopes collapse the average to the plain mean.

fn akima_slopes(s: &[f64]) -> Vec<f64> {
    let n = s.len();

    let s1 = if n > 1 { s[1] } else { s[0] };
    let sn2 = if n > 1 { s[n - 2] } else { s[n - 1] };

    let s_m1 = 2.0 * s[0] - s1;
    let s_m2 = 2.0 * s_m1 - s[0];
    let s_np1 = 2.0 * s[n - 1] - sn2;
    let s_np2 = 2.0 * s_np1 - s[n - 1];

    let mut ext = Vec::with_capacity(n + 4);
    ext.push(s_m2);
    ext.push(s_m1);
    ext.extend_from_slice(s);
    ext.push(s_np1);
    ext.push(s_np2);

    (0..=n)
        .map(|i| {
            let sm2 = ext[i];
            let sm1 = ext[i + 1];
            let sp0 = ext[i + 2];
            let sp1 = ext[i + 3];

            let w1 = (sp1 - sp0).abs();
            let w2 = (sm1 - sm2).abs();

            if w1 + w2 < f64::EPSILON {
                (sm1 + sp0) / 2.0
            } else {
                (w1 * sm1 + w2 * sp0) / (w1 + w2)
            }
        })
        .collect()
}

fn akima_block(x: &[f64], y: &[f64]) -> Vec<[f64; 4]> {
    let h = widths(x);
    let s = secant_slopes(y, &h);
    let t = akima_slopes(&s);
    cubic_from_hermite(y, &h, &t)
}

// ─────────────────────────────────────────────
// Bessel
// ─────────────────────────────────────────────
//
// Node slope is the derivative at the node of the parabola through the node
// and its two neighbours; end slopes come from the one-sided three-point
// formula. A single-interval block degrades to the secant.

fn bessel_slopes(h: &[f64], s: &[f64]) -> Vec<f64> {
    let n = h.len();
    let mut t = vec![0.0_f64; n + 1];

    if n == 1 {
        t[0] = s[0];
        t[1] = s[0];
        return t;
    }

    for i in 1..n {
        t[i] = (h[i] * s[i - 1] + h[i - 1] * s[i]) / (h[i - 1] + h[i]);
    }
    t[0] = ((2.0 * h[0] + h[1]) * s[0] - h[0] * s[1]) / (h[0] + h[1]);
    t[n] = ((2.0 * h[n - 1] + h[n - 2]) * s[n - 1] - h[n - 1] * s[n - 2])
        / (h[n - 1] + h[n - 2]);
    t
}

fn bessel_block(x: &[f64], y: &[f64]) -> Vec<[f64; 4]> {
    let h = widths(x);
    let s = secant_slopes(y, &h);
    let t = bessel_slopes(&h, &s);
    cubic_from_hermite(y, &h, &t)
}

// ─────────────────────────────────────────────
// PCHIP
// ─────────────────────────────────────────────
//
// Fritsch-Carlson shape-preserving slopes.
//
// Interior nodes take the weighted harmonic mean of the adjacent secants,
// zero where the secants change sign:
//   t[i] = (w1 + w2) / (w1/s[i-1] + w2/s[i])
//     with w1 = 2*h[i] + h[i-1], w2 = h[i] + 2*h[i-1]
// End slopes use the one-sided three-point formula, clipped so the boundary
// interval cannot overshoot.

fn pchip_end_slope(h0: f64, h1: f64, s0: f64, s1: f64) -> f64 {
    let raw = ((2.0 * h0 + h1) * s0 - h0 * s1) / (h0 + h1);
    if raw.signum() != s0.signum() {
        0.0
    } else if s0.signum() != s1.signum() && raw.abs() > 3.0 * s0.abs() {
        3.0 * s0
    } else {
        raw
    }
}

fn pchip_block(x: &[f64], y: &[f64]) -> Vec<[f64; 4]> {
    let h = widths(x);
    let s = secant_slopes(y, &h);
    let n = h.len();
    let mut t = vec![0.0_f64; n + 1];

    if n == 1 {
        t[0] = s[0];
        t[1] = s[0];
        return cubic_from_hermite(y, &h, &t);
    }

    for i in 1..n {
        if s[i - 1] * s[i] <= 0.0 {
            t[i] = 0.0;
        } else {
            let w1 = 2.0 * h[i] + h[i - 1];
            let w2 = h[i] + 2.0 * h[i - 1];
            t[i] = (w1 + w2) / (w1 / s[i - 1] + w2 / s[i]);
        }
    }
    t[0] = pchip_end_slope(h[0], h[1], s[0], s[1]);
    t[n] = pchip_end_slope(h[n - 1], h[n - 2], s[n - 1], s[n - 2]);

    cubic_from_hermite(y, &h, &t)
}

// ─────────────────────────────────────────────
// Natural cubic
// ─────────────────────────────────────────────
//
// Solves the (n+1)x(n+1) moment system, interior rows from C^2 continuity:
//   h[i-1]*m[i-1] + 2*(h[i-1]+h[i])*m[i] + h[i]*m[i+1]
//     = 6*( (y[i+1]-y[i])/h[i] - (y[i]-y[i-1])/h[i-1] )
// with m[0] = m[n] = 0 at the ends. Two nodes degrade to the secant line.

fn natural_moments(y: &[f64], h: &[f64], name: &str) -> Result<Vec<f64>, SplineError> {
    let n = h.len();
    let mut mat = DMatrix::<f64>::zeros(n + 1, n + 1);
    let mut rhs = DVector::<f64>::zeros(n + 1);

    for i in 1..n {
        mat[(i, i - 1)] = h[i - 1];
        mat[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        mat[(i, i + 1)] = h[i];
        rhs[i] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
    }
    mat[(0, 0)] = 1.0;
    mat[(n, n)] = 1.0;

    let m = mat
        .lu()
        .solve(&rhs)
        .ok_or_else(|| SplineError::SingularSystem {
            name: name.to_owned(),
        })?;
    Ok(m.as_slice().to_vec())
}

fn cubic_block(x: &[f64], y: &[f64], name: &str) -> Result<Vec<[f64; 4]>, SplineError> {
    let h = widths(x);
    let m = natural_moments(y, &h, name)?;
    Ok(cubic_from_moments(y, &h, &m))
}

// ─────────────────────────────────────────────
// Quintic
// ─────────────────────────────────────────────
//
// C^2 quintic Hermite: node first and second derivatives are taken from the
// natural cubic fit of the same block, then each interval is raised to the
// fifth-degree polynomial matching value, slope and curvature at both ends.

fn quintic_block(x: &[f64], y: &[f64], name: &str) -> Result<Vec<[f64; 6]>, SplineError> {
    let h = widths(x);
    let n = h.len();
    let m = natural_moments(y, &h, name)?;
    let cubic = cubic_from_moments(y, &h, &m);

    // Node first derivatives off the cubic: the `b` coefficient on the left
    // node, the end-of-interval derivative for the last node.
    let mut p = vec![0.0_f64; n + 1];
    for i in 0..n {
        p[i] = cubic[i][2];
    }
    let [d, c, b, _] = cubic[n - 1];
    p[n] = b + (2.0 * c + 3.0 * d * h[n - 1]) * h[n - 1];

    Ok((0..n)
        .map(|i| {
            let dy = y[i + 1] - y[i];
            let hi = h[i];
            let h2 = hi * hi;
            let (p0, p1) = (p[i], p[i + 1]);
            let (q0, q1) = (m[i], m[i + 1]);
            let c3 = (10.0 * dy - (6.0 * p0 + 4.0 * p1) * hi - (1.5 * q0 - 0.5 * q1) * h2)
                / (h2 * hi);
            let c4 = (-15.0 * dy + (8.0 * p0 + 7.0 * p1) * hi + (1.5 * q0 - q1) * h2)
                / (h2 * h2);
            let c5 = (6.0 * dy - 3.0 * (p0 + p1) * hi + 0.5 * (q1 - q0) * h2)
                / (h2 * h2 * hi);
            [c5, c4, c3, q0 / 2.0, p0, y[i]]
        })
        .collect())
}

// ─────────────────────────────────────────────
// Dispatch
// ─────────────────────────────────────────────

fn cubic_family_table(
    spline_type: SplineType,
    x: &[f64],
    y: &[f64],
    name: &str,
) -> Result<Vec<[f64; 4]>, SplineError> {
    let mut table = flat_table(y);
    for (a, b) in strict_blocks(x) {
        if b - a < 1 {
            continue;
        }
        let block = match spline_type {
            SplineType::Akima => akima_block(&x[a..=b], &y[a..=b]),
            SplineType::Bessel => bessel_block(&x[a..=b], &y[a..=b]),
            SplineType::Pchip => pchip_block(&x[a..=b], &y[a..=b]),
            SplineType::Cubic => cubic_block(&x[a..=b], &y[a..=b], name)?,
            _ => unreachable!("not a cubic family"),
        };
        table[a..(a + block.len())].copy_from_slice(&block);
    }
    Ok(table)
}

fn quintic_table(x: &[f64], y: &[f64], name: &str) -> Result<Vec<[f64; 6]>, SplineError> {
    let mut table: Vec<[f64; 6]> = (0..y.len() - 1)
        .map(|i| [0.0, 0.0, 0.0, 0.0, 0.0, y[i]])
        .collect();
    for (a, b) in strict_blocks(x) {
        if b - a < 1 {
            continue;
        }
        let block = quintic_block(&x[a..=b], &y[a..=b], name)?;
        table[a..(a + block.len())].copy_from_slice(&block);
    }
    Ok(table)
}

/// Precomputes the coefficient table for `spline_type` over built knots.
/// Requires at least two points; families needing more context degrade
/// gracefully on small inputs (down to the secant line at two points).
pub fn compute(
    spline_type: SplineType,
    x: &[f64],
    y: &[f64],
    name: &str,
) -> Result<Coefficients, SplineError> {
    match spline_type {
        SplineType::Constant => Ok(Coefficients::Constant),
        SplineType::Linear => Ok(Coefficients::Linear),
        SplineType::Akima | SplineType::Bessel | SplineType::Pchip | SplineType::Cubic => Ok(
            Coefficients::Cubic(cubic_family_table(spline_type, x, y, name)?),
        ),
        SplineType::Quintic => Ok(Coefficients::Quintic(quintic_table(x, y, name)?)),
    }
}
