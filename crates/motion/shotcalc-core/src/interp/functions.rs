//! Interpolation helpers:
//! - secant slopes between knots
//! - monotone knot slopes (weighted harmonic mean inside, three-point at the ends)
//! - cubic Hermite segments in power form

/// -1, 0 or 1. Unlike `f64::signum`, zero maps to zero.
#[inline]
fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Widths and secant slopes of each segment between consecutive knots.
pub(crate) fn secants(xs: &[f64], ys: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = xs.len().saturating_sub(1);
    let mut widths = Vec::with_capacity(n);
    let mut slopes = Vec::with_capacity(n);
    for i in 0..n {
        let h = xs[i + 1] - xs[i];
        widths.push(h);
        slopes.push((ys[i + 1] - ys[i]) / h);
    }
    (widths, slopes)
}

/// Slope at an interior knot joining a segment of width `h_prev` / secant
/// `d_prev` to one of width `h_next` / secant `d_next`.
///
/// Zero at local extrema and flat spots, otherwise the weighted harmonic
/// mean of the two secants, which keeps the curve monotone on both sides.
#[inline]
pub fn interior_slope(h_prev: f64, h_next: f64, d_prev: f64, d_next: f64) -> f64 {
    let (s_prev, s_next) = (sign(d_prev), sign(d_next));
    if s_prev == 0 || s_next == 0 || s_prev != s_next {
        return 0.0;
    }
    let w1 = 2.0 * h_next + h_prev;
    let w2 = h_next + 2.0 * h_prev;
    (w1 + w2) / (w1 / d_prev + w2 / d_next)
}

/// Slope at an end knot from the adjacent segment (`h0`, `d0`) and the one
/// after it (`h1`, `d1`).
///
/// Non-centered three-point estimate, zeroed when it points against the end
/// segment and capped at `3 * d0` when the data turns, so the end segment
/// cannot overshoot.
#[inline]
pub fn end_slope(h0: f64, h1: f64, d0: f64, d1: f64) -> f64 {
    let slope = ((2.0 * h0 + h1) * d0 - h0 * d1) / (h0 + h1);
    if sign(slope) != sign(d0) {
        0.0
    } else if sign(d0) != sign(d1) && slope.abs() > 3.0 * d0.abs() {
        3.0 * d0
    } else {
        slope
    }
}

/// Knot slopes for a monotone piecewise cubic through `widths`/`secants`.
/// `widths` must be non-empty.
pub(crate) fn monotone_slopes(widths: &[f64], secants: &[f64]) -> Vec<f64> {
    let segments = widths.len();
    if segments == 1 {
        return vec![secants[0], secants[0]];
    }
    let mut slopes = Vec::with_capacity(segments + 1);
    slopes.push(end_slope(widths[0], widths[1], secants[0], secants[1]));
    for k in 1..segments {
        slopes.push(interior_slope(
            widths[k - 1],
            widths[k],
            secants[k - 1],
            secants[k],
        ));
    }
    slopes.push(end_slope(
        widths[segments - 1],
        widths[segments - 2],
        secants[segments - 1],
        secants[segments - 2],
    ));
    slopes
}

/// Power-form coefficients `[c0, c1, c2, c3]` of the cubic Hermite segment
/// starting at value `y0` with slope `m0`, ending at `y1` with slope `m1`,
/// over width `h`. Evaluate at offset `s` from the segment start as
/// `c0 + s*(c1 + s*(c2 + s*c3))`.
///
/// A straight line (`m0 == m1 == secant`) yields `c2 == c3 == 0`, so linear
/// data reproduces exactly.
#[inline]
pub fn hermite_coefficients(y0: f64, y1: f64, m0: f64, m1: f64, h: f64) -> [f64; 4] {
    let secant = (y1 - y0) / h;
    let c2 = (3.0 * secant - 2.0 * m0 - m1) / h;
    let c3 = (m0 + m1 - 2.0 * secant) / (h * h);
    [y0, m0, c2, c3]
}

#[inline]
pub fn eval_segment(c: &[f64; 4], s: f64) -> f64 {
    c[0] + s * (c[1] + s * (c[2] + s * c[3]))
}

#[inline]
pub fn eval_segment_derivative(c: &[f64; 4], s: f64) -> f64 {
    c[1] + s * (2.0 * c[2] + 3.0 * s * c[3])
}
