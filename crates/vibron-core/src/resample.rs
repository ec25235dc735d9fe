//! Probe-delay axis and clamped linear interpolation.
//!
//! The FAST-CARS interferogram lives on its own uniform delay axis, far
//! coarser than the main time grid. The coherence is transferred onto it
//! by linear interpolation with edge clamping. The bracketing pair is
//! located by a linear scan: the delay axis has three orders of magnitude
//! fewer points than the grid, so a search structure would not pay for
//! itself.

use ndarray::Array1;

/// Number of points on the probe-delay axis.
pub const DELAY_POINTS: usize = 6000;

/// First probe delay (s).
pub const DELAY_MIN_S: f64 = -0.5e-12;

/// Last probe delay (s).
pub const DELAY_MAX_S: f64 = 7.5e-12;

/// The uniform probe-delay axis in seconds, inclusive of both endpoints.
pub fn delay_axis_s() -> Array1<f64> {
    let step = (DELAY_MAX_S - DELAY_MIN_S) / (DELAY_POINTS - 1) as f64;
    Array1::from_iter((0..DELAY_POINTS).map(|i| DELAY_MIN_S + i as f64 * step))
}

/// Linearly interpolate `(xs, ys)` at `x`, clamping to the edge values
/// outside the data range.
///
/// `xs` must be monotonically increasing. A query exactly on a knot
/// returns that knot's value.
pub fn interp_clamped(x: f64, xs: &Array1<f64>, ys: &Array1<f64>) -> f64 {
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }

    let mut i = 0;
    while x > xs[i + 1] {
        i += 1;
    }

    let x0 = xs[i];
    let x1 = xs[i + 1];
    let y0 = ys[i];
    let y1 = ys[i + 1];
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Resample a sequence defined on `times_s` onto the delay axis.
pub fn resample_onto(
    delays_s: &Array1<f64>,
    times_s: &Array1<f64>,
    samples: &Array1<f64>,
) -> Array1<f64> {
    delays_s.mapv(|tau| interp_clamped(tau, times_s, samples))
}
