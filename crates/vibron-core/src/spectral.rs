//! Direct Fourier projection and the derived spectra.
//!
//! All displayed spectra come from the same operation: projecting a
//! time-domain sequence onto $e^{-i\omega t}$ at each Raman-shift bin,
//!
//! $$
//! S(\omega) = \sum_{k \in K} s_k \, e^{-i \omega t_k}
//! $$
//!
//! over a strided index subset $K$ (every second sample, for speed). The
//! projection is computed directly rather than via FFT: the target
//! frequencies form their own axis, independent of the grid's conjugate
//! frequencies. Frequency bins are independent, so each spectrum is filled
//! through the compute backend.
//!
//! Three projections are taken per run:
//! - the excitation (beat) profile of the driving field over its active
//!   window,
//! - the FAST-CARS spectrum of the AC-coupled, delay-resampled coherence,
//! - the conventional fs-CARS spectrum of the probe-gated polarisation.

use ndarray::Array1;
use num_complex::Complex64;
use vibron_compute::{ComputeBackend, ComputeError};

use crate::excitation::ExcitationField;
use crate::grid::TimeGrid;
use crate::pulse::PulseWaveform;
use crate::types::raman_shift_to_angular;

/// First bin of the Raman-shift axis (cm⁻¹).
pub const SHIFT_MIN_CM1: f64 = 500.0;

/// Bin width of the Raman-shift axis (cm⁻¹).
pub const SHIFT_STEP_CM1: f64 = 2.0;

/// Number of Raman-shift bins.
pub const SHIFT_BINS: usize = 1500;

/// Subsampling stride applied inside every projection sum.
pub const PROJECTION_STRIDE: usize = 2;

/// Excitation-weight floor below which deconvolution forces a bin to zero
/// instead of amplifying it.
pub const DECONVOLUTION_FLOOR: f64 = 1e-4;

/// The Raman-shift axis: `SHIFT_BINS` values from `SHIFT_MIN_CM1` in steps
/// of `SHIFT_STEP_CM1`.
pub fn shift_axis_cm1() -> Array1<f64> {
    Array1::from_iter((0..SHIFT_BINS).map(|b| SHIFT_MIN_CM1 + b as f64 * SHIFT_STEP_CM1))
}

/// Angular frequency of a Raman-shift bin.
fn bin_angular_frequency(bin: usize) -> f64 {
    raman_shift_to_angular(SHIFT_MIN_CM1 + bin as f64 * SHIFT_STEP_CM1)
}

/// Project a real sequence onto $e^{-i\omega t}$ over the inclusive index
/// range `[start, end]` with the given stride.
pub fn project_real(
    samples: &Array1<f64>,
    times_s: &Array1<f64>,
    start: usize,
    end: usize,
    stride: usize,
    omega: f64,
) -> Complex64 {
    let mut re = 0.0;
    let mut im = 0.0;
    let mut k = start;
    while k <= end {
        let wt = omega * times_s[k];
        re += samples[k] * wt.cos();
        im -= samples[k] * wt.sin();
        k += stride;
    }
    Complex64::new(re, im)
}

/// Project a complex sequence (given as real and imaginary parts) onto
/// $e^{-i\omega t}$ over the full array with the given stride.
pub fn project_complex(
    re_samples: &Array1<f64>,
    im_samples: &Array1<f64>,
    times_s: &Array1<f64>,
    stride: usize,
    omega: f64,
) -> Complex64 {
    let mut s_re = 0.0;
    let mut s_im = 0.0;
    let mut k = 0;
    let n = re_samples.len();
    while k < n {
        let wt = omega * times_s[k];
        let c = wt.cos();
        let s = wt.sin();
        s_re += re_samples[k] * c + im_samples[k] * s;
        s_im += im_samples[k] * c - re_samples[k] * s;
        k += stride;
    }
    Complex64::new(s_re, s_im)
}

/// Raw excitation (beat) spectral profile: $|\hat{F}(\omega)|^2$ per shift
/// bin, with the projection restricted to the active window.
///
/// An empty window yields an all-zero profile.
pub fn excitation_profile_raw(
    excitation: &ExcitationField,
    grid: &TimeGrid,
    backend: &dyn ComputeBackend,
) -> Result<Array1<f64>, ComputeError> {
    let Some((k_start, k_end)) = excitation.window else {
        return Ok(Array1::zeros(SHIFT_BINS));
    };

    let field = &excitation.field;
    let times = grid.times();
    backend.parallel_fill(SHIFT_BINS, &|bin| {
        let omega = bin_angular_frequency(bin);
        project_real(field, times, k_start, k_end, PROJECTION_STRIDE, omega).norm_sqr()
    })
}

/// Raw FAST-CARS spectrum: $|\hat{s}(\omega)|^2$ of the AC-coupled
/// interferogram signal over the full delay axis.
pub fn fast_cars_spectrum_raw(
    signal_ac: &Array1<f64>,
    delays_s: &Array1<f64>,
    backend: &dyn ComputeBackend,
) -> Result<Array1<f64>, ComputeError> {
    let end = delays_s.len() - 1;
    backend.parallel_fill(SHIFT_BINS, &|bin| {
        let omega = bin_angular_frequency(bin);
        let proj = project_real(signal_ac, delays_s, 0, end, PROJECTION_STRIDE, omega);
        let mag = proj.norm();
        mag * mag
    })
}

/// Conventional fs-CARS spectrum.
///
/// The probe gates the coherence into an analytic polarisation
/// $P(t) = \rho(t)\,\mathrm{env}_{pr}(t)\,e^{i\phi_{\mathrm{chirp}}(t)}$
/// (only the probe's chirp phase enters; the carrier is removed by the
/// anti-Stokes detection), which is projected over the full grid. The
/// result is a magnitude, reported in raw units without renormalisation.
pub fn cars_intensity(
    rho: &Array1<f64>,
    probe: &PulseWaveform,
    grid: &TimeGrid,
    backend: &dyn ComputeBackend,
) -> Result<Array1<f64>, ComputeError> {
    let n = grid.len();
    let mut p_re = Array1::zeros(n);
    let mut p_im = Array1::zeros(n);
    for i in 0..n {
        let amp = rho[i] * probe.envelope[i];
        p_re[i] = amp * probe.chirp_phase[i].cos();
        p_im[i] = amp * probe.chirp_phase[i].sin();
    }

    let times = grid.times();
    backend.parallel_fill(SHIFT_BINS, &|bin| {
        let omega = bin_angular_frequency(bin);
        project_complex(&p_re, &p_im, times, PROJECTION_STRIDE, omega).norm()
    })
}

/// Deconvolve a spectrum by the raw excitation profile.
///
/// Each bin is divided by its excitation weight (the raw profile scaled to
/// unit peak) when the weight exceeds [`DECONVOLUTION_FLOOR`]; bins at or
/// below the floor are forced to zero rather than amplified. The low floor
/// keeps the tails of the beat profile usable, where far-lying modes live.
pub fn deconvolve(spectrum: &Array1<f64>, excitation_raw: &Array1<f64>) -> Array1<f64> {
    let max_exc = excitation_raw.iter().cloned().fold(0.0_f64, f64::max);
    if max_exc <= 0.0 {
        return Array1::zeros(spectrum.len());
    }

    Array1::from_iter(spectrum.iter().zip(excitation_raw.iter()).map(|(&v, &e)| {
        let weight = e / max_exc;
        if weight > DECONVOLUTION_FLOOR {
            v / weight
        } else {
            0.0
        }
    }))
}

/// Scale a non-negative spectrum to unit peak. An all-zero input is
/// returned unchanged.
pub fn normalise_unit_peak(values: &Array1<f64>) -> Array1<f64> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if max > 0.0 {
        values / max
    } else {
        values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_shift_axis_bounds() {
        let axis = shift_axis_cm1();
        assert_eq!(axis.len(), SHIFT_BINS);
        assert_eq!(axis[0], 500.0);
        assert_eq!(axis[SHIFT_BINS - 1], 3498.0);
    }

    #[test]
    fn test_projection_of_matched_cosine_is_large_and_real() {
        // s(t) = cos(ω₀ t) projected at ω₀ over a symmetric window gives
        // Re ≈ N/2 and Im ≈ 0 (odd integrand over even range).
        let n = 4001;
        let dt = 1e-15;
        let times = Array1::from_iter((0..n).map(|i| (i as isize - 2000) as f64 * dt));
        let omega0 = raman_shift_to_angular(2000.0);
        let samples = times.mapv(|t| (omega0 * t).cos());

        let on_peak = project_real(&samples, &times, 0, n - 1, 1, omega0);
        assert!(on_peak.re > 0.4 * n as f64);
        assert_abs_diff_eq!(on_peak.im, 0.0, epsilon = 1e-9 * n as f64);

        let off_peak = project_real(&samples, &times, 0, n - 1, 1, raman_shift_to_angular(3400.0));
        assert!(off_peak.norm() < 0.05 * on_peak.norm());
    }

    #[test]
    fn test_complex_projection_reduces_to_real_projection() {
        let n = 512;
        let times = Array1::from_iter((0..n).map(|i| i as f64 * 1e-15));
        let samples = times.mapv(|t| (1e13 * t).sin());
        let zeros = Array1::zeros(n);
        let omega = raman_shift_to_angular(1500.0);

        let real = project_real(&samples, &times, 0, n - 1, 2, omega);
        let complex = project_complex(&samples, &zeros, &times, 2, omega);

        assert_abs_diff_eq!(real.re, complex.re, epsilon = 1e-12);
        assert_abs_diff_eq!(real.im, complex.im, epsilon = 1e-12);
    }

    #[test]
    fn test_stride_skips_samples() {
        let n = 8;
        let times = Array1::from_elem(n, 0.0); // cos(0)=1, sin(0)=0
        let samples = Array1::from_iter((0..n).map(|i| i as f64));

        // Stride 2 from index 0 sums the even entries: 0+2+4+6 = 12.
        let proj = project_real(&samples, &times, 0, n - 1, 2, 1.0);
        assert_eq!(proj.re, 12.0);
        assert_eq!(proj.im, 0.0);
    }

    #[test]
    fn test_deconvolve_guards_small_weights() {
        let spectrum = Array1::from(vec![2.0, 3.0, 1.0]);
        let excitation = Array1::from(vec![1.0, 1e-6, 0.5]);

        let out = deconvolve(&spectrum, &excitation);
        assert_eq!(out[0], 2.0); // weight 1
        assert_eq!(out[1], 0.0); // weight 1e-6 ≤ floor → forced to zero
        assert_eq!(out[2], 2.0); // weight 0.5
    }

    #[test]
    fn test_deconvolve_zero_profile_gives_zeros() {
        let spectrum = Array1::from(vec![1.0, 2.0]);
        let excitation = Array1::zeros(2);
        let out = deconvolve(&spectrum, &excitation);
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_normalise_unit_peak() {
        let values = Array1::from(vec![1.0, 4.0, 2.0]);
        let out = normalise_unit_peak(&values);
        assert_eq!(out.to_vec(), vec![0.25, 1.0, 0.5]);

        let zeros = Array1::zeros(3);
        assert!(normalise_unit_peak(&zeros).iter().all(|&v| v == 0.0));
    }
}
