//! Gaussian pulse envelope and phase evaluation.
//!
//! Each pulse is a transform-limited-or-chirped Gaussian:
//!
//! $$
//! E(t) \propto e^{-\tau^2 / 2\sigma^2} \cos(\omega_0 t - \tfrac{1}{2} b \tau^2),
//! \qquad \tau = t - t_0
//! $$
//!
//! where $\sigma$ is derived from the intensity FWHM and $b$ is the linear
//! chirp rate. The pipeline carries the envelope, the quadratic chirp
//! phase, and the total phase separately: the excitation stage needs phase
//! differences, while the probe stage needs the chirp phase alone.

use ndarray::Array1;

use crate::grid::TimeGrid;
use crate::types::{PulseSpec, C_M_PER_S};

/// Unit-conversion constant mapping the user-facing chirp parameter into
/// rad/s².
pub const CHIRP_RATE_SCALE: f64 = 1e27;

/// Carrier angular frequency for a wavelength in nm: $\omega_0 = 2\pi c / \lambda$.
pub fn carrier_angular_frequency(wavelength_nm: f64) -> f64 {
    2.0 * std::f64::consts::PI * C_M_PER_S / (wavelength_nm * 1e-9)
}

/// Gaussian σ (s) from an intensity FWHM in fs: $\sigma = \mathrm{FWHM} / (2\sqrt{\ln 2})$.
pub fn fwhm_to_sigma_s(fwhm_fs: f64) -> f64 {
    fwhm_fs * 1e-15 / (2.0 * (2.0_f64.ln()).sqrt())
}

/// Per-sample envelope and phase traces of one pulse over the grid.
#[derive(Debug, Clone)]
pub struct PulseWaveform {
    /// Field envelope, unit peak.
    pub envelope: Array1<f64>,
    /// Quadratic chirp phase $\tfrac{1}{2} b \tau^2$ (rad).
    pub chirp_phase: Array1<f64>,
    /// Total phase $-\omega_0 t + \tfrac{1}{2} b \tau^2$ (rad).
    pub total_phase: Array1<f64>,
}

/// Evaluate one pulse specification over the time grid.
pub fn evaluate_pulse(spec: &PulseSpec, grid: &TimeGrid) -> PulseWaveform {
    let omega0 = carrier_angular_frequency(spec.wavelength_nm);
    let sigma = fwhm_to_sigma_s(spec.fwhm_fs);
    let t0 = spec.delay_fs * 1e-15;
    let b = spec.chirp_rate * CHIRP_RATE_SCALE;

    let n = grid.len();
    let mut envelope = Array1::zeros(n);
    let mut chirp_phase = Array1::zeros(n);
    let mut total_phase = Array1::zeros(n);

    for i in 0..n {
        let t = grid.time(i);
        let tau = t - t0;
        envelope[i] = (-(tau * tau) / (2.0 * sigma * sigma)).exp();
        chirp_phase[i] = 0.5 * b * tau * tau;
        total_phase[i] = -omega0 * t + chirp_phase[i];
    }

    PulseWaveform {
        envelope,
        chirp_phase,
        total_phase,
    }
}
