//! Time-domain nonlinear response kernels.
//!
//! The sample's third-order response is modelled as the superposition of a
//! resonant vibrational part and a non-resonant electronic part:
//!
//! $$
//! \chi_R(t) = \sum_m A_m \, e^{-t/\tau_m} \sin(\Omega_m t) \quad (t \ge 0)
//! $$
//!
//! with $\Omega_m = 2\pi c \tilde{\nu}_m$ and $\tau_m$ the dephasing time.
//! The resonant part is causally gated to $t \ge 0$. The non-resonant
//! background is a narrow zero-centred Gaussian evaluated at every grid
//! point, *including* $t < 0$: it models an instantaneous electronic
//! response rather than a causal ringing term, so it is intentionally not
//! gated.

use ndarray::Array1;

use crate::grid::TimeGrid;
use crate::types::{raman_shift_to_angular, VibrationalMode};

/// Width of the non-resonant response Gaussian (s).
pub const NRB_WIDTH_S: f64 = 40e-15;

/// Fixed amplitude scale applied to the user-facing NRB level.
pub const NRB_SCALE: f64 = 5e-13;

/// Resonant vibrational kernel: damped sine per mode, summed, zero for
/// negative time.
///
/// O(n·m) for n grid samples and m modes.
pub fn resonant_kernel(grid: &TimeGrid, modes: &[VibrationalMode]) -> Array1<f64> {
    grid.times().mapv(|t| {
        if t < 0.0 {
            return 0.0;
        }
        let mut val = 0.0;
        for mode in modes {
            let omega = raman_shift_to_angular(mode.raman_shift_cm1);
            let tau = mode.dephasing_time_ps * 1e-12;
            val += mode.strength * (-t / tau).exp() * (omega * t).sin();
        }
        val
    })
}

/// Non-resonant kernel: a zero-centred Gaussian of width [`NRB_WIDTH_S`],
/// scaled so its integral is proportional to `nrb_level`.
///
/// A level of exactly zero produces an identically zero kernel.
pub fn nonresonant_kernel(grid: &TimeGrid, nrb_level: f64) -> Array1<f64> {
    let amplitude = nrb_level * NRB_SCALE / ((2.0 * std::f64::consts::PI).sqrt() * NRB_WIDTH_S);
    grid.times()
        .mapv(|t| amplitude * (-(t * t) / (2.0 * NRB_WIDTH_S * NRB_WIDTH_S)).exp())
}

/// Total response kernel: resonant plus non-resonant.
pub fn total_kernel(grid: &TimeGrid, modes: &[VibrationalMode], nrb_level: f64) -> Array1<f64> {
    resonant_kernel(grid, modes) + nonresonant_kernel(grid, nrb_level)
}
