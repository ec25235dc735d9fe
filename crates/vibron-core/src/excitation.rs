//! Effective driving field and active window.
//!
//! The pump/Stokes pair drives the vibrational coherence through the beat
//! of their fields:
//!
//! $$
//! F_{\mathrm{eff}}(t) = \mathrm{env}_p(t)\,\mathrm{env}_s(t)\,
//! \cos\bigl(\phi_p(t) - \phi_s(t)\bigr)
//! $$
//!
//! Because both pulses are femtosecond-scale against a picosecond grid,
//! the field is negligible over most samples. The *active window* is the
//! inclusive index range over which the pulses overlap, and bounds the
//! cost of the downstream convolution.

use ndarray::Array1;

use crate::pulse::PulseWaveform;

/// Active-window threshold as a fraction of the field's peak magnitude.
pub const WINDOW_THRESHOLD_RATIO: f64 = 1e-5;

/// The effective driving field over the grid, plus its active window.
#[derive(Debug, Clone)]
pub struct ExcitationField {
    /// $F_{\mathrm{eff}}(t)$ per grid sample.
    pub field: Array1<f64>,
    /// Inclusive index range `(k_start, k_end)` where the pulse overlap is
    /// non-negligible, or `None` when the pulses never overlap above
    /// threshold (all downstream results are then identically zero).
    pub window: Option<(usize, usize)>,
}

/// Combine the pump and Stokes waveforms into the driving field and locate
/// the active window.
///
/// The threshold is derived from the peak magnitude of the oscillatory
/// field but applied to the smoother envelope *product*, so the window
/// comes out slightly wider than a strict field-magnitude cut. All
/// downstream spectra assume this window definition.
pub fn drive_field(pump: &PulseWaveform, stokes: &PulseWaveform) -> ExcitationField {
    let n = pump.envelope.len();
    debug_assert_eq!(n, stokes.envelope.len());

    let mut field = Array1::zeros(n);
    let mut max_abs = 0.0_f64;
    for i in 0..n {
        let f = pump.envelope[i]
            * stokes.envelope[i]
            * (pump.total_phase[i] - stokes.total_phase[i]).cos();
        field[i] = f;
        max_abs = max_abs.max(f.abs());
    }

    let thresh = max_abs * WINDOW_THRESHOLD_RATIO;
    let mut window = None;
    for i in 0..n {
        if pump.envelope[i] * stokes.envelope[i] > thresh {
            window = match window {
                None => Some((i, i)),
                Some((start, _)) => Some((start, i)),
            };
        }
    }

    ExcitationField { field, window }
}
