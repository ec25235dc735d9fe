//! Embedded reference data.
//!
//! A small built-in parameter library: the methane vibrational modes and
//! the default three-pulse configuration. These are starting points for
//! callers, not special-cased anywhere in the pipeline.

use crate::types::{PulseBank, PulseSpec, VibrationalMode};

/// Methane (CH₄) Raman-active modes.
///
/// Shifts and relative strengths for the four fundamentals:
/// ν₁ symmetric stretch (2917 cm⁻¹), ν₃ asymmetric stretch (3019 cm⁻¹),
/// ν₂ bend (1534 cm⁻¹), ν₄ bend (1306 cm⁻¹).
pub fn methane_modes() -> Vec<VibrationalMode> {
    vec![
        VibrationalMode { id: 1, raman_shift_cm1: 2917.0, strength: 1.0, dephasing_time_ps: 2.0 },
        VibrationalMode { id: 2, raman_shift_cm1: 3019.0, strength: 0.8, dephasing_time_ps: 1.8 },
        VibrationalMode { id: 3, raman_shift_cm1: 1534.0, strength: 0.35, dephasing_time_ps: 2.5 },
        VibrationalMode { id: 4, raman_shift_cm1: 1306.0, strength: 0.45, dephasing_time_ps: 2.5 },
    ]
}

/// Default pulse configuration: a degenerate 800 nm pump/probe with a
/// 1030 nm Stokes. Pump and Stokes arrive together at −50 fs; the probe
/// follows at +100 fs, after the non-resonant background has decayed.
pub fn default_pulses() -> PulseBank {
    PulseBank {
        pump: PulseSpec {
            wavelength_nm: 800.0,
            fwhm_fs: 15.0,
            delay_fs: -50.0,
            chirp_rate: 0.0,
        },
        stokes: PulseSpec {
            wavelength_nm: 1030.0,
            fwhm_fs: 15.0,
            delay_fs: -50.0,
            chirp_rate: 0.0,
        },
        probe: PulseSpec {
            wavelength_nm: 800.0,
            fwhm_fs: 60.0,
            delay_fs: 100.0,
            chirp_rate: 0.0,
        },
    }
}
