//! Core types shared across the vibron framework.
//!
//! This module defines the fundamental data structures used throughout the
//! simulation pipeline: pulse specifications, vibrational modes, the input
//! snapshot, and the result bundle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Speed of light in cm/s. Raman shifts are quoted in cm⁻¹, so angular
/// frequencies derived from them use CGS length units.
pub const C_CM_PER_S: f64 = 2.997_924_58e10;

/// Speed of light in m/s, used for laser carrier frequencies (wavelengths
/// are quoted in nm).
pub const C_M_PER_S: f64 = 2.997_924_58e8;

/// Convert a Raman shift in cm⁻¹ to an angular frequency in rad/s.
///
/// $\omega = 2\pi c \tilde{\nu}$ with $c$ in cm/s.
pub fn raman_shift_to_angular(shift_cm1: f64) -> f64 {
    2.0 * std::f64::consts::PI * C_CM_PER_S * shift_cm1
}

/// The three pulse roles of the experiment.
///
/// Pulses are stored in a fixed struct-of-three ([`PulseBank`]) rather than
/// a keyed map; iteration goes through [`PulseRole::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PulseRole {
    Pump,
    Stokes,
    Probe,
}

impl PulseRole {
    /// All roles, in the conventional pump/Stokes/probe order.
    pub const ALL: [PulseRole; 3] = [PulseRole::Pump, PulseRole::Stokes, PulseRole::Probe];

    /// Lower-case label used in logs and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            PulseRole::Pump => "pump",
            PulseRole::Stokes => "stokes",
            PulseRole::Probe => "probe",
        }
    }
}

impl fmt::Display for PulseRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Specification of a single laser pulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseSpec {
    /// Carrier wavelength (nm). Must be positive.
    pub wavelength_nm: f64,
    /// Intensity full width at half maximum (fs). Must be positive.
    pub fwhm_fs: f64,
    /// Centre delay relative to the grid origin (fs).
    pub delay_fs: f64,
    /// User-facing linear chirp rate. Scaled by 1e27 into rad/s² when the
    /// quadratic phase is evaluated.
    pub chirp_rate: f64,
}

/// The three pulses of one simulation run, tagged by role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseBank {
    pub pump: PulseSpec,
    pub stokes: PulseSpec,
    pub probe: PulseSpec,
}

impl PulseBank {
    /// Access a pulse by role.
    pub fn get(&self, role: PulseRole) -> &PulseSpec {
        match role {
            PulseRole::Pump => &self.pump,
            PulseRole::Stokes => &self.stokes,
            PulseRole::Probe => &self.probe,
        }
    }

    /// Iterate over the pulses in role order.
    pub fn iter(&self) -> impl Iterator<Item = (PulseRole, &PulseSpec)> {
        PulseRole::ALL.iter().map(move |&role| (role, self.get(role)))
    }
}

/// A single vibrational resonance of the sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VibrationalMode {
    /// Opaque identifier, stable across runs. The core carries it but never
    /// interprets it; callers use it to track modes between edits.
    pub id: u64,
    /// Raman shift (cm⁻¹). Must be positive.
    pub raman_shift_cm1: f64,
    /// Oscillator strength. Sign is allowed; magnitude scales the resonant
    /// amplitude linearly.
    pub strength: f64,
    /// Dephasing (T₂) time in ps. Must be positive: it divides the decay
    /// exponent.
    pub dephasing_time_ps: f64,
}

/// An immutable parameter snapshot for one simulation run.
///
/// Mode order does not affect the physics (the resonant response is a
/// commutative superposition); the collection is ordered only for caller
/// convenience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    pub pulses: PulseBank,
    pub modes: Vec<VibrationalMode>,
    /// Non-resonant background level. Zero disables the NRB kernel exactly.
    pub nrb_level: f64,
    /// When true, the FAST-CARS spectrum is deconvolved by the excitation
    /// profile before its final normalisation.
    pub normalise: bool,
}

/// Complete results of one simulation run.
///
/// All arrays are freshly allocated per call; re-running with identical
/// inputs yields bit-identical contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputBundle {
    /// Raman-shift axis (cm⁻¹): 1500 points, 500 to 3498 in steps of 2.
    pub shift_axis_cm1: Vec<f64>,
    /// Conventional fs-CARS intensity per shift bin, in raw (unnormalised)
    /// units.
    pub cars_intensity: Vec<f64>,
    /// Probe-delay axis of the FAST-CARS interferogram (ps): 6000 points,
    /// −0.5 to +7.5.
    pub fast_cars_delays_ps: Vec<f64>,
    /// AC-coupled coherence resampled onto the delay axis (the FAST-CARS
    /// interferogram signal).
    pub fast_cars_interferogram: Vec<f64>,
    /// FAST-CARS spectrum, normalised to [0, 1].
    pub fast_cars_spectrum: Vec<f64>,
    /// Excitation (beat) spectral profile, normalised to [0, 1].
    pub excitation_profile: Vec<f64>,
    /// Display time axis (fs): every 10th grid sample.
    pub pulse_time_fs: Vec<f64>,
    /// Pump intensity envelope² on the display axis.
    pub pump_intensity: Vec<f64>,
    /// Stokes intensity envelope² on the display axis.
    pub stokes_intensity: Vec<f64>,
    /// Probe intensity envelope² on the display axis.
    pub probe_intensity: Vec<f64>,
}
