//! Simulation orchestration, input validation, and the error taxonomy.
//!
//! [`Simulator::run`] wires the pipeline stages into one pure function from
//! an immutable [`SimulationInput`](crate::types::SimulationInput) to an
//! [`OutputBundle`](crate::types::OutputBundle). No state is retained
//! between invocations and no shared mutable state exists, so callers may
//! re-run freely and discard superseded results; scheduling concerns
//! (debounce, cancellation of stale runs) live entirely with the caller.

use std::sync::Arc;

use thiserror::Error;
use vibron_compute::{ComputeBackend, ComputeError, CpuBackend};

use crate::coherence::excite_coherence;
use crate::excitation::drive_field;
use crate::grid::TimeGrid;
use crate::pulse::evaluate_pulse;
use crate::resample::{delay_axis_s, resample_onto};
use crate::spectral::{
    cars_intensity, deconvolve, excitation_profile_raw, fast_cars_spectrum_raw,
    normalise_unit_peak, shift_axis_cm1,
};
use crate::susceptibility::total_kernel;
use crate::types::{OutputBundle, PulseRole, SimulationInput};

/// Display-axis subsampling applied to the pulse intensity traces.
pub const PULSE_TRACE_STRIDE: usize = 10;

/// Errors that reject a simulation input before any numerics run.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid {role} pulse: {field} must be positive, got {value}")]
    InvalidPulse {
        role: PulseRole,
        field: &'static str,
        value: f64,
    },

    #[error("Invalid vibrational mode {id}: dephasing time must be positive, got {value} ps")]
    InvalidMode { id: u64, value: f64 },

    #[error("Compute backend error: {0}")]
    Compute(#[from] ComputeError),
}

/// Validate an input snapshot against the parameter domain.
///
/// Wavelength and FWHM divide into the envelope and carrier formulas, and
/// the dephasing time divides into the decay exponent, so non-positive
/// (or NaN) values are rejected here rather than surfacing as NaN spectra.
pub fn validate(input: &SimulationInput) -> Result<(), SimulationError> {
    for (role, spec) in input.pulses.iter() {
        if !(spec.wavelength_nm > 0.0) {
            return Err(SimulationError::InvalidPulse {
                role,
                field: "wavelength_nm",
                value: spec.wavelength_nm,
            });
        }
        if !(spec.fwhm_fs > 0.0) {
            return Err(SimulationError::InvalidPulse {
                role,
                field: "fwhm_fs",
                value: spec.fwhm_fs,
            });
        }
    }
    for mode in &input.modes {
        if !(mode.dephasing_time_ps > 0.0) {
            return Err(SimulationError::InvalidMode {
                id: mode.id,
                value: mode.dephasing_time_ps,
            });
        }
    }
    Ok(())
}

/// The simulation orchestrator.
///
/// Holds the compute backend used for the index-parallel stages; all other
/// state is per-call. `Simulator` is `Send + Sync` and may be shared.
pub struct Simulator {
    backend: Arc<dyn ComputeBackend>,
}

impl Simulator {
    pub fn new(backend: Arc<dyn ComputeBackend>) -> Self {
        Self { backend }
    }

    /// Run one simulation.
    ///
    /// Deterministic: two invocations with identical inputs return
    /// bit-identical output arrays.
    pub fn run(&self, input: &SimulationInput) -> Result<OutputBundle, SimulationError> {
        validate(input)?;

        let grid = TimeGrid::standard();
        let backend = self.backend.as_ref();

        // Sample response and pulse waveforms over the shared grid.
        let chi = total_kernel(&grid, &input.modes, input.nrb_level);
        let pump = evaluate_pulse(&input.pulses.pump, &grid);
        let stokes = evaluate_pulse(&input.pulses.stokes, &grid);
        let probe = evaluate_pulse(&input.pulses.probe, &grid);

        // Driving field, active window, excited coherence.
        let excitation = drive_field(&pump, &stokes);
        let rho = excite_coherence(&chi, &excitation, &grid, backend)?;

        // Excitation (beat) spectral profile; the raw values feed the
        // optional deconvolution below.
        let exc_raw = excitation_profile_raw(&excitation, &grid, backend)?;
        let exc_norm = normalise_unit_peak(&exc_raw);

        // FAST-CARS branch: resample onto the delay axis, AC-couple,
        // project, optionally deconvolve, normalise to unit peak.
        let delays_s = delay_axis_s();
        let resampled = resample_onto(&delays_s, grid.times(), &rho);
        let mean = resampled.sum() / resampled.len() as f64;
        let interferogram = resampled.mapv(|v| v - mean);

        let fast_raw = fast_cars_spectrum_raw(&interferogram, &delays_s, backend)?;
        let fast = if input.normalise {
            deconvolve(&fast_raw, &exc_raw)
        } else {
            fast_raw
        };
        let fast_norm = normalise_unit_peak(&fast);

        // Conventional fs-CARS branch, reported unnormalised.
        let cars = cars_intensity(&rho, &probe, &grid, backend)?;

        // Subsampled display traces.
        let n = grid.len();
        let trace_len = (n + PULSE_TRACE_STRIDE - 1) / PULSE_TRACE_STRIDE;
        let mut pulse_time_fs = Vec::with_capacity(trace_len);
        let mut pump_intensity = Vec::with_capacity(trace_len);
        let mut stokes_intensity = Vec::with_capacity(trace_len);
        let mut probe_intensity = Vec::with_capacity(trace_len);
        for i in (0..n).step_by(PULSE_TRACE_STRIDE) {
            pulse_time_fs.push(grid.time(i) * 1e15);
            pump_intensity.push(pump.envelope[i] * pump.envelope[i]);
            stokes_intensity.push(stokes.envelope[i] * stokes.envelope[i]);
            probe_intensity.push(probe.envelope[i] * probe.envelope[i]);
        }

        Ok(OutputBundle {
            shift_axis_cm1: shift_axis_cm1().to_vec(),
            cars_intensity: cars.to_vec(),
            fast_cars_delays_ps: delays_s.mapv(|d| d * 1e12).to_vec(),
            fast_cars_interferogram: interferogram.to_vec(),
            fast_cars_spectrum: fast_norm.to_vec(),
            excitation_profile: exc_norm.to_vec(),
            pulse_time_fs,
            pump_intensity,
            stokes_intensity,
            probe_intensity,
        })
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Arc::new(CpuBackend::new()))
    }
}
