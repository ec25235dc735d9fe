//! # Vibron Core
//!
//! The numerical backbone of the vibron framework. This crate simulates
//! time-domain coherent Raman spectroscopy (conventional fs-CARS and
//! background-free FAST-CARS) from laser-pulse and vibrational-mode
//! parameters.
//!
//! ## Architecture
//!
//! The pipeline is a pure, strictly forward data flow:
//!
//! 1. a fixed uniform time grid ([`grid`]),
//! 2. the time-domain nonlinear response of the sample ([`susceptibility`]),
//! 3. per-pulse envelope and phase traces ([`pulse`]),
//! 4. the pump×Stokes driving field and its active window ([`excitation`]),
//! 5. the excited vibrational coherence via windowed convolution
//!    ([`coherence`]),
//! 6. direct Fourier projections onto the Raman-shift axis ([`spectral`]),
//!    with the FAST-CARS branch first resampled onto a coarser probe-delay
//!    axis ([`resample`]).
//!
//! [`pipeline::Simulator`] wires the stages into one deterministic call:
//! identical inputs yield bit-identical output arrays, so callers may
//! freely re-run and discard superseded results.
//!
//! ## Modules
//!
//! - [`types`] — Core data structures (pulse specs, modes, result bundle).
//! - [`grid`] — The shared uniform time grid.
//! - [`susceptibility`] — Resonant and non-resonant response kernels.
//! - [`pulse`] — Gaussian envelope and (chirped) phase evaluation.
//! - [`excitation`] — Effective driving field and active window.
//! - [`coherence`] — Window-restricted causal convolution.
//! - [`spectral`] — Reusable direct Fourier projection and the spectra.
//! - [`resample`] — Probe-delay axis and clamped linear interpolation.
//! - [`pipeline`] — Orchestration, validation, and error taxonomy.
//! - [`library`] — Embedded reference data (methane modes, default pulses).

pub mod coherence;
pub mod excitation;
pub mod grid;
pub mod library;
pub mod pipeline;
pub mod pulse;
pub mod resample;
pub mod spectral;
pub mod susceptibility;
pub mod types;
