//! # Vibron Compute
//!
//! Compute backend abstraction for the vibron simulator. This crate provides
//! a [`ComputeBackend`](backend::ComputeBackend) trait that isolates the
//! physics code from device-specific execution details.
//!
//! The simulation pipeline's hot loops (the window-restricted convolution
//! and the per-frequency spectral projections) are index-parallel: every
//! output element is independent of the others. A backend therefore only
//! needs to provide a deterministic, order-preserving parallel fill.

pub mod backend;
pub mod cpu;

pub use backend::{ComputeBackend, ComputeError, DeviceInfo};
pub use cpu::CpuBackend;
