//! Compute backend trait and device abstraction.
//!
//! The [`ComputeBackend`] trait abstracts over different execution
//! environments so that the physics code in `vibron-core` remains
//! device-agnostic.

use ndarray::Array1;
use thiserror::Error;

/// Errors originating from compute backends.
#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("Device error: {0}")]
    DeviceError(String),
}

/// Describes the capabilities of a compute backend.
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub name: String,
    pub compute_units: Option<usize>,
}

/// Abstraction over compute backends.
///
/// Physics code in `vibron-core` operates against this trait.
/// Implementations must return elements in index order regardless of
/// scheduling, so that repeated runs produce bit-identical buffers.
pub trait ComputeBackend: Send + Sync {
    /// Return information about the device.
    fn device_info(&self) -> DeviceInfo;

    /// Evaluate `fill_fn(i)` for every `i` in `0..len` and collect the
    /// results in index order.
    ///
    /// This is the primary entry point for parallelising the coherence
    /// convolution (one call per output sample) and the direct Fourier
    /// projections (one call per frequency bin).
    fn parallel_fill(
        &self,
        len: usize,
        fill_fn: &(dyn Fn(usize) -> f64 + Send + Sync),
    ) -> Result<Array1<f64>, ComputeError>;
}
