//! CPU compute backend using Rayon for shared-memory parallelism.

use ndarray::Array1;

use crate::backend::{ComputeBackend, ComputeError, DeviceInfo};

/// CPU backend that parallelises work across threads via Rayon.
pub struct CpuBackend {
    num_threads: usize,
}

impl CpuBackend {
    /// Create a new CPU backend using all available threads.
    pub fn new() -> Self {
        Self {
            num_threads: rayon::current_num_threads(),
        }
    }

    /// Create a CPU backend with a specified thread count.
    ///
    /// The count is informational; work is scheduled on the global Rayon
    /// pool. Results are identical for any thread count.
    pub fn with_threads(num_threads: usize) -> Self {
        Self { num_threads }
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for CpuBackend {
    fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            name: format!("CPU ({} threads)", self.num_threads),
            compute_units: Some(self.num_threads),
        }
    }

    fn parallel_fill(
        &self,
        len: usize,
        fill_fn: &(dyn Fn(usize) -> f64 + Send + Sync),
    ) -> Result<Array1<f64>, ComputeError> {
        use rayon::prelude::*;

        let data: Vec<f64> = (0..len).into_par_iter().map(fill_fn).collect();

        Array1::from_shape_vec(len, data)
            .map_err(|e| ComputeError::DeviceError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_fill_preserves_index_order() {
        let backend = CpuBackend::new();
        let out = backend
            .parallel_fill(1000, &|i| i as f64 * 0.5)
            .expect("fill should succeed");

        assert_eq!(out.len(), 1000);
        for i in 0..1000 {
            assert_eq!(out[i], i as f64 * 0.5, "element {} out of order", i);
        }
    }

    #[test]
    fn test_parallel_fill_matches_serial_evaluation() {
        let backend = CpuBackend::new();
        let f = |i: usize| ((i as f64) * 0.013).sin() / (1.0 + i as f64);

        let parallel = backend.parallel_fill(4096, &f).unwrap();
        let serial: Vec<f64> = (0..4096).map(f).collect();

        // Bit-identical, not just approximately equal: no reduction order
        // is involved, each element is computed independently.
        assert_eq!(parallel.to_vec(), serial);
    }

    #[test]
    fn test_empty_fill() {
        let backend = CpuBackend::with_threads(2);
        let out = backend.parallel_fill(0, &|_| 1.0).unwrap();
        assert!(out.is_empty());
    }
}
