//! Window-restricted causal convolution of the response kernel with the
//! driving field.
//!
//! The excited coherence is
//!
//! $$
//! \rho(t_i) = \sum_{k = k_{\mathrm{start}}}^{k_{\mathrm{end}}}
//! \chi(t_{i-k+N/2}) \, F_{\mathrm{eff}}(t_k)
//! $$
//!
//! where the kernel is indexed relative to the grid's zero sample and
//! out-of-range kernel lookups are treated as zero. Restricting the sum to
//! the active window makes this O(n·w) with w ≪ n; it is still the dominant
//! cost of the pipeline, so the outer loop is dispatched through the
//! compute backend (each output sample is independent).

use ndarray::Array1;
use vibron_compute::{ComputeBackend, ComputeError};

use crate::excitation::ExcitationField;
use crate::grid::TimeGrid;

/// Convolve the total response kernel with the driving field over the
/// active window.
///
/// An empty window yields an identically zero coherence without touching
/// the backend.
pub fn excite_coherence(
    kernel: &Array1<f64>,
    excitation: &ExcitationField,
    grid: &TimeGrid,
    backend: &dyn ComputeBackend,
) -> Result<Array1<f64>, ComputeError> {
    let n = grid.len();

    let Some((k_start, k_end)) = excitation.window else {
        return Ok(Array1::zeros(n));
    };

    let half = grid.zero_index() as isize;
    let field = &excitation.field;

    backend.parallel_fill(n, &|i| {
        let mut sum = 0.0;
        for k in k_start..=k_end {
            let kernel_idx = i as isize - k as isize + half;
            if kernel_idx >= 0 && (kernel_idx as usize) < n {
                sum += kernel[kernel_idx as usize] * field[k];
            }
        }
        sum
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use vibron_compute::CpuBackend;

    /// A kernel that is 1 at the zero sample and 0 elsewhere turns the
    /// convolution into the identity on the windowed field.
    #[test]
    fn test_delta_kernel_reproduces_windowed_field() {
        let grid = TimeGrid::standard();
        let n = grid.len();
        let half = grid.zero_index();

        let mut kernel = Array1::zeros(n);
        kernel[half] = 1.0;

        let mut field = Array1::zeros(n);
        for (offset, v) in [(0usize, 0.3), (1, -1.2), (2, 0.8)] {
            field[half + offset] = v;
        }
        let excitation = ExcitationField {
            field: field.clone(),
            window: Some((half, half + 2)),
        };

        let backend = CpuBackend::new();
        let rho = excite_coherence(&kernel, &excitation, &grid, &backend).unwrap();

        for i in 0..n {
            assert_abs_diff_eq!(rho[i], field[i], epsilon = 1e-15);
        }
    }

    #[test]
    fn test_empty_window_gives_zero_coherence() {
        let grid = TimeGrid::standard();
        let kernel = Array1::from_elem(grid.len(), 1.0);
        let excitation = ExcitationField {
            field: Array1::zeros(grid.len()),
            window: None,
        };

        let backend = CpuBackend::new();
        let rho = excite_coherence(&kernel, &excitation, &grid, &backend).unwrap();
        assert!(rho.iter().all(|&v| v == 0.0));
    }

    /// Out-of-range kernel indices are skipped, not wrapped.
    #[test]
    fn test_kernel_lookups_do_not_wrap() {
        let grid = TimeGrid::standard();
        let n = grid.len();
        let half = grid.zero_index();

        // Kernel nonzero only at its last sample.
        let mut kernel = Array1::zeros(n);
        kernel[n - 1] = 5.0;

        // Unit impulse field at the zero sample.
        let mut field = Array1::zeros(n);
        field[half] = 1.0;
        let excitation = ExcitationField {
            field,
            window: Some((half, half)),
        };

        let backend = CpuBackend::new();
        let rho = excite_coherence(&kernel, &excitation, &grid, &backend).unwrap();

        // kernel_idx = i - half + half = i reaches n-1 only at i = n-1.
        assert_eq!(rho[n - 1], 5.0);
        assert!(rho.slice(ndarray::s![..n - 1]).iter().all(|&v| v == 0.0));
    }
}
