//! The shared uniform time grid.
//!
//! Every stage of the pipeline works on the same fixed grid: 32768 samples
//! at 0.5 fs spacing, centred at zero. The grid depends on no input
//! parameters, so a single instance can be built once and shared across
//! runs.

use ndarray::Array1;

/// Sample spacing of the main time grid (s).
pub const SAMPLE_SPACING_S: f64 = 0.5e-15;

/// Number of samples of the main time grid.
pub const SAMPLE_COUNT: usize = 32768;

/// The uniform time grid, with sample times precomputed.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    times_s: Array1<f64>,
}

impl TimeGrid {
    /// Build the standard grid: `SAMPLE_COUNT` samples at
    /// `SAMPLE_SPACING_S`, with $t_i = (i - N/2)\,\Delta t$.
    pub fn standard() -> Self {
        let half = (SAMPLE_COUNT / 2) as isize;
        let times_s = Array1::from_iter(
            (0..SAMPLE_COUNT).map(|i| (i as isize - half) as f64 * SAMPLE_SPACING_S),
        );
        Self { times_s }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times_s.is_empty()
    }

    /// Index of the $t = 0$ sample.
    pub fn zero_index(&self) -> usize {
        self.times_s.len() / 2
    }

    /// Sample time at index `i` (s).
    pub fn time(&self, i: usize) -> f64 {
        self.times_s[i]
    }

    /// All sample times (s).
    pub fn times(&self) -> &Array1<f64> {
        &self.times_s
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::standard()
    }
}
