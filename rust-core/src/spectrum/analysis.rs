//! High-level spectrum analyzer
//!
//! Holds a validated configuration and dispatches to the DFT engine

use log::warn;

use super::bin::FrequencyBin;
use super::dft::{nyquist_limit, transform};
use crate::error::{DftError, Result};

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Samples per unit time; bounds the number of reported bins
    pub sampling_frequency: f64,

    /// Spread bins across worker threads (requires the `parallel` feature)
    pub parallel: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sampling_frequency: 8.0,
            parallel: false,
        }
    }
}

/// Offline spectrum analyzer
#[derive(Debug, Clone)]
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    ///
    /// Fails with `InvalidParameter` unless the sampling frequency is a
    /// positive, finite number.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let fs = config.sampling_frequency;
        if !fs.is_finite() || fs <= 0.0 {
            return Err(DftError::invalid(format!(
                "sampling frequency must be a positive number, got {}",
                fs
            )));
        }

        if config.parallel && !cfg!(feature = "parallel") {
            warn!("built without the `parallel` feature, falling back to sequential DFT");
        }

        Ok(Self { config })
    }

    /// Analyze signal and return amplitude/phase per bin
    ///
    /// # Arguments
    /// * `signal` - Input samples (non-empty)
    ///
    /// # Returns
    /// One `FrequencyBin` per bin below the Nyquist limit
    pub fn analyze(&self, signal: &[f64]) -> Result<Vec<FrequencyBin>> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return super::dft::transform_parallel(signal, self.config.sampling_frequency);
        }

        transform(signal, self.config.sampling_frequency)
    }

    /// Number of bins `analyze` returns
    pub fn num_bins(&self) -> usize {
        nyquist_limit(self.config.sampling_frequency)
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
