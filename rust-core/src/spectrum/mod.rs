//! Direct-sum spectral analysis

pub mod bin;
pub mod dft;
pub mod analysis;

pub use bin::{phase_angle_degrees, FrequencyBin};
#[cfg(feature = "parallel")]
pub use dft::transform_parallel;
pub use dft::{bin_coefficient, nyquist_limit, transform};
pub use analysis::{AnalyzerConfig, SpectrumAnalyzer};
