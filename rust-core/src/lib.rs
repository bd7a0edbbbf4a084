//! DFT Analyzer - direct-sum Discrete Fourier Transform
//! 
//! Decomposes an evenly sampled real signal into per-bin amplitude and phase
//! up to the Nyquist limit, with file glue and optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod complex;
pub mod error;
pub mod files;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::DftError;
pub use spectrum::{transform, AnalyzerConfig, FrequencyBin, SpectrumAnalyzer};
