//! Test-signal generator
//!
//! Writes one full sine cycle spread over `count` samples, rounded to 6
//! decimal places, in the same one-number-per-line format the sample source
//! reads

use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use log::info;

use super::output::format_number;
use crate::error::{DftError, Result};

/// Default number of generated samples
pub const DEFAULT_SAMPLE_COUNT: usize = 8;

/// Default output path for generated samples
pub const DEFAULT_SAMPLE_FILE: &str = "samples.dat";

fn round_micro(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// One sine cycle: `round6(sin(i * 2π / count))` for i in 0..count
pub fn sine_cycle(count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(DftError::invalid("sample count must be at least 1"));
    }

    let increment = 2.0 * PI / count as f64;
    Ok((0..count)
        .map(|i| round_micro((i as f64 * increment).sin()))
        .collect())
}

/// Render samples one per line, without a trailing newline
pub fn render_samples(samples: &[f64]) -> String {
    samples
        .iter()
        .map(|&s| format_number(s))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate `count` samples and write them to `path`
///
/// # Returns
/// The generated samples
pub fn write_sine_file(path: impl AsRef<Path>, count: usize) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let samples = sine_cycle(count)?;

    fs::write(path, render_samples(&samples)).map_err(|source| DftError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Samples written to {}", path.display());
    Ok(samples)
}
