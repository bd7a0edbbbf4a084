//! Sample source: one decimal number per line

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{DftError, Result};

/// Parse samples from text
///
/// Surrounding whitespace is ignored and blank lines are skipped. Any other
/// line must hold a single finite decimal number.
pub fn parse_samples(text: &str) -> Result<Vec<f64>> {
    let mut samples = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => samples.push(value),
            _ => {
                return Err(DftError::MalformedSample {
                    line: index + 1,
                    content: trimmed.to_string(),
                })
            }
        }
    }

    Ok(samples)
}

/// Read and parse a sample file
pub fn read_samples(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| DftError::InputReadFailure {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("File contents of {}: {:?}", path.display(), contents);

    let samples = parse_samples(&contents)?;
    debug!("Read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
