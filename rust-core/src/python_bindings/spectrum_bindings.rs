//! Python bindings for the DFT engine

use numpy::PyReadonlyArray1;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::DftError;
use crate::files::report_line;
use crate::spectrum::{transform as dft_transform, FrequencyBin};

impl From<DftError> for PyErr {
    fn from(err: DftError) -> Self {
        match err {
            DftError::InvalidParameter(_) | DftError::MalformedSample { .. } => {
                PyValueError::new_err(err.to_string())
            }
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Amplitude and phase of one frequency bin
#[pyclass(name = "FrequencyBin")]
#[derive(Clone)]
pub struct PyFrequencyBin {
    inner: FrequencyBin,
}

#[pymethods]
impl PyFrequencyBin {
    /// Bin index k
    #[getter]
    fn bin(&self) -> usize {
        self.inner.bin
    }

    /// Normalized amplitude
    #[getter]
    fn amplitude(&self) -> f64 {
        self.inner.amplitude
    }

    /// Phase angle in degrees
    #[getter]
    fn phase_angle(&self) -> f64 {
        self.inner.phase_angle
    }

    /// Render as a report line
    fn report_line(&self) -> String {
        report_line(&self.inner)
    }

    fn __repr__(&self) -> String {
        format!(
            "FrequencyBin(bin={}, amplitude={}, phase_angle={})",
            self.inner.bin, self.inner.amplitude, self.inner.phase_angle
        )
    }
}

/// Compute amplitude and phase per bin below the Nyquist limit
///
/// Args:
///     samples: Real samples as a contiguous float64 numpy array
///     sampling_frequency: Samples per unit time (> 0)
///
/// Returns:
///     List of FrequencyBin, one per bin in ascending order
#[pyfunction]
#[pyo3(signature = (samples, sampling_frequency))]
pub fn transform(
    samples: PyReadonlyArray1<f64>,
    sampling_frequency: f64,
) -> PyResult<Vec<PyFrequencyBin>> {
    let slice = samples
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let bins = dft_transform(slice, sampling_frequency)?;
    Ok(bins
        .into_iter()
        .map(|inner| PyFrequencyBin { inner })
        .collect())
}
