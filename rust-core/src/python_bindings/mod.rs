//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod spectrum_bindings;

/// Python module definition
#[pymodule]
fn dft_analyzer(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<spectrum_bindings::PyFrequencyBin>()?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::transform, m)?)?;

    Ok(())
}
