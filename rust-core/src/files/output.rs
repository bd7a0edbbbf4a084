//! Result sink: renders bins as report lines
//!
//! Line format is stable and used for compatibility checks:
//! `Frequency:<bin>\t\tAmplitude:<amplitude>\t\tPhase Angle:<phase>`

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{DftError, Result};
use crate::spectrum::FrequencyBin;

/// Shortest round-trip decimal form, with negative zero shown as `0`
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Render one bin as a report line (no trailing newline)
pub fn report_line(bin: &FrequencyBin) -> String {
    format!(
        "Frequency:{}\t\tAmplitude:{}\t\tPhase Angle:{}",
        bin.bin,
        format_number(bin.amplitude),
        format_number(bin.phase_angle)
    )
}

/// Write one newline-terminated line per bin
pub fn write_report<W: Write>(writer: &mut W, bins: &[FrequencyBin]) -> io::Result<()> {
    for bin in bins {
        writeln!(writer, "{}", report_line(bin))?;
    }
    writer.flush()
}

/// Write the report to a file, replacing any previous contents
pub fn write_report_file(path: impl AsRef<Path>, bins: &[FrequencyBin]) -> Result<()> {
    let path = path.as_ref();
    let to_error = |source| DftError::OutputWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    write_report(&mut BufWriter::new(file), bins).map_err(to_error)?;

    info!("Wrote {} bins to {}", bins.len(), path.display());
    Ok(())
}
