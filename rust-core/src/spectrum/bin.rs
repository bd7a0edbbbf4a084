//! Per-bin transform result and the amplitude/phase derivation

use crate::complex::{magnitude, Complex64};

/// Amplitude and phase of one frequency bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBin {
    /// Bin index k
    pub bin: usize,

    /// `|X[k]| / N` after rounding and doubling, never negative
    pub amplitude: f64,

    /// Phase angle in degrees, within [-90, 90]
    pub phase_angle: f64,
}

impl FrequencyBin {
    /// Derive amplitude and phase from a rounded, doubled coefficient
    ///
    /// # Arguments
    /// * `bin` - Bin index k
    /// * `coefficient` - Coefficient after rounding and doubling
    /// * `sample_count` - Number of samples N (must be > 0)
    pub fn from_coefficient(bin: usize, coefficient: Complex64, sample_count: usize) -> Self {
        Self {
            bin,
            amplitude: magnitude(coefficient) / sample_count as f64,
            phase_angle: phase_angle_degrees(coefficient),
        }
    }
}

/// `atan(im / re)` in degrees
///
/// A zero real part resolves to +90 or -90 following the sign of the
/// imaginary part, and to 0 when both parts are zero.
pub fn phase_angle_degrees(coefficient: Complex64) -> f64 {
    if coefficient.re == 0.0 {
        return if coefficient.im > 0.0 {
            90.0
        } else if coefficient.im < 0.0 {
            -90.0
        } else {
            0.0
        };
    }

    (coefficient.im / coefficient.re).atan() * 180.0 / std::f64::consts::PI
}
