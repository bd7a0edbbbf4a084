//! Direct-sum DFT engine for real-valued signals
//!
//! Evaluates X[k] = Σ x[n]·e^(-i·2π·k·n/N) bin by bin, up to the Nyquist
//! limit implied by the sampling frequency

use std::f64::consts::PI;

use log::{debug, trace};

use super::bin::FrequencyBin;
use crate::complex::{self, Complex64};
use crate::error::{DftError, Result};

/// Number of bins reported for a sampling frequency: `floor(fs / 2)`
///
/// Non-positive and non-finite frequencies yield 0.
pub fn nyquist_limit(sampling_frequency: f64) -> usize {
    if !sampling_frequency.is_finite() || sampling_frequency <= 0.0 {
        return 0;
    }
    (sampling_frequency / 2.0).floor() as usize
}

/// Raw coefficient of bin `k`, accumulated in sample order
///
/// Not rounded or doubled. `k` may exceed `samples.len()`; the basis is
/// periodic, so such bins repeat bin `k mod N` up to floating-point error.
pub fn bin_coefficient(samples: &[f64], k: usize) -> Complex64 {
    let n_samples = samples.len() as f64;

    samples
        .iter()
        .enumerate()
        .fold(Complex64::new(0.0, 0.0), |sum, (n, &x)| {
            let theta = -(k as f64) * n as f64 * 2.0 * PI / n_samples;
            let term = complex::multiply_scalar(complex::unit_phasor(theta), x);
            complex::add(sum, term)
        })
}

/// Compute amplitude and phase for one bin
fn evaluate_bin(samples: &[f64], k: usize) -> FrequencyBin {
    let raw = bin_coefficient(samples, k);

    // 2-decimal floor on accumulation noise, then fold in the mirror bin
    let coefficient = complex::multiply_scalar(complex::round_hundredths(raw), 2.0);
    trace!("bin {}: raw {} -> {}", k, raw, coefficient);

    FrequencyBin::from_coefficient(k, coefficient, samples.len())
}

fn validate(samples: &[f64], sampling_frequency: f64) -> Result<usize> {
    if !sampling_frequency.is_finite() || sampling_frequency <= 0.0 {
        return Err(DftError::invalid(format!(
            "sampling frequency must be a positive number, got {}",
            sampling_frequency
        )));
    }
    if samples.is_empty() {
        return Err(DftError::invalid("sample sequence is empty"));
    }
    if let Some(index) = samples.iter().position(|x| !x.is_finite()) {
        return Err(DftError::invalid(format!(
            "sample {} is not finite ({})",
            index, samples[index]
        )));
    }

    let limit = nyquist_limit(sampling_frequency);
    debug!(
        "DFT over {} samples, sampling frequency {}, {} bins",
        samples.len(),
        sampling_frequency,
        limit
    );
    Ok(limit)
}

/// Output buffer for `limit` bins
///
/// Frequencies whose bin count cannot be allocated are rejected instead of
/// aborting on capacity overflow.
fn bin_buffer(limit: usize, sampling_frequency: f64) -> Result<Vec<FrequencyBin>> {
    let mut bins = Vec::new();
    bins.try_reserve_exact(limit).map_err(|e| {
        DftError::invalid(format!(
            "sampling frequency {} needs {} bins, which cannot be allocated ({})",
            sampling_frequency, limit, e
        ))
    })?;
    Ok(bins)
}

/// Transform a sample sequence into per-bin amplitude and phase
///
/// # Arguments
/// * `samples` - Evenly spaced real samples (non-empty, finite)
/// * `sampling_frequency` - Samples per unit time (> 0)
///
/// # Returns
/// Exactly `floor(sampling_frequency / 2)` bins in ascending order
pub fn transform(samples: &[f64], sampling_frequency: f64) -> Result<Vec<FrequencyBin>> {
    let limit = validate(samples, sampling_frequency)?;
    let mut bins = bin_buffer(limit, sampling_frequency)?;

    bins.extend((0..limit).map(|k| evaluate_bin(samples, k)));
    Ok(bins)
}

/// Same contract as [`transform`], with bins spread across the rayon pool
///
/// Each bin is still summed sequentially, so the output is bit-identical.
#[cfg(feature = "parallel")]
pub fn transform_parallel(samples: &[f64], sampling_frequency: f64) -> Result<Vec<FrequencyBin>> {
    use rayon::prelude::*;

    let limit = validate(samples, sampling_frequency)?;
    let mut bins = bin_buffer(limit, sampling_frequency)?;

    bins.par_extend((0..limit).into_par_iter().map(|k| evaluate_bin(samples, k)));
    Ok(bins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rustfft::{Fft, FftPlanner};

    const ONE_CYCLE: [f64; 8] = [0.0, 0.707, 1.0, 0.707, 0.0, -0.707, -1.0, -0.707];

    #[test]
    fn test_nyquist_limit() {
        assert_eq!(nyquist_limit(8.0), 4);
        assert_eq!(nyquist_limit(9.9), 4);
        assert_eq!(nyquist_limit(1.0), 0);
        assert_eq!(nyquist_limit(0.0), 0);
        assert_eq!(nyquist_limit(-4.0), 0);
        assert_eq!(nyquist_limit(f64::NAN), 0);
    }

    #[test]
    fn test_one_sine_cycle() {
        let bins = transform(&ONE_CYCLE, 8.0).unwrap();

        assert_eq!(bins.len(), 4);
        assert_eq!(bins.iter().map(|b| b.bin).collect::<Vec<_>>(), vec![0, 1, 2, 3]);

        // Real part rounds to 0, imaginary part is negative
        assert_abs_diff_eq!(bins[1].amplitude, 1.0, epsilon = 1e-12);
        assert_eq!(bins[1].phase_angle, -90.0);

        for b in [bins[0], bins[2], bins[3]] {
            assert!(b.amplitude < 0.01, "bin {} amplitude {}", b.bin, b.amplitude);
        }
    }

    #[test]
    fn test_dc_signal_doubled() {
        let bins = transform(&[1.0, 1.0, 1.0, 1.0], 4.0).unwrap();

        assert_eq!(bins.len(), 2);
        assert_abs_diff_eq!(bins[0].amplitude, 2.0, epsilon = 1e-12);
        assert_eq!(bins[0].phase_angle, 0.0);
        assert!(bins[1].amplitude < 0.01);
    }

    #[test]
    fn test_sine_peak_at_expected_bin() {
        let n = 64;
        let period = 16;
        let signal: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * i as f64 / period as f64).sin())
            .collect();

        let bins = transform(&signal, n as f64).unwrap();
        assert_eq!(bins.len(), n / 2);

        let peak = bins
            .iter()
            .max_by(|a, b| a.amplitude.partial_cmp(&b.amplitude).unwrap())
            .unwrap();
        assert_eq!(peak.bin, n / period);
        assert_abs_diff_eq!(peak.amplitude, 1.0, epsilon = 1e-3);

        for b in bins.iter().filter(|b| b.bin != n / period) {
            assert!(b.amplitude < 1e-3, "bin {} amplitude {}", b.bin, b.amplitude);
        }
    }

    #[test]
    fn test_result_count_follows_sampling_frequency() {
        // More bins than samples: k >= N is still evaluated
        let bins = transform(&ONE_CYCLE, 40.0).unwrap();
        assert_eq!(bins.len(), 20);
        assert!(bins.iter().all(|b| b.amplitude >= 0.0));

        for b in &bins[8..] {
            let alias = bins[b.bin % ONE_CYCLE.len()];
            assert_abs_diff_eq!(b.amplitude, alias.amplitude, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(bins[9].amplitude, 1.0, epsilon = 1e-9);

        // Fewer bins than N / 2
        assert_eq!(transform(&ONE_CYCLE, 3.0).unwrap().len(), 1);
        assert!(transform(&ONE_CYCLE, 1.5).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(transform(&[], 8.0), Err(DftError::InvalidParameter(_))));
        assert!(matches!(transform(&ONE_CYCLE, 0.0), Err(DftError::InvalidParameter(_))));
        assert!(matches!(transform(&ONE_CYCLE, -8.0), Err(DftError::InvalidParameter(_))));
        assert!(matches!(transform(&ONE_CYCLE, f64::NAN), Err(DftError::InvalidParameter(_))));
        assert!(matches!(
            transform(&[1.0, f64::INFINITY], 4.0),
            Err(DftError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_unallocatable_bin_count() {
        // floor(fs / 2) saturates at usize::MAX
        assert!(matches!(
            transform(&[1.0, 2.0], 1e300),
            Err(DftError::InvalidParameter(_))
        ));
        assert!(matches!(
            transform(&[1.0, 2.0], f64::MAX),
            Err(DftError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_zero_real_part_phase() {
        // Quarter-cycle offset puts bin 1 on the imaginary axis
        let bins = transform(&[0.0, 1.0, 0.0, -1.0], 4.0).unwrap();
        assert_eq!(bins[1].phase_angle, -90.0);

        let bins = transform(&[0.0, -1.0, 0.0, 1.0], 4.0).unwrap();
        assert_eq!(bins[1].phase_angle, 90.0);

        // All-zero coefficient
        let bins = transform(&[0.0; 4], 4.0).unwrap();
        assert!(bins.iter().all(|b| b.phase_angle == 0.0 && b.amplitude == 0.0));
    }

    #[test]
    fn test_deterministic() {
        let signal: Vec<f64> = (0..97).map(|i| ((i * 37) % 11) as f64 * 0.173 - 0.9).collect();

        let first = transform(&signal, 97.0).unwrap();
        let second = transform(&signal, 97.0).unwrap();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.amplitude.to_bits(), b.amplitude.to_bits());
            assert_eq!(a.phase_angle.to_bits(), b.phase_angle.to_bits());
        }
    }

    #[test]
    fn test_coefficients_match_fft() {
        let signal: Vec<f64> = (0..32)
            .map(|i| (0.3 * i as f64).sin() + 0.25 * (1.7 * i as f64).cos())
            .collect();

        let mut buffer: Vec<rustfft::num_complex::Complex<f64>> = signal
            .iter()
            .map(|&x| rustfft::num_complex::Complex::new(x, 0.0))
            .collect();
        FftPlanner::<f64>::new()
            .plan_fft_forward(signal.len())
            .process(&mut buffer);

        for (k, expected) in buffer.iter().enumerate() {
            let actual = bin_coefficient(&signal, k);
            assert_abs_diff_eq!(actual.re, expected.re, epsilon = 1e-9);
            assert_abs_diff_eq!(actual.im, expected.im, epsilon = 1e-9);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let signal: Vec<f64> = (0..257).map(|i| (0.11 * i as f64).sin() * 3.0).collect();

        let sequential = transform(&signal, 300.0).unwrap();
        let parallel = transform_parallel(&signal, 300.0).unwrap();
        assert_eq!(sequential, parallel);

        assert!(matches!(
            transform_parallel(&signal, 1e300),
            Err(DftError::InvalidParameter(_))
        ));
    }
}
