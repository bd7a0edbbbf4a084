//! Complex arithmetic used by the direct-sum transform
//!
//! Thin, pure helpers over `num_complex::Complex64`

pub use num_complex::Complex64;

/// Component-wise sum
#[inline]
pub fn add(a: Complex64, b: Complex64) -> Complex64 {
    Complex64::new(a.re + b.re, a.im + b.im)
}

/// Scale both components by a real factor
#[inline]
pub fn multiply_scalar(a: Complex64, s: f64) -> Complex64 {
    Complex64::new(a.re * s, a.im * s)
}

/// Complex product `(a.re*b.re - a.im*b.im, a.re*b.im + a.im*b.re)`
#[inline]
pub fn multiply_complex(a: Complex64, b: Complex64) -> Complex64 {
    Complex64::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
}

/// Euclidean length `sqrt(re² + im²)`
#[inline]
pub fn magnitude(a: Complex64) -> f64 {
    (a.re * a.re + a.im * a.im).sqrt()
}

/// Unit phasor `(cos θ, sin θ)`
#[inline]
pub fn unit_phasor(theta: f64) -> Complex64 {
    Complex64::new(theta.cos(), theta.sin())
}

/// Round a real value to 2 decimal places, half away from zero
#[inline]
pub fn round_hundredths_value(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round both components to 2 decimal places
pub fn round_hundredths(a: Complex64) -> Complex64 {
    Complex64::new(round_hundredths_value(a.re), round_hundredths_value(a.im))
}
