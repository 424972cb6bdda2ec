// src/models/normal/mod.rs

//! Standard normal distribution helpers.
//!
//! The cumulative distribution function is evaluated with the Maclaurin series
//!
//! Φ(x) = 1/2 + φ(x) · Σ x^(2k+1) / (1·3·5···(2k+1))
//!
//! where φ is the standard normal density. Terms are accumulated incrementally and
//! summation stops as soon as another term no longer changes the running sum in
//! `f64`, or after [`MAX_SERIES_TERMS`] terms.

use std::f64::consts::PI;

/// Upper bound on the number of series terms summed by [`norm_cdf`].
pub const MAX_SERIES_TERMS: usize = 100;

/// Magnitude beyond which [`norm_cdf`] saturates to exactly 0 or 1.
///
/// The partial sums grow faster than the density shrinks near |x| = 8, so the
/// series is not evaluated past this point.
pub const CDF_SATURATION_BOUND: f64 = 8.0;

/// Standard normal probability density φ(x) = exp(-x²/2) / sqrt(2π).
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Standard normal cumulative distribution function, P(Z <= x).
///
/// Returns exactly `1.0` for `x >= 8` and exactly `0.0` for `x <= -8`, which also
/// covers `±inf`. A `NaN` argument yields `NaN`.
///
/// The density factor is evaluated inline as `sum · exp(-x²/2) / sqrt(2π)`
/// rather than through [`norm_pdf`]; the two differ only in rounding.
///
/// Close to the saturation bounds (roughly |x| > 7.75) the result is dominated
/// by `f64` rounding of order 1e-16, so it is not strictly monotone there: two
/// neighbouring arguments just above -8 can come out in the wrong order. The
/// output still stays within `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use bs_lib::models::normal::norm_cdf;
///
/// assert_eq!(norm_cdf(0.0), 0.5);
/// assert_eq!(norm_cdf(f64::INFINITY), 1.0);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-12);
/// ```
pub fn norm_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x >= CDF_SATURATION_BOUND {
        return 1.0;
    }
    if x <= -CDF_SATURATION_BOUND {
        return 0.0;
    }

    let probability = series_sum(x) * (-0.5 * x * x).exp() / (2.0 * PI).sqrt() + 0.5;
    probability.clamp(0.0, 1.0)
}

/// Σ x^(2k+1) / (2k+1)!! with fixed-point early exit.
fn series_sum(x: f64) -> f64 {
    let xx = x * x;
    let mut sum = 0.0;
    let mut numerator = x;
    let mut denominator = 1.0;

    for k in 1..=MAX_SERIES_TERMS {
        let prev = sum;
        sum += numerator / denominator;
        if sum == prev {
            break;
        }
        numerator *= xx;
        denominator *= (2 * k + 1) as f64;
    }

    sum
}
