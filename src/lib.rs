//! # BS-Lib: Black-Scholes Pricing for European Options
//!
//! `bs-lib` prices European call and put options with the closed-form Black-Scholes
//! formula. The standard normal CDF the formula needs is computed in-crate from a
//! convergent series expansion, with exact saturation in the tails.
//!
//! ## Core Features
//!
//! - **Normal CDF**: Maclaurin-series evaluation with early exit on convergence
//! - **Option Pricing**: Black-Scholes call and put prices and the `d1` term
//! - **Degenerate Inputs**: Zero time or zero volatility collapse to intrinsic value
//! - **Configuration**: Pricing requests loadable from TOML (feature `serde`)
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_lib::{black_scholes, compute_d1, norm_cdf, OptionKind};
//!
//! // 3-month call, spot 30, strike 34, 20% vol, 8% rate
//! let call = black_scholes(30.0, 34.0, 0.25, 0.2, 0.08, OptionKind::Call);
//! let put = black_scholes(30.0, 34.0, 0.25, 0.2, 0.08, OptionKind::Put);
//!
//! // Put-call parity: C - P = S - K·e^(-rT)
//! let parity = 30.0 - 34.0 * (-0.08_f64 * 0.25).exp();
//! assert!((call - put - parity).abs() < 1e-12);
//!
//! assert!((compute_d1(30.0, 34.0, 0.25, 0.2, 0.08) + 1.00163142954006).abs() < 1e-12);
//! assert_eq!(norm_cdf(0.0), 0.5);
//! ```
//!
//! ## Input Handling
//!
//! Inputs are not validated. Zero or negative spot and strike, or negative time and
//! volatility, propagate through IEEE arithmetic as `NaN`/`±inf`. Use
//! [`PricingInputs::validate`] to reject them up front.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod models;
pub mod pricing;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use models::bs::{bs_call_price, bs_put_price};
pub use models::normal::norm_pdf;
pub use pricing::types::{OptionKind, PricingInputs, PricingResult};

#[cfg(feature = "serde")]
pub use pricing::config::{from_toml_str, load_inputs};

// ================================================================================================
// PRICING API
// ================================================================================================

/// Standard normal cumulative distribution function, P(Z <= x).
///
/// The result lies in `[0, 1]` and is exactly `0.5` at zero. Arguments at or beyond
/// ±8 (including infinities) saturate to exactly `1` or `0`.
///
/// # Example
///
/// ```rust
/// use bs_lib::norm_cdf;
///
/// let one_sigma = norm_cdf(1.0) - norm_cdf(-1.0);
/// assert!((one_sigma - 0.6826894921370861).abs() < 1e-14);
/// assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
/// ```
pub fn norm_cdf(x: f64) -> f64 {
    models::normal::norm_cdf(x)
}

/// Price a European option with the Black-Scholes formula.
///
/// # Arguments
///
/// * `s` - Current price of the underlying
/// * `k` - Strike price
/// * `t` - Time to expiration in years
/// * `v` - Annualized volatility as a decimal
/// * `r` - Annual risk-free rate as a decimal (may be negative)
/// * `kind` - [`OptionKind::Call`] or [`OptionKind::Put`]
///
/// # Degenerate Inputs
///
/// When `t = 0` or `v = 0` the price is the intrinsic value against the discounted
/// strike: `max(s - k·e^(-rt), 0)` for a call and `max(k·e^(-rt) - s, 0)` for a put.
/// At expiry this is the plain payoff `max(s - k, 0)` / `max(k - s, 0)`.
///
/// # Example
///
/// ```rust
/// use bs_lib::{black_scholes, OptionKind};
///
/// // Expired in-the-money call pays spot minus strike
/// assert_eq!(black_scholes(36.0, 34.0, 0.0, 0.0, 0.08, OptionKind::Call), 2.0);
///
/// let call = black_scholes(30.0, 34.0, 0.25, 0.2, 0.08, OptionKind::Call);
/// assert!((call - 0.23834902311961947).abs() < 1e-12);
/// ```
pub fn black_scholes(s: f64, k: f64, t: f64, v: f64, r: f64, kind: OptionKind) -> f64 {
    models::bs::bs_price(kind, s, k, t, v, r)
}

/// Compute the Black-Scholes `d1` term (omega).
///
/// `d1 = (r·t + v²·t/2 - ln(k/s)) / (v·sqrt(t))`
///
/// Returned as-is: `±inf` when `v·sqrt(t) = 0` with a non-zero numerator, `NaN`
/// for `0/0` or invalid inputs.
pub fn compute_d1(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    models::bs::bs_d1(s, k, t, v, r)
}
