// Closed-form Black-Scholes pricing for European calls and puts on a
// non-dividend-paying underlying. The normal CDF comes from the series
// implementation in `models::normal`; implied volatility and Greeks beyond d1
// are out of scope.

use crate::models::normal::norm_cdf;
use crate::models::utils::{discount_factor, forward_intrinsic_value, log_moneyness};
use crate::pricing::types::OptionKind;

/// Black-Scholes `d1` ("omega"):
///
/// ```text
/// d1 = (r·t + v²·t/2 - ln(k/s)) / (v·sqrt(t))
/// ```
///
/// No guards are applied. A zero `v` or `t` divides by zero and yields `±inf`
/// (or `NaN` when the numerator is also zero), which is what callers inspecting
/// the raw term expect.
pub fn bs_d1(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    (r * t + v * v * t / 2.0 - log_moneyness(k, s)) / (v * t.sqrt())
}

/// Price of a European call option under Black-Scholes assumptions.
pub fn bs_call_price(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    bs_price(OptionKind::Call, s, k, t, v, r)
}

/// Price of a European put option under Black-Scholes assumptions.
pub fn bs_put_price(s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    bs_price(OptionKind::Put, s, k, t, v, r)
}

/// Black-Scholes price of a European option of the given kind.
///
/// * Call: `s·N(d1) - k·e^(-r·t)·N(d1 - v·sqrt(t))`
/// * Put:  `k·e^(-r·t)·N(v·sqrt(t) - d1) - s·N(-d1)`
///
/// When the total standard deviation `v·sqrt(t)` is zero (expiry, or a riskless
/// underlying) the distribution collapses and the price is the intrinsic value
/// against the discounted strike, `max(±(s - k·e^(-r·t)), 0)`.
pub fn bs_price(kind: OptionKind, s: f64, k: f64, t: f64, v: f64, r: f64) -> f64 {
    let std_dev = v * t.sqrt();
    if std_dev == 0.0 {
        tracing::debug!(%kind, s, k, t, v, r, "zero total variance, pricing at intrinsic value");
        return forward_intrinsic_value(kind, s, k, t, r);
    }

    let d1 = bs_d1(s, k, t, v, r);
    let df = discount_factor(r, t);

    match kind {
        OptionKind::Call => s * norm_cdf(d1) - k * df * norm_cdf(d1 - std_dev),
        OptionKind::Put => k * df * norm_cdf(std_dev - d1) - s * norm_cdf(-d1),
    }
}
