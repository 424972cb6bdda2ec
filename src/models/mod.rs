pub mod bs;
pub mod normal;

/// Utility functions shared by the pricing formulas
pub mod utils {
    use crate::pricing::types::OptionKind;

    /// Calculate log-moneyness: ln(K/S)
    pub fn log_moneyness(strike: f64, spot: f64) -> f64 {
        (strike / spot).ln()
    }

    /// Continuous-compounding discount factor e^(-r·t)
    pub fn discount_factor(r: f64, t: f64) -> f64 {
        (-r * t).exp()
    }

    /// Payoff if exercised now: max(s - k, 0) for calls, max(k - s, 0) for puts.
    pub fn intrinsic_value(kind: OptionKind, spot: f64, strike: f64) -> f64 {
        (kind.parity_sign() * (spot - strike)).max(0.0)
    }

    /// Intrinsic value against the strike discounted over `t` years.
    ///
    /// This is the Black-Scholes limit for a deterministic underlying and reduces
    /// to [`intrinsic_value`] at `t = 0`.
    pub fn forward_intrinsic_value(
        kind: OptionKind,
        spot: f64,
        strike: f64,
        t: f64,
        r: f64,
    ) -> f64 {
        intrinsic_value(kind, spot, strike * discount_factor(r, t))
    }

}
