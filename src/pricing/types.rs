use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;

use crate::models::bs::{bs_d1, bs_price};
use crate::models::utils::{forward_intrinsic_value, intrinsic_value};

/// Option kind: the right to buy (call) or sell (put) at the strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    /// +1 for calls, -1 for puts
    pub fn parity_sign(self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }

    /// Lowercase name, as accepted by `FromStr` and the TOML loader
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKind {
    type Err = anyhow::Error;

    /// Parses `"call"` or `"put"`, ignoring case and surrounding whitespace.
    /// Any other value is rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(anyhow!(
                "Invalid option kind: {:?} (expected \"call\" or \"put\")",
                s
            )),
        }
    }
}

/// Market inputs for pricing a single European option
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct PricingInputs {
    /// Current price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Annualized volatility (as decimal, e.g., 0.2 for 20%)
    pub volatility: f64,
    /// Annual continuously-compounded risk-free rate (as decimal, may be negative)
    #[cfg_attr(feature = "serde", serde(default))]
    pub rate: f64,
    /// Call or put
    pub kind: OptionKind,
}

impl PricingInputs {
    pub fn new(
        kind: OptionKind,
        spot: f64,
        strike: f64,
        years_to_exp: f64,
        volatility: f64,
        rate: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            years_to_exp,
            volatility,
            rate,
            kind,
        }
    }

    /// Raw Black-Scholes d1; may be infinite or NaN for degenerate inputs.
    pub fn d1(&self) -> f64 {
        bs_d1(
            self.spot,
            self.strike,
            self.years_to_exp,
            self.volatility,
            self.rate,
        )
    }

    /// Second CDF argument of the call formula, d1 - v·sqrt(t).
    pub fn d2(&self) -> f64 {
        self.d1() - self.volatility * self.years_to_exp.sqrt()
    }

    pub fn price(&self) -> f64 {
        bs_price(
            self.kind,
            self.spot,
            self.strike,
            self.years_to_exp,
            self.volatility,
            self.rate,
        )
    }

    /// Payoff if exercised immediately, ignoring time value.
    pub fn intrinsic_value(&self) -> f64 {
        intrinsic_value(self.kind, self.spot, self.strike)
    }

    /// Intrinsic value against the discounted strike.
    pub fn forward_intrinsic_value(&self) -> f64 {
        forward_intrinsic_value(
            self.kind,
            self.spot,
            self.strike,
            self.years_to_exp,
            self.rate,
        )
    }

    /// Price together with the inputs and the derived d1 and time value.
    pub fn price_result(&self) -> PricingResult {
        let price = self.price();
        PricingResult {
            kind: self.kind,
            spot: self.spot,
            strike: self.strike,
            years_to_exp: self.years_to_exp,
            volatility: self.volatility,
            rate: self.rate,
            d1: self.d1(),
            price,
            time_value: price - self.intrinsic_value(),
        }
    }

    /// Check that the inputs are economically meaningful.
    ///
    /// Pricing never calls this; degenerate inputs propagate through IEEE
    /// arithmetic instead. It is offered for callers that want to reject them.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("years_to_exp", self.years_to_exp),
            ("volatility", self.volatility),
            ("rate", self.rate),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(anyhow!(
                    "PricingInputs validation: {} ({}) must be finite",
                    name,
                    value
                ));
            }
        }
        if self.spot <= 0.0 {
            return Err(anyhow!(
                "PricingInputs validation: spot (s={}) must be > 0",
                self.spot
            ));
        }
        if self.strike <= 0.0 {
            return Err(anyhow!(
                "PricingInputs validation: strike (k={}) must be > 0",
                self.strike
            ));
        }
        if self.years_to_exp < 0.0 {
            return Err(anyhow!(
                "PricingInputs validation: time to expiry (t={}) must be >= 0",
                self.years_to_exp
            ));
        }
        if self.volatility < 0.0 {
            return Err(anyhow!(
                "PricingInputs validation: volatility (v={}) must be >= 0",
                self.volatility
            ));
        }
        Ok(())
    }
}

/// Pricing output for a single option
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub kind: OptionKind,
    pub spot: f64,
    pub strike: f64,
    pub years_to_exp: f64,
    pub volatility: f64,
    pub rate: f64,
    /// Black-Scholes d1 at the given inputs
    pub d1: f64,
    /// Model option price
    pub price: f64,
    /// Price in excess of the immediate-exercise payoff
    pub time_value: f64,
}
