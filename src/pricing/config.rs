//! TOML loading for a single pricing request.
//!
//! ```toml
//! kind = "call"
//! spot = 30.0
//! strike = 34.0
//! years_to_exp = 0.25
//! volatility = 0.2
//! rate = 0.08        # optional, defaults to 0.0
//! ```
//!
//! Any other key is an error.

use anyhow::{Context, Result};
use std::path::Path;

use crate::pricing::types::PricingInputs;

/// Parse pricing inputs from a TOML document.
///
/// Economically invalid values (non-positive spot, negative volatility, ...) are
/// logged as warnings but not rejected; call [`PricingInputs::validate`] to
/// enforce them.
pub fn from_toml_str(contents: &str) -> Result<PricingInputs> {
    let inputs: PricingInputs =
        toml::from_str(contents).context("Failed to parse pricing inputs from TOML")?;

    if let Err(e) = inputs.validate() {
        tracing::warn!(error = %e, "pricing inputs loaded with invalid values");
    }

    Ok(inputs)
}

/// Read and parse pricing inputs from a TOML file.
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<PricingInputs> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pricing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded pricing config");
    from_toml_str(&contents).with_context(|| format!("Invalid pricing config {}", path.display()))
}
