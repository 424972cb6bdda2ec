// demos/config_demo.rs

//! Loads a pricing request from TOML and prints the result.
//!
//! Usage:
//!     cargo run --example config_demo -- [request.toml]
//!
//! Defaults to tests/data/reference_put.toml.

use anyhow::Result;
use bs_lib::load_inputs;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/data/reference_put.toml".to_string());

    let inputs = load_inputs(&path)?;
    tracing::info!(path = %path, kind = %inputs.kind, "loaded pricing request");

    if let Err(e) = inputs.validate() {
        tracing::warn!(error = %e, "pricing anyway; result may be NaN or infinite");
    }

    let result = inputs.price_result();
    println!("Pricing request: {}", path);
    println!("  Kind:          {}", result.kind);
    println!("  Spot:          {:.4}", result.spot);
    println!("  Strike:        {:.4}", result.strike);
    println!("  Years to exp:  {:.4}", result.years_to_exp);
    println!("  Volatility:    {:.2}%", result.volatility * 100.0);
    println!("  Rate:          {:.2}%", result.rate * 100.0);
    println!("  d1:            {:.12}", result.d1);
    println!("  Price:         {:.12}", result.price);
    println!("  Time value:    {:.12}", result.time_value);

    Ok(())
}
