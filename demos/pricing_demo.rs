// demos/pricing_demo.rs

//! Prices the reference 3-month contract and a small strike ladder, showing d1,
//! call/put prices, intrinsic value, and the put-call parity residual.

use bs_lib::{compute_d1, norm_cdf, OptionKind, PricingInputs};

const SPOT: f64 = 30.0;
const YEARS_TO_EXP: f64 = 0.25;
const VOLATILITY: f64 = 0.2;
const RATE: f64 = 0.08;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    println!("Black-Scholes Pricing Demo");
    println!("==========================");
    println!(
        "Spot: {:.2}  T: {:.2}y  Vol: {:.0}%  Rate: {:.0}%",
        SPOT,
        YEARS_TO_EXP,
        VOLATILITY * 100.0,
        RATE * 100.0
    );

    println!("\nNormal CDF checks:");
    for sigmas in [1.0, 2.0, 3.0] {
        println!(
            "  P(|Z| <= {}) = {:.16}",
            sigmas,
            norm_cdf(sigmas) - norm_cdf(-sigmas)
        );
    }

    println!(
        "\n{:<8} {:>10} {:>12} {:>12} {:>12}",
        "Strike", "d1", "Call", "Put", "Parity err"
    );
    println!("{}", "-".repeat(58));

    for strike in [26.0, 28.0, 30.0, 32.0, 34.0, 36.0] {
        let call = PricingInputs::new(
            OptionKind::Call,
            SPOT,
            strike,
            YEARS_TO_EXP,
            VOLATILITY,
            RATE,
        );
        let put = PricingInputs { kind: OptionKind::Put, ..call };
        let parity = SPOT - strike * (-RATE * YEARS_TO_EXP).exp();
        let residual = call.price() - put.price() - parity;

        println!(
            "{:<8.2} {:>10.6} {:>12.6} {:>12.6} {:>12.2e}",
            strike,
            compute_d1(SPOT, strike, YEARS_TO_EXP, VOLATILITY, RATE),
            call.price(),
            put.price(),
            residual
        );
    }

    println!("\nDegenerate inputs (collapse to intrinsic value):");
    for (label, t, v) in [("t=0", 0.0, 0.2), ("v=0", YEARS_TO_EXP, 0.0), ("t=0, v=0", 0.0, 0.0)] {
        let call = PricingInputs::new(OptionKind::Call, 36.0, 34.0, t, v, RATE).price_result();
        tracing::info!(
            case = label,
            d1 = call.d1,
            price = call.price,
            time_value = call.time_value,
            "priced degenerate call"
        );
    }
}
