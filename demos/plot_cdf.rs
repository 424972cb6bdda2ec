// Example: plot_cdf.rs
// Plots the series normal CDF (with its density) and Black-Scholes call/put
// prices across spot, and writes the result to an SVG.
//
// Usage:
//     cargo run --example plot_cdf -- [output.svg]
//
// Defaults to bs_curves.svg in the working directory.

use std::env;
use std::error::Error;

use bs_lib::{black_scholes, norm_cdf, norm_pdf, OptionKind};
use plotters::prelude::*;

const STRIKE: f64 = 34.0;
const YEARS_TO_EXP: f64 = 0.25;
const VOLATILITY: f64 = 0.2;
const RATE: f64 = 0.08;

fn main() -> Result<(), Box<dyn Error>> {
    let output = env::args().nth(1).unwrap_or_else(|| "bs_curves.svg".to_string());

    let steps = 800;
    let cdf_line: Vec<(f64, f64)> = (0..=steps)
        .map(|i| {
            let x = -10.0 + 20.0 * (i as f64) / (steps as f64);
            (x, norm_cdf(x))
        })
        .collect();
    let pdf_line: Vec<(f64, f64)> = cdf_line.iter().map(|&(x, _)| (x, norm_pdf(x))).collect();

    let spots: Vec<f64> = (0..=steps)
        .map(|i| 10.0 + 50.0 * (i as f64) / (steps as f64))
        .collect();
    let call_line: Vec<(f64, f64)> = spots
        .iter()
        .map(|&s| {
            (
                s,
                black_scholes(s, STRIKE, YEARS_TO_EXP, VOLATILITY, RATE, OptionKind::Call),
            )
        })
        .collect();
    let put_line: Vec<(f64, f64)> = spots
        .iter()
        .map(|&s| {
            (
                s,
                black_scholes(s, STRIKE, YEARS_TO_EXP, VOLATILITY, RATE, OptionKind::Put),
            )
        })
        .collect();
    let call_payoff: Vec<(f64, f64)> = spots.iter().map(|&s| (s, (s - STRIKE).max(0.0))).collect();
    let put_payoff: Vec<(f64, f64)> = spots.iter().map(|&s| (s, (STRIKE - s).max(0.0))).collect();

    let root = SVGBackend::new(&output, (1280, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let (left, right) = root.split_horizontally(640);

    let mut cdf_chart = ChartBuilder::on(&left)
        .margin(20)
        .caption("Standard normal CDF (series) and density", ("sans-serif", 22))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-10.0..10.0, 0.0..1.05)?;
    cdf_chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("probability")
        .draw()?;
    cdf_chart.draw_series(vec![PathElement::new(cdf_line, BLUE.stroke_width(2))])?;
    cdf_chart.draw_series(vec![PathElement::new(pdf_line, RED)])?;
    // Saturation bounds
    for x in [-8.0, 8.0] {
        cdf_chart.draw_series(std::iter::once(PathElement::new(
            vec![(x, 0.0), (x, 1.05)],
            BLACK.mix(0.3),
        )))?;
    }

    let y_max = call_line
        .iter()
        .chain(put_line.iter())
        .map(|&(_, p)| p)
        .fold(0.0_f64, f64::max)
        * 1.05;
    let mut price_chart = ChartBuilder::on(&right)
        .margin(20)
        .caption(
            format!(
                "Black-Scholes prices | K={} t={}y v={} r={}",
                STRIKE, YEARS_TO_EXP, VOLATILITY, RATE
            ),
            ("sans-serif", 22),
        )
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(10.0..60.0, 0.0..y_max)?;
    price_chart
        .configure_mesh()
        .x_desc("Spot")
        .y_desc("Price")
        .draw()?;
    price_chart.draw_series(vec![PathElement::new(call_line, BLUE.stroke_width(2))])?;
    price_chart.draw_series(vec![PathElement::new(put_line, RED.stroke_width(2))])?;
    price_chart.draw_series(vec![PathElement::new(call_payoff, BLUE.mix(0.4))])?;
    price_chart.draw_series(vec![PathElement::new(put_payoff, RED.mix(0.4))])?;

    root.present()?;
    println!("Chart saved to {}", output);
    Ok(())
}
