use bs_lib::norm_cdf;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::{ContinuousCDF, Normal};

/// Evenly spaced grid from `lo` to `hi` inclusive
fn grid(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let n = ((hi - lo) / step).round() as usize;
    (0..=n).map(|i| lo + i as f64 * step).collect()
}

#[test]
fn test_cdf_at_zero_and_infinities() {
    assert_eq!(norm_cdf(0.0), 0.5);
    assert_eq!(norm_cdf(f64::INFINITY), 1.0);
    assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
}

#[test]
fn test_empirical_rule() {
    let cases = [
        (1.0, 0.6826894921370861),
        (2.0, 0.9544997361036414),
        (3.0, 0.99730020393674),
    ];
    for (sigmas, expected) in cases {
        let mass = norm_cdf(sigmas) - norm_cdf(-sigmas);
        println!("P(|Z| <= {}) = {:.16}", sigmas, mass);
        assert!(
            (mass - expected).abs() < 1e-14,
            "{} sigma mass {} != {}",
            sigmas,
            mass,
            expected
        );
    }
}

#[test]
fn test_matches_statrs_reference() {
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut worst = 0.0_f64;
    for x in grid(-7.9, 7.9, 0.01) {
        let diff = (norm_cdf(x) - normal.cdf(x)).abs();
        worst = worst.max(diff);
        assert!(
            diff < 1e-12,
            "norm_cdf({}) = {} but reference is {}",
            x,
            norm_cdf(x),
            normal.cdf(x)
        );
    }
    println!("Worst absolute deviation from statrs: {:e}", worst);
}

#[test]
fn test_monotone_non_decreasing() {
    let xs = grid(-7.5, 7.5, 0.01);
    for pair in xs.windows(2) {
        let (lo, hi) = (norm_cdf(pair[0]), norm_cdf(pair[1]));
        assert!(
            hi >= lo,
            "norm_cdf decreased between {} ({}) and {} ({})",
            pair[0],
            lo,
            pair[1],
            hi
        );
    }
}

#[test]
fn test_monotone_across_saturation_bound() {
    assert!(norm_cdf(-8.0) <= norm_cdf(-7.999));
    assert!(norm_cdf(7.999) <= norm_cdf(8.0));
    assert!(norm_cdf(-7.5) > norm_cdf(-8.0));
    assert!(norm_cdf(7.5) < norm_cdf(8.0));
}

#[test]
fn test_symmetry_random_inputs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1_000 {
        let x: f64 = rng.gen_range(-10.0..10.0);
        let total = norm_cdf(x) + norm_cdf(-x);
        assert!((total - 1.0).abs() < 1e-14, "cdf({x}) + cdf(-{x}) = {total}");
    }
}

#[test]
fn test_output_in_unit_interval() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1_000 {
        let x: f64 = rng.gen_range(-20.0..20.0);
        let p = norm_cdf(x);
        assert!((0.0..=1.0).contains(&p), "norm_cdf({}) = {} outside [0, 1]", x, p);
    }
}
