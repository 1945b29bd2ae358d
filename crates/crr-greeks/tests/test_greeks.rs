//! Greeks on the four-step demo scenario and against the continuous
//! limit on deep trees.

use approx::assert_relative_eq;
use crr_core::{Error, OptionType};
use crr_greeks::{compute_greeks, delta, gamma, theta, BumpSettings};
use crr_methods::{price_american_with, price_european, EarlyExercise, ModelParameters};

// ─── Demo scenario: S0=K=100, T=1, r=5%, σ=20%, Q=2%, M=4 ───────────────

#[test]
fn demo_call_greek_signs() {
    let g = compute_greeks(
        &ModelParameters::default(),
        &BumpSettings::default(),
        price_european,
    )
    .unwrap();
    assert!(g.delta > 0.0 && g.delta < 1.0, "delta {}", g.delta);
    assert!(g.gamma > 0.0, "gamma {}", g.gamma);
    assert!(g.theta < 0.0, "theta {}", g.theta);
    assert!(g.vega > 0.0, "vega {}", g.vega);
    assert!(g.rho > 0.0, "rho {}", g.rho);
}

#[test]
fn demo_call_lattice_greeks() {
    let priced = price_european(&ModelParameters::default()).unwrap();
    let (v, s) = (priced.values(), priced.stock());
    assert_relative_eq!(delta(v, s).unwrap(), 0.584_104_405_2, epsilon = 1e-8);
    assert_relative_eq!(gamma(v, s).unwrap(), 0.024_205_572_4, epsilon = 1e-8);
    assert_relative_eq!(theta(v, priced.dt()).unwrap(), -6.172_862_117_3, epsilon = 1e-8);
}

#[test]
fn demo_put_delta_is_negative() {
    let p = ModelParameters::default().with_option_type(OptionType::Put);
    let priced = price_european(&p).unwrap();
    let d = delta(priced.values(), priced.stock()).unwrap();
    assert_relative_eq!(d, -0.401_007_534_4, epsilon = 1e-8);
    // call and put share gamma on the same tree
    assert_relative_eq!(
        gamma(priced.values(), priced.stock()).unwrap(),
        0.024_205_572_4,
        epsilon = 1e-8
    );
}

#[test]
fn demo_vega_and_rho_with_mixed_pricers() {
    let p = ModelParameters::default();
    let bumps = BumpSettings::default();
    let eu = compute_greeks(&p, &bumps, price_european).unwrap();
    assert_relative_eq!(eu.vega, 35.625_818_45, max_relative = 1e-6);
    assert_relative_eq!(eu.rho, 49.358_789_80, max_relative = 1e-6);

    let fg = compute_greeks(&p, &bumps, |q: &ModelParameters| {
        price_american_with(q, EarlyExercise::ForwardGrowth)
    })
    .unwrap();
    assert_relative_eq!(fg.vega, 37.353_878_08, max_relative = 1e-6);
}

// ─── Depth requirements ───────────────────────────────────────────────────────

#[test]
fn one_step_tree_supports_delta_only() {
    let p = ModelParameters::default().with_steps(1);
    let priced = price_european(&p).unwrap();
    assert!(delta(priced.values(), priced.stock()).is_ok());
    assert!(matches!(
        gamma(priced.values(), priced.stock()),
        Err(Error::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        theta(priced.values(), priced.dt()),
        Err(Error::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        compute_greeks(&p, &BumpSettings::default(), price_european),
        Err(Error::IndexOutOfRange { .. })
    ));
}

// ─── Continuous limit ─────────────────────────────────────────────────────────

#[test]
fn deep_tree_greeks_near_black_scholes() {
    // Black-Scholes-Merton: Δ = 0.58685, Γ = 0.018951, vega = 37.901, ρ = 49.458
    let p = ModelParameters::default().with_steps(500);
    let g = compute_greeks(&p, &BumpSettings::default(), price_european).unwrap();
    assert!((g.delta - 0.586_85).abs() < 1e-3, "delta {}", g.delta);
    assert!((g.gamma - 0.018_951).abs() < 5e-4, "gamma {}", g.gamma);
    assert!((g.vega - 37.901).abs() < 0.5, "vega {}", g.vega);
    assert!((g.rho - 49.458).abs() < 0.5, "rho {}", g.rho);
}
