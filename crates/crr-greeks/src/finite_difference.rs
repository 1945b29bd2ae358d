//! Finite-difference greeks on a binomial lattice.
//!
//! | Greek | Formula | Minimum steps |
//! |---|---|---|
//! | delta | `(V[0,1] − V[1,1]) / (S[0,1] − S[1,1])` | 1 |
//! | gamma | `[Δ_up − Δ_down] / (½ (S[0,2] − S[2,2]))` | 2 |
//! | theta | `(V[1,2] − V[0,0]) / (2 Δt)` | 2 |
//! | vega  | `(V(σ+) − V(σ−)) / (2 h_σ)` | – |
//! | rho   | `(V(r+) − V(r−)) / (2 h_r)` | – |
//!
//! None of these call a pricer. Lattices shallower than a formula needs
//! yield [`Error::IndexOutOfRange`]; the source lattices are only read.

use crr_core::{Error, Real, Result, Time};
use crr_methods::Lattice;

fn check_pair(values: &Lattice, stock: &Lattice, min_steps: usize) -> Result<()> {
    if values.steps() != stock.steps() {
        return Err(Error::InvalidArgument(format!(
            "value lattice has {} steps but stock lattice has {}",
            values.steps(),
            stock.steps()
        )));
    }
    values.require_steps(min_steps)
}

fn check_step(name: &str, h: Real) -> Result<()> {
    if !h.is_finite() || h == 0.0 {
        return Err(Error::InvalidArgument(format!(
            "{name} must be finite and non-zero, got {h}"
        )));
    }
    Ok(())
}

/// First-step delta `∂V/∂S`.
pub fn delta(values: &Lattice, stock: &Lattice) -> Result<Real> {
    check_pair(values, stock, 1)?;
    Ok((values[(0, 1)] - values[(1, 1)]) / (stock[(0, 1)] - stock[(1, 1)]))
}

/// Second-step gamma `∂²V/∂S²`.
pub fn gamma(values: &Lattice, stock: &Lattice) -> Result<Real> {
    check_pair(values, stock, 2)?;
    let delta_up = (values[(0, 2)] - values[(1, 2)]) / (stock[(0, 2)] - stock[(1, 2)]);
    let delta_down = (values[(1, 2)] - values[(2, 2)]) / (stock[(1, 2)] - stock[(2, 2)]);
    Ok((delta_up - delta_down) / (0.5 * (stock[(0, 2)] - stock[(2, 2)])))
}

/// Theta `∂V/∂t` per year.
///
/// Compares the root with the middle node two steps later, which sits at
/// the same spot on a recombining tree.
pub fn theta(values: &Lattice, dt: Time) -> Result<Real> {
    values.require_steps(2)?;
    check_step("dt", dt)?;
    Ok((values[(1, 2)] - values[(0, 0)]) / (2.0 * dt))
}

/// Vega from prices at `σ + h` and `σ − h`; `diff` is the denominator
/// half-width.
pub fn vega(value_plus: Real, value_minus: Real, diff: Real) -> Result<Real> {
    check_step("volatility bump", diff)?;
    Ok((value_plus - value_minus) / (2.0 * diff))
}

/// Rho from prices at `r + h` and `r − h`; `diff` is the denominator
/// half-width.
pub fn rho(value_plus: Real, value_minus: Real, diff: Real) -> Result<Real> {
    check_step("rate bump", diff)?;
    Ok((value_plus - value_minus) / (2.0 * diff))
}
