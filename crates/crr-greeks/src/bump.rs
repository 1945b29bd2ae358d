//! Bump-and-reprice greeks.
//!
//! [`compute_greeks`] prices the base scenario once, reads delta, gamma and
//! theta off that lattice, then reprices at `σ ± ε_σ|σ|` and `r ± h_r` for
//! vega and rho, with `h_r = max(ε_r|r|, MIN_RATE_BUMP)`. The four bumped
//! runs share no state.

use crate::finite_difference;
use crr_core::{Error, Price, Real, Result};
use crr_methods::{ModelParameters, PricedLattice};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Smallest absolute rate bump, used when `ε_r |r|` falls below it (r = 0).
pub const MIN_RATE_BUMP: Real = 1e-6;

/// Denominator used for the vega/rho central differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BumpConvention {
    /// Divide by twice the absolute bump, `2 ε σ` or `2 ε r`.
    #[default]
    Absolute,
    /// Divide by twice the lattice step `2 Δt`, whatever the bump size.
    TimeStep,
}

/// Relative bump sizes for vega and rho.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BumpSettings {
    /// Volatility bump as a fraction of σ.
    pub vol_bump: Real,
    /// Rate bump as a fraction of r.
    pub rate_bump: Real,
    /// Denominator convention.
    pub convention: BumpConvention,
}

impl Default for BumpSettings {
    /// 0.1 % of σ and of r, absolute denominators.
    fn default() -> Self {
        Self {
            vol_bump: 0.001,
            rate_bump: 0.001,
            convention: BumpConvention::Absolute,
        }
    }
}

impl BumpSettings {
    /// Check both relative bumps are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.vol_bump > 0.0 && self.vol_bump < 1.0) {
            return Err(Error::InvalidArgument(format!(
                "relative volatility bump must lie in (0, 1), got {}",
                self.vol_bump
            )));
        }
        if !(self.rate_bump.is_finite() && self.rate_bump > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "relative rate bump must be positive, got {}",
                self.rate_bump
            )));
        }
        Ok(())
    }

    /// Absolute bump sizes `(ε_σ |σ|, max(ε_r |r|, MIN_RATE_BUMP))` for
    /// `params`. Both are strictly positive for a validated model.
    pub fn absolute(&self, params: &ModelParameters) -> (Real, Real) {
        (
            self.vol_bump * params.volatility.abs(),
            (self.rate_bump * params.rate.abs()).max(MIN_RATE_BUMP),
        )
    }

    /// Half-width denominators for vega and rho under this convention.
    pub fn denominators(&self, params: &ModelParameters) -> (Real, Real) {
        match self.convention {
            BumpConvention::Absolute => self.absolute(params),
            BumpConvention::TimeStep => (params.dt(), params.dt()),
        }
    }
}

/// All five sensitivities plus the base price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Greeks {
    /// Present value of the base scenario.
    pub price: Price,
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂t per year.
    pub theta: Real,
    /// ∂V/∂σ.
    pub vega: Real,
    /// ∂V/∂r.
    pub rho: Real,
}

impl fmt::Display for Greeks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "price: {:.6}", self.price)?;
        writeln!(f, "delta: {:.6}", self.delta)?;
        writeln!(f, "gamma: {:.6}", self.gamma)?;
        writeln!(f, "theta: {:.6}", self.theta)?;
        writeln!(f, "vega:  {:.6}", self.vega)?;
        write!(f, "rho:   {:.6}", self.rho)
    }
}

/// Compute price and greeks for `params` with the given pricer.
///
/// `pricer` is any lattice pricer, e.g. [`crr_methods::price_european`] or
/// a closure around [`crr_methods::price_american_with`]. It is called five
/// times: once for the base lattice and once per bumped scenario.
///
/// Fails with [`Error::IndexOutOfRange`] when `params.steps < 2`, and with
/// [`Error::InvalidArgument`] when the bump settings are unusable.
pub fn compute_greeks<F>(
    params: &ModelParameters,
    bumps: &BumpSettings,
    pricer: F,
) -> Result<Greeks>
where
    F: Fn(&ModelParameters) -> Result<PricedLattice>,
{
    bumps.validate()?;

    let base = pricer(params)?;
    let (values, stock) = (base.values(), base.stock());
    let delta = finite_difference::delta(values, stock)?;
    let gamma = finite_difference::gamma(values, stock)?;
    let theta = finite_difference::theta(values, base.dt())?;

    let (d_sigma, d_rate) = bumps.absolute(params);

    let vol_up = pricer(&params.with_volatility(params.volatility + d_sigma))?.npv();
    let vol_down = pricer(&params.with_volatility(params.volatility - d_sigma))?.npv();
    let rate_up = pricer(&params.with_rate(params.rate + d_rate))?.npv();
    let rate_down = pricer(&params.with_rate(params.rate - d_rate))?.npv();

    let (vega_diff, rho_diff) = bumps.denominators(params);
    let vega = finite_difference::vega(vol_up, vol_down, vega_diff)?;
    let rho = finite_difference::rho(rate_up, rate_down, rho_diff)?;

    debug!(
        price = base.npv(),
        delta, gamma, theta, vega, rho, "computed greeks"
    );

    Ok(Greeks {
        price: base.npv(),
        delta,
        gamma,
        theta,
        vega,
        rho,
    })
}
