//! Demo command implementation
//!
//! Figures, in print order: American call and put, European
//! call and put, delta/gamma/theta read off the European call lattice, vega
//! from American calls at σ ± h, rho from European calls at r ± h.

use crr_core::{OptionType, Real};
use crr_greeks::{delta, gamma, rho, theta, vega, BumpSettings};
use crr_methods::{
    parity_gap, price_american_with, price_european, EarlyExercise, ModelParameters,
};
use std::fmt;
use tracing::{info, warn};

use crate::config::DemoConfig;
use crate::Result;

/// The nine demo figures plus the parity diagnostic.
///
/// A greek that cannot be computed (e.g. gamma on a one-step tree) is
/// `None` and leaves the prices and the other greeks in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoReport {
    pub american_call: Real,
    pub american_put: Real,
    pub european_call: Real,
    pub european_put: Real,
    pub delta: Option<Real>,
    pub gamma: Option<Real>,
    pub theta: Option<Real>,
    pub vega: Option<Real>,
    pub rho: Option<Real>,
    pub parity_gap: Real,
}

fn write_greek(f: &mut fmt::Formatter<'_>, label: &str, value: Option<Real>) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "{label}\n{v}"),
        None => writeln!(f, "{label}\nn/a"),
    }
}

impl fmt::Display for DemoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "american option call price\n{}", self.american_call)?;
        writeln!(f, "american option put price\n{}", self.american_put)?;
        writeln!(f, "european option call price\n{}", self.european_call)?;
        writeln!(f, "european option put price\n{}", self.european_put)?;
        write_greek(f, "delta value", self.delta)?;
        write_greek(f, "gamma value", self.gamma)?;
        write_greek(f, "theta value", self.theta)?;
        write_greek(f, "vega value", self.vega)?;
        write_greek(f, "rho value", self.rho)?;
        write!(f, "put-call parity gap\n{:.3e}", self.parity_gap)
    }
}

fn sensitivity(name: &str, value: crr_core::Result<Real>) -> Option<Real> {
    match value {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(greek = name, error = %e, "greek unavailable");
            None
        }
    }
}

/// Vega from American calls at σ ± h.
fn american_vega(
    call: &ModelParameters,
    rule: EarlyExercise,
    bumps: &BumpSettings,
) -> crr_core::Result<Real> {
    bumps.validate()?;
    let (d_sigma, _) = bumps.absolute(call);
    let (vega_diff, _) = bumps.denominators(call);
    let up = price_american_with(&call.with_volatility(call.volatility + d_sigma), rule)?;
    let down = price_american_with(&call.with_volatility(call.volatility - d_sigma), rule)?;
    vega(up.npv(), down.npv(), vega_diff)
}

/// Rho from European calls at r ± h.
fn european_rho(call: &ModelParameters, bumps: &BumpSettings) -> crr_core::Result<Real> {
    bumps.validate()?;
    let (_, d_rate) = bumps.absolute(call);
    let (_, rho_diff) = bumps.denominators(call);
    let up = price_european(&call.with_rate(call.rate + d_rate))?;
    let down = price_european(&call.with_rate(call.rate - d_rate))?;
    rho(up.npv(), down.npv(), rho_diff)
}

/// Compute every demo figure for `cfg`.
///
/// Fails only when the model itself cannot be priced.
pub fn report(cfg: &DemoConfig) -> Result<DemoReport> {
    let call = cfg.model.with_option_type(OptionType::Call);
    let put = cfg.model.with_option_type(OptionType::Put);
    let rule = cfg.early_exercise;

    let american_call = price_american_with(&call, rule)?;
    let american_put = price_american_with(&put, rule)?;
    let european_call = price_european(&call)?;
    let european_put = price_european(&put)?;

    let (values, stock) = (european_call.values(), european_call.stock());

    Ok(DemoReport {
        american_call: american_call.npv(),
        american_put: american_put.npv(),
        european_call: european_call.npv(),
        european_put: european_put.npv(),
        delta: sensitivity("delta", delta(values, stock)),
        gamma: sensitivity("gamma", gamma(values, stock)),
        theta: sensitivity("theta", theta(values, european_call.dt())),
        vega: sensitivity("vega", american_vega(&call, rule, &cfg.bumps)),
        rho: sensitivity("rho", european_rho(&call, &cfg.bumps)),
        parity_gap: parity_gap(&call, european_call.npv(), european_put.npv()),
    })
}

/// Run the demo command
pub fn run(cfg: &DemoConfig) -> Result<()> {
    info!(
        spot = cfg.model.spot,
        strike = cfg.model.strike,
        maturity = cfg.model.maturity,
        rate = cfg.model.rate,
        volatility = cfg.model.volatility,
        dividend = cfg.model.dividend_yield,
        steps = cfg.model.steps,
        early_exercise = %cfg.early_exercise,
        "Running demo scenario"
    );
    println!("{}", report(cfg)?);
    Ok(())
}
