//! Lattice methods for option pricing.
//!
//! # Overview
//!
//! * [`Lattice`] — square `(M+1) × (M+1)` grid holding one value per node
//! * [`TreeGeometry`] / [`build_stock_lattice`] — CRR up/down/probability
//!   and the recombining stock-price lattice
//! * [`price_european`] / [`price_american`] — backward-induction pricing,
//!   returning the full value lattice alongside the stock lattice
//!
//! Each pricing call builds its own lattices and shares nothing with other
//! calls, so independent calls (e.g. bumped scenarios) may run on separate
//! threads.

pub mod binomial_tree;
pub mod grid;

pub use binomial_tree::{build_stock_lattice, TreeGeometry};
pub use grid::Lattice;

use crate::params::ModelParameters;
use crr_core::{ExerciseStyle, Real, Result, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

// ─── Early-exercise rule ──────────────────────────────────────────────────────

/// How the immediate-exercise value at an interior node is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EarlyExercise {
    /// Payoff on the node's own spot, `max(φ(S[i, j] − K), 0)`.
    #[default]
    Intrinsic,
    /// `φ(S0 · exp(r Δt)^j − K)`: the spot grown deterministically at the
    /// risk-free rate to column `j`, independent of the down-move count `i`.
    ForwardGrowth,
}

impl EarlyExercise {
    fn value(
        self,
        params: &ModelParameters,
        geometry: &TreeGeometry,
        stock: &Lattice,
        i: Size,
        j: Size,
    ) -> Real {
        match self {
            EarlyExercise::Intrinsic => params.option_type.payoff(stock[(i, j)], params.strike),
            EarlyExercise::ForwardGrowth => {
                let forward = params.spot * geometry.growth.powi(j as i32);
                params.option_type.exercise_value(forward, params.strike)
            }
        }
    }
}

impl fmt::Display for EarlyExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EarlyExercise::Intrinsic => write!(f, "intrinsic"),
            EarlyExercise::ForwardGrowth => write!(f, "forward-growth"),
        }
    }
}

impl FromStr for EarlyExercise {
    type Err = crr_core::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "intrinsic" => Ok(EarlyExercise::Intrinsic),
            "forward-growth" | "forward_growth" => Ok(EarlyExercise::ForwardGrowth),
            other => Err(crr_core::Error::InvalidArgument(format!(
                "unknown early-exercise rule '{other}', expected intrinsic or forward-growth"
            ))),
        }
    }
}

// ─── Pricing output ───────────────────────────────────────────────────────────

/// Result of a lattice pricing call: both lattices plus the geometry that
/// produced them.
///
/// Node `(0, 0)` of the value lattice is the present value.
#[derive(Debug, Clone)]
pub struct PricedLattice {
    params: ModelParameters,
    geometry: TreeGeometry,
    stock: Lattice,
    values: Lattice,
}

impl PricedLattice {
    /// Present value `V[0, 0]`.
    pub fn npv(&self) -> Real {
        self.values[(0, 0)]
    }

    /// The option-value lattice `V`.
    pub fn values(&self) -> &Lattice {
        &self.values
    }

    /// The stock-price lattice `S`.
    pub fn stock(&self) -> &Lattice {
        &self.stock
    }

    /// Tree geometry (u, d, q, Δt, discount).
    pub fn geometry(&self) -> &TreeGeometry {
        &self.geometry
    }

    /// The parameters this lattice was priced with.
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// Number of time steps.
    pub fn steps(&self) -> Size {
        self.geometry.steps
    }

    /// Step length `Δt`.
    pub fn dt(&self) -> Real {
        self.geometry.dt
    }
}

// ─── Backward-induction pricing ───────────────────────────────────────────────

/// Price a European option: terminal payoffs rolled back as discounted
/// risk-neutral expectations, with no exercise decision before maturity.
pub fn price_european(params: &ModelParameters) -> Result<PricedLattice> {
    let (geometry, stock) = build_stock_lattice(params)?;
    let values = roll_back(params, &geometry, &stock, None);
    debug!(
        option_type = %params.option_type,
        steps = params.steps,
        npv = values[(0, 0)],
        "priced European option"
    );
    Ok(PricedLattice {
        params: *params,
        geometry,
        stock,
        values,
    })
}

/// Price an American option, comparing continuation against the node's
/// intrinsic value at every interior node.
pub fn price_american(params: &ModelParameters) -> Result<PricedLattice> {
    price_american_with(params, EarlyExercise::default())
}

/// Price an American option using the given early-exercise rule.
pub fn price_american_with(
    params: &ModelParameters,
    rule: EarlyExercise,
) -> Result<PricedLattice> {
    let (geometry, stock) = build_stock_lattice(params)?;
    let values = roll_back(params, &geometry, &stock, Some(rule));
    debug!(
        option_type = %params.option_type,
        steps = params.steps,
        %rule,
        npv = values[(0, 0)],
        "priced American option"
    );
    Ok(PricedLattice {
        params: *params,
        geometry,
        stock,
        values,
    })
}

/// Price with the pricer matching `style` (American uses the intrinsic rule).
pub fn price(params: &ModelParameters, style: ExerciseStyle) -> Result<PricedLattice> {
    match style {
        ExerciseStyle::European => price_european(params),
        ExerciseStyle::American => price_american(params),
    }
}

/// Fill the value lattice from the terminal column leftwards.
///
/// Column `j` is written only after column `j + 1` is complete.
fn roll_back(
    params: &ModelParameters,
    geometry: &TreeGeometry,
    stock: &Lattice,
    exercise: Option<EarlyExercise>,
) -> Lattice {
    let n = geometry.steps;
    let pu = geometry.probability;
    let pd = 1.0 - pu;
    let df = geometry.discount;

    let mut values = Lattice::zeros(n);
    for i in 0..=n {
        values[(i, n)] = params.option_type.payoff(stock[(i, n)], params.strike);
    }

    for j in (0..n).rev() {
        for i in 0..=j {
            let hold = df * (pu * values[(i, j + 1)] + pd * values[(i + 1, j + 1)]);
            values[(i, j)] = match exercise {
                Some(rule) => hold.max(rule.value(params, geometry, stock, i, j)),
                None => hold,
            };
        }
    }

    values
}

// ─── Diagnostics ──────────────────────────────────────────────────────────────

/// Deviation from put-call parity for European prices:
/// `(C − P) − (S0 e^{−QT} − K e^{−rT})`.
///
/// On a CRR tree whose probability includes the dividend yield this is zero
/// up to rounding for any step count.
pub fn parity_gap(params: &ModelParameters, call: Real, put: Real) -> Real {
    let forward_leg = params.spot * (-params.dividend_yield * params.maturity).exp();
    let strike_leg = params.strike * (-params.rate * params.maturity).exp();
    (call - put) - (forward_leg - strike_leg)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crr_core::{Error, OptionType};

    fn one_step(option_type: OptionType) -> ModelParameters {
        ModelParameters::new(option_type, 100.0, 100.0, 1.0, 1)
            .with_rate(0.05)
            .with_volatility(0.2)
    }

    #[test]
    fn one_step_european_call_by_hand() {
        // u = e^0.2, q = (e^0.05 − 1/u)/(u − 1/u) ≈ 0.5775
        // V = e^−0.05 · q · (100u − 100)
        let priced = price_european(&one_step(OptionType::Call)).unwrap();
        let g = priced.geometry();
        let expected = (-0.05_f64).exp() * g.probability * (100.0 * g.up - 100.0);
        assert_relative_eq!(priced.npv(), expected, epsilon = 1e-12);
        assert_relative_eq!(priced.npv(), 12.162_284_964_6, epsilon = 1e-8);
        assert_eq!(priced.values().column(1).unwrap().len(), 2);
    }

    #[test]
    fn one_step_european_put_by_hand() {
        let priced = price_european(&one_step(OptionType::Put)).unwrap();
        assert_relative_eq!(priced.npv(), 7.285_227_414_7, epsilon = 1e-8);
    }

    #[test]
    fn terminal_column_holds_payoffs() {
        let priced = price_european(&ModelParameters::default()).unwrap();
        let s = priced.stock();
        let v = priced.values();
        for i in 0..=4 {
            assert_eq!(v[(i, 4)], (s[(i, 4)] - 100.0).max(0.0));
        }
    }

    #[test]
    fn demo_scenario_values() {
        let call = ModelParameters::default();
        let put = call.with_option_type(OptionType::Put);

        let eu_call = price_european(&call).unwrap().npv();
        let eu_put = price_european(&put).unwrap().npv();
        assert_relative_eq!(eu_call, 8.760_327_315_3, epsilon = 1e-8);
        assert_relative_eq!(eu_put, 5.863_402_434_7, epsilon = 1e-8);

        let am_call = price_american_with(&call, EarlyExercise::ForwardGrowth)
            .unwrap()
            .npv();
        let am_put = price_american_with(&put, EarlyExercise::ForwardGrowth)
            .unwrap()
            .npv();
        assert_relative_eq!(am_call, 10.531_063_415_5, epsilon = 1e-8);
        assert_relative_eq!(am_put, 5.863_402_434_7, epsilon = 1e-8);

        let am_put_intrinsic = price_american(&put).unwrap().npv();
        assert_relative_eq!(am_put_intrinsic, 6.432_245_601_4, epsilon = 1e-8);
    }

    #[test]
    fn american_call_without_dividend_matches_european() {
        let p = ModelParameters::default().with_dividend_yield(0.0).with_steps(50);
        let eu = price_european(&p).unwrap().npv();
        let am = price_american(&p).unwrap().npv();
        assert_relative_eq!(am, eu, epsilon = 1e-10);
    }

    #[test]
    fn american_put_geq_european_put() {
        let p = ModelParameters::default()
            .with_option_type(OptionType::Put)
            .with_steps(200);
        let eu = price_european(&p).unwrap().npv();
        let am = price_american(&p).unwrap().npv();
        assert!(am >= eu - 1e-10, "American put {am:.4} < European put {eu:.4}");
    }

    #[test]
    fn stock_lattice_is_shared_between_styles() {
        let p = ModelParameters::default();
        let eu = price_european(&p).unwrap();
        let am = price_american(&p).unwrap();
        assert_eq!(eu.stock(), am.stock());
        assert_eq!(eu.stock()[(0, 0)], p.spot);
    }

    #[test]
    fn dispatch_by_style() {
        let p = ModelParameters::default().with_option_type(OptionType::Put);
        assert_eq!(
            price(&p, ExerciseStyle::European).unwrap().npv(),
            price_european(&p).unwrap().npv()
        );
        assert_eq!(
            price(&p, ExerciseStyle::American).unwrap().npv(),
            price_american(&p).unwrap().npv()
        );
    }

    #[test]
    fn parity_holds_on_the_tree() {
        let call = ModelParameters::default();
        let put = call.with_option_type(OptionType::Put);
        let c = price_european(&call).unwrap().npv();
        let p = price_european(&put).unwrap().npv();
        assert!(parity_gap(&call, c, p).abs() < 1e-10);
    }

    #[test]
    fn invalid_parameters_return_no_lattice() {
        let p = ModelParameters::default().with_volatility(-0.2);
        assert!(matches!(price_european(&p), Err(Error::InvalidParameter(_))));
        assert!(matches!(price_american(&p), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn early_exercise_parse_and_display() {
        assert_eq!(
            "forward-growth".parse::<EarlyExercise>(),
            Ok(EarlyExercise::ForwardGrowth)
        );
        assert_eq!(EarlyExercise::Intrinsic.to_string(), "intrinsic");
        assert!("bermudan".parse::<EarlyExercise>().is_err());
    }
}
