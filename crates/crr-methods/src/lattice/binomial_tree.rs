//! Cox-Ross-Rubinstein tree geometry and stock-price lattice.
//!
//! | Quantity | Formula |
//! |---|---|
//! | step length | `Δt = T / M` |
//! | up factor | `u = exp(σ √Δt)` |
//! | down factor | `d = 1 / u` |
//! | risk-neutral up probability | `q = (exp((r − Q) Δt) − d) / (u − d)` |
//! | per-step discount | `df = exp(−r Δt)` |
//!
//! Because `d = 1/u` the tree recombines: node `(i, j)` only depends on the
//! number of down-moves `i`, giving `S[i, j] = S0 · u^(j−i) · d^i`.

use super::grid::Lattice;
use crate::params::ModelParameters;
use crr_core::{DiscountFactor, Real, Result, Size, Time};
use tracing::{debug, warn};

/// Per-step scalars fixing the shape of a CRR tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeGeometry {
    /// Number of time steps.
    pub steps: Size,
    /// Step length `Δt`.
    pub dt: Time,
    /// Up factor `u`.
    pub up: Real,
    /// Down factor `d = 1/u`.
    pub down: Real,
    /// Risk-neutral probability of the up branch.
    pub probability: Real,
    /// Discount factor over one step.
    pub discount: DiscountFactor,
    /// Deterministic growth over one step at the risk-free rate, `exp(r Δt)`.
    pub growth: Real,
}

impl TreeGeometry {
    /// Derive the CRR geometry from validated model parameters.
    ///
    /// An up-probability outside `(0, 1)` means the tree admits arbitrage.
    /// That case is logged at `warn` level and the geometry is still
    /// returned; see [`TreeGeometry::is_arbitrage_free`].
    pub fn cox_ross_rubinstein(params: &ModelParameters) -> Result<Self> {
        params.validate()?;

        let dt = params.dt();
        let up = (params.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let probability = (((params.rate - params.dividend_yield) * dt).exp() - down) / (up - down);
        let geometry = Self {
            steps: params.steps,
            dt,
            up,
            down,
            probability,
            discount: (-params.rate * dt).exp(),
            growth: (params.rate * dt).exp(),
        };

        debug!(
            steps = geometry.steps,
            dt, up, down, probability, "built CRR tree geometry"
        );
        if !geometry.is_arbitrage_free() {
            warn!(
                probability,
                up,
                down,
                dt,
                "CRR up-probability outside (0, 1); tree admits arbitrage (try more steps)"
            );
        }
        Ok(geometry)
    }

    /// `true` when `0 < q < 1`.
    pub fn is_arbitrage_free(&self) -> bool {
        self.probability > 0.0 && self.probability < 1.0
    }

    /// Underlying value at node `(i, j)`: `S0 · u^(j−i) · d^i`.
    pub fn underlying(&self, spot: Real, i: Size, j: Size) -> Real {
        spot * self.up.powi((j - i) as i32) * self.down.powi(i as i32)
    }
}

/// Build the stock-price lattice `S[i, j]` for `0 ≤ i ≤ j ≤ M`.
///
/// Returns the geometry alongside the lattice; both are read-only from here
/// on.
pub fn build_stock_lattice(params: &ModelParameters) -> Result<(TreeGeometry, Lattice)> {
    let geometry = TreeGeometry::cox_ross_rubinstein(params)?;
    let stock = Lattice::from_nodes(geometry.steps, |i, j| {
        geometry.underlying(params.spot, i, j)
    });
    Ok((geometry, stock))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
