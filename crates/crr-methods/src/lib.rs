//! # crr-methods
//!
//! Cox-Ross-Rubinstein binomial lattices: tree geometry, the recombining
//! stock-price lattice, and backward-induction pricing of European and
//! American vanilla options.
//!
//! # Modules
//!
//! * [`params`] — immutable model inputs and their validation
//! * [`lattice`] — lattice grid, CRR builder, and the two pricers

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Model parameters (spot, strike, maturity, rate, vol, dividend, steps).
pub mod params;

/// Lattice methods: CRR tree, backward induction, put-call parity check.
pub mod lattice;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{
    build_stock_lattice, parity_gap, price, price_american, price_american_with, price_european,
    EarlyExercise, Lattice, PricedLattice, TreeGeometry,
};
pub use params::ModelParameters;
