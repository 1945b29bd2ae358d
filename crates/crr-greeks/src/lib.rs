//! # crr-greeks
//!
//! Option sensitivities derived from CRR lattices.
//!
//! * [`finite_difference`] — the five pure formulas. Delta, gamma and theta
//!   read nodes near the root of one priced lattice; vega and rho take a
//!   pair of independently priced values.
//! * [`bump`] — bump-and-reprice orchestration producing a [`Greeks`]
//!   bundle from a single set of model parameters.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Pure finite-difference formulas over already-priced lattices.
pub mod finite_difference;

/// Bump sizes and the full greeks computation.
pub mod bump;

pub use bump::{compute_greeks, BumpConvention, BumpSettings, Greeks, MIN_RATE_BUMP};
pub use finite_difference::{delta, gamma, rho, theta, vega};
