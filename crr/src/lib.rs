//! # crr
//!
//! Vanilla European and American option pricing on Cox-Ross-Rubinstein
//! binomial lattices, with finite-difference greeks.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `crr-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use crr::core::OptionType;
//! use crr::methods::{price_american, price_european, ModelParameters};
//! use crr::greeks::{compute_greeks, BumpSettings};
//!
//! let params = ModelParameters::new(OptionType::Put, 100.0, 100.0, 1.0, 100)
//!     .with_rate(0.05)
//!     .with_volatility(0.2);
//!
//! let european = price_european(&params).unwrap();
//! let american = price_american(&params).unwrap();
//! assert!(american.npv() >= european.npv());
//!
//! let greeks = compute_greeks(&params, &BumpSettings::default(), price_european).unwrap();
//! assert!(greeks.delta < 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, option enums, and error definitions.
pub use crr_core as core;

/// Lattice construction and backward-induction pricers.
pub use crr_methods as methods;

/// Finite-difference sensitivities.
pub use crr_greeks as greeks;
