//! Subcommand implementations.

pub mod demo;
pub mod greeks;
pub mod price;
