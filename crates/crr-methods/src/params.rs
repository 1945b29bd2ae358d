//! Model parameters for a single pricing call.

use crr_core::{ensure, OptionType, Rate, Real, Result, Size, Time, Volatility};
use serde::{Deserialize, Serialize};

/// The full set of inputs to a CRR pricing call.
///
/// Missing fields deserialize to the [`Default`] values. Bumped scenarios
/// are derived with the `with_*` methods, which return a modified copy and
/// leave `self` intact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParameters {
    /// Spot price of the underlying, `S0 ≥ 0`.
    pub spot: Real,
    /// Strike, `K ≥ 0`.
    pub strike: Real,
    /// Time to maturity in years, `T > 0`.
    pub maturity: Time,
    /// Continuously-compounded risk-free rate.
    pub rate: Rate,
    /// Volatility of the underlying, `σ > 0`.
    pub volatility: Volatility,
    /// Continuous dividend yield.
    pub dividend_yield: Rate,
    /// Number of time steps, `M ≥ 1`.
    pub steps: Size,
    /// Call or put.
    pub option_type: OptionType,
}

impl Default for ModelParameters {
    /// At-the-money one-year call on a four-step tree.
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            dividend_yield: 0.02,
            steps: 4,
            option_type: OptionType::Call,
        }
    }
}

impl ModelParameters {
    /// Create parameters with zero rate and dividend yield and 20 % vol.
    ///
    /// Use the `with_*` methods to set the remaining inputs.
    pub fn new(
        option_type: OptionType,
        spot: Real,
        strike: Real,
        maturity: Time,
        steps: Size,
    ) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate: 0.0,
            volatility: 0.2,
            dividend_yield: 0.0,
            steps,
            option_type,
        }
    }

    /// Copy with a different risk-free rate.
    pub fn with_rate(mut self, rate: Rate) -> Self {
        self.rate = rate;
        self
    }

    /// Copy with a different volatility.
    pub fn with_volatility(mut self, volatility: Volatility) -> Self {
        self.volatility = volatility;
        self
    }

    /// Copy with a different dividend yield.
    pub fn with_dividend_yield(mut self, dividend_yield: Rate) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Copy with a different number of steps.
    pub fn with_steps(mut self, steps: Size) -> Self {
        self.steps = steps;
        self
    }

    /// Copy with the other option type.
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Length of one time step, `T / M`.
    pub fn dt(&self) -> Time {
        self.maturity / self.steps as Real
    }

    /// Check every input against its admissible domain.
    ///
    /// Zero volatility is rejected as well: with `u = d = 1` the
    /// risk-neutral probability is `0/0` and every node value would be NaN.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.steps >= 1, "steps must be >= 1, got {}", self.steps);
        ensure!(
            self.maturity.is_finite() && self.maturity > 0.0,
            "maturity must be positive, got {}",
            self.maturity
        );
        ensure!(
            self.volatility.is_finite() && self.volatility > 0.0,
            "volatility must be positive, got {}",
            self.volatility
        );
        ensure!(
            self.spot.is_finite() && self.spot >= 0.0,
            "spot must be non-negative, got {}",
            self.spot
        );
        ensure!(
            self.strike.is_finite() && self.strike >= 0.0,
            "strike must be non-negative, got {}",
            self.strike
        );
        ensure!(self.rate.is_finite(), "rate must be finite, got {}", self.rate);
        ensure!(
            self.dividend_yield.is_finite(),
            "dividend yield must be finite, got {}",
            self.dividend_yield
        );
        Ok(())
    }
}
