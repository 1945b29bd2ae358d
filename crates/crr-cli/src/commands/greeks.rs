//! Greeks command implementation

use crr_core::{ExerciseStyle, OptionType};
use crr_greeks::{compute_greeks, Greeks};
use crr_methods::{price_american_with, price_european, ModelParameters};
use tracing::info;

use crate::config::DemoConfig;
use crate::Result;

/// Price and greeks for one option; every bumped run uses the same style.
pub fn greeks_for(
    cfg: &DemoConfig,
    option_type: OptionType,
    style: ExerciseStyle,
) -> Result<Greeks> {
    let params = cfg.model.with_option_type(option_type);
    let rule = cfg.early_exercise;
    let greeks = match style {
        ExerciseStyle::European => compute_greeks(&params, &cfg.bumps, price_european)?,
        ExerciseStyle::American => compute_greeks(&params, &cfg.bumps, |p: &ModelParameters| {
            price_american_with(p, rule)
        })?,
    };
    Ok(greeks)
}

/// Run the greeks command
pub fn run(cfg: &DemoConfig, option_type: OptionType, style: ExerciseStyle) -> Result<()> {
    info!(
        vol_bump = cfg.bumps.vol_bump,
        rate_bump = cfg.bumps.rate_bump,
        "Computing greeks for {style} {option_type}"
    );
    println!("{style} {option_type}");
    println!("{}", greeks_for(cfg, option_type, style)?);
    Ok(())
}
