//! Price command implementation

use crr_core::{ExerciseStyle, OptionType};
use crr_methods::{price_american_with, price_european, PricedLattice};
use tracing::info;

use crate::config::DemoConfig;
use crate::Result;

/// Price one option with the configured model and early-exercise rule.
pub fn price_one(
    cfg: &DemoConfig,
    option_type: OptionType,
    style: ExerciseStyle,
) -> Result<PricedLattice> {
    let params = cfg.model.with_option_type(option_type);
    let priced = match style {
        ExerciseStyle::European => price_european(&params)?,
        ExerciseStyle::American => price_american_with(&params, cfg.early_exercise)?,
    };
    Ok(priced)
}

/// Run the price command
pub fn run(cfg: &DemoConfig, option_type: OptionType, style: ExerciseStyle) -> Result<()> {
    info!("Pricing {style} {option_type} on {} steps", cfg.model.steps);
    let priced = price_one(cfg, option_type, style)?;
    let g = priced.geometry();
    println!("{style} {option_type}: {:.6}", priced.npv());
    println!("  u = {:.6}  d = {:.6}  q = {:.6}  dt = {:.6}", g.up, g.down, g.probability, g.dt);
    Ok(())
}
