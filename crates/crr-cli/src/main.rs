//! crr — Cox-Ross-Rubinstein option pricing from the command line.
//!
//! # Commands
//!
//! - `crr demo` - American and European call/put prices plus the five
//!   greeks for the configured scenario (default when no command is given)
//! - `crr price` - Price one option
//! - `crr greeks` - Price and greeks for one option
//!
//! Model inputs come from `--config <file>` (TOML, see [`config`]) and may
//! be overridden per flag, e.g. `crr --steps 200 --volatility 0.3 price -t put -s american`.

use clap::{Args, Parser, Subcommand};
use crr_core::{ExerciseStyle, OptionType, Real};
use crr_methods::{EarlyExercise, ModelParameters};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::DemoConfig;

/// CRR binomial option pricer
#[derive(Parser)]
#[command(name = "crr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ModelOverrides,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Per-flag overrides of the configured model.
#[derive(Args, Debug)]
struct ModelOverrides {
    /// Spot price S0
    #[arg(long)]
    spot: Option<Real>,

    /// Strike K
    #[arg(long)]
    strike: Option<Real>,

    /// Maturity T in years
    #[arg(long)]
    maturity: Option<Real>,

    /// Risk-free rate r
    #[arg(long)]
    rate: Option<Real>,

    /// Volatility σ
    #[arg(long)]
    volatility: Option<Real>,

    /// Continuous dividend yield Q
    #[arg(long)]
    dividend: Option<Real>,

    /// Number of tree steps M
    #[arg(short = 'm', long)]
    steps: Option<usize>,

    /// Early-exercise rule for American prices (intrinsic, forward-growth)
    #[arg(long)]
    early_exercise: Option<EarlyExercise>,
}

impl ModelOverrides {
    fn apply(&self, cfg: &mut DemoConfig) {
        let model: &mut ModelParameters = &mut cfg.model;
        if let Some(v) = self.spot {
            model.spot = v;
        }
        if let Some(v) = self.strike {
            model.strike = v;
        }
        if let Some(v) = self.maturity {
            model.maturity = v;
        }
        if let Some(v) = self.rate {
            model.rate = v;
        }
        if let Some(v) = self.volatility {
            model.volatility = v;
        }
        if let Some(v) = self.dividend {
            model.dividend_yield = v;
        }
        if let Some(v) = self.steps {
            model.steps = v;
        }
        if let Some(rule) = self.early_exercise {
            cfg.early_exercise = rule;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print American/European call/put prices and greeks for the scenario
    Demo,

    /// Price a single option
    Price {
        /// Option type (call, put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: OptionType,

        /// Exercise style (european, american)
        #[arg(short, long, default_value = "european")]
        style: ExerciseStyle,
    },

    /// Price and bump-and-reprice greeks for a single option
    Greeks {
        /// Option type (call, put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: OptionType,

        /// Exercise style (european, american)
        #[arg(short, long, default_value = "european")]
        style: ExerciseStyle,
    },
}

fn run(cli: Cli) -> Result<()> {
    let mut cfg = DemoConfig::load(cli.config.as_deref())?;
    cli.overrides.apply(&mut cfg);

    let default_level = if cli.verbose {
        "debug"
    } else {
        cfg.log_level.as_filter_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => commands::demo::run(&cfg),
        Commands::Price { option_type, style } => {
            commands::price::run(&cfg, option_type, style)
        }
        Commands::Greeks { option_type, style } => {
            commands::greeks::run(&cfg, option_type, style)
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
