//! Monetra CLI
//!
//! Runs one money calculation and prints the result.
//!
//! # Commands
//!
//! - `monetra show <amount>`
//! - `monetra add|sub|cmp <left> <right>`
//! - `monetra mul <amount> <factor>`
//! - `monetra div <amount> <divisor>`
//!
//! Currency and rounding come from configuration (`config/default`,
//! `MONETRA__MONEY__*`) unless given on the command line.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use monetra_money::{AppConfig, Currency, RoundingPolicy, global_defaults, initialize};

mod commands;

use commands::Command;

/// Monetra money calculator
#[derive(Parser)]
#[command(name = "monetra")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Currency code, e.g. BRL (overrides configuration)
    #[arg(short, long, global = true)]
    currency: Option<Currency>,

    /// Rounding policy, e.g. HALF_DOWN (overrides configuration)
    #[arg(short, long, global = true)]
    rounding: Option<RoundingPolicy>,

    /// Fraction digits to keep instead of the currency's canonical scale
    #[arg(short, long, global = true)]
    scale: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut money = config.money;
    if let Some(currency) = cli.currency {
        money.currency = currency;
    }
    if let Some(rounding) = cli.rounding {
        money.rounding = rounding;
    }
    initialize(money.currency, money.rounding)?;
    let defaults = global_defaults()?;
    info!(
        currency = %defaults.currency,
        rounding = %defaults.rounding,
        "money defaults ready"
    );

    let output = cli.command.run(defaults, cli.scale)?;
    println!("{output}");

    Ok(())
}
