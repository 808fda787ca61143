//! ticks - Print nice axis ticks for a numeric range.
//!
//! ```text
//! $ ticks 0 1
//! 0
//! 0.2
//! 0.4
//! 0.6
//! 0.8
//! 1
//! ```
//!
//! Set `RUST_LOG=trueno_ticks=trace` to watch the step search.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use anyhow::{Context, Result};
use clap::Parser;
use trueno_ticks::format::format_tick;
use trueno_ticks::{LocatorConfig, TickLocator};

/// ticks: nice-number axis ticks for a range
#[derive(Parser, Debug)]
#[command(name = "ticks")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(
    about = "Print evenly spaced, round tick values covering [VMIN, VMAX]",
    long_about = None
)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Lower bound of the range
    vmin: f64,

    /// Upper bound of the range
    vmax: f64,

    /// Maximum number of ticks (overrides the config file)
    #[arg(short, long)]
    max_ticks: Option<usize>,

    /// Comma-separated step multipliers in [1, 10) (overrides the config file)
    #[arg(short, long, value_delimiter = ',')]
    steps: Option<Vec<f64>>,

    /// YAML config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Print the chosen step before the ticks
    #[arg(long)]
    show_step: bool,
}

impl Cli {
    /// Resolve configuration: flags > config file > defaults.
    fn locator_config(&self) -> Result<LocatorConfig> {
        let mut config = match &self.config {
            Some(path) => LocatorConfig::load(path)
                .with_context(|| format!("failed to load config from {path}"))?,
            None => LocatorConfig::default(),
        };

        if let Some(max_ticks) = self.max_ticks {
            config.max_ticks = max_ticks;
        }
        if let Some(steps) = &self.steps {
            config.steps.clone_from(steps);
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let locator = TickLocator::with_config(cli.locator_config()?)?;

    if cli.show_step {
        match locator.best_step(cli.vmin, cli.vmax)? {
            Some(step) => println!("step {}", format_tick(step)),
            None => println!("step -"),
        }
    }

    let ticks = locator
        .ticks(cli.vmin, cli.vmax)
        .with_context(|| format!("no ticks for [{}, {}]", cli.vmin, cli.vmax))?;

    for tick in ticks {
        println!("{}", format_tick(tick));
    }

    Ok(())
}
