use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;

use roulette_streaks::commands::{start, RunOptions};
use roulette_streaks::config::ConfigData;
use roulette_streaks::rng::Generator;

/// Spin a roulette wheel and compare color frequencies and streaks against expectation.
#[derive(Parser)]
#[command(name = "roulette-streaks", version)]
struct Cli {
    /// Number of spins per session (falls back to the configured default if not a positive integer)
    #[arg(allow_negative_numbers = true)]
    trials: Option<String>,

    /// Seed every generator for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Only run the session for this generator
    #[arg(long, value_enum)]
    generator: Option<Generator>,

    /// Print the session reports as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = ConfigData::load()?;
    let options = RunOptions {
        trials: cli.trials,
        seed: cli.seed,
        generator: cli.generator,
        json: cli.json,
    };

    start(&config, &options)
}
