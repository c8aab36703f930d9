use anyhow::{Context, Result};

use std::time::Instant;

use crate::analysis::{analyze_frequency, analyze_streaks};
use crate::config::ConfigData;
use crate::report::SessionReport;
use crate::rng::Generator;
use crate::roulette::{run_trials, Wheel};

/// Options collected from the command line.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub trials: Option<String>,
    pub seed: Option<u64>,
    pub generator: Option<Generator>,
    pub json: bool,
}

/// Falls back to `default` with a warning when `arg` is not a positive integer.
pub fn parse_trials(arg: Option<&str>, default: usize) -> usize {
    let Some(arg) = arg else {
        return default;
    };
    match arg.trim().parse::<usize>() {
        Ok(trials) if trials > 0 => trials,
        _ => {
            log::warn!(
                "Not a valid input for number of attempts: {} (using {})",
                arg,
                default
            );
            default
        }
    }
}

/// Spins `wheel` `trials` times with `generator` and analyzes the outcomes.
pub fn run_session(
    wheel: &Wheel,
    generator: Generator,
    seed: Option<u64>,
    trials: usize,
) -> Result<SessionReport> {
    let mut rng = generator.build(seed);

    let started = Instant::now();
    let outcomes = run_trials(wheel, rng.as_mut(), trials)
        .with_context(|| format!("spinning with {}", generator))?;
    let spin_ms = started.elapsed().as_millis();
    log::info!("spun wheel {} times with {} in {}ms", trials, generator, spin_ms);

    let started = Instant::now();
    let frequency = analyze_frequency(wheel, &outcomes);
    let streaks = analyze_streaks(&outcomes);
    let analysis_ms = started.elapsed().as_millis();
    log::info!(
        "counted {} streak lengths in {}ms",
        streaks.histogram.len(),
        analysis_ms
    );

    Ok(SessionReport {
        generator,
        seed,
        trials,
        frequency,
        streaks,
        spin_ms,
        analysis_ms,
    })
}

/// Runs one session per configured generator, in order.
pub fn run_all(config: &ConfigData, options: &RunOptions) -> Result<Vec<SessionReport>> {
    let wheel = config.wheel()?;
    for (i, color) in wheel.slots().iter().enumerate() {
        log::debug!("Slot {}: {}", i + 1, color);
    }

    let trials = parse_trials(options.trials.as_deref(), config.default_trials);
    let seed = options.seed.or(config.seed);
    let generators = match options.generator {
        Some(generator) => vec![generator],
        None => config.generators.clone(),
    };

    generators
        .into_iter()
        .map(|generator| run_session(&wheel, generator, seed, trials))
        .collect()
}

pub fn start(config: &ConfigData, options: &RunOptions) -> Result<()> {
    let reports = run_all(config, options)?;

    if options.json {
        let content = serde_json::to_string_pretty(&reports)?;
        println!("{}", content);
        return Ok(());
    }

    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            println!("\n");
        }
        print!("{}", report);
    }
    Ok(())
}
