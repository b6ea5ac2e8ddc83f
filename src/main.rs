use std::io;
use std::process::ExitCode;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lifeterm::config::Config;
use lifeterm::console;
use lifeterm::sim;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Frames go to stdout, keep logs out of the way
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to read configuration")?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut console = console::for_platform();
    let mut stdout = io::stdout().lock();

    sim::run(&config, &mut stdout, console.as_mut(), &mut rng)?;

    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e:?}");
            println!("{e:#}");

            ExitCode::FAILURE
        }
    }
}
