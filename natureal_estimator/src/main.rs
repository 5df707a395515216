#![forbid(unsafe_code)]

use std::io;

use anyhow::Result;
use natureal_estimator::{execute, logging, Command, EstimatorConfig};
use tracing::debug;

fn main() -> Result<()> {
    let config = EstimatorConfig::load()?;
    logging::init(&config.log_filter)?;

    let command = Command::parse(std::env::args().skip(1))?;
    debug!(?command, "dispatching");

    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(
        command,
        &config,
        stdin.lock(),
        stdout.lock(),
        &mut rand::thread_rng(),
    )
}
