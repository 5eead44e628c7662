mod cli;
mod output;

use anyhow::{Result, ensure};
use clap::Parser;
use cuppa_core::{BrewRequest, CupSpec, Strength};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    ensure!(
        cli.cups.len() == cli.milk.len(),
        "got {} cup volumes but {} milk ratios; one ratio per cup is required",
        cli.cups.len(),
        cli.milk.len()
    );

    let strength = Strength::new(cli.strength)?;
    let cups = cli
        .cups
        .iter()
        .zip(&cli.milk)
        .map(|(&volume_ml, &milk_ratio)| CupSpec::new(volume_ml, milk_ratio))
        .collect::<Result<Vec<_>, _>>()?;
    let request = BrewRequest::new(cups, strength)?;

    tracing::debug!(
        cups = request.cups().len(),
        strength = request.strength().beans_per_100_ml(),
        "computing brew plan"
    );
    let plan = request.compute();

    if cli.json {
        println!("{}", output::render_json(&plan)?);
    } else {
        print!("{}", output::render_text(&plan));
    }

    Ok(())
}
