//! PayMo anti-fraud verifier - command-line entry point.

use anyhow::Context;
use clap::Parser;
use paymo_cli::{commands, logging, Cli, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    let reports = commands::execute_verify(&cli.batch, &cli.stream, &cli.jobs(), &config)
        .with_context(|| {
            format!(
                "verifying {} against {}",
                cli.stream.display(),
                cli.batch.display()
            )
        })?;

    let formatter = Formatter::new(config.output.format, config.output.color);
    if let Some(summary) = formatter.format_summary(&reports)? {
        println!("{}", summary);
    }

    Ok(())
}
