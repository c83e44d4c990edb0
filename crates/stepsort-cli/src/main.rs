//! Stepsort CLI: drive the incremental sorting engine headlessly
//!
//! ## Usage
//!
//! ```bash
//! stepsort list                               # Registered algorithms
//! stepsort run -a heap -n 64 --seed 7         # One run, text report
//! stepsort run -a bubble -n 8 --steps         # Print every operation
//! stepsort compare -n 200 --format json       # All algorithms, same input
//! ```

use clap::Parser;
use std::process::ExitCode;
use stepsort_cli::{
    init_tracing, runner, Cli, CliConfig, CliResult, ColorChoice, Commands, ProgressReporter,
    Verbosity,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    init_tracing(verbosity);
    let config = build_config(&cli, verbosity)?;

    let mut reporter = ProgressReporter::new(config.use_color(), config.verbosity.is_quiet());
    let output = match &cli.command {
        Commands::List(args) => runner::list(args)?,
        Commands::Run(args) => runner::run(&config, args, &reporter)?,
        Commands::Compare(args) => runner::compare(&config, args, &mut reporter)?,
    };
    print!("{output}");
    Ok(())
}

fn build_config(cli: &Cli, verbosity: Verbosity) -> CliResult<CliConfig> {
    let color: ColorChoice = cli.color.into();

    let config = CliConfig::new().with_verbosity(verbosity).with_color(color);
    match &cli.config {
        Some(path) => config.load_engine(path),
        None => Ok(config),
    }
}
