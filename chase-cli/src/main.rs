use anyhow::{Context, Result};
use chase_cli::logging::init_logging;
use chase_cli::report::ConsoleReporter;
use chase_cli::{prepare_run, run_chase, Args};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, data_dir) = prepare_run(&args)?;
    init_logging(args.log, &data_dir)?;

    log::info!("Chase starting...");
    log::info!("Output directory: {}", data_dir.display());

    let mut reporter = ConsoleReporter::stdout(args.wait);
    let result = run_chase(&config, args.seed, &data_dir, &mut reporter).and_then(|summary| {
        reporter.finish().context("Failed to print round statistics")?;
        Ok(summary)
    });

    match result {
        Ok(summary) => {
            log::info!(
                "Played {} rounds with seed {}, {} sheep eaten",
                summary.rounds_played,
                summary.seed,
                summary.sheep_eaten
            );
            Ok(())
        }
        Err(err) => {
            log::error!("{:#}", err);
            Err(err)
        }
    }
}
