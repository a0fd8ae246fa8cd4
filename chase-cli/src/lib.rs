use anyhow::{Context, Result};
use chase_core::{ChaseConfig, RoundObserver, Simulation};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

pub mod cli;
pub mod config;
pub mod export;
pub mod logging;
pub mod report;

pub use cli::{Args, LogLevel};

/// What a finished run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub seed: u64,
    pub rounds_played: u32,
    pub sheep_eaten: u32,
    pub positions_path: PathBuf,
    pub alive_path: PathBuf,
}

/// Resolves the output directory and creates it, parents included, if missing
pub fn prepare_output_dir(dir: Option<&Path>) -> Result<PathBuf> {
    let dir = dir.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    Ok(dir)
}

/// Resolves and validates the run configuration, then prepares the output
/// directory. Nothing is created on disk when the configuration is rejected.
pub fn prepare_run(args: &Args) -> Result<(ChaseConfig, PathBuf)> {
    let config = config::resolve(args)?;
    let data_dir = prepare_output_dir(args.dir.as_deref())?;
    Ok((config, data_dir))
}

/// Runs one simulation and exports its results into `data_dir`.
///
/// Without a `seed` one is drawn from the thread generator and logged.
pub fn run_chase<O>(
    config: &ChaseConfig,
    seed: Option<u64>,
    data_dir: &Path,
    observer: &mut O,
) -> Result<RunSummary>
where
    O: RoundObserver + ?Sized,
{
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!("running {:?} with seed {}", config, seed);

    let mut simulation =
        Simulation::seeded(config, seed).context("Failed to set up simulation")?;
    simulation.run_with_observer(config.rounds, observer);
    log::info!("simulation finished: {}", simulation.wolf());

    let records = export::to_records(simulation.snapshots());
    let positions_path = data_dir.join(export::POSITIONS_FILE);
    export::export_json(&records, &positions_path)?;
    let alive_path = data_dir.join(export::ALIVE_FILE);
    export::export_csv(&chase_shared::alive_counts(&records), &alive_path)?;

    Ok(RunSummary {
        seed,
        rounds_played: simulation.rounds_played(),
        sheep_eaten: simulation.wolf().eaten_count,
        positions_path,
        alive_path,
    })
}
