use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Wolf chasing sheep simulation", long_about = None)]
pub struct Args {
    /// TOML file to read terrain and movement settings from
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory to store exported program data, created if missing
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Write log events of this level and above to chase.log
    #[arg(short, long, value_name = "LEVEL", value_enum, ignore_case = true)]
    pub log: Option<LogLevel>,

    /// Number of rounds in the simulation [default: 50]
    #[arg(short, long, value_name = "NUM", value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<u32>,

    /// Number of sheep in the simulation [default: 15]
    #[arg(short, long, value_name = "NUM", value_parser = clap::value_parser!(u32).range(1..))]
    pub sheep: Option<u32>,

    /// Wait for Enter after displaying each round's statistics
    #[arg(short, long)]
    pub wait: bool,

    /// Seed for the random source, drawn at random when omitted
    #[arg(long, value_name = "NUM")]
    pub seed: Option<u64>,
}

/// Log levels accepted by `--log`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => log::LevelFilter::Error,
        }
    }
}
