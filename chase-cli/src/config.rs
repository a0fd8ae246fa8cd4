use anyhow::{bail, Context, Result};
use chase_core::ChaseConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::cli::Args;

/// Settings file layout, e.g.
///
/// ```toml
/// [Terrain]
/// InitPosLimit = 10.0
///
/// [Movement]
/// SheepMoveDist = 0.5
/// WolfMoveDist = 1.0
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConfigFile {
    #[serde(rename = "Terrain")]
    pub terrain: Terrain,
    #[serde(rename = "Movement")]
    pub movement: Movement,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Terrain {
    #[serde(rename = "InitPosLimit")]
    pub init_pos_limit: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Movement {
    #[serde(rename = "SheepMoveDist")]
    pub sheep_move_dist: f64,
    #[serde(rename = "WolfMoveDist")]
    pub wolf_move_dist: f64,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context(
            "config file is missing a key or holds a value that is not a number, \
            correct it and try again",
        )
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("Config file provided: \"{}\" was not found.", path.display());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn apply(&self, config: &mut ChaseConfig) {
        config.init_pos_limit = self.terrain.init_pos_limit;
        config.sheep_move_dist = self.movement.sheep_move_dist;
        config.wolf_move_dist = self.movement.wolf_move_dist;
    }
}

/// Builds the run configuration from defaults, the optional config file and
/// the command line, in that order, and validates the result.
pub fn resolve(args: &Args) -> Result<ChaseConfig> {
    let mut config = ChaseConfig::default();

    if let Some(path) = &args.config {
        let file = ConfigFile::load(path)?;
        log::debug!("loaded {:?} from {}", file, path.display());
        file.apply(&mut config);
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if let Some(sheep) = args.sheep {
        config.sheep_count = sheep;
    }

    config.validate().context("Invalid simulation settings")?;
    Ok(config)
}
