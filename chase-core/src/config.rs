use thiserror::Error;

use crate::{DEFAULT_SHEEP_MOVE_DIST, DEFAULT_WOLF_MOVE_DIST};

/// Run parameters for a chase simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseConfig {
    pub rounds: u32,
    pub sheep_count: u32,
    /// Sheep start with each coordinate drawn from `[-init_pos_limit, init_pos_limit]`
    pub init_pos_limit: f64,
    pub sheep_move_dist: f64,
    pub wolf_move_dist: f64,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            rounds: 50,
            sheep_count: 15,
            init_pos_limit: 10.0,
            sheep_move_dist: DEFAULT_SHEEP_MOVE_DIST,
            wolf_move_dist: DEFAULT_WOLF_MOVE_DIST,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, provided {value}")]
    NonPositiveCount { name: &'static str, value: u32 },
    #[error("{name} must be a finite value higher than 0, provided {value}")]
    NonPositiveValue { name: &'static str, value: f64 },
}

impl ChaseConfig {
    /// Rejects every parameter the round engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let counts = [("rounds", self.rounds), ("sheep_count", self.sheep_count)];
        for (name, value) in counts {
            if value == 0 {
                return Err(ConfigError::NonPositiveCount { name, value });
            }
        }

        let values = [
            ("init_pos_limit", self.init_pos_limit),
            ("sheep_move_dist", self.sheep_move_dist),
            ("wolf_move_dist", self.wolf_move_dist),
        ];
        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveValue { name, value });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ChaseConfig::default();
        assert_eq!(config.rounds, 50);
        assert_eq!(config.sheep_count, 15);
        assert_eq!(config.init_pos_limit, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = ChaseConfig {
            rounds: 0,
            ..ChaseConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveCount {
                name: "rounds",
                value: 0
            })
        );
    }

    #[test]
    fn test_zero_sheep_rejected() {
        let config = ChaseConfig {
            sheep_count: 0,
            ..ChaseConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveCount {
                name: "sheep_count",
                ..
            })
        ));
    }

    #[test]
    fn test_non_positive_distances_rejected() {
        for wolf_move_dist in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = ChaseConfig {
                wolf_move_dist,
                ..ChaseConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::NonPositiveValue {
                    name: "wolf_move_dist",
                    ..
                })
            ));
        }

        let config = ChaseConfig {
            sheep_move_dist: -0.5,
            ..ChaseConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ChaseConfig {
            init_pos_limit: 0.0,
            ..ChaseConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_error_message() {
        let err = ConfigError::NonPositiveCount {
            name: "rounds",
            value: 0,
        };
        assert_eq!(
            err.to_string(),
            "rounds must be a positive integer, provided 0"
        );
    }
}
