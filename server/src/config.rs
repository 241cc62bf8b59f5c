use std::env;

use common::maze::DEFAULT_MAX_ATTEMPTS;

use crate::error::ConfigError;

pub const MAX_ATTEMPTS_VAR: &str = "MAZE_MAX_ATTEMPTS";
pub const SEED_VAR: &str = "MAZE_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_attempts: usize,
    /// Fixed seed for reproducible sessions. Unset means a fresh random
    /// source.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl Config {
    /// Reads settings from the environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let max_attempts = match lookup(MAX_ATTEMPTS_VAR) {
            Some(value) => match parse::<usize>(MAX_ATTEMPTS_VAR, &value)? {
                0 => {
                    return Err(ConfigError::InvalidValue {
                        key: MAX_ATTEMPTS_VAR,
                        value,
                    });
                }
                attempts => attempts,
            },
            None => defaults.max_attempts,
        };

        let seed = match lookup(SEED_VAR) {
            Some(value) => Some(parse::<u64>(SEED_VAR, &value)?),
            None => defaults.seed,
        };

        Ok(Self { max_attempts, seed })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
}
