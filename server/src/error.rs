use std::io;

use common::error::GenerationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("maze generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
