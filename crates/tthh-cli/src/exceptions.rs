use std::io;
use thiserror::Error;
use tthh_core::{ConfigError, DateParseError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("could not parse '{text}': {source}")]
    Parse {
        text: String,
        #[source]
        source: DateParseError,
    },
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
