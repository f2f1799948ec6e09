use std::path::PathBuf;

use thiserror::Error;

/// Rejected tab bar definitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("tab bar needs at least one item")]
    EmptyItems,
    #[error("duplicate tab key {0:?}")]
    DuplicateKey(&'static str),
    #[error("initial tab {0:?} is not in the tab bar")]
    UnknownInitialKey(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum HomeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Nav(#[from] NavError),
}
