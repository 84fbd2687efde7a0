//! Library error type.

use std::io;
use std::path::PathBuf;

use crate::flags::FlagError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File not found: {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Flag(#[from] FlagError),
}

pub type Result<T> = std::result::Result<T, Error>;
