//! Configuration file support.
//!
//! ```toml
//! [minify]
//! flags = ["all", "no-use-shortcuts"]
//! external_ids = ["missionlog"]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::flags::FlagSelection;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub minify: MinifyConfig,
}

/// Defaults for the minify command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyConfig {
    /// Flag names used when none are given on the command line.
    pub flags: Vec<String>,
    /// Identifiers that are never renamed.
    pub external_ids: Vec<String>,
}

impl Config {
    /// Default config file location: `<config dir>/ksmin/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ksmin").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(Error::Read { path, source }),
        };
        Self::parse(&content).map_err(|source| Error::Config { path, source })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Flag selection stored in the file.
    pub fn flag_selection(&self) -> Result<FlagSelection> {
        Ok(FlagSelection::parse(&self.minify.flags)?)
    }
}
