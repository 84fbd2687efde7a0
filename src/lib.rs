//! ksmin - source-to-source minifier for kOS KerboScript
//!
//! The library exposes the minification pipeline and the pieces the `ksmin`
//! binary is built from: flags, configuration and the command line definition.

pub mod cli;
pub mod config;
pub mod error;
pub mod flags;
pub mod minifier;

pub use config::Config;
pub use error::{Error, Result};
pub use flags::{FlagError, FlagSelection, Flags};
pub use minifier::{minify, Minifier};
