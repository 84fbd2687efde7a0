//! Command line definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser};
use clap_complete::Shell;

use crate::flags::{FlagSelection, Flags};

/// Source-to-source minifier for kOS KerboScript.
#[derive(Debug, Parser)]
#[command(name = "ksmin", version, about)]
#[command(long_about = "Source-to-source minifier for kOS KerboScript.

With no stage flags every stage runs. Naming stages runs only those;
--no-<stage> removes a stage from whichever set applies.

Identifiers listed after `#EXTERNAL_IDS` in a script keep their names.

Logging is controlled by the KSMIN_LOG environment variable (e.g. KSMIN_LOG=debug).")]
pub struct Cli {
    #[command(flatten)]
    pub stages: StageArgs,

    /// Identifier that must keep its name (repeatable)
    #[arg(short = 'e', long = "external", value_name = "ID")]
    pub external: Vec<String>,

    /// Write the result to a file instead of stdout (single input only)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file [default: <config dir>/ksmin/config.toml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print size statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,

    /// KerboScript files to minify
    #[arg(value_name = "FILE", required_unless_present = "completions")]
    pub files: Vec<PathBuf>,
}

/// Pipeline stage switches.
#[derive(Debug, Clone, Default, Args)]
pub struct StageArgs {
    /// Run every stage
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Remove `//` comments
    #[arg(short = 'c', long)]
    pub remove_comments: bool,

    /// Remove leading indentation and repeated spaces
    #[arg(short = 'i', long)]
    pub remove_indentation: bool,

    /// Remove spaces around operators and punctuation
    #[arg(short = 's', long)]
    pub remove_spaces: bool,

    /// Join all lines into one
    #[arg(short = 'n', long)]
    pub remove_newlines: bool,

    /// Rename identifiers to the shortest free names
    #[arg(short = 'v', long)]
    pub replace_vars: bool,

    /// Alias repeated built-in function calls
    #[arg(short = 'f', long)]
    pub alias_functions: bool,

    /// Alias repeated `constant:` references
    #[arg(short = 'k', long)]
    pub alias_constants: bool,

    /// Bind repeated v/r/q calls with literal arguments
    #[arg(short = 'b', long)]
    pub bind_functions: bool,

    /// Replace long built-in names with their shortcuts
    #[arg(short = 'u', long)]
    pub use_shortcuts: bool,

    #[arg(long, hide_short_help = true)]
    pub no_remove_comments: bool,

    #[arg(long, hide_short_help = true)]
    pub no_remove_indentation: bool,

    #[arg(long, hide_short_help = true)]
    pub no_remove_spaces: bool,

    #[arg(long, hide_short_help = true)]
    pub no_remove_newlines: bool,

    #[arg(long, hide_short_help = true)]
    pub no_replace_vars: bool,

    #[arg(long, hide_short_help = true)]
    pub no_alias_functions: bool,

    #[arg(long, hide_short_help = true)]
    pub no_alias_constants: bool,

    #[arg(long, hide_short_help = true)]
    pub no_bind_functions: bool,

    #[arg(long, hide_short_help = true)]
    pub no_use_shortcuts: bool,
}

impl StageArgs {
    /// Stages requested on the command line.
    pub fn selection(&self) -> FlagSelection {
        let enabled = [
            (self.all, Flags::ALL),
            (self.remove_comments, Flags::REMOVE_COMMENTS),
            (self.remove_indentation, Flags::REMOVE_INDENTATION),
            (self.remove_spaces, Flags::REMOVE_SPACES),
            (self.remove_newlines, Flags::REMOVE_NEWLINES),
            (self.replace_vars, Flags::REPLACE_VARS),
            (self.alias_functions, Flags::ALIAS_FUNCTIONS),
            (self.alias_constants, Flags::ALIAS_CONSTANTS),
            (self.bind_functions, Flags::BIND_FUNCTIONS),
            (self.use_shortcuts, Flags::USE_SHORTCUTS),
        ];
        let disabled = [
            (self.no_remove_comments, Flags::REMOVE_COMMENTS),
            (self.no_remove_indentation, Flags::REMOVE_INDENTATION),
            (self.no_remove_spaces, Flags::REMOVE_SPACES),
            (self.no_remove_newlines, Flags::REMOVE_NEWLINES),
            (self.no_replace_vars, Flags::REPLACE_VARS),
            (self.no_alias_functions, Flags::ALIAS_FUNCTIONS),
            (self.no_alias_constants, Flags::ALIAS_CONSTANTS),
            (self.no_bind_functions, Flags::BIND_FUNCTIONS),
            (self.no_use_shortcuts, Flags::USE_SHORTCUTS),
        ];

        let collect = |pairs: &[(bool, Flags)]| {
            pairs
                .iter()
                .filter(|(set, _)| *set)
                .fold(Flags::empty(), |acc, (_, flag)| acc | *flag)
        };
        FlagSelection {
            enabled: collect(&enabled),
            disabled: collect(&disabled),
        }
    }
}
