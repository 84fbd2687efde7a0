//! Stage toggles for the minification pipeline.
//!
//! Every stage is an independent bit. `Flags::ALL` is the composite applied when
//! nothing is enabled explicitly, and any flag can be negated with `no-<name>`.

use bitflags::bitflags;

bitflags! {
    /// Set of enabled pipeline stages.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags: u16 {
        const REMOVE_COMMENTS = 1 << 0;
        const REMOVE_INDENTATION = 1 << 1;
        const REMOVE_SPACES = 1 << 2;
        const REMOVE_NEWLINES = 1 << 3;
        const REPLACE_VARS = 1 << 4;
        const ALIAS_FUNCTIONS = 1 << 5;
        const ALIAS_CONSTANTS = 1 << 6;
        const BIND_FUNCTIONS = 1 << 7;
        const USE_SHORTCUTS = 1 << 8;

        const ALL = Self::REMOVE_COMMENTS.bits()
            | Self::REMOVE_INDENTATION.bits()
            | Self::REMOVE_SPACES.bits()
            | Self::REMOVE_NEWLINES.bits()
            | Self::REPLACE_VARS.bits()
            | Self::ALIAS_FUNCTIONS.bits()
            | Self::ALIAS_CONSTANTS.bits()
            | Self::BIND_FUNCTIONS.bits()
            | Self::USE_SHORTCUTS.bits();

        /// Stages that allocate alias identifiers and rely on the renamer.
        const ALIASING = Self::ALIAS_FUNCTIONS.bits()
            | Self::ALIAS_CONSTANTS.bits()
            | Self::BIND_FUNCTIONS.bits();
    }
}

/// Long name, short name and value of every selectable flag.
const FLAG_NAMES: &[(&str, char, Flags)] = &[
    ("all", 'a', Flags::ALL),
    ("remove-comments", 'c', Flags::REMOVE_COMMENTS),
    ("remove-indentation", 'i', Flags::REMOVE_INDENTATION),
    ("remove-spaces", 's', Flags::REMOVE_SPACES),
    ("remove-newlines", 'n', Flags::REMOVE_NEWLINES),
    ("replace-vars", 'v', Flags::REPLACE_VARS),
    ("alias-functions", 'f', Flags::ALIAS_FUNCTIONS),
    ("alias-constants", 'k', Flags::ALIAS_CONSTANTS),
    ("bind-functions", 'b', Flags::BIND_FUNCTIONS),
    ("use-shortcuts", 'u', Flags::USE_SHORTCUTS),
];

/// Errors raised while building or validating a flag set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    #[error("'{0}' is not a valid option")]
    Unknown(String),

    #[error("{} is not a valid option", quoted(.0))]
    UnknownMany(Vec<String>),

    #[error("--{flag} requires --replace-vars")]
    RequiresReplaceVars { flag: &'static str },
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Flags {
    /// Look up a flag by its long or single-letter name.
    pub fn from_option_name(name: &str) -> Option<Flags> {
        let mut chars = name.chars();
        let short = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };
        FLAG_NAMES
            .iter()
            .find(|(long, s, _)| *long == name || Some(*s) == short)
            .map(|(_, _, flag)| *flag)
    }

    /// Long name of a single stage flag.
    pub fn long_name(self) -> Option<&'static str> {
        FLAG_NAMES
            .iter()
            .find(|(_, _, flag)| *flag == self)
            .map(|(long, _, _)| *long)
    }

    /// Reject combinations the pipeline cannot run.
    ///
    /// Alias synthesis emits placeholder identifiers that only the renamer
    /// turns into short names, so every aliasing stage needs `REPLACE_VARS`.
    pub fn validate(self) -> Result<Flags, FlagError> {
        if self.contains(Flags::REPLACE_VARS) {
            return Ok(self);
        }
        for flag in [
            Flags::ALIAS_FUNCTIONS,
            Flags::ALIAS_CONSTANTS,
            Flags::BIND_FUNCTIONS,
        ] {
            if self.contains(flag) {
                return Err(FlagError::RequiresReplaceVars {
                    flag: flag.long_name().unwrap_or("alias"),
                });
            }
        }
        Ok(self)
    }
}

/// Flags requested by the user, before the `ALL` default is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSelection {
    pub enabled: Flags,
    pub disabled: Flags,
}

impl Default for FlagSelection {
    fn default() -> Self {
        Self {
            enabled: Flags::empty(),
            disabled: Flags::empty(),
        }
    }
}

impl FlagSelection {
    /// Parse a list of flag names such as `["all", "no-use-shortcuts"]`.
    ///
    /// Every unknown name is collected so they can all be reported at once.
    pub fn parse<I, S>(names: I) -> Result<Self, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::default();
        let mut unknown = Vec::new();

        for name in names {
            let name = name.as_ref().trim();
            let name = name.trim_start_matches('-');
            match name.strip_prefix("no-").map(Flags::from_option_name) {
                Some(Some(flag)) => selection.disabled |= flag,
                Some(None) => unknown.push(name.to_string()),
                None => match Flags::from_option_name(name) {
                    Some(flag) => selection.enabled |= flag,
                    None => unknown.push(name.to_string()),
                },
            }
        }

        match unknown.len() {
            0 => Ok(selection),
            1 => Err(FlagError::Unknown(unknown.remove(0))),
            _ => Err(FlagError::UnknownMany(unknown)),
        }
    }

    /// Whether the user asked for anything at all.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty() && self.disabled.is_empty()
    }

    /// Apply the `ALL` default and negations, then validate.
    pub fn resolve(self) -> Result<Flags, FlagError> {
        let base = if self.enabled.is_empty() {
            Flags::ALL
        } else {
            self.enabled
        };
        (base - self.disabled).validate()
    }
}
