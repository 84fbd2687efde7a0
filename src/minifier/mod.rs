//! KerboScript minification pipeline.
//!
//! The pipeline is a fixed sequence of text transforms:
//!
//! 1. `#EXTERNAL_IDS` pragmas are collected from the raw source
//! 2. comments are stripped
//! 3. string literals are swapped for placeholders
//! 4. text is lower-cased and line endings normalized
//! 5. alias declarations are synthesized
//! 6. identifiers are renamed
//! 7. long forms are replaced with shortcuts
//! 8. whitespace is compacted
//! 9. string literals are restored
//!
//! Every stage is lexical. Nothing here parses the script into a tree.

pub mod alias;
pub mod lexer;
pub mod tables;
pub mod transforms;

use tracing::debug;

use crate::flags::{FlagError, Flags};
use alias::SynthesizeAliases;
use transforms::literals::{protect, restore};
use transforms::{
    parse_external_ids, CompactWhitespace, ExclusionSet, Normalize, RenameIdentifiers,
    StripComments, TokenTable, Transform, UseShortcuts,
};

/// A configured minifier, reusable across documents.
#[derive(Debug, Clone)]
pub struct Minifier {
    flags: Flags,
    external_ids: Vec<String>,
}

impl Minifier {
    /// Create a minifier, rejecting flag combinations that cannot run.
    pub fn new(flags: Flags) -> Result<Self, FlagError> {
        Ok(Self {
            flags: flags.validate()?,
            external_ids: Vec::new(),
        })
    }

    /// Identifiers that must keep their names in every document.
    ///
    /// They are merged with the pragmas each document declares.
    pub fn with_external_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.external_ids.extend(
            ids.into_iter()
                .map(|id| id.as_ref().trim().to_lowercase())
                .filter(|id| !id.is_empty()),
        );
        self
    }

    /// Minify one document.
    pub fn minify(&self, source: &str) -> String {
        if source.is_empty() {
            return String::new();
        }

        let mut external = self.external_ids.clone();
        external.extend(parse_external_ids(source));
        debug!(count = external.len(), "external ids");

        let mut text = source.to_string();
        if self.flags.contains(Flags::REMOVE_COMMENTS) {
            run(&mut StripComments, &mut text);
        }

        let mut table = TokenTable::new();
        text = protect(&text, &mut table);
        debug!(literals = table.count(transforms::TokenKind::Literal), "protect literals");

        run(&mut Normalize, &mut text);

        if self.flags.intersects(Flags::ALIASING) {
            run(&mut SynthesizeAliases::new(self.flags, &mut table), &mut text);
        }
        if self.flags.contains(Flags::REPLACE_VARS) {
            run(&mut RenameIdentifiers::new(ExclusionSet::new(external)), &mut text);
        }
        if self.flags.contains(Flags::USE_SHORTCUTS) {
            run(&mut UseShortcuts::new(), &mut text);
        }
        run(&mut CompactWhitespace::new(self.flags), &mut text);

        restore(&text, &table)
    }
}

fn run(stage: &mut dyn Transform, text: &mut String) {
    let before = text.len();
    stage.transform(text);
    debug!(stage = stage.name(), before, after = text.len(), "stage");
}

/// Minify `source` with `flags` and no extra external identifiers.
pub fn minify(source: &str, flags: Flags) -> Result<String, FlagError> {
    Ok(Minifier::new(flags)?.minify(source))
}
