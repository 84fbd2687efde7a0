//! Frequency-ranked identifier renaming.
//!
//! Every identifier that is not reserved or declared external gets a
//! generated name. The most frequent identifier receives the shortest name,
//! which minimizes the total output size.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use super::Transform;
use crate::minifier::lexer::{map_words, words};
use crate::minifier::tables::is_reserved;

/// Names that must never be renamed nor generated.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    external: HashSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(external_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            external: external_ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        is_reserved(word) || self.external.contains(word)
    }
}

/// Spreadsheet-column name for a 1-based rank: 1 → `a`, 26 → `z`, 27 → `aa`.
pub fn column_name(mut rank: usize) -> String {
    let mut name = Vec::new();
    while rank > 0 {
        rank -= 1;
        name.push(b'a' + (rank % 26) as u8);
        rank /= 26;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}

/// Endless sequence of minimal names, skipping excluded ones.
pub struct ShortNames<'a> {
    cursor: usize,
    exclusions: &'a ExclusionSet,
}

impl<'a> ShortNames<'a> {
    pub fn new(exclusions: &'a ExclusionSet) -> Self {
        Self {
            cursor: 0,
            exclusions,
        }
    }
}

impl Iterator for ShortNames<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            self.cursor += 1;
            let name = column_name(self.cursor);
            if !self.exclusions.contains(&name) {
                return Some(name);
            }
        }
    }
}

/// Occurrence counts of renameable identifiers, in first-seen order.
pub fn identifier_frequency<'t>(
    text: &'t str,
    exclusions: &ExclusionSet,
) -> IndexMap<&'t str, usize> {
    let mut frequency = IndexMap::new();
    for word in words(text) {
        if word.is_guarded() || exclusions.contains(word.text) {
            continue;
        }
        *frequency.entry(word.text).or_insert(0) += 1;
    }
    frequency
}

/// Renames every non-excluded identifier.
pub struct RenameIdentifiers {
    exclusions: ExclusionSet,
    renamed: IndexMap<String, String>,
}

impl RenameIdentifiers {
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self {
            exclusions,
            renamed: IndexMap::new(),
        }
    }

    /// Original → generated name mapping of the last run, most frequent first.
    pub fn renamed(&self) -> &IndexMap<String, String> {
        &self.renamed
    }

    /// Assign generated names by descending frequency.
    ///
    /// The sort is stable, so identifiers seen first win ties.
    fn assign(&self, text: &str) -> IndexMap<String, String> {
        let mut ranked: Vec<(&str, usize)> = identifier_frequency(text, &self.exclusions)
            .into_iter()
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .zip(ShortNames::new(&self.exclusions))
            .map(|((original, count), name)| {
                debug!(original, name = %name, count, "rename");
                (original.to_string(), name)
            })
            .collect()
    }
}

impl Transform for RenameIdentifiers {
    fn name(&self) -> &'static str {
        "rename-identifiers"
    }

    fn transform(&mut self, text: &mut String) {
        let renamed = self.assign(text);
        *text = map_words(text, |word| {
            if word.is_guarded() {
                return None;
            }
            renamed.get(word.text).map(String::as_str)
        });
        self.renamed = renamed;
    }
}
