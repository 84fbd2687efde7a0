//! Built-in function aliasing: `vdot(a, b)` → `f(a, b)` with `local f is vdot@.`

use indexmap::IndexMap;

use super::{AliasCandidate, Template};
use crate::minifier::lexer::words;
use crate::minifier::tables::ALIASABLE_FUNCTIONS;

pub(super) const TEMPLATE: Template = Template {
    declaration: "local {alias} is {body}@.",
    reference: "{alias}(",
};

/// Call heads `name(` of aliasable built-ins, grouped by name.
pub(super) fn candidates(text: &str) -> Vec<AliasCandidate> {
    let mut found: IndexMap<&str, AliasCandidate> = IndexMap::new();
    for word in words(text) {
        if word.is_guarded() || !ALIASABLE_FUNCTIONS.contains(&word.text) {
            continue;
        }
        if !text[word.end..].starts_with('(') {
            continue;
        }
        found
            .entry(word.text)
            .or_insert_with(|| AliasCandidate::new(format!("{}(", word.text), word.text))
            .spans
            .push(word.start..word.end + 1);
    }
    found.into_values().collect()
}
