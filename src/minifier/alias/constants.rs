//! Constant aliasing: `constant:pi` → `p` with `local p is constant:pi.`
//!
//! Once the individual constants are decided, the `constant` root itself may
//! be worth an alias when it still appears often enough in declarations and
//! in the remaining body.

use indexmap::IndexMap;
use tracing::debug;

use super::{alias_name, splice, AliasCandidate, Template};
use crate::minifier::lexer::{find_whole_word, is_word_char};
use crate::minifier::tables::CONSTANT_ROOT;
use crate::minifier::transforms::{TokenKind, TokenTable};

pub(super) const TEMPLATE: Template = Template {
    declaration: "local {alias} is {body}.",
    reference: "{alias}",
};

/// `constant:<name>` references, grouped by name.
pub(super) fn candidates(text: &str) -> Vec<AliasCandidate> {
    let mut found: IndexMap<&str, AliasCandidate> = IndexMap::new();
    for start in root_references(text) {
        let suffix_start = start + CONSTANT_ROOT.len() + 1;
        let suffix = &text[suffix_start..];
        let suffix_len = suffix.find(|c: char| !is_word_char(c)).unwrap_or(suffix.len());
        if suffix_len == 0 {
            continue;
        }
        let end = suffix_start + suffix_len;
        let construct = &text[start..end];
        found
            .entry(construct)
            .or_insert_with(|| AliasCandidate::new(construct, construct))
            .spans
            .push(start..end);
    }
    found.into_values().collect()
}

/// Offsets of `constant` used as a namespace (`constant:`), not as a call.
fn root_references(text: &str) -> Vec<usize> {
    find_whole_word(text, CONSTANT_ROOT)
        .into_iter()
        .filter(|&start| text[start + CONSTANT_ROOT.len()..].starts_with(':'))
        .collect()
}

fn replace_root(text: &str, alias: &str) -> String {
    let edits = root_references(text)
        .into_iter()
        .map(|start| (start..start + CONSTANT_ROOT.len(), alias.to_string()))
        .collect();
    splice(text, edits)
}

/// Alias the `constant` root when it clears its own break-even point.
///
/// On success the root declaration comes first, and every declaration and
/// the body are rewritten to use it.
pub(super) fn alias_root(
    table: &mut TokenTable,
    body: &str,
    declarations: Vec<String>,
) -> (String, Vec<String>) {
    let count = root_references(body).len()
        + declarations
            .iter()
            .map(|d| root_references(d).len())
            .sum::<usize>();
    let rule = TEMPLATE.break_even(CONSTANT_ROOT);
    let profitable = rule.is_profitable(CONSTANT_ROOT.len(), count);
    debug!(count, overhead = rule.overhead, profitable, "constant root");
    if !profitable {
        return (body.to_string(), declarations);
    }

    let name = alias_name(table.push(TokenKind::Alias, CONSTANT_ROOT));
    let mut rewritten = vec![TEMPLATE.declare(&name, CONSTANT_ROOT)];
    rewritten.extend(declarations.iter().map(|d| replace_root(d, &name)));
    (replace_root(body, &name), rewritten)
}
