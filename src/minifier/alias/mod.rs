//! Cost-benefit alias synthesis.
//!
//! Repeated constructs can be replaced by a short local alias declared once at
//! the top of the script. Whether that pays off is an exact size comparison:
//! a construct of length `L` seen `C` times is aliased iff
//!
//! ```text
//! overhead + per_use * C < L * C
//! ```
//!
//! where `overhead` is the size of the declaration line and `per_use` the size
//! of one alias reference, both assuming a one-character alias name. The
//! renamer later gives aliases their real names, ranked by frequency like any
//! other identifier.
//!
//! Three sub-passes share this rule, run in this order:
//! - [`functions`] - built-in function calls
//! - [`constants`] - `constant:<name>` references, and the `constant` root
//! - [`bind`] - `v`, `r`, `q` calls with numeric literal arguments

mod bind;
mod constants;
mod functions;

use std::ops::Range;

use tracing::debug;

use super::transforms::{TokenKind, TokenTable, Transform};
use crate::flags::Flags;

/// Length assumed for an alias name when estimating savings.
pub const MIN_ALIAS_LEN: usize = 1;

const LINE_TERMINATOR_LEN: usize = 1;
const ALIAS_SLOT: &str = "{alias}";
const BODY_SLOT: &str = "{body}";

/// Shape of an alias declaration and of one alias reference.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// Declaration line with `{alias}` and `{body}` slots.
    pub declaration: &'static str,
    /// Reference with an `{alias}` slot.
    pub reference: &'static str,
}

impl Template {
    /// Declaration text without its slots.
    pub fn fixed_len(&self) -> usize {
        self.declaration.len() - ALIAS_SLOT.len() - BODY_SLOT.len()
    }

    /// Full size of the declaration line for `body`.
    pub fn overhead(&self, body: &str) -> usize {
        self.fixed_len() + MIN_ALIAS_LEN + LINE_TERMINATOR_LEN + body.len()
    }

    /// Size of one reference to the alias.
    pub fn per_use(&self) -> usize {
        self.reference.len() - ALIAS_SLOT.len() + MIN_ALIAS_LEN
    }

    pub fn break_even(&self, body: &str) -> BreakEven {
        BreakEven {
            overhead: self.overhead(body),
            per_use: self.per_use(),
        }
    }

    pub fn declare(&self, alias: &str, body: &str) -> String {
        self.declaration
            .replace(ALIAS_SLOT, alias)
            .replace(BODY_SLOT, body)
    }

    pub fn refer(&self, alias: &str) -> String {
        self.reference.replace(ALIAS_SLOT, alias)
    }
}

/// Size comparison deciding whether an alias shrinks the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakEven {
    pub overhead: usize,
    pub per_use: usize,
}

impl BreakEven {
    pub fn is_profitable(&self, length: usize, count: usize) -> bool {
        count >= 2 && self.overhead + self.per_use * count < length * count
    }
}

/// A repeated construct found by one of the sub-passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCandidate {
    /// Text counted for savings, e.g. `vdot(`.
    pub construct: String,
    /// Text the declaration embeds, e.g. `vdot`.
    pub body: String,
    /// Every occurrence in the document.
    pub spans: Vec<Range<usize>>,
}

impl AliasCandidate {
    pub fn new(construct: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            construct: construct.into(),
            body: body.into(),
            spans: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.spans.len()
    }
}

/// Name of the alias identifier for a token id.
///
/// Upper case cannot clash with the lower-cased source. The renamer turns it
/// into a short name.
pub fn alias_name(id: usize) -> String {
    format!("ALIAS{}", id)
}

/// Runs the enabled alias sub-passes and prepends their declarations.
pub struct SynthesizeAliases<'a> {
    flags: Flags,
    table: &'a mut TokenTable,
    declarations: Vec<String>,
}

impl<'a> SynthesizeAliases<'a> {
    pub fn new(flags: Flags, table: &'a mut TokenTable) -> Self {
        Self {
            flags,
            table,
            declarations: Vec::new(),
        }
    }

    /// Declarations emitted by the last run, in the order they were decided.
    pub fn declarations(&self) -> &[String] {
        &self.declarations
    }

    /// Alias every profitable candidate and rewrite its occurrences.
    ///
    /// Returns the rewritten text and the declarations, one per alias.
    fn synthesize(
        &mut self,
        text: &str,
        template: &Template,
        candidates: Vec<AliasCandidate>,
    ) -> (String, Vec<String>) {
        let mut declarations = Vec::new();
        let mut edits: Vec<(Range<usize>, String)> = Vec::new();

        for candidate in candidates {
            let rule = template.break_even(&candidate.body);
            let length = candidate.construct.len();
            let profitable = rule.is_profitable(length, candidate.count());
            debug!(
                construct = %candidate.construct,
                count = candidate.count(),
                overhead = rule.overhead,
                profitable,
                "alias candidate"
            );
            if !profitable {
                continue;
            }

            let id = self.table.push(TokenKind::Alias, candidate.construct.as_str());
            let name = alias_name(id);
            declarations.push(template.declare(&name, &candidate.body));
            let reference = template.refer(&name);
            edits.extend(candidate.spans.into_iter().map(|span| (span, reference.clone())));
        }

        (splice(text, edits), declarations)
    }
}

impl Transform for SynthesizeAliases<'_> {
    fn name(&self) -> &'static str {
        "synthesize-aliases"
    }

    fn transform(&mut self, text: &mut String) {
        self.declarations.clear();

        if self.flags.contains(Flags::ALIAS_FUNCTIONS) {
            let candidates = functions::candidates(text);
            let (body, declarations) = self.synthesize(text, &functions::TEMPLATE, candidates);
            *text = body;
            self.declarations.extend(declarations);
        }

        if self.flags.contains(Flags::ALIAS_CONSTANTS) {
            let candidates = constants::candidates(text);
            let (body, declarations) = self.synthesize(text, &constants::TEMPLATE, candidates);
            let (body, declarations) = constants::alias_root(self.table, &body, declarations);
            *text = body;
            self.declarations.extend(declarations);
        }

        if self.flags.contains(Flags::BIND_FUNCTIONS) {
            let candidates = bind::candidates(text);
            let (body, declarations) = self.synthesize(text, &bind::TEMPLATE, candidates);
            *text = body;
            self.declarations.extend(declarations);
        }

        if !self.declarations.is_empty() {
            *text = prepend_declarations(text, &self.declarations);
        }
    }
}

/// Apply non-overlapping replacements.
fn splice(text: &str, mut edits: Vec<(Range<usize>, String)>) -> String {
    if edits.is_empty() {
        return text.to_string();
    }
    edits.sort_by_key(|(span, _)| span.start);

    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for (span, replacement) in edits {
        result.push_str(&text[last..span.start]);
        result.push_str(&replacement);
        last = span.end;
    }
    result.push_str(&text[last..]);
    result
}

/// Put one declaration per line at the top of the script.
///
/// A leading `@lazyglobal` directive must stay the first statement, so the
/// declarations go right after it.
fn prepend_declarations(text: &str, declarations: &[String]) -> String {
    let block: String = declarations.iter().map(|d| format!("{}\n", d)).collect();
    let split = directive_end(text);
    if split == 0 {
        return block + text;
    }
    let (head, tail) = text.split_at(split);
    format!("{}\n{}{}", head, block, tail.strip_prefix('\n').unwrap_or(tail))
}

fn directive_end(text: &str) -> usize {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("@lazyglobal") {
        return 0;
    }
    let offset = text.len() - trimmed.len();
    trimmed.find('.').map_or(0, |dot| offset + dot + 1)
}
