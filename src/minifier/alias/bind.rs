//! Constant-argument call binding: `v(0, 0, 1)` → `u()` with
//! `local u is v@:bind(0,0,1).`
//!
//! Binding keeps call semantics, so every use still builds a fresh value.

use indexmap::IndexMap;

use super::{AliasCandidate, Template};
use crate::minifier::lexer::words;
use crate::minifier::tables::BINDABLE_FUNCTIONS;

pub(super) const TEMPLATE: Template = Template {
    declaration: "local {alias} is {body}.",
    reference: "{alias}()",
};

/// Constructor calls whose arguments are all numeric literals.
///
/// Calls are grouped by their whitespace-free text, so `v(0, 0, 1)` and
/// `v(0,0,1)` share one alias.
pub(super) fn candidates(text: &str) -> Vec<AliasCandidate> {
    let mut found: IndexMap<String, AliasCandidate> = IndexMap::new();
    for word in words(text) {
        if word.is_guarded() || !BINDABLE_FUNCTIONS.contains(&word.text) {
            continue;
        }
        let Some(args) = text[word.end..].strip_prefix('(') else {
            continue;
        };
        let Some(close) = args.find(')') else {
            continue;
        };
        let Some(compact) = numeric_arguments(&args[..close]) else {
            continue;
        };

        let construct = format!("{}({})", word.text, compact);
        let body = format!("{}@:bind({})", word.text, compact);
        found
            .entry(construct.clone())
            .or_insert_with(|| AliasCandidate::new(construct, body))
            .spans
            .push(word.start..word.end + 1 + close + 1);
    }
    found.into_values().collect()
}

/// Comma-joined arguments without whitespace, if every one is a number.
fn numeric_arguments(args: &str) -> Option<String> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.iter().all(|p| is_number(p)) {
        Some(parts.join(","))
    } else {
        None
    }
}

/// Signed decimal literal with optional fraction and exponent: `-1`, `0.5`, `2e-3`.
fn is_number(s: &str) -> bool {
    let s = s.strip_prefix(['-', '+']).unwrap_or(s);
    let (mantissa, exponent) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };

    let mut halves = mantissa.splitn(2, '.');
    let whole = halves.next().unwrap_or_default();
    let fraction = halves.next().unwrap_or_default();
    let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !digits(whole) || !digits(fraction) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['-', '+']).unwrap_or(exp);
            !exp.is_empty() && digits(exp)
        }
    }
}
