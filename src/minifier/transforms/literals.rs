//! String literal protection.
//!
//! Literals are swapped for `%s<id>%` placeholders before the text is
//! lower-cased and rewritten, then put back as the very last step. The
//! original text lives in a [`TokenTable`] arena keyed by id, so restoring
//! never searches for the literal text itself.

use crate::minifier::lexer::PLACEHOLDER_MARKER;

/// What a token in the table stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A string literal, quotes included.
    Literal,
    /// An alias identifier synthesized for a repeated construct.
    Alias,
}

impl TokenKind {
    fn tag(self) -> char {
        match self {
            Self::Literal => 's',
            Self::Alias => 'a',
        }
    }
}

/// One entry of the token arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Per-kind sequence number, starting at 1.
    pub id: usize,
    /// Original literal text, or the construct an alias stands for.
    pub text: String,
}

/// Run-scoped arena of placeholder tokens.
#[derive(Debug, Default, Clone)]
pub struct TokenTable {
    tokens: Vec<Token>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a token and return its per-kind id.
    pub fn push(&mut self, kind: TokenKind, text: impl Into<String>) -> usize {
        let id = self.count(kind) + 1;
        self.tokens.push(Token {
            kind,
            id,
            text: text.into(),
        });
        id
    }

    /// Number of tokens of `kind` allocated so far.
    pub fn count(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }

    pub fn get(&self, kind: TokenKind, id: usize) -> Option<&Token> {
        self.tokens.iter().find(|t| t.kind == kind && t.id == id)
    }

    /// Placeholder text for a literal token.
    pub fn placeholder(kind: TokenKind, id: usize) -> String {
        format!(
            "{marker}{tag}{id}{marker}",
            marker = PLACEHOLDER_MARKER,
            tag = kind.tag()
        )
    }
}

/// Replace every string literal with a placeholder.
///
/// A literal runs from a `"` to the next `"` on the same line. There is no
/// escape syntax; an unterminated quote is left in place.
pub fn protect(text: &str, table: &mut TokenTable) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('"') {
        let after_open = &rest[open + 1..];
        let line_end = after_open.find('\n').unwrap_or(after_open.len());
        let Some(close) = after_open[..line_end].find('"') else {
            // unterminated on this line, keep scanning after it
            result.push_str(&rest[..open + 1]);
            rest = after_open;
            continue;
        };

        let literal = &rest[open..open + close + 2];
        let id = table.push(TokenKind::Literal, literal);
        result.push_str(&rest[..open]);
        result.push_str(&TokenTable::placeholder(TokenKind::Literal, id));
        rest = &rest[open + close + 2..];
    }

    result.push_str(rest);
    result
}

/// Put the original literal text back in place of every placeholder.
///
/// Anything that looks like a placeholder but is not in the table is kept.
pub fn restore(text: &str, table: &TokenTable) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find(PLACEHOLDER_MARKER) {
        result.push_str(&rest[..open]);
        let candidate = &rest[open..];
        match parse_placeholder(candidate)
            .and_then(|(id, len)| table.get(TokenKind::Literal, id).map(|t| (t, len)))
        {
            Some((token, len)) => {
                result.push_str(&token.text);
                rest = &candidate[len..];
            }
            None => {
                result.push(PLACEHOLDER_MARKER);
                rest = &candidate[PLACEHOLDER_MARKER.len_utf8()..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Parse `%s<digits>%` at the start of `s`, returning the id and byte length.
fn parse_placeholder(s: &str) -> Option<(usize, usize)> {
    let body = s.strip_prefix(PLACEHOLDER_MARKER)?;
    let body = body.strip_prefix(TokenKind::Literal.tag())?;
    let digits = body.find(|c: char| !c.is_ascii_digit()).unwrap_or(body.len());
    if digits == 0 || !body[digits..].starts_with(PLACEHOLDER_MARKER) {
        return None;
    }
    let id = body[..digits].parse().ok()?;
    Some((id, digits + 3))
}
