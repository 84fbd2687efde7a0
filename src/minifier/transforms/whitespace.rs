//! Structural whitespace compaction.
//!
//! Passes run in a fixed order and each one assumes the previous ones ran:
//! 1. trailing horizontal whitespace is trimmed from every line
//! 2. runs of newlines collapse to one
//! 3. (indentation) leading whitespace is stripped, inner runs become one space
//! 4. (newlines) lines are joined with a single space, except after a comment
//! 5. (spaces) whitespace touching an operator or punctuation is removed

use super::Transform;
use crate::flags::Flags;
use crate::minifier::lexer::COMMENT_MARKER;

/// Characters that never need surrounding whitespace.
const SPECIAL_CHARS: &[char] = &[
    '+', '-', '/', '*', '^', '<', '>', '=', '(', ')', '{', '}', '[', ']', ',', ':', '#',
];

fn is_horizontal(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Whitespace compactor configured from the pipeline flags.
pub struct CompactWhitespace {
    remove_indentation: bool,
    remove_newlines: bool,
    remove_spaces: bool,
}

impl CompactWhitespace {
    pub fn new(flags: Flags) -> Self {
        Self {
            remove_indentation: flags.contains(Flags::REMOVE_INDENTATION),
            remove_newlines: flags.contains(Flags::REMOVE_NEWLINES),
            remove_spaces: flags.contains(Flags::REMOVE_SPACES),
        }
    }

    /// Apply every enabled pass and return the compacted text.
    pub fn compact(&self, text: &str) -> String {
        let mut text = trim_line_ends(text);
        text = collapse_blank_lines(&text);
        if self.remove_indentation {
            text = strip_indentation(&text);
        }
        if self.remove_newlines {
            text = join_lines(&text);
        }
        if self.remove_spaces {
            text = strip_around_special(&text);
        }
        text
    }
}

impl Transform for CompactWhitespace {
    fn name(&self) -> &'static str {
        "compact-whitespace"
    }

    fn transform(&mut self, text: &mut String) {
        *text = self.compact(text);
    }
}

fn trim_line_ends(text: &str) -> String {
    text.split('\n')
        .map(|line| line.trim_end_matches(is_horizontal))
        .collect::<Vec<_>>()
        .join("\n")
}

fn collapse_blank_lines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\n' && result.ends_with('\n') {
            continue;
        }
        result.push(c);
    }
    result
}

fn strip_indentation(text: &str) -> String {
    text.split('\n')
        .map(|line| collapse_inner_runs(line.trim_start_matches(is_horizontal)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace runs of two or more horizontal whitespace characters with one space.
fn collapse_inner_runs(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if is_horizontal(c) && chars.peek().copied().is_some_and(is_horizontal) {
            while chars.peek().copied().is_some_and(is_horizontal) {
                chars.next();
            }
            result.push(' ');
        } else {
            result.push(c);
        }
    }
    result
}

/// Join lines with single spaces.
///
/// A line holding a `//` comment keeps its line break, otherwise the comment
/// would swallow the code that follows.
fn join_lines(text: &str) -> String {
    let mut lines = text.trim_matches('\n').split('\n');
    let Some(first) = lines.next() else {
        return String::new();
    };
    let mut result = String::with_capacity(text.len());
    result.push_str(first);
    let mut previous = first;
    for line in lines {
        result.push(if previous.contains(COMMENT_MARKER) { '\n' } else { ' ' });
        result.push_str(line);
        previous = line;
    }
    result
}

fn strip_around_special(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if !is_horizontal(c) {
            result.push(c);
            continue;
        }
        let mut run = String::from(c);
        while let Some(&next) = chars.peek() {
            if !is_horizontal(next) {
                break;
            }
            run.push(next);
            chars.next();
        }
        let before = result.chars().next_back();
        let after = chars.peek().copied();
        let touches_special = before.is_some_and(|b| SPECIAL_CHARS.contains(&b))
            || after.is_some_and(|a| SPECIAL_CHARS.contains(&a));
        if !touches_special {
            result.push_str(&run);
        }
    }
    result
}
