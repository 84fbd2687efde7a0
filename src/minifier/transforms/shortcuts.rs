//! Fixed shortcut substitution.
//!
//! Replaces verbose references with the built-in that means the same thing
//! (`ship:altitude` → `altitude`). A user structure with a member of the same
//! name is shadowed by this; that is an accepted limitation.

use super::Transform;
use crate::minifier::lexer::replace_whole_word;
use crate::minifier::tables::SHORTCUTS;

/// Applies the shortcut table in order.
pub struct UseShortcuts {
    table: &'static [(&'static str, &'static str)],
}

impl UseShortcuts {
    pub fn new() -> Self {
        Self { table: SHORTCUTS }
    }
}

impl Default for UseShortcuts {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for UseShortcuts {
    fn name(&self) -> &'static str {
        "use-shortcuts"
    }

    fn transform(&mut self, text: &mut String) {
        for (long, short) in self.table {
            if text.contains(long) {
                *text = replace_whole_word(text, long, short);
            }
        }
    }
}
