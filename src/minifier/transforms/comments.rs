//! Line comment removal.

use super::Transform;

/// Removes `//` comments together with the whitespace in front of them.
///
/// Quotes are tracked per line so that `//` inside a string literal
/// (`"http://..."`) survives.
pub struct StripComments;

impl Transform for StripComments {
    fn name(&self) -> &'static str {
        "strip-comments"
    }

    fn transform(&mut self, text: &mut String) {
        let mut result = String::with_capacity(text.len());
        let mut in_string = false;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            match c {
                '"' => in_string = !in_string,
                '\n' => in_string = false,
                '/' if !in_string && text[i..].starts_with("//") => {
                    let trimmed = result.trim_end().len();
                    result.truncate(trimmed);
                    while chars.peek().is_some_and(|(_, c)| *c != '\n') {
                        chars.next();
                    }
                    continue;
                }
                _ => {}
            }
            result.push(c);
        }

        *text = result;
    }
}
