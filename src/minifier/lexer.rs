//! Lexical scanning of KerboScript text.
//!
//! The pipeline never builds a syntax tree. Every stage that needs to find
//! identifiers walks the text with [`Words`], which knows just enough about
//! the language to skip numbers and `//` comments.

/// Marker preceding a suffix name (`ship:altitude`).
pub const SUFFIX_MARKER: char = ':';

/// Marker opening a placeholder token (`%s1%`).
pub const PLACEHOLDER_MARKER: char = '%';

/// An identifier occurrence inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    /// Character immediately before the word, if any.
    pub preceded_by: Option<char>,
}

impl Word<'_> {
    /// Suffix names and placeholder tags are never renamed or aliased.
    pub fn is_guarded(&self) -> bool {
        matches!(
            self.preceded_by,
            Some(SUFFIX_MARKER) | Some(PLACEHOLDER_MARKER)
        )
    }
}

/// Identifiers may contain any Unicode letter or digit.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Opens a comment running to the end of the line.
pub const COMMENT_MARKER: &str = "//";

/// Whether `pos` lies inside a `//` comment.
///
/// Literals are already placeholders when this is asked, so any marker
/// earlier on the same line opens a comment.
fn in_comment(text: &str, pos: usize) -> bool {
    let line_start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    text[line_start..pos].contains(COMMENT_MARKER)
}

/// Iterator over the identifier words of a text.
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

/// Scan `text` for identifier words.
pub fn words(text: &str) -> Words<'_> {
    Words { text, pos: 0 }
}

impl<'a> Iterator for Words<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Word<'a>> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            let rest = &self.text[self.pos..];
            let c = rest.chars().next()?;

            if rest.starts_with(COMMENT_MARKER) {
                self.pos += rest.find('\n').unwrap_or(rest.len());
                continue;
            }

            // numbers, and anything else that is not an identifier start
            if is_word_char(c) && !is_word_start(c) {
                self.pos += run_length(rest);
                continue;
            }

            if is_word_start(c) {
                let start = self.pos;
                let end = start + run_length(rest);
                self.pos = end;
                return Some(Word {
                    text: &self.text[start..end],
                    start,
                    end,
                    preceded_by: self.text[..start].chars().next_back(),
                });
            }

            self.pos += c.len_utf8();
        }
        None
    }
}

/// Length in bytes of the run of word characters at the start of `s`.
fn run_length(s: &str) -> usize {
    s.find(|c: char| !is_word_char(c)).unwrap_or(s.len())
}

/// Rebuild `text`, passing every word through `map`.
///
/// Words for which `map` returns `None` are copied unchanged. Because the
/// text is rebuilt in one scan, a replacement is never itself rewritten.
pub fn map_words<'t, 'r, F>(text: &'t str, mut map: F) -> String
where
    F: FnMut(&Word<'t>) -> Option<&'r str>,
{
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for word in words(text) {
        if let Some(replacement) = map(&word) {
            result.push_str(&text[last..word.start]);
            result.push_str(replacement);
            last = word.end;
        }
    }
    result.push_str(&text[last..]);
    result
}

/// Find unguarded, whole-word occurrences of `needle` in `text`.
///
/// `needle` may span several tokens (`ship:altitude`). Occurrences inside
/// `//` comments are skipped. Returns byte offsets.
pub fn find_whole_word(text: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }
    text.match_indices(needle)
        .map(|(start, _)| start)
        .filter(|&start| {
            let before = text[..start].chars().next_back();
            let after = text[start + needle.len()..].chars().next();
            let open = !matches!(
                before,
                Some(c) if is_word_char(c) || c == SUFFIX_MARKER || c == PLACEHOLDER_MARKER
            );
            let close = !matches!(after, Some(c) if is_word_char(c));
            open && close && !in_comment(text, start)
        })
        .collect()
}

/// Replace unguarded, whole-word occurrences of `needle`.
pub fn replace_whole_word(text: &str, needle: &str, replacement: &str) -> String {
    let hits = find_whole_word(text, needle);
    if hits.is_empty() {
        return text.to_string();
    }
    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for start in hits {
        result.push_str(&text[last..start]);
        result.push_str(replacement);
        last = start + needle.len();
    }
    result.push_str(&text[last..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<&str> {
        words(text).map(|w| w.text).collect()
    }

    #[test]
    fn finds_identifiers() {
        assert_eq!(texts("set my_var to x2."), vec!["set", "my_var", "to", "x2"]);
    }

    #[test]
    fn skips_numbers() {
        assert_eq!(texts("set a to 1e5 + 2.5."), vec!["set", "a", "to"]);
    }

    #[test]
    fn skips_comments() {
        assert_eq!(texts("print x. // note here\nprint y."), vec!["print", "x", "print", "y"]);
    }

    #[test]
    fn unicode_letters_belong_to_the_word() {
        assert_eq!(
            texts("print ävdot(i). set ß to 2."),
            vec!["print", "ävdot", "i", "set", "ß", "to"]
        );
        assert!(find_whole_word("print ävdot(i).", "vdot").is_empty());
    }

    #[test]
    fn whole_word_search_skips_comments() {
        let text = "print constant:pi. // constant:pi\nprint constant:e.";
        assert_eq!(find_whole_word(text, "constant"), vec![6, 40]);
    }

    #[test]
    fn reports_guard_characters() {
        let found: Vec<_> = words("ship:altitude %s1%").collect();
        assert!(!found[0].is_guarded());
        assert!(found[1].is_guarded());
        assert!(found[2].is_guarded());
    }

    #[test]
    fn map_words_does_not_chain() {
        let out = map_words("a b", |w| match w.text {
            "a" => Some("b"),
            "b" => Some("a"),
            _ => None,
        });
        assert_eq!(out, "b a");
    }

    #[test]
    fn whole_word_replacement_respects_boundaries() {
        let text = "ship:altitude ship:altitudes x:ship:altitude";
        assert_eq!(
            replace_whole_word(text, "ship:altitude", "altitude"),
            "altitude ship:altitudes x:ship:altitude"
        );
    }
}
