//! `#EXTERNAL_IDS` pragma parsing.

const DIRECTIVE: &str = "#EXTERNAL_IDS";

/// Collect identifiers declared by every `#EXTERNAL_IDS a, b` directive.
///
/// Names are trimmed and lower-cased; empty entries are dropped. Runs on the
/// raw source, before comments are stripped, since the directive usually
/// lives inside a comment.
pub fn parse_external_ids(text: &str) -> Vec<String> {
    text.match_indices(DIRECTIVE)
        .flat_map(|(start, _)| {
            let rest = &text[start + DIRECTIVE.len()..];
            let line = rest.split('\n').next().unwrap_or_default();
            line.split(',')
                .map(|id| id.trim().to_lowercase())
                .filter(|id| !id.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}
