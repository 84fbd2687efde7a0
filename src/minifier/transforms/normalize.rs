//! Case folding and line ending normalization.
//!
//! KerboScript is case-insensitive, so everything outside string literals can
//! be lower-cased. Literals are already protected when this runs.

use super::Transform;

/// Lower-cases the text and converts CRLF to LF.
pub struct Normalize;

impl Transform for Normalize {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn transform(&mut self, text: &mut String) {
        *text = text.to_lowercase().replace("\r\n", "\n");
    }
}
