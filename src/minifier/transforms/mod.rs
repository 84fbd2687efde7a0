//! Individual text transforms of the minification pipeline.

mod comments;
pub mod literals;
mod normalize;
mod pragma;
mod rename;
mod shortcuts;
mod whitespace;

pub use comments::StripComments;
pub use literals::{Token, TokenKind, TokenTable};
pub use normalize::Normalize;
pub use pragma::parse_external_ids;
pub use rename::{column_name, identifier_frequency, ExclusionSet, RenameIdentifiers, ShortNames};
pub use shortcuts::UseShortcuts;
pub use whitespace::CompactWhitespace;

/// A stage that rewrites the whole document in place.
pub trait Transform {
    /// Stage name for logging.
    fn name(&self) -> &'static str;

    fn transform(&mut self, text: &mut String);
}
