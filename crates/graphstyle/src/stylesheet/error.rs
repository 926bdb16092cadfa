//! Stylesheet parse diagnostics.

use thiserror::Error;

/// A structural problem found by [`Stylesheet::parse_strict`](super::Stylesheet::parse_strict).
///
/// Offsets count characters from the start of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `'` was opened and never closed.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    /// A `{` was opened and never closed.
    #[error("unterminated block starting at offset {offset}")]
    UnterminatedBlock { offset: usize },

    /// A `}` appeared outside of any block.
    #[error("unmatched '}}' at offset {offset}")]
    UnmatchedClose { offset: usize },

    /// A `{` appeared inside an open block.
    #[error("nested '{{' at offset {offset}")]
    NestedBlock { offset: usize },

    /// Selector text at the end of the input has no block.
    #[error("selector '{selector}' has no property block")]
    TrailingSelector { selector: String },
}
