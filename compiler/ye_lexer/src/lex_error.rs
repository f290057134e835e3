//! Lexer error type.

use ye_ir::Span;

/// Why lexing stopped.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// A character outside every recognized class.
    ///
    /// `position` is the byte offset of the character; `span` covers its
    /// UTF-8 encoding.
    #[error("unrecognized character {character:?} at position {position}")]
    Unrecognized {
        character: char,
        position: u32,
        span: Span,
    },
    /// A token ends past the largest offset a [`Span`] can hold.
    #[error("source is too large: offset {offset} exceeds {max} bytes", max = u32::MAX)]
    SourceTooLarge { offset: usize },
}

impl LexError {
    #[cold]
    pub fn unrecognized(character: char, position: u32) -> Self {
        let width = u32::try_from(character.len_utf8()).unwrap_or(1);
        LexError::Unrecognized {
            character,
            position,
            span: Span::new(position, position.saturating_add(width)),
        }
    }

    /// Source location, when it is representable.
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::Unrecognized { span, .. } => Some(*span),
            LexError::SourceTooLarge { .. } => None,
        }
    }
}
